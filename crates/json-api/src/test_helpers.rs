//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use bazaar_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::{MockCartsService, models::CartData},
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
        users::{
            MockUsersService,
            models::{Password, User, UserUuid},
        },
    },
    uploads::MockUploadsService,
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_new_collections().never();
    products.expect_popular_products().never();
    products.expect_create_product().never();
    products.expect_remove_product().never();

    products
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_signup().never();
    users.expect_login().never();
    users.expect_get_user().never();

    users
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_remove_item().never();

    carts
}

pub(crate) fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_issue_token().never();
    auth.expect_authenticate().never();

    auth
}

fn strict_uploads_mock() -> MockUploadsService {
    let mut uploads = MockUploadsService::new();

    uploads.expect_store().never();

    uploads
}

/// Application state where every service is a mock.
///
/// Services a test does not replace panic on any call.
pub(crate) struct TestState {
    products: MockProductsService,
    users: MockUsersService,
    carts: MockCartsService,
    auth: MockAuthService,
    uploads: MockUploadsService,
}

impl Default for TestState {
    fn default() -> Self {
        Self {
            products: strict_products_mock(),
            users: strict_users_mock(),
            carts: strict_carts_mock(),
            auth: strict_auth_mock(),
            uploads: strict_uploads_mock(),
        }
    }
}

impl TestState {
    pub(crate) fn with_products(mut self, products: MockProductsService) -> Self {
        self.products = products;
        self
    }

    pub(crate) fn with_users(mut self, users: MockUsersService) -> Self {
        self.users = users;
        self
    }

    pub(crate) fn with_carts(mut self, carts: MockCartsService) -> Self {
        self.carts = carts;
        self
    }

    pub(crate) fn with_auth(mut self, auth: MockAuthService) -> Self {
        self.auth = auth;
        self
    }

    pub(crate) fn with_uploads(mut self, uploads: MockUploadsService) -> Self {
        self.uploads = uploads;
        self
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::shared(AppContext {
            products: Arc::new(self.products),
            users: Arc::new(self.users),
            carts: Arc::new(self.carts),
            auth: Arc::new(self.auth),
            uploads: Arc::new(self.uploads),
        })
    }

    /// Serve `route` with this state injected.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Serve `route` as if the auth guard had already accepted [`TEST_USER_UUID`].
    pub(crate) fn authenticated_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }
}

pub(crate) fn make_product(id: i64, category: &str) -> Product {
    Product {
        uuid: ProductUuid::from_uuid(Uuid::nil()),
        id,
        name: format!("Product {id}"),
        image: format!("http://localhost:4000/images/product_{id}.png"),
        category: category.to_string(),
        new_price: 50.0,
        old_price: 80.5,
        available: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_user(name: &str, email: &str) -> User {
    User {
        uuid: TEST_USER_UUID,
        name: name.to_string(),
        email: email.to_string(),
        password: Password::new("password"),
        cart: CartData::empty(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
