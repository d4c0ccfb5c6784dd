//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{CartData, CartSlot},
        },
        users::{models::UserUuid, repository::PgUsersRepository},
    },
};

/// Carts live on the user document, so this service shares the users repository.
#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    users_repository: PgUsersRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            users_repository: PgUsersRepository::new(),
        }
    }

    async fn mutate_cart(
        &self,
        user: UserUuid,
        mutate: impl FnOnce(&mut CartData) + Send,
    ) -> Result<CartData, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self.users_repository.lock_user(&mut tx, user).await?.cart;

        mutate(&mut cart);

        self.users_repository
            .update_cart(&mut tx, user, &cart)
            .await?;

        tx.commit().await?;

        Ok(cart)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<CartData, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.users_repository.find_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user.cart)
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, user),
        fields(user_uuid = %user),
        err
    )]
    async fn add_item(
        &self,
        user: UserUuid,
        slot: CartSlot,
    ) -> Result<CartData, CartsServiceError> {
        self.mutate_cart(user, |cart| cart.increment(slot)).await
    }

    #[tracing::instrument(
        name = "carts.service.remove_item",
        skip(self, user),
        fields(user_uuid = %user),
        err
    )]
    async fn remove_item(
        &self,
        user: UserUuid,
        slot: CartSlot,
    ) -> Result<CartData, CartsServiceError> {
        self.mutate_cart(user, |cart| cart.decrement(slot)).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's whole cart.
    async fn get_cart(&self, user: UserUuid) -> Result<CartData, CartsServiceError>;

    /// Add one of `slot` to the user's cart.
    async fn add_item(&self, user: UserUuid, slot: CartSlot)
    -> Result<CartData, CartsServiceError>;

    /// Remove one of `slot` from the user's cart, stopping at zero.
    async fn remove_item(
        &self,
        user: UserUuid,
        slot: CartSlot,
    ) -> Result<CartData, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::users::UsersService,
        test::{TestContext, helpers::signup_draft},
    };

    use super::*;

    #[tokio::test]
    async fn add_item_increments_slot() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.signup(signup_draft("ada@example.com")).await?;

        let cart = ctx.carts.add_item(user.uuid, 5).await?;

        assert_eq!(cart.quantity(5), Some(1));
        assert_eq!(ctx.carts.get_cart(user.uuid).await?.quantity(5), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_floors_at_zero() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.signup(signup_draft("ada@example.com")).await?;

        let cart = ctx.carts.remove_item(user.uuid, 5).await?;

        assert_eq!(cart.quantity(5), Some(0));

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_adds_are_not_lost() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.users.signup(signup_draft("ada@example.com")).await?;

        let (first, second) = tokio::join!(
            ctx.carts.add_item(user.uuid, 9),
            ctx.carts.add_item(user.uuid, 9)
        );

        first?;
        second?;

        assert_eq!(ctx.carts.get_cart(user.uuid).await?.quantity(9), Some(2));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.carts.add_item(UserUuid::new(), 1).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
