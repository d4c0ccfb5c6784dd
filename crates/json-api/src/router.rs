//! App Router

use std::path::Path;

use salvo::{Router, serve_static::StaticDir};

use crate::{auth, carts, healthcheck, observability, products, uploads, users};

/// Every route the server answers.
///
/// Cart and user lookups sit behind the `auth-token` guard; the catalogue,
/// uploads and signup/login are public.
pub(crate) fn app_router(upload_dir: &Path) -> Router {
    Router::new()
        .get(healthcheck::handler)
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("upload").post(uploads::create::handler))
        .push(
            Router::with_path("images/{**path}").get(StaticDir::new([upload_dir.to_path_buf()])),
        )
        .push(Router::with_path("addproduct").post(products::create::handler))
        .push(Router::with_path("removeproduct").post(products::remove::handler))
        .push(Router::with_path("allproducts").get(products::index::handler))
        .push(Router::with_path("newcollections").get(products::new_collections::handler))
        .push(Router::with_path("popularproducts").get(products::popular::handler))
        .push(Router::with_path("signup").post(users::signup::handler))
        .push(Router::with_path("login").post(users::login::handler))
        .push(
            Router::new()
                .hoop(auth::require_token)
                .push(Router::with_path("getuser").get(users::get::handler))
                .push(Router::with_path("addtocart").post(carts::add::handler))
                .push(Router::with_path("removefromcart").post(carts::remove::handler))
                .push(Router::with_path("getcart").post(carts::get::handler)),
        )
}
