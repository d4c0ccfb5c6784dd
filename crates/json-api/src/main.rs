//! Bazaar JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    cors::Cors,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use bazaar_app::{
    auth::{JwtAuthService, TokenSecret},
    context::AppContext,
    uploads::DiskUploadsService,
};

use crate::{
    auth::AUTH_TOKEN_HEADER, config::ServerConfig, router::app_router, state::State,
};

mod auth;
mod carts;
mod config;
mod extensions;
mod healthcheck;
mod lenient;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod uploads;
mod users;

/// Bazaar JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config.telemetry) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so tracing output would be lost"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let auth = JwtAuthService::new(TokenSecret::new(config.auth.token_secret.clone()));

    let uploads = DiskUploadsService::new(
        config.storage.upload_dir.clone(),
        config.storage.base_url.clone(),
    );

    let app = match AppContext::from_database_url(&config.storage.database_url, auth, uploads)
        .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::shared(app)))
        .push(app_router(&config.storage.upload_dir));

    let doc = OpenApi::new("Bazaar API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "auth_token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_TOKEN_HEADER))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    // Storefront and admin frontends are served from other origins.
    let service = Service::new(router).hoop(Cors::very_permissive().into_handler());

    // Bind server
    let listener = TcpListener::new(config.http.bind_addr()).bind().await;

    info!("Server is running on port: {}", config.http.port);

    let server = Server::new(listener);

    shutdown::spawn_listener(server.handle());

    // Start serving requests
    server.serve(service).await;
}
