//! Handler shortcuts on `Depot` and `Result`.

use std::{any::Any, fmt::Display};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use bazaar_app::domain::users::models::UserUuid;

const SIGNED_IN_USER: &str = "bazaar.signed_in_user";

pub(crate) trait DepotExt {
    /// Typed depot lookup. A missing value is a wiring bug, so it surfaces as 500.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    /// The user the auth hoop signed in, or 401 when the route is unguarded.
    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!(type_name = std::any::type_name::<T>(), "depot is missing a value");

            StatusError::internal_server_error()
        })
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(SIGNED_IN_USER, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        match self.get::<UserUuid>(SIGNED_IN_USER) {
            Ok(user) => Ok(*user),
            Err(_ignored) => Err(StatusError::unauthorized()),
        }
    }
}

pub(crate) trait ResultExt<T> {
    /// Log the failure under `context` and answer with a bare 500.
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|failure| {
            error!("{context}: {failure}");

            StatusError::internal_server_error()
        })
    }
}
