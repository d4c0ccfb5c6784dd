//! User Models

use std::fmt;

use jiff::Timestamp;

use crate::{
    domain::{
        carts::models::CartData,
        validation::{ValidationError, required_text},
    },
    uuids::TypedUuid,
};

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// User Model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub password: Password,
    pub cart: CartData,
    pub created_at: Timestamp,
}

/// Stored password.
///
/// Kept and compared as plaintext to stay compatible with existing accounts.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

/// Signup fields as submitted by a client, before required-field checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignupDraft {
    /// Check every required field is present.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        Ok(NewUser {
            name: required_text("name", self.name)?,
            email: required_text("email", self.email)?,
            password: Password::new(required_text("password", self.password)?),
        })
    }
}

/// New User Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: Password,
}
