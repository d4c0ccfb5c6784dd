//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    auth::{AuthServiceError, TokenClaims, TokenSecret, sign_token, verify_token},
    domain::users::models::UserUuid,
};

/// Stateless token issuer and verifier; never touches the store.
#[derive(Debug, Clone)]
pub struct JwtAuthService {
    secret: TokenSecret,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(secret: TokenSecret) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn issue_token(&self, user: UserUuid) -> Result<String, AuthServiceError> {
        let claims = TokenClaims::new(user, Timestamp::now().as_second());

        sign_token(&claims, &self.secret).map_err(AuthServiceError::Issue)
    }

    async fn authenticate(&self, token: &str) -> Result<UserUuid, AuthServiceError> {
        let claims = verify_token(token, &self.secret, Timestamp::now().as_second())
            .map_err(AuthServiceError::InvalidToken)?;

        Ok(claims.user_uuid())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Issue a session token for `user`.
    async fn issue_token(&self, user: UserUuid) -> Result<String, AuthServiceError>;

    /// Resolve a session token to the user it was issued for.
    async fn authenticate(&self, token: &str) -> Result<UserUuid, AuthServiceError>;
}
