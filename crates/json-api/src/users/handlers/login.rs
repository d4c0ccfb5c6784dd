//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use bazaar_app::domain::users::UsersServiceError;

use crate::{
    extensions::*,
    state::State,
    users::{
        errors::{WRONG_EMAIL, WRONG_PASSWORD, into_status_error},
        handlers::SessionResponse,
    },
};

/// Login Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login Handler
///
/// Credential failures are reported in the body with a 200 status.
#[endpoint(
    tags("users"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Token issued, or an `errors` message"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Storage failure"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let rejected = |message: &str| -> Result<Json<SessionResponse>, StatusError> {
        Ok(Json(SessionResponse {
            errors: Some(message.to_string()),
            ..SessionResponse::default()
        }))
    };

    let user = match state.app.users.login(&request.email, &request.password).await {
        Ok(user) => user,
        Err(UsersServiceError::UnknownEmail) => return rejected(WRONG_EMAIL),
        Err(UsersServiceError::WrongPassword) => return rejected(WRONG_PASSWORD),
        Err(error) => return Err(into_status_error(error)),
    };

    let token = state
        .app
        .auth
        .issue_token(user.uuid)
        .await
        .or_500("failed to issue session token")?;

    info!(user_uuid = %user.uuid, "user logged in");

    Ok(Json(SessionResponse::issued(token)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use bazaar_app::{
        auth::MockAuthService,
        domain::users::{MockUsersService, models::User},
    };

    use crate::test_helpers::{TEST_USER_UUID, TestState, make_user, strict_auth_mock};

    use super::*;

    fn make_service(users: MockUsersService, auth: MockAuthService) -> Service {
        TestState::default()
            .with_users(users)
            .with_auth(auth)
            .service(Router::with_path("login").post(handler))
    }

    fn users_expecting_login(result: Result<User, UsersServiceError>) -> MockUsersService {
        let mut users = MockUsersService::new();

        users
            .expect_login()
            .once()
            .withf(|email, password| email == "ada@example.com" && password == "password")
            .return_once(move |_, _| result);

        users
    }

    async fn login(service: &Service) -> TestResult<(Option<StatusCode>, Value)> {
        let mut res = TestClient::post("http://example.com/login")
            .json(&json!({ "email": "ada@example.com", "password": "password" }))
            .send(service)
            .await;

        let body = res.take_json().await?;

        Ok((res.status_code, body))
    }

    #[tokio::test]
    async fn test_login_returns_token() -> TestResult {
        let users = users_expecting_login(Ok(make_user("Ada", "ada@example.com")));

        let mut auth = MockAuthService::new();

        auth.expect_issue_token()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Ok("signed.token.value".to_string()));

        let (status, body) = login(&make_service(users, auth)).await?;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "success": true, "token": "signed.token.value" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_login_wrong_password_reports_in_body() -> TestResult {
        let users = users_expecting_login(Err(UsersServiceError::WrongPassword));

        let (status, body) = login(&make_service(users, strict_auth_mock())).await?;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(body, json!({ "success": false, "errors": "Wrong Password" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_unknown_email_reports_in_body() -> TestResult {
        let users = users_expecting_login(Err(UsersServiceError::UnknownEmail));

        let (status, body) = login(&make_service(users, strict_auth_mock())).await?;

        assert_eq!(status, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "success": false, "errors": "Wrong Email address" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_login_missing_fields_are_treated_as_empty() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_login()
            .once()
            .withf(|email, password| email.is_empty() && password.is_empty())
            .return_once(|_, _| Err(UsersServiceError::UnknownEmail));

        let mut res = TestClient::post("http://example.com/login")
            .json(&json!({}))
            .send(&make_service(users, strict_auth_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(body["errors"], "Wrong Email address");

        Ok(())
    }
}
