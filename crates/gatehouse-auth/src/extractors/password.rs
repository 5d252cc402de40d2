//! Username/password form login extractor.
//!
//! Used by login handlers: the handler takes a [`PasswordAuth`] argument
//! and receives the authenticated user, typically to then serialize it
//! into the session.

use axum::{
    Json,
    extract::{Form, FromRef, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::types::{Principal, User};
use crate::verifier::Verification;

use super::AuthState;

/// Credentials submitted by a login form.
#[derive(Debug, Deserialize)]
pub struct PasswordCredentials {
    /// The username.
    pub username: String,
    /// The plaintext password.
    pub password: String,
}

/// A user authenticated with username and password.
#[derive(Debug, Clone)]
pub struct PasswordAuth(pub User);

/// Error returned when password authentication fails.
///
/// One uniform body for every failure mode; the response never says
/// whether the username or the password was wrong.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordAuthError {
    pub error: String,
    pub error_description: String,
}

impl PasswordAuthError {
    fn invalid_credentials() -> Self {
        Self {
            error: "invalid_credentials".to_string(),
            error_description: "Username or password is incorrect".to_string(),
        }
    }

    fn invalid_request() -> Self {
        Self {
            error: "invalid_request".to_string(),
            error_description: "Malformed login form".to_string(),
        }
    }
}

impl IntoResponse for PasswordAuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(self)).into_response()
    }
}

impl<S> FromRequest<S> for PasswordAuth
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = PasswordAuthError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let Form(credentials) = Form::<PasswordCredentials>::from_request(req, state)
            .await
            .map_err(|_| PasswordAuthError::invalid_request())?;

        match auth_state
            .verifier
            .verify_password(&credentials.username, &credentials.password)
            .await
        {
            Verification::Accepted {
                principal: Principal::User(user),
                ..
            } => {
                tracing::info!(user_id = %user.id, "user logged in");
                Ok(PasswordAuth(user))
            }
            _ => Err(PasswordAuthError::invalid_credentials()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockClientStorage, MockTokenStorage, MockUserStorage};
    use crate::verifier::CredentialVerifier;
    use axum::body::Body;
    use axum::http;
    use std::sync::Arc;

    fn state_with_user(password: &str) -> AuthState {
        let users = MockUserStorage::default();
        users.add_user(User::builder("alice").id("user-1").build(), Some(password));
        let verifier = CredentialVerifier::new(
            Arc::new(users),
            Arc::new(MockClientStorage::default()),
            Arc::new(MockTokenStorage::default()),
        );
        AuthState::new(Arc::new(verifier))
    }

    fn login_request(username: &str, password: &str) -> Request {
        http::Request::builder()
            .method("POST")
            .uri("/login")
            .header(
                http::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(format!("username={username}&password={password}")))
            .unwrap()
    }

    #[tokio::test]
    async fn test_correct_credentials_accepted() {
        let state = state_with_user("hunter2");
        let PasswordAuth(user) = PasswordAuth::from_request(login_request("alice", "hunter2"), &state)
            .await
            .unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let state = state_with_user("hunter2");
        let err = PasswordAuth::from_request(login_request("alice", "nope"), &state)
            .await
            .unwrap_err();
        assert_eq!(err.error, "invalid_credentials");
    }

    #[tokio::test]
    async fn test_unknown_user_same_rejection_as_wrong_password() {
        let state = state_with_user("hunter2");
        let unknown = PasswordAuth::from_request(login_request("mallory", "hunter2"), &state)
            .await
            .unwrap_err();
        let wrong = PasswordAuth::from_request(login_request("alice", "nope"), &state)
            .await
            .unwrap_err();

        // The two failure modes must be indistinguishable.
        assert_eq!(unknown.error, wrong.error);
        assert_eq!(unknown.error_description, wrong.error_description);
    }

    #[tokio::test]
    async fn test_missing_form_fields_rejected() {
        let state = state_with_user("hunter2");
        let req = http::Request::builder()
            .method("POST")
            .uri("/login")
            .header(
                http::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from("username=alice"))
            .unwrap();

        let err = PasswordAuth::from_request(req, &state).await.unwrap_err();
        assert_eq!(err.error, "invalid_request");
    }
}
