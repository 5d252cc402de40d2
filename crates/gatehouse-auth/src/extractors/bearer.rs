//! Bearer token authentication extractor.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use gatehouse_auth::extractors::{AuthState, BearerAuth};
//!
//! async fn protected_handler(auth: BearerAuth) -> String {
//!     format!("Hello, {}!", auth.principal.id())
//! }
//!
//! let app = Router::new()
//!     .route("/protected", get(protected_handler))
//!     .with_state(auth_state);
//! ```

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{
        StatusCode,
        header::{AUTHORIZATION, HeaderValue, WWW_AUTHENTICATE},
        request::Parts,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::types::Principal;
use crate::verifier::Verification;

use super::AuthState;

/// A request authenticated with a bearer token.
///
/// The principal may be a user (token issued on their behalf) or a client
/// (token owned directly by the application).
#[derive(Debug, Clone)]
pub struct BearerAuth {
    /// The token's owning principal.
    pub principal: Principal,
    /// Scope granted to the token.
    pub scope: Option<String>,
}

/// Error returned when bearer authentication fails.
///
/// Renders a 401 with a `WWW-Authenticate: Bearer` challenge per RFC 6750.
#[derive(Debug, Clone)]
pub struct BearerAuthError {
    realm: String,
    body: BearerErrorBody,
}

#[derive(Debug, Clone, Serialize)]
struct BearerErrorBody {
    error: &'static str,
    error_description: String,
}

impl BearerAuthError {
    fn missing(realm: &str) -> Self {
        Self {
            realm: realm.to_string(),
            body: BearerErrorBody {
                error: "invalid_request",
                error_description: "Missing bearer token".to_string(),
            },
        }
    }

    fn rejected(realm: &str) -> Self {
        Self {
            realm: realm.to_string(),
            body: BearerErrorBody {
                error: "invalid_token",
                error_description: "The access token is invalid".to_string(),
            },
        }
    }

    /// The OAuth error code carried in the response body.
    #[must_use]
    pub fn error(&self) -> &str {
        self.body.error
    }
}

impl IntoResponse for BearerAuthError {
    fn into_response(self) -> Response {
        let challenge = HeaderValue::from_str(&format!("Bearer realm=\"{}\"", self.realm))
            .unwrap_or_else(|_| HeaderValue::from_static("Bearer"));
        let mut response = (StatusCode::UNAUTHORIZED, Json(self.body)).into_response();
        response.headers_mut().insert(WWW_AUTHENTICATE, challenge);
        response
    }
}

impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = BearerAuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        let realm = &auth_state.config.realm;

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim_start().strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| BearerAuthError::missing(realm))?;

        match auth_state.verifier.verify_bearer_token(token).await {
            Verification::Accepted { principal, scope } => {
                tracing::debug!(
                    principal_id = %principal.id(),
                    endpoint = %parts.uri.path(),
                    "bearer token accepted"
                );
                Ok(BearerAuth { principal, scope })
            }
            Verification::Rejected => Err(BearerAuthError::rejected(realm)),
        }
    }
}
