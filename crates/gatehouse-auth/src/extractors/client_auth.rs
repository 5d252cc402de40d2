//! OAuth client authentication extractor.
//!
//! Clients authenticate at the token endpoint either with the HTTP Basic
//! scheme (recommended by RFC 6749) or by placing `client_id` and
//! `client_secret` in the request body (not recommended, but common in
//! practice). Both transports feed the same
//! [`CredentialVerifier::verify_client_secret`] check, so they cannot
//! diverge.
//!
//! [`CredentialVerifier::verify_client_secret`]: crate::verifier::CredentialVerifier::verify_client_secret

use std::fmt;

use axum::{
    Json,
    extract::{Form, FromRef, FromRequest, Request},
    http::{StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::types::{Client, Principal};
use crate::verifier::Verification;

use super::AuthState;

/// The transport a client used to present its credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
    /// Client secret via HTTP Basic Auth.
    SecretBasic,
    /// Client secret in the request body.
    SecretPost,
}

impl ClientAuthMethod {
    /// Returns the OAuth string for this auth method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecretBasic => "client_secret_basic",
            Self::SecretPost => "client_secret_post",
        }
    }
}

impl fmt::Display for ClientAuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A successfully authenticated OAuth client.
#[derive(Debug, Clone)]
pub struct ClientAuth {
    /// The authenticated client.
    pub client: Client,
    /// The transport the credentials arrived on.
    pub auth_method: ClientAuthMethod,
}

/// Credentials carried in the request body (`client_secret_post`).
///
/// Other form fields (grant_type etc.) are ignored here; this extractor
/// only cares about the client credentials.
#[derive(Debug, Deserialize)]
pub struct ClientCredentials {
    /// The OAuth client_id, if present.
    pub client_id: Option<String>,
    /// The client secret, if present.
    pub client_secret: Option<String>,
}

/// Error returned when client authentication fails.
///
/// Serialized as an OAuth-style error body. Rejections never say whether
/// the client was unknown or the secret was wrong.
#[derive(Debug, Clone, Serialize)]
pub struct ClientAuthError {
    pub error: String,
    pub error_description: String,
}

impl ClientAuthError {
    fn invalid_client() -> Self {
        Self {
            error: "invalid_client".to_string(),
            error_description: "Client authentication failed".to_string(),
        }
    }

    fn invalid_request(description: impl Into<String>) -> Self {
        Self {
            error: "invalid_request".to_string(),
            error_description: description.into(),
        }
    }
}

impl IntoResponse for ClientAuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(self)).into_response()
    }
}

impl<S> FromRequest<S> for ClientAuth
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = ClientAuthError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        let path = req.uri().path().to_owned();

        // 1. HTTP Basic Auth takes priority.
        let basic_header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .filter(|v| v.trim_start().starts_with("Basic "))
            .map(str::to_owned);

        if let Some(header) = basic_header {
            let (client_id, secret) = parse_basic_auth(&header).ok_or_else(|| {
                ClientAuthError::invalid_request("Malformed Basic Authorization header")
            })?;
            return authenticate(
                &auth_state,
                &client_id,
                &secret,
                ClientAuthMethod::SecretBasic,
                &path,
            )
            .await;
        }

        // 2. Fall back to credentials in the request body.
        let Form(body) = Form::<ClientCredentials>::from_request(req, state)
            .await
            .map_err(|_| ClientAuthError::invalid_request("Malformed request body"))?;

        match (body.client_id, body.client_secret) {
            (Some(client_id), Some(secret)) => {
                authenticate(
                    &auth_state,
                    &client_id,
                    &secret,
                    ClientAuthMethod::SecretPost,
                    &path,
                )
                .await
            }
            _ => Err(ClientAuthError::invalid_request(
                "No client credentials provided",
            )),
        }
    }
}

async fn authenticate(
    state: &AuthState,
    client_id: &str,
    secret: &str,
    auth_method: ClientAuthMethod,
    path: &str,
) -> Result<ClientAuth, ClientAuthError> {
    match state.verifier.verify_client_secret(client_id, secret).await {
        Verification::Accepted {
            principal: Principal::Client(client),
            ..
        } => {
            tracing::info!(
                client_id = %client.client_id,
                auth_method = %auth_method,
                endpoint = %path,
                "client authenticated"
            );
            Ok(ClientAuth {
                client,
                auth_method,
            })
        }
        _ => Err(ClientAuthError::invalid_client()),
    }
}

/// Parses an HTTP Basic Auth header value.
///
/// Returns `Some((client_id, client_secret))` if valid, `None` otherwise.
/// Splits on the first colon, so secrets may contain colons.
///
/// # Example
///
/// ```
/// use gatehouse_auth::extractors::parse_basic_auth;
///
/// let header = "Basic Y2xpZW50X2lkOmNsaWVudF9zZWNyZXQ=";
/// let (id, secret) = parse_basic_auth(header).unwrap();
/// assert_eq!(id, "client_id");
/// assert_eq!(secret, "client_secret");
/// ```
#[must_use]
pub fn parse_basic_auth(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.trim().strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (client_id, client_secret) = credentials.split_once(':')?;
    Some((client_id.to_string(), client_secret.to_string()))
}
