//! Axum extractors binding HTTP transports to the credential verifier.
//!
//! Each extractor only pulls credentials out of the request and delegates
//! the actual decision to the [`CredentialVerifier`]; no verification logic
//! lives here.
//!
//! - [`ClientAuth`] - OAuth client authentication (Basic header or body)
//! - [`BearerAuth`] - bearer token authentication (users or clients)
//! - [`PasswordAuth`] - username/password form login

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::verifier::CredentialVerifier;

pub mod bearer;
pub mod client_auth;
pub mod password;

pub use bearer::{BearerAuth, BearerAuthError};
pub use client_auth::{ClientAuth, ClientAuthError, ClientAuthMethod, parse_basic_auth};
pub use password::{PasswordAuth, PasswordAuthError, PasswordCredentials};

/// State required by the authentication extractors.
///
/// Include this in your application state and expose it via `FromRef`.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct AppState {
///     auth: AuthState,
///     // ... other state
/// }
///
/// impl FromRef<AppState> for AuthState {
///     fn from_ref(state: &AppState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthState {
    /// The shared credential verifier.
    pub verifier: Arc<CredentialVerifier>,

    /// Auth configuration (realm for bearer challenges, session cookie).
    pub config: AuthConfig,
}

impl AuthState {
    /// Creates a new auth state with the default configuration.
    pub fn new(verifier: Arc<CredentialVerifier>) -> Self {
        Self {
            verifier,
            config: AuthConfig::default(),
        }
    }

    /// Creates a new auth state with an explicit configuration.
    pub fn with_config(verifier: Arc<CredentialVerifier>, config: AuthConfig) -> Self {
        Self { verifier, config }
    }
}
