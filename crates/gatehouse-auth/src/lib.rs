//! # gatehouse-auth
//!
//! Credential verification for the Gatehouse authorization server.
//!
//! This crate provides:
//! - The [`CredentialVerifier`](verifier::CredentialVerifier): password,
//!   client-secret, and bearer-token verification with a fail-closed policy
//! - Session identity mapping (serialize a user to an opaque id, re-resolve
//!   it on later requests)
//! - Storage traits for users, clients, and access tokens
//! - Axum extractors binding the HTTP transports to the verifier
//! - Argon2-based secret hashing
//!
//! ## Overview
//!
//! All credential decisions go through the verifier. Transports (HTTP Basic,
//! body credentials, bearer header, login form) only extract credentials;
//! the Basic-header and body bindings for client authentication share one
//! verification path so they cannot diverge. Every lookup failure, secret
//! mismatch, invalid token, and storage fault collapses into a plain
//! rejection: the caller never learns which it was.
//!
//! ## Modules
//!
//! - [`config`] - Authentication configuration
//! - [`error`] - Error types
//! - [`extractors`] - Axum transport bindings
//! - [`secret`] - Argon2 hashing for passwords and client secrets
//! - [`storage`] - Storage traits for auth data
//! - [`types`] - Domain types (User, Client, AccessToken, Principal)
//! - [`verifier`] - The credential verifier

pub mod config;
pub mod error;
pub mod extractors;
pub mod secret;
pub mod storage;
pub mod types;
pub mod verifier;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{AuthConfig, ConfigError, SessionConfig, TokenConfig};
pub use error::AuthError;
pub use extractors::{AuthState, BearerAuth, ClientAuth, PasswordAuth};
pub use storage::{AccessTokenStorage, ClientStorage, UserStorage};
pub use types::{AccessToken, Client, Principal, User};
pub use verifier::{CredentialVerifier, Verification};

/// Type alias for authentication results.
pub type AuthResult<T> = Result<T, AuthError>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use gatehouse_auth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::AuthResult;
    pub use crate::config::{AuthConfig, ConfigError, SessionConfig, TokenConfig};
    pub use crate::error::AuthError;
    pub use crate::extractors::{
        AuthState, BearerAuth, BearerAuthError, ClientAuth, ClientAuthError, ClientAuthMethod,
        PasswordAuth, PasswordAuthError, PasswordCredentials,
    };
    pub use crate::storage::{AccessTokenStorage, ClientStorage, UserStorage};
    pub use crate::types::{AccessToken, Client, Principal, User};
    pub use crate::verifier::{CredentialVerifier, Verification};
}
