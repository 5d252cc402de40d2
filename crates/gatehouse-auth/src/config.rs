//! Authentication configuration.
//!
//! Configuration for the auth module, deserializable from the server's
//! TOML configuration file.
//!
//! # Example (TOML)
//!
//! ```toml
//! [auth]
//! enabled = true
//! realm = "gatehouse"
//!
//! [auth.session]
//! cookie_name = "gatehouse_session"
//! lifetime = "12h"
//!
//! [auth.tokens]
//! lifetime = "1h"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root authentication configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Whether authentication is enabled. When disabled the server should
    /// not mount the auth extractors at all.
    pub enabled: bool,

    /// Realm reported in `WWW-Authenticate` challenges on rejected
    /// bearer-token requests.
    pub realm: String,

    /// Session cookie configuration.
    pub session: SessionConfig,

    /// Access token configuration.
    pub tokens: TokenConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            realm: "gatehouse".to_string(),
            session: SessionConfig::default(),
            tokens: TokenConfig::default(),
        }
    }
}

/// Session cookie configuration.
///
/// The session store itself lives outside this crate; these settings only
/// name the cookie that carries the serialized user identifier and bound
/// its lifetime.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the session cookie.
    pub cookie_name: String,

    /// How long a session stays valid without re-authentication.
    #[serde(with = "humantime_serde")]
    pub lifetime: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "gatehouse_session".to_string(),
            lifetime: Duration::from_secs(12 * 60 * 60),
        }
    }
}

/// Access token configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Default lifetime for newly issued access tokens.
    #[serde(with = "humantime_serde")]
    pub lifetime: Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            lifetime: Duration::from_secs(60 * 60),
        }
    }
}

impl AuthConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.realm.is_empty() {
            return Err(ConfigError::invalid("realm must not be empty"));
        }
        if self.realm.contains('"') {
            return Err(ConfigError::invalid(
                "realm must not contain double quotes",
            ));
        }
        if self.session.cookie_name.is_empty() {
            return Err(ConfigError::invalid("session.cookie_name must not be empty"));
        }
        if self.session.lifetime.is_zero() {
            return Err(ConfigError::invalid("session.lifetime must be positive"));
        }
        if self.tokens.lifetime.is_zero() {
            return Err(ConfigError::invalid("tokens.lifetime must be positive"));
        }
        Ok(())
    }
}

/// Errors produced by configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration field has an invalid value.
    #[error("Invalid auth configuration: {message}")]
    Invalid {
        /// Description of the invalid field.
        message: String,
    },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
