//! Credential verification.
//!
//! The [`CredentialVerifier`] is the single place that decides whether
//! presented credentials identify a principal. It supports three credential
//! kinds:
//!
//! - username + password (end users)
//! - client_id + client_secret (registered OAuth clients; the same check
//!   backs both the Basic-header and request-body transports)
//! - bearer token (users or clients, via a previously issued access token)
//!
//! # Fail-closed policy
//!
//! Every `verify_*` operation is total: unknown identifiers, wrong secrets,
//! expired or revoked tokens, and storage faults all collapse into
//! [`Verification::Rejected`]. Nothing about the failure mode is surfaced
//! to the caller, which keeps the authentication layer from acting as an
//! account-enumeration oracle. Faults are still recorded via `tracing` for
//! operators.
//!
//! The one exception is session re-resolution ([`deserialize_user`]),
//! which runs outside the credential-comparison path and therefore may
//! report a storage fault distinctly from "no session".
//!
//! [`deserialize_user`]: CredentialVerifier::deserialize_user

use std::sync::Arc;

use crate::AuthResult;
use crate::storage::{AccessTokenStorage, ClientStorage, UserStorage};
use crate::types::{AccessToken, Principal, User};

/// Outcome of a verification attempt.
///
/// The fail-closed collapse is explicit in this type: there is no error
/// variant, and `Rejected` carries no reason.
#[derive(Debug, Clone)]
pub enum Verification {
    /// The credentials identify a principal.
    Accepted {
        /// The authenticated principal.
        principal: Principal,
        /// Granted scope, when the credential carries one (bearer tokens).
        /// Currently a pass-through field; scoped restriction is not
        /// enforced here.
        scope: Option<String>,
    },
    /// The credentials do not identify a principal.
    Rejected,
}

impl Verification {
    fn accepted(principal: Principal, scope: Option<String>) -> Self {
        Self::Accepted { principal, scope }
    }

    /// Returns `true` if the credentials were accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Consumes the outcome, returning the principal if accepted.
    #[must_use]
    pub fn into_principal(self) -> Option<Principal> {
        match self {
            Self::Accepted { principal, .. } => Some(principal),
            Self::Rejected => None,
        }
    }

    /// Returns the granted scope, if accepted with one.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        match self {
            Self::Accepted { scope, .. } => scope.as_deref(),
            Self::Rejected => None,
        }
    }
}

/// Verifies presented credentials against the backing stores.
///
/// Stateless apart from store reads; a single instance is shared across
/// concurrent requests behind an `Arc`.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserStorage>,
    clients: Arc<dyn ClientStorage>,
    tokens: Arc<dyn AccessTokenStorage>,
}

impl CredentialVerifier {
    /// Creates a new verifier over the given stores.
    pub fn new(
        users: Arc<dyn UserStorage>,
        clients: Arc<dyn ClientStorage>,
        tokens: Arc<dyn AccessTokenStorage>,
    ) -> Self {
        Self {
            users,
            clients,
            tokens,
        }
    }

    /// Verifies a username and password.
    ///
    /// Accepts with the matching user and no scope, or rejects. Never
    /// returns an error; storage faults fold into rejection.
    pub async fn verify_password(&self, username: &str, password: &str) -> Verification {
        match self.check_password(username, password).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "password verification failed closed");
                Verification::Rejected
            }
        }
    }

    /// Verifies a client_id and client_secret.
    ///
    /// This single check backs both transport bindings (HTTP Basic header
    /// and request-body credentials), so the two can never diverge.
    pub async fn verify_client_secret(&self, client_id: &str, secret: &str) -> Verification {
        match self.check_client_secret(client_id, secret).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "client secret verification failed closed");
                Verification::Rejected
            }
        }
    }

    /// Verifies a bearer token value.
    ///
    /// Accepts with the token's owning principal (user or client) and scope
    /// `"*"`, or rejects. Expired and revoked tokens reject even when the
    /// record still exists in storage.
    pub async fn verify_bearer_token(&self, token_value: &str) -> Verification {
        match self.check_bearer_token(token_value).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "bearer token verification failed closed");
                Verification::Rejected
            }
        }
    }

    async fn check_password(&self, username: &str, password: &str) -> AuthResult<Verification> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(Verification::Rejected);
        };
        if !user.active {
            tracing::debug!(user_id = %user.id, "inactive user rejected");
            return Ok(Verification::Rejected);
        }
        if !self.users.verify_password(&user.id, password).await? {
            return Ok(Verification::Rejected);
        }
        Ok(Verification::accepted(Principal::User(user), None))
    }

    async fn check_client_secret(&self, client_id: &str, secret: &str) -> AuthResult<Verification> {
        let Some(client) = self.clients.find_by_client_id(client_id).await? else {
            return Ok(Verification::Rejected);
        };
        if !client.active {
            tracing::debug!(client_id = %client.client_id, "inactive client rejected");
            return Ok(Verification::Rejected);
        }
        // Public clients hold no secret and cannot authenticate with one.
        if !client.confidential {
            return Ok(Verification::Rejected);
        }
        if !self.clients.verify_secret(client_id, secret).await? {
            return Ok(Verification::Rejected);
        }
        Ok(Verification::accepted(Principal::Client(client), None))
    }

    async fn check_bearer_token(&self, token_value: &str) -> AuthResult<Verification> {
        let hash = AccessToken::hash_token(token_value);
        let Some(token) = self.tokens.find_by_hash(&hash).await? else {
            return Ok(Verification::Rejected);
        };
        if !token.is_valid() {
            tracing::debug!(token_id = %token.id, "expired or revoked token rejected");
            return Ok(Verification::Rejected);
        }

        let principal = match token.user_id {
            Some(ref user_id) => {
                let Some(user) = self.users.find_by_id(user_id).await? else {
                    return Ok(Verification::Rejected);
                };
                if !user.active {
                    return Ok(Verification::Rejected);
                }
                Principal::User(user)
            }
            None => {
                let Some(client) = self.clients.find_by_client_id(&token.client_id).await? else {
                    return Ok(Verification::Rejected);
                };
                if !client.active {
                    return Ok(Verification::Rejected);
                }
                Principal::Client(client)
            }
        };

        Ok(Verification::accepted(principal, Some("*".to_string())))
    }

    /// Produces the stable opaque identifier stored in the session for an
    /// authenticated user.
    #[must_use]
    pub fn serialize_user(&self, user: &User) -> String {
        user.id.clone()
    }

    /// Re-resolves a session identifier to the full user record.
    ///
    /// Returns `Ok(None)` when the identifier no longer resolves (e.g. the
    /// user was deleted since the session was established); the session
    /// should then be treated as absent, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails. This is the only
    /// verification path where storage faults propagate; it runs outside
    /// the security-sensitive credential-comparison path.
    pub async fn deserialize_user(&self, user_id: &str) -> AuthResult<Option<User>> {
        self.users.find_by_id(user_id).await
    }
}
