//! Access token storage trait.
//!
//! # Security Considerations
//!
//! - Tokens are stored as SHA-256 hashes only
//! - Revocation must be atomic and immediate
//! - Expired tokens should be cleaned up periodically

use async_trait::async_trait;
use uuid::Uuid;

use crate::AuthResult;
use crate::types::AccessToken;

/// Storage trait for access tokens.
///
/// # Example Implementation
///
/// ```ignore
/// use gatehouse_auth::storage::AccessTokenStorage;
/// use gatehouse_auth::types::AccessToken;
/// use gatehouse_auth::AuthResult;
///
/// struct InMemoryAccessTokenStorage {
///     tokens: std::sync::RwLock<std::collections::HashMap<String, AccessToken>>,
/// }
///
/// #[async_trait::async_trait]
/// impl AccessTokenStorage for InMemoryAccessTokenStorage {
///     async fn create(&self, token: &AccessToken) -> AuthResult<()> {
///         let mut tokens = self.tokens.write().unwrap();
///         tokens.insert(token.token_hash.clone(), token.clone());
///         Ok(())
///     }
///     // ... other methods
/// }
/// ```
#[async_trait]
pub trait AccessTokenStorage: Send + Sync {
    /// Stores a new access token record.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be stored (e.g., duplicate
    /// hash, storage unavailable).
    async fn create(&self, token: &AccessToken) -> AuthResult<()>;

    /// Finds an access token by its hash.
    ///
    /// Returns `Some(token)` if found, `None` if not found. This returns
    /// tokens regardless of expiration/revocation status; callers should
    /// check `is_valid()` before using.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_by_hash(&self, token_hash: &str) -> AuthResult<Option<AccessToken>>;

    /// Revokes an access token.
    ///
    /// Sets the `revoked_at` timestamp to the current time. This operation
    /// must be atomic: once revoked, the token cannot be used.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not found or the update fails.
    async fn revoke(&self, id: Uuid) -> AuthResult<()>;

    /// Deletes expired tokens.
    ///
    /// Should be called periodically to prevent storage growth.
    ///
    /// # Returns
    ///
    /// Returns the number of tokens deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleanup operation fails.
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
