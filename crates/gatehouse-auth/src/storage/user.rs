//! User storage trait.
//!
//! Defines the interface for user persistence operations.
//! Implementations are provided by storage backends.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::User;

/// Storage operations for users.
///
/// This trait defines the interface for persisting and retrieving users.
/// Implementations handle the actual database operations.
///
/// # Example
///
/// ```ignore
/// use gatehouse_auth::storage::UserStorage;
///
/// async fn example(storage: &impl UserStorage) {
///     if let Some(user) = storage.find_by_username("alice").await? {
///         println!("Found user: {}", user.username);
///     }
/// }
/// ```
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Find a user by their unique ID.
    ///
    /// Returns `None` if the user doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_by_id(&self, user_id: &str) -> AuthResult<Option<User>>;

    /// Find a user by their username.
    ///
    /// The match is case-sensitive and exact.
    /// Returns `None` if the user doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A user with the same username already exists
    /// - The storage operation fails
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Update an existing user.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user doesn't exist
    /// - The storage operation fails
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user doesn't exist
    /// - The storage operation fails
    async fn delete(&self, user_id: &str) -> AuthResult<()>;

    /// Verify a user's password.
    ///
    /// Compares the provided password against the stored Argon2 hash.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the password matches
    /// - `Ok(false)` if the password doesn't match or the user has no
    ///   password set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user doesn't exist
    /// - The storage operation fails
    async fn verify_password(&self, user_id: &str, password: &str) -> AuthResult<bool>;

    /// List all users with pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn list(&self, limit: i64, offset: i64) -> AuthResult<Vec<User>>;
}
