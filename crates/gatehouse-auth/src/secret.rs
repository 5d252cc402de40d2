//! Secret generation and verification.
//!
//! Argon2-based hashing for user passwords and client secrets.
//!
//! # Security
//!
//! - Generated client secrets are 256-bit random values (32 bytes)
//! - Hashing uses Argon2id (hybrid mode) with default parameters
//! - Salts are generated using OsRng (cryptographically secure RNG)
//! - Verification is delegated to the `argon2` crate, which compares in a
//!   way that is safe for the hashing scheme
//!
//! # Example
//!
//! ```
//! use gatehouse_auth::secret::{generate_client_secret, hash_client_secret, verify_client_secret_hash};
//!
//! let secret = generate_client_secret();
//! assert!(secret.starts_with("gh_"));
//!
//! let hash = hash_client_secret(&secret).unwrap();
//! assert!(verify_client_secret_hash(&secret, &hash).unwrap());
//! ```

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rand::Rng;

/// Generate a new cryptographically secure client secret.
///
/// The secret is a 256-bit (32 byte) random value encoded as hexadecimal
/// with a `gh_` prefix for easy identification in logs and support tickets.
#[must_use]
pub fn generate_client_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    format!("gh_{}", hex::encode(bytes))
}

/// Hash a client secret for storage using Argon2id.
///
/// # Errors
///
/// Returns `argon2::password_hash::Error` if hashing fails (rare).
///
/// # Example
///
/// ```
/// use gatehouse_auth::secret::hash_client_secret;
///
/// let hash = hash_client_secret("gh_abc123").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_client_secret(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a client secret against a stored Argon2 hash.
///
/// Returns `Ok(false)` on mismatch; other failures (e.g. a malformed stored
/// hash) are surfaced as errors.
///
/// # Errors
///
/// Returns `argon2::password_hash::Error` if the stored hash cannot be
/// parsed or verification fails for a reason other than a mismatch.
pub fn verify_client_secret_hash(
    secret: &str,
    hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(secret.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Hash a user password for storage using Argon2id.
///
/// Produces a PHC-formatted string suitable for
/// [`User::password_hash`](crate::types::User).
///
/// # Errors
///
/// Returns `argon2::password_hash::Error` if hashing fails (rare).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a user password against a stored Argon2 hash.
///
/// Returns `Ok(false)` on mismatch.
///
/// # Errors
///
/// Returns `argon2::password_hash::Error` if the stored hash cannot be
/// parsed or verification fails for a reason other than a mismatch.
pub fn verify_password_hash(
    password: &str,
    hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
