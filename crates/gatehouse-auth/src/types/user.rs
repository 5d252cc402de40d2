//! User domain type.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Default datetime value for deserialization when field is missing.
fn default_datetime() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// A user account in the authentication system.
///
/// Users authenticate with a username and password, and may additionally be
/// the owner of access tokens issued on their behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user. This is the opaque value stored in
    /// the session; it never changes for the lifetime of the account.
    #[serde(default)]
    pub id: String,

    /// Username for authentication. Matched case-sensitively.
    pub username: String,

    /// Email address (optional, for notifications/recovery).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Full name of the user (display name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Argon2id-hashed password (None for accounts that cannot
    /// password-authenticate).
    ///
    /// Stored for password authentication only. When exposing User via an
    /// API, filter this field out manually.
    #[serde(default, alias = "passwordHash")]
    pub password_hash: Option<String>,

    /// Whether the user account is active.
    ///
    /// Inactive users cannot authenticate.
    pub active: bool,

    /// When the user was created.
    #[serde(default = "default_datetime", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// When the user was last updated.
    #[serde(default = "default_datetime", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl User {
    /// Creates a new active user with the given username and a generated
    /// UUID identifier. No password is set.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.into(),
            email: None,
            name: None,
            password_hash: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new user builder.
    #[must_use]
    pub fn builder(username: impl Into<String>) -> UserBuilder {
        UserBuilder::new(username)
    }

    /// Returns `true` if the user account is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Builder for creating `User` instances.
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    fn new(username: impl Into<String>) -> Self {
        Self {
            user: User::new(username),
        }
    }

    /// Sets the user ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.user.id = id.into();
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.user.email = Some(email.into());
        self
    }

    /// Sets the full name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user.name = Some(name.into());
        self
    }

    /// Sets the password hash.
    #[must_use]
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.user.password_hash = Some(hash.into());
        self
    }

    /// Sets whether the user is active.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.user.active = active;
        self
    }

    /// Builds the user.
    #[must_use]
    pub fn build(self) -> User {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new() {
        let user = User::new("alice");
        assert_eq!(user.username, "alice");
        assert!(user.active);
        assert!(user.email.is_none());
        assert!(user.password_hash.is_none());
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_user_builder() {
        let user = User::builder("alice")
            .id("user-1")
            .email("alice@example.com")
            .name("Alice Example")
            .password_hash("$argon2id$...")
            .active(false)
            .build();

        assert_eq!(user.id, "user-1");
        assert_eq!(user.email, Some("alice@example.com".to_string()));
        assert_eq!(user.name, Some("Alice Example".to_string()));
        assert!(!user.is_active());
    }

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": "user-1",
            "username": "alice",
            "passwordHash": "$argon2id$fake",
            "active": true
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, Some("$argon2id$fake".to_string()));
        assert!(user.active);
    }
}
