//! Authenticated principal.

use serde::{Deserialize, Serialize};

use super::client::Client;
use super::user::User;

/// An authenticated identity: either a human user or a registered client
/// application. Exactly one concrete kind per successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Principal {
    /// A human user.
    User(User),
    /// A registered OAuth client application.
    Client(Client),
}

impl Principal {
    /// Returns the principal's stable identifier (user id or client id).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::User(user) => &user.id,
            Self::Client(client) => &client.client_id,
        }
    }

    /// Returns `true` if this principal is a user.
    #[must_use]
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// Returns `true` if this principal is a client.
    #[must_use]
    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client(_))
    }

    /// Returns the user, if this principal is one.
    #[must_use]
    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Client(_) => None,
        }
    }

    /// Returns the client, if this principal is one.
    #[must_use]
    pub fn as_client(&self) -> Option<&Client> {
        match self {
            Self::User(_) => None,
            Self::Client(client) => Some(client),
        }
    }
}
