//! OAuth 2.0 client domain type.

use serde::{Deserialize, Serialize};

/// A registered OAuth 2.0 client application.
///
/// Clients authenticate at the token endpoint with their `client_id` and
/// `client_secret`, either via HTTP Basic auth or via request-body
/// parameters. Both transports resolve to the same registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique client identifier used in OAuth flows.
    pub client_id: String,

    /// Argon2id-hashed client secret (for confidential clients).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Human-readable display name.
    pub name: String,

    /// Detailed description of the client application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Allowed redirect URIs for authorization code flow.
    #[serde(default)]
    pub redirect_uris: Vec<String>,

    /// OAuth scopes this client is allowed to request.
    /// Empty list means all scopes are allowed.
    #[serde(default)]
    pub scopes: Vec<String>,

    /// Whether this is a confidential client (holds a client secret).
    /// Public clients cannot authenticate with a secret.
    pub confidential: bool,

    /// Whether this client is currently active and can be used.
    pub active: bool,
}

impl Client {
    /// Creates a new active confidential client with no secret set.
    #[must_use]
    pub fn new(client_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            name: name.into(),
            description: None,
            redirect_uris: Vec::new(),
            scopes: Vec::new(),
            confidential: true,
            active: true,
        }
    }

    /// Returns `true` if the client registration is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = Client::new("web-app", "Web App");
        assert_eq!(client.client_id, "web-app");
        assert_eq!(client.name, "Web App");
        assert!(client.confidential);
        assert!(client.is_active());
        assert!(client.client_secret.is_none());
    }

    #[test]
    fn test_client_serialization_skips_missing_secret() {
        let client = Client::new("web-app", "Web App");
        let json = serde_json::to_string(&client).unwrap();
        assert!(json.contains("\"clientId\":\"web-app\""));
        assert!(!json.contains("clientSecret"));
    }

    #[test]
    fn test_client_deserialization() {
        let json = r#"{
            "clientId": "cli-tool",
            "clientSecret": "$argon2id$fake",
            "name": "CLI Tool",
            "redirectUris": ["https://app.example.com/callback"],
            "confidential": true,
            "active": true
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.client_id, "cli-tool");
        assert_eq!(client.client_secret, Some("$argon2id$fake".to_string()));
        assert_eq!(client.redirect_uris.len(), 1);
        assert!(client.scopes.is_empty());
    }
}
