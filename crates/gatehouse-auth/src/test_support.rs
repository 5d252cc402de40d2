//! In-memory mock storages shared by unit tests.
//!
//! Passwords and secrets are kept in plaintext here so tests don't pay the
//! Argon2 cost for every case; the real hashing path is covered in
//! `secret` and in the `gatehouse-auth-memory` backend tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::AuthResult;
use crate::error::AuthError;
use crate::storage::{AccessTokenStorage, ClientStorage, UserStorage};
use crate::types::{AccessToken, Client, User};

#[derive(Default)]
pub(crate) struct MockUserStorage {
    users: RwLock<HashMap<String, (User, Option<String>)>>, // id -> (user, password)
    fail: bool,
}

impl MockUserStorage {
    pub(crate) fn failing() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            fail: true,
        }
    }

    pub(crate) fn add_user(&self, user: User, password: Option<&str>) {
        self.users
            .write()
            .unwrap()
            .insert(user.id.clone(), (user, password.map(str::to_string)));
    }
}

#[async_trait]
impl UserStorage for MockUserStorage {
    async fn find_by_id(&self, user_id: &str) -> AuthResult<Option<User>> {
        if self.fail {
            return Err(AuthError::storage("user store unavailable"));
        }
        Ok(self
            .users
            .read()
            .unwrap()
            .get(user_id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        if self.fail {
            return Err(AuthError::storage("user store unavailable"));
        }
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn create(&self, user: &User) -> AuthResult<()> {
        self.add_user(user.clone(), None);
        Ok(())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        self.add_user(user.clone(), None);
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> AuthResult<()> {
        self.users.write().unwrap().remove(user_id);
        Ok(())
    }

    async fn verify_password(&self, user_id: &str, password: &str) -> AuthResult<bool> {
        if self.fail {
            return Err(AuthError::storage("user store unavailable"));
        }
        Ok(self
            .users
            .read()
            .unwrap()
            .get(user_id)
            .and_then(|(_, p)| p.as_deref())
            .map(|p| p == password)
            .unwrap_or(false))
    }

    async fn list(&self, _limit: i64, _offset: i64) -> AuthResult<Vec<User>> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .map(|(u, _)| u.clone())
            .collect())
    }
}

#[derive(Default)]
pub(crate) struct MockClientStorage {
    clients: RwLock<HashMap<String, (Client, Option<String>)>>,
    fail: bool,
}

impl MockClientStorage {
    pub(crate) fn failing() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            fail: true,
        }
    }

    pub(crate) fn add_client(&self, client: Client, secret: Option<&str>) {
        self.clients
            .write()
            .unwrap()
            .insert(client.client_id.clone(), (client, secret.map(str::to_string)));
    }
}

#[async_trait]
impl ClientStorage for MockClientStorage {
    async fn find_by_client_id(&self, client_id: &str) -> AuthResult<Option<Client>> {
        if self.fail {
            return Err(AuthError::storage("client store unavailable"));
        }
        Ok(self
            .clients
            .read()
            .unwrap()
            .get(client_id)
            .map(|(c, _)| c.clone()))
    }

    async fn create(&self, client: &Client) -> AuthResult<()> {
        self.add_client(client.clone(), None);
        Ok(())
    }

    async fn delete(&self, client_id: &str) -> AuthResult<()> {
        self.clients.write().unwrap().remove(client_id);
        Ok(())
    }

    async fn list(&self, _limit: i64, _offset: i64) -> AuthResult<Vec<Client>> {
        Ok(self
            .clients
            .read()
            .unwrap()
            .values()
            .map(|(c, _)| c.clone())
            .collect())
    }

    async fn verify_secret(&self, client_id: &str, secret: &str) -> AuthResult<bool> {
        if self.fail {
            return Err(AuthError::storage("client store unavailable"));
        }
        Ok(self
            .clients
            .read()
            .unwrap()
            .get(client_id)
            .and_then(|(_, s)| s.as_deref())
            .map(|s| s == secret)
            .unwrap_or(false))
    }
}

#[derive(Default)]
pub(crate) struct MockTokenStorage {
    tokens: RwLock<HashMap<String, AccessToken>>,
    fail: bool,
}

impl MockTokenStorage {
    pub(crate) fn failing() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
            fail: true,
        }
    }

    pub(crate) fn add_token(&self, token: AccessToken) {
        self.tokens
            .write()
            .unwrap()
            .insert(token.token_hash.clone(), token);
    }
}

#[async_trait]
impl AccessTokenStorage for MockTokenStorage {
    async fn create(&self, token: &AccessToken) -> AuthResult<()> {
        self.add_token(token.clone());
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> AuthResult<Option<AccessToken>> {
        if self.fail {
            return Err(AuthError::storage("token store unavailable"));
        }
        Ok(self.tokens.read().unwrap().get(token_hash).cloned())
    }

    async fn revoke(&self, id: Uuid) -> AuthResult<()> {
        let mut tokens = self.tokens.write().unwrap();
        for token in tokens.values_mut() {
            if token.id == id {
                token.revoked_at = Some(OffsetDateTime::now_utc());
                return Ok(());
            }
        }
        Err(AuthError::invalid_token("token not found"))
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        Ok(0)
    }
}
