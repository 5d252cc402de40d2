//! In-memory client storage.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use gatehouse_auth::error::AuthError;
use gatehouse_auth::secret;
use gatehouse_auth::storage::ClientStorage;
use gatehouse_auth::types::Client;
use gatehouse_auth::AuthResult;

/// In-memory client storage, keyed by client_id.
#[derive(Default)]
pub struct InMemoryClientStorage {
    clients: RwLock<HashMap<String, Client>>,
}

impl InMemoryClientStorage {
    /// Creates an empty client store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AuthResult<RwLockReadGuard<'_, HashMap<String, Client>>> {
        self.clients
            .read()
            .map_err(|_| AuthError::storage("client store lock poisoned"))
    }

    fn write(&self) -> AuthResult<RwLockWriteGuard<'_, HashMap<String, Client>>> {
        self.clients
            .write()
            .map_err(|_| AuthError::storage("client store lock poisoned"))
    }
}

#[async_trait]
impl ClientStorage for InMemoryClientStorage {
    async fn find_by_client_id(&self, client_id: &str) -> AuthResult<Option<Client>> {
        Ok(self.read()?.get(client_id).cloned())
    }

    async fn create(&self, client: &Client) -> AuthResult<()> {
        let mut clients = self.write()?;
        if clients.contains_key(&client.client_id) {
            return Err(AuthError::storage(format!(
                "client {} already exists",
                client.client_id
            )));
        }
        clients.insert(client.client_id.clone(), client.clone());
        Ok(())
    }

    async fn delete(&self, client_id: &str) -> AuthResult<()> {
        let mut clients = self.write()?;
        if clients.remove(client_id).is_none() {
            return Err(AuthError::storage(format!("client {client_id} not found")));
        }
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> AuthResult<Vec<Client>> {
        let clients = self.read()?;
        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by(|a, b| a.client_id.cmp(&b.client_id));
        Ok(all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn verify_secret(&self, client_id: &str, secret_value: &str) -> AuthResult<bool> {
        let hash = {
            let clients = self.read()?;
            let Some(client) = clients.get(client_id) else {
                return Err(AuthError::storage(format!("client {client_id} not found")));
            };
            match &client.client_secret {
                Some(hash) => hash.clone(),
                // Public clients hold no secret.
                None => return Ok(false),
            }
        };

        secret::verify_client_secret_hash(secret_value, &hash)
            .map_err(|e| AuthError::internal(format!("secret hash verification failed: {e}")))
    }
}
