//! In-memory access token storage.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use gatehouse_auth::error::AuthError;
use gatehouse_auth::storage::AccessTokenStorage;
use gatehouse_auth::types::AccessToken;
use gatehouse_auth::AuthResult;

/// In-memory access token storage, keyed by token hash.
#[derive(Default)]
pub struct InMemoryAccessTokenStorage {
    tokens: RwLock<HashMap<String, AccessToken>>,
}

impl InMemoryAccessTokenStorage {
    /// Creates an empty token store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AuthResult<RwLockReadGuard<'_, HashMap<String, AccessToken>>> {
        self.tokens
            .read()
            .map_err(|_| AuthError::storage("token store lock poisoned"))
    }

    fn write(&self) -> AuthResult<RwLockWriteGuard<'_, HashMap<String, AccessToken>>> {
        self.tokens
            .write()
            .map_err(|_| AuthError::storage("token store lock poisoned"))
    }
}

#[async_trait]
impl AccessTokenStorage for InMemoryAccessTokenStorage {
    async fn create(&self, token: &AccessToken) -> AuthResult<()> {
        let mut tokens = self.write()?;
        if tokens.contains_key(&token.token_hash) {
            return Err(AuthError::storage("duplicate token hash"));
        }
        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> AuthResult<Option<AccessToken>> {
        Ok(self.read()?.get(token_hash).cloned())
    }

    async fn revoke(&self, id: Uuid) -> AuthResult<()> {
        let mut tokens = self.write()?;
        match tokens.values_mut().find(|t| t.id == id) {
            Some(token) => {
                token.revoked_at = Some(OffsetDateTime::now_utc());
                Ok(())
            }
            None => Err(AuthError::invalid_token(format!("token {id} not found"))),
        }
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut tokens = self.write()?;
        let before = tokens.len();
        tokens.retain(|_, t| !t.is_expired());
        Ok((before - tokens.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    fn stored_token(value: &str) -> AccessToken {
        AccessToken::new(AccessToken::hash_token(value), "web-app").with_scope("*")
    }

    #[tokio::test]
    async fn test_create_and_find_by_hash() {
        let storage = InMemoryAccessTokenStorage::new();
        let token = stored_token("tok-1");
        storage.create(&token).await.unwrap();

        let found = storage
            .find_by_hash(&AccessToken::hash_token("tok-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, token.id);

        // Plaintext values never act as keys.
        assert!(storage.find_by_hash("tok-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_hash_rejected() {
        let storage = InMemoryAccessTokenStorage::new();
        storage.create(&stored_token("tok-1")).await.unwrap();
        assert!(storage.create(&stored_token("tok-1")).await.is_err());
    }

    #[tokio::test]
    async fn test_revoke() {
        let storage = InMemoryAccessTokenStorage::new();
        let token = stored_token("tok-1");
        storage.create(&token).await.unwrap();

        storage.revoke(token.id).await.unwrap();
        let found = storage
            .find_by_hash(&token.token_hash)
            .await
            .unwrap()
            .unwrap();
        assert!(found.is_revoked());

        assert!(storage.revoke(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn test_cleanup_expired_removes_only_expired() {
        let storage = InMemoryAccessTokenStorage::new();
        let live = stored_token("live").with_expiry(OffsetDateTime::now_utc() + Duration::hours(1));
        let dead =
            stored_token("dead").with_expiry(OffsetDateTime::now_utc() - Duration::minutes(1));
        let eternal = stored_token("eternal");
        storage.create(&live).await.unwrap();
        storage.create(&dead).await.unwrap();
        storage.create(&eternal).await.unwrap();

        let removed = storage.cleanup_expired().await.unwrap();
        assert_eq!(removed, 1);
        assert!(storage
            .find_by_hash(&dead.token_hash)
            .await
            .unwrap()
            .is_none());
        assert!(storage
            .find_by_hash(&live.token_hash)
            .await
            .unwrap()
            .is_some());
        assert!(storage
            .find_by_hash(&eternal.token_hash)
            .await
            .unwrap()
            .is_some());
    }
}
