//! In-memory user storage.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use gatehouse_auth::error::AuthError;
use gatehouse_auth::secret;
use gatehouse_auth::storage::UserStorage;
use gatehouse_auth::types::User;
use gatehouse_auth::AuthResult;

/// In-memory user storage, keyed by user id.
#[derive(Default)]
pub struct InMemoryUserStorage {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStorage {
    /// Creates an empty user store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AuthResult<RwLockReadGuard<'_, HashMap<String, User>>> {
        self.users
            .read()
            .map_err(|_| AuthError::storage("user store lock poisoned"))
    }

    fn write(&self) -> AuthResult<RwLockWriteGuard<'_, HashMap<String, User>>> {
        self.users
            .write()
            .map_err(|_| AuthError::storage("user store lock poisoned"))
    }
}

#[async_trait]
impl UserStorage for InMemoryUserStorage {
    async fn find_by_id(&self, user_id: &str) -> AuthResult<Option<User>> {
        Ok(self.read()?.get(user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        // Case-sensitive exact match.
        Ok(self
            .read()?
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.write()?;
        if users.contains_key(&user.id) {
            return Err(AuthError::storage(format!(
                "user {} already exists",
                user.id
            )));
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(AuthError::storage(format!(
                "username {} already taken",
                user.username
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.write()?;
        if !users.contains_key(&user.id) {
            return Err(AuthError::storage(format!("user {} not found", user.id)));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> AuthResult<()> {
        let mut users = self.write()?;
        if users.remove(user_id).is_none() {
            return Err(AuthError::storage(format!("user {user_id} not found")));
        }
        Ok(())
    }

    async fn verify_password(&self, user_id: &str, password: &str) -> AuthResult<bool> {
        let hash = {
            let users = self.read()?;
            let Some(user) = users.get(user_id) else {
                return Err(AuthError::storage(format!("user {user_id} not found")));
            };
            match &user.password_hash {
                Some(hash) => hash.clone(),
                // Accounts without a password cannot password-authenticate.
                None => return Ok(false),
            }
        };

        secret::verify_password_hash(password, &hash)
            .map_err(|e| AuthError::internal(format!("password hash verification failed: {e}")))
    }

    async fn list(&self, limit: i64, offset: i64) -> AuthResult<Vec<User>> {
        let users = self.read()?;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_password(username: &str, password: &str) -> User {
        User::builder(username)
            .password_hash(secret::hash_password(password).unwrap())
            .build()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let storage = InMemoryUserStorage::new();
        let user = user_with_password("alice", "hunter2");
        storage.create(&user).await.unwrap();

        let found = storage.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);

        let by_id = storage.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");
    }

    #[tokio::test]
    async fn test_username_match_is_case_sensitive() {
        let storage = InMemoryUserStorage::new();
        storage
            .create(&user_with_password("alice", "hunter2"))
            .await
            .unwrap();

        assert!(storage.find_by_username("Alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let storage = InMemoryUserStorage::new();
        storage
            .create(&user_with_password("alice", "a"))
            .await
            .unwrap();
        let duplicate = user_with_password("alice", "b");
        assert!(storage.create(&duplicate).await.is_err());
    }

    #[tokio::test]
    async fn test_verify_password() {
        let storage = InMemoryUserStorage::new();
        let user = user_with_password("alice", "hunter2");
        storage.create(&user).await.unwrap();

        assert!(storage.verify_password(&user.id, "hunter2").await.unwrap());
        assert!(!storage.verify_password(&user.id, "hunter3").await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_password_without_hash_is_false() {
        let storage = InMemoryUserStorage::new();
        let user = User::new("sso-user");
        storage.create(&user).await.unwrap();

        assert!(!storage.verify_password(&user.id, "anything").await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_password_unknown_user_is_error() {
        let storage = InMemoryUserStorage::new();
        assert!(storage.verify_password("ghost", "pw").await.is_err());
    }

    #[tokio::test]
    async fn test_delete() {
        let storage = InMemoryUserStorage::new();
        let user = user_with_password("alice", "hunter2");
        storage.create(&user).await.unwrap();
        storage.delete(&user.id).await.unwrap();

        assert!(storage.find_by_id(&user.id).await.unwrap().is_none());
        assert!(storage.delete(&user.id).await.is_err());
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let storage = InMemoryUserStorage::new();
        for name in ["carol", "alice", "bob"] {
            storage.create(&User::new(name)).await.unwrap();
        }

        let page = storage.list(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].username, "alice");
        assert_eq!(page[1].username, "bob");

        let rest = storage.list(2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].username, "carol");
    }
}
