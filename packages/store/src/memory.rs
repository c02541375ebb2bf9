use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStorage;

/// In-memory SessionStorage for testing and fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::{Session, SessionVault, USER_KEY};

    fn user() -> User {
        User {
            id: 3,
            email: "dana@example.com".to_string(),
            name: "Dana".to_string(),
            monthly_limit: Some(20000.0),
        }
    }

    #[tokio::test]
    async fn test_empty_storage_restores_nothing() {
        let vault = SessionVault::new(MemoryStorage::new());
        let session = vault.load().await;
        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        let vault = SessionVault::new(storage.clone());

        vault.save_token("tok-123").await;
        vault.save_user(Some(&user())).await;

        let restored = SessionVault::new(storage).load().await;
        assert_eq!(restored.token.as_deref(), Some("tok-123"));
        assert_eq!(restored.user, Some(user()));
        assert!(restored.is_authenticated());
    }

    #[tokio::test]
    async fn test_token_without_user_is_still_authenticated() {
        let storage = MemoryStorage::new();
        SessionVault::new(storage.clone()).save_token("tok").await;

        let restored = SessionVault::new(storage).load().await;
        assert!(restored.is_authenticated());
        assert!(restored.user.is_none());
    }

    #[tokio::test]
    async fn test_saving_no_user_removes_the_entry() {
        let storage = MemoryStorage::new();
        let vault = SessionVault::new(storage.clone());

        vault.save_user(Some(&user())).await;
        assert!(storage.get(USER_KEY).await.is_some());

        vault.save_user(None).await;
        assert!(storage.get(USER_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_clear_then_load_is_unauthenticated() {
        let storage = MemoryStorage::new();
        let vault = SessionVault::new(storage.clone());

        vault.save_token("tok").await;
        vault.save_user(Some(&user())).await;
        vault.clear().await;
        // Clearing twice is fine.
        vault.clear().await;

        let restored = SessionVault::new(storage).load().await;
        assert_eq!(restored, Session::default());
    }

    #[tokio::test]
    async fn test_corrupt_user_snapshot_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, "{not json").await;
        SessionVault::new(storage.clone()).save_token("tok").await;

        let restored = SessionVault::new(storage).load().await;
        assert!(restored.user.is_none());
        assert_eq!(restored.token.as_deref(), Some("tok"));
    }
}
