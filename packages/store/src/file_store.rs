//! # Filesystem-backed session storage
//!
//! [`FileStorage`] persists session entries as plain files under a base
//! directory, one file per key. It is the [`SessionStorage`] used on native
//! platforms so a login survives app restarts.
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/trackcraft/` on Linux or
//! `~/Library/Application Support/trackcraft/` on macOS.
//!
//! All methods swallow I/O errors: an unreadable or unwritable directory
//! degrades to "no persisted session" rather than crashing the client.

use std::path::PathBuf;

use crate::session::SessionStorage;

/// Filesystem-backed SessionStorage for native persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionStorage for FileStorage {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.entry_path(key), value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::SessionVault;

    #[tokio::test]
    async fn test_file_storage_round_trip() {
        let dir = std::env::temp_dir().join(format!("trackcraft_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let vault = SessionVault::new(FileStorage::new(dir.clone()));
        vault.save_token("tok-xyz").await;
        vault
            .save_user(Some(&User {
                id: 1,
                email: "sam@example.com".to_string(),
                name: "Sam".to_string(),
                monthly_limit: None,
            }))
            .await;

        // Re-open from the same directory.
        let restored = SessionVault::new(FileStorage::new(dir.clone())).load().await;
        assert_eq!(restored.token.as_deref(), Some("tok-xyz"));
        assert_eq!(restored.user.as_ref().map(|u| u.id), Some(1));

        SessionVault::new(FileStorage::new(dir.clone())).clear().await;
        let cleared = SessionVault::new(FileStorage::new(dir.clone())).load().await;
        assert!(cleared.token.is_none());
        assert!(cleared.user.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_directory_reads_as_empty() {
        let dir = std::env::temp_dir().join("trackcraft_test_never_created");
        let storage = FileStorage::new(dir);
        assert!(storage.get("token").await.is_none());
        // Removing from a missing directory is a no-op.
        storage.remove("token").await;
    }
}
