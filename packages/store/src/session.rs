//! # Session persistence over an abstract key-value store
//!
//! The authenticated session (a bearer token plus a cached [`User`]
//! snapshot) survives restarts by being mirrored into a [`SessionStorage`].
//! All reads and writes go through the trait, so the same logic works
//! against browser `localStorage` ([`crate::LocalStorage`]), the filesystem
//! ([`crate::FileStorage`]), or memory ([`crate::MemoryStorage`]) in tests.
//!
//! ## Persistence rules
//!
//! - Every mutation is written through immediately; there is no flush step.
//! - The token is stored verbatim under [`TOKEN_KEY`]; the user snapshot is
//!   stored as JSON under [`USER_KEY`].
//! - A missing user is represented by *removing* the entry, never by
//!   storing a null.
//! - A corrupt persisted user snapshot is discarded on load; the token is
//!   still restored and the profile re-fetched by the session provider.

use crate::models::User;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user snapshot.
pub const USER_KEY: &str = "user";

/// Async interface for the durable key-value store backing the session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// The restored authentication context.
///
/// A present token means the client considers itself authenticated even
/// while the user snapshot is still `None`; the profile is fetched lazily.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Write-through persistence for the session, backed by a [`SessionStorage`].
pub struct SessionVault<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionVault<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Restore the persisted session, if any.
    pub async fn load(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY).await;
        let user = match self.storage.get(USER_KEY).await {
            Some(raw) => serde_json::from_str(&raw).ok(),
            None => None,
        };
        Session { token, user }
    }

    /// Persist a freshly issued token.
    pub async fn save_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token).await;
    }

    /// Persist the user snapshot; `None` removes the entry.
    pub async fn save_user(&self, user: Option<&User>) {
        match user {
            Some(user) => {
                if let Ok(json) = serde_json::to_string(user) {
                    self.storage.set(USER_KEY, &json).await;
                }
            }
            None => self.storage.remove(USER_KEY).await,
        }
    }

    /// Forget the persisted session entirely. Idempotent.
    pub async fn clear(&self) {
        self.storage.remove(TOKEN_KEY).await;
        self.storage.remove(USER_KEY).await;
    }
}
