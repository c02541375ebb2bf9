//! # Browser `localStorage` session storage
//!
//! [`LocalStorage`] is the [`SessionStorage`] used on the web platform. It
//! writes through `window.localStorage` via [`web_sys`], under the same
//! fixed keys the rest of the session layer uses.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "no
//! persisted session"; the user simply has to log in again.

use crate::session::SessionStorage;

/// `window.localStorage`-backed SessionStorage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn raw() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    async fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok()?
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.remove_item(key);
        }
    }
}
