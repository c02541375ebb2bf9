//! Shared session-storage constructor for all platforms.
//!
//! Returns the appropriate [`store::SessionStorage`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorage`]
//! - **Native**: filesystem via [`store::FileStorage`]

/// Create the platform-appropriate session storage.
pub fn make_storage() -> impl store::SessionStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("trackcraft");
        store::FileStorage::new(base)
    }
}
