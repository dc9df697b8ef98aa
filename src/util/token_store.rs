//! Credential persistence in browser `localStorage`.
//!
//! A single named slot holds the bearer token so the session survives page
//! reloads. Pure storage: no network and no validation. Requires a browser
//! environment; on the server every operation is a no-op and `load`
//! returns `None`.

use crate::state::session::CredentialStore;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

/// Persist the credential, overwriting any existing one.
pub fn save(credential: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, credential);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
    }
}

/// Read the stored credential, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the stored credential. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// [`CredentialStore`] backed by this module.
pub struct BrowserStore;

impl CredentialStore for BrowserStore {
    fn save(&self, credential: &str) {
        save(credential);
    }

    fn load(&self) -> Option<String> {
        load()
    }

    fn clear(&self) {
        clear();
    }
}
