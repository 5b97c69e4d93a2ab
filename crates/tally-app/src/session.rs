//! Browser-backed session plumbing
//!
//! The token pair lives in localStorage under the same keys the backend
//! ecosystem expects. Native builds (tests, tooling) fall back to the
//! in-memory store from the core crate.

use std::sync::Arc;

use leptos::prelude::use_context;
use tally_core::session::{Session, TokenStore};

/// localStorage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// localStorage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Token store persisted in the browser's localStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }

    fn read(key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.set_item(key, value) {
                log::error!("Writing {key} to localStorage failed: {err:?}");
            }
        }
    }

    fn remove(key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.remove_item(key) {
                log::error!("Removing {key} from localStorage failed: {err:?}");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn access_token(&self) -> Option<String> {
        Self::read(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        Self::read(REFRESH_TOKEN_KEY)
    }

    fn store(&self, tokens: &tally_core::session::TokenPair) {
        Self::write(ACCESS_TOKEN_KEY, &tokens.access);
        Self::write(REFRESH_TOKEN_KEY, &tokens.refresh);
    }

    fn clear(&self) {
        Self::remove(ACCESS_TOKEN_KEY);
        Self::remove(REFRESH_TOKEN_KEY);
    }
}

/// The token store for the current platform
pub fn token_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorageTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(tally_core::session::MemoryTokenStore::default())
    }
}

/// The session provided by [`crate::App`]
pub fn use_session() -> Session {
    use_context::<Session>().expect("session context not provided")
}
