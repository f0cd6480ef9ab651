#[cfg(test)]
use std::cell::RefCell;

use log::error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

use crate::config::TOKEN_STORAGE_KEY;
use crate::error::AuthError;

/// Durable home of the session token.
pub trait TokenStore {
    fn load_token(&self) -> Option<String>;
    fn store_token(&self, token: &str) -> Result<(), AuthError>;
    fn clear_token(&self);
}

/// `window.localStorage`, keyed by [`TOKEN_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage, AuthError> {
        window()
            .ok_or_else(|| AuthError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_storage_error)?
            .ok_or_else(|| AuthError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_storage_error(err: JsValue) -> AuthError {
    AuthError::Storage(format!("{:?}", err))
}

impl TokenStore for BrowserStorage {
    fn load_token(&self) -> Option<String> {
        Self::storage()
            .ok()
            .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok())
            .flatten()
    }

    fn store_token(&self, token: &str) -> Result<(), AuthError> {
        Self::storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(js_storage_error)
    }

    fn clear_token(&self) {
        match Self::storage() {
            Ok(storage) => {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
            Err(e) => error!("Failed to clear session token: {}", e),
        }
    }
}

/// In-process token store for host tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    token: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl TokenStore for MemoryStorage {
    fn load_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store_token(&self, token: &str) -> Result<(), AuthError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountDecision {
    RedirectToDashboard,
    ShowForm,
}

/// Decides what the login view does when it mounts. Presence of a
/// non-empty token is the only thing checked.
pub fn bootstrap(store: &impl TokenStore) -> MountDecision {
    match store.load_token() {
        Some(token) if !token.is_empty() => MountDecision::RedirectToDashboard,
        _ => MountDecision::ShowForm,
    }
}

pub fn is_logged_in() -> bool {
    bootstrap(&BrowserStorage) == MountDecision::RedirectToDashboard
}

pub fn logout(store: &impl TokenStore) {
    store.clear_token();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_token_redirects_without_form() {
        let store = MemoryStorage::with_token("abc123");
        assert_eq!(bootstrap(&store), MountDecision::RedirectToDashboard);
    }

    #[test]
    fn missing_token_shows_form() {
        assert_eq!(bootstrap(&MemoryStorage::default()), MountDecision::ShowForm);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let store = MemoryStorage::with_token("");
        assert_eq!(bootstrap(&store), MountDecision::ShowForm);
    }

    #[test]
    fn bootstrap_does_not_touch_the_token() {
        let store = MemoryStorage::with_token("abc123");
        bootstrap(&store);
        bootstrap(&store);
        assert_eq!(store.load_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn logout_clears_token() {
        let store = MemoryStorage::with_token("abc123");
        logout(&store);
        assert_eq!(store.load_token(), None);
        assert_eq!(bootstrap(&store), MountDecision::ShowForm);
    }
}
