//! `window.localStorage` as session storage

use talenthub_core::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Browser-backed [`KeyValueStorage`].
///
/// When localStorage is unavailable (privacy mode, sandboxed iframe) every
/// operation reports [`StorageError::Unavailable`] and the app behaves as
/// signed out.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is unavailable; sessions will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }
}

fn write_error(key: &str, error: &JsValue) -> StorageError {
    StorageError::Write {
        key: key.to_string(),
        message: format!("{error:?}"),
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| write_error(key, &e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| write_error(key, &e))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use talenthub_core::store::{LAST_ACTIVITY_KEY, TOKEN_KEY};
    use talenthub_core::{Role, Session, SessionStore, UserRecord};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_round_trips_through_local_storage() {
        let store = SessionStore::new(BrowserStorage::local());
        let session = Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            user: UserRecord {
                id: "u-1".to_string(),
                email: "c@example.com".to_string(),
                role: Role::Candidate,
                first_name: None,
                last_name: None,
                email_verified: false,
            },
            last_activity_ms: 1_700_000_000_000,
        };

        store.save(&session).unwrap();
        assert_eq!(
            store.storage().get(LAST_ACTIVITY_KEY).unwrap().as_deref(),
            Some("1700000000000")
        );
        assert_eq!(store.load(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.storage().get(TOKEN_KEY).unwrap(), None);
        assert!(!store.has_tokens());
    }
}
