//! Durable session persistence
//!
//! [`SessionStore`] is a thin shim over a string key-value backend. In the
//! browser that backend is `localStorage`; natively and in tests it is
//! [`MemoryStorage`]. No network or validation logic lives here.

use crate::error::StorageError;
use crate::types::{Session, UserRecord};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Persisted key holding the access token
pub const TOKEN_KEY: &str = "token";
/// Persisted key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Persisted key holding the JSON-encoded [`UserRecord`]
pub const USER_KEY: &str = "user";
/// Persisted key holding the last-activity epoch milliseconds as a decimal string
pub const LAST_ACTIVITY_KEY: &str = "lastActivity";
/// Persisted key holding the path to return to after login
pub const REDIRECT_KEY: &str = "redirectAfterLogin";

/// The four keys that make up a session
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY, LAST_ACTIVITY_KEY];

/// String key-value storage, shaped after the Web Storage API
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// Session persistence over a [`KeyValueStorage`]
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Write all four session keys
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.access_token)?;
        self.storage.set(REFRESH_TOKEN_KEY, &session.refresh_token)?;
        self.storage.set(USER_KEY, &user)?;
        self.storage
            .set(LAST_ACTIVITY_KEY, &session.last_activity_ms.to_string())?;
        Ok(())
    }

    /// Read the persisted session; any missing or unparsable key means absent
    pub fn load(&self) -> Option<Session> {
        let access_token = self.read(TOKEN_KEY)?;
        let refresh_token = self.read(REFRESH_TOKEN_KEY)?;
        let user = self.read(USER_KEY)?;
        let last_activity = self.read(LAST_ACTIVITY_KEY)?;

        let user: UserRecord = match serde_json::from_str(&user) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding persisted user record that failed to parse");
                return None;
            }
        };
        let Ok(last_activity_ms) = last_activity.trim().parse::<i64>() else {
            tracing::warn!("Discarding persisted session with malformed lastActivity");
            return None;
        };

        Some(Session {
            access_token,
            refresh_token,
            user,
            last_activity_ms,
        })
    }

    /// Remove all four session keys
    pub fn clear(&self) -> Result<(), StorageError> {
        for key in SESSION_KEYS {
            self.storage.remove(key)?;
        }
        Ok(())
    }

    /// Record user activity. No-op when no session is stored.
    pub fn touch_activity(&self, now_ms: i64) -> Result<bool, StorageError> {
        if self.read(TOKEN_KEY).is_none() {
            return Ok(false);
        }
        self.storage.set(LAST_ACTIVITY_KEY, &now_ms.to_string())?;
        Ok(true)
    }

    /// Last recorded activity, if a session is stored
    pub fn last_activity(&self) -> Option<i64> {
        self.read(TOKEN_KEY)?;
        self.read(LAST_ACTIVITY_KEY)?.trim().parse().ok()
    }

    /// Whether both tokens are present, regardless of whether they are still valid
    pub fn has_tokens(&self) -> bool {
        self.read(TOKEN_KEY).is_some() && self.read(REFRESH_TOKEN_KEY).is_some()
    }

    /// Remember where to send the user after they sign in
    pub fn remember_redirect(&self, path: &str) -> Result<(), StorageError> {
        self.storage.set(REDIRECT_KEY, path)
    }

    /// Consume the remembered post-login path
    pub fn take_redirect(&self) -> Option<String> {
        let path = self.read(REDIRECT_KEY)?;
        if let Err(e) = self.storage.remove(REDIRECT_KEY) {
            tracing::warn!(error = %e, "Failed to clear post-login redirect");
        }
        Some(path)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Session storage read failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn session() -> Session {
        Session {
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
            user: UserRecord {
                id: "u-1".to_string(),
                email: "jane@example.com".to_string(),
                role: Role::Candidate,
                first_name: Some("Jane".to_string()),
                last_name: None,
                email_verified: true,
            },
            last_activity_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&session()).unwrap();
        assert_eq!(store.load(), Some(session()));
        assert_eq!(
            store.storage().get(LAST_ACTIVITY_KEY).unwrap().as_deref(),
            Some("1700000000000")
        );
    }

    #[test]
    fn test_clear_removes_all_four_keys() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&session()).unwrap();
        assert_eq!(store.storage().len(), 4);

        store.clear().unwrap();
        for key in SESSION_KEYS {
            assert_eq!(store.storage().get(key).unwrap(), None, "{key} survived clear");
        }
        assert!(store.load().is_none());
        assert!(!store.has_tokens());
    }

    #[test]
    fn test_load_with_missing_key_is_absent() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&session()).unwrap();
        store.storage().remove(USER_KEY).unwrap();
        assert!(store.load().is_none());
        // tokens alone are still worth a restoration attempt
        assert!(store.has_tokens());
    }

    #[test]
    fn test_load_with_corrupt_values_is_absent() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&session()).unwrap();
        store.storage().set(USER_KEY, "{not json").unwrap();
        assert!(store.load().is_none());

        store.save(&session()).unwrap();
        store.storage().set(LAST_ACTIVITY_KEY, "yesterday").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_touch_activity_requires_session() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.touch_activity(5).unwrap());
        assert!(store.storage().is_empty());

        store.save(&session()).unwrap();
        assert!(store.touch_activity(1_700_000_060_000).unwrap());
        assert_eq!(store.last_activity(), Some(1_700_000_060_000));
    }

    #[test]
    fn test_redirect_is_consumed_once() {
        let store = SessionStore::new(MemoryStorage::new());
        store.remember_redirect("/candidate/jobs").unwrap();
        assert_eq!(store.take_redirect().as_deref(), Some("/candidate/jobs"));
        assert_eq!(store.take_redirect(), None);
    }
}
