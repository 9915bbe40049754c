//! Session Store
//!
//! Persists the auth token and user id in browser storage. Every read goes
//! to the backend; nothing is cached in memory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const TOKEN_KEY: &str = "todo_token";
const USER_ID_KEY: &str = "todo_user_id";

/// Credentials for the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
}

/// String key/value storage the session lives in
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
///
/// The handle is looked up on every call, so the store itself holds no JS
/// objects and can live in reactive context.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            _ => {
                log::warn!("localStorage unavailable");
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to write {} to localStorage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage, used by tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Handle to the persisted session, passed explicitly to pages
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    pub fn local() -> Self {
        Self::new(LocalStorage)
    }

    /// Overwrites any previous session
    pub fn save(&self, token: &str, user_id: i64) {
        self.backend.set(TOKEN_KEY, token);
        self.backend.set(USER_ID_KEY, &user_id.to_string());
        log::info!("session saved for user {}", user_id);
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// An unparseable stored id counts as absent
    pub fn user_id(&self) -> Option<i64> {
        self.backend.get(USER_ID_KEY)?.trim().parse().ok()
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_ID_KEY);
        log::info!("session cleared");
    }

    pub fn is_active(&self) -> bool {
        self.load().is_some()
    }

    /// Both halves or nothing
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let user_id = self.user_id()?;
        Some(Session { token, user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (MemoryStore, SessionStore) {
        let backend = MemoryStore::default();
        (backend.clone(), SessionStore::new(backend))
    }

    #[test]
    fn test_save_then_load() {
        let (_, sessions) = store();
        sessions.save("tok", 42);
        assert!(sessions.is_active());
        assert_eq!(
            sessions.load(),
            Some(Session { token: "tok".to_string(), user_id: 42 })
        );
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let (_, sessions) = store();
        sessions.save("first", 1);
        sessions.save("second", 2);
        assert_eq!(sessions.token().as_deref(), Some("second"));
        assert_eq!(sessions.user_id(), Some(2));
    }

    #[test]
    fn test_clear_removes_both() {
        let (_, sessions) = store();
        sessions.save("tok", 42);
        sessions.clear();
        assert_eq!(sessions.token(), None);
        assert_eq!(sessions.user_id(), None);
        assert!(!sessions.is_active());
    }

    #[test]
    fn test_missing_token_is_logged_out() {
        let (backend, sessions) = store();
        sessions.save("tok", 42);
        backend.remove(TOKEN_KEY);
        assert_eq!(sessions.user_id(), Some(42));
        assert!(!sessions.is_active());
    }

    #[test]
    fn test_missing_user_id_is_logged_out() {
        let (backend, sessions) = store();
        sessions.save("tok", 42);
        backend.remove(USER_ID_KEY);
        assert_eq!(sessions.token().as_deref(), Some("tok"));
        assert!(!sessions.is_active());
    }

    #[test]
    fn test_garbage_user_id_and_empty_token_are_absent() {
        let (backend, sessions) = store();
        backend.set(TOKEN_KEY, "");
        backend.set(USER_ID_KEY, "null");
        assert_eq!(sessions.token(), None);
        assert_eq!(sessions.user_id(), None);
        assert!(!sessions.is_active());
    }

    #[test]
    fn test_reads_go_to_storage() {
        let (backend, sessions) = store();
        assert!(!sessions.is_active());
        // written behind the store's back, e.g. by another tab
        backend.set(TOKEN_KEY, "external");
        backend.set(USER_ID_KEY, "9");
        assert_eq!(sessions.load().map(|s| s.user_id), Some(9));
    }
}
