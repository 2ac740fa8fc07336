//! # Token store
//!
//! [`TokenStore`] keeps the bearer token and the serialised session user in a
//! [`KeyValueStore`] under two fixed keys ([`TOKEN_KEY`], [`USER_KEY`]). It is
//! what lets a session survive a page reload.
//!
//! The contract is deliberately small:
//!
//! - [`set`](TokenStore::set) persists both values,
//! - [`clear`](TokenStore::clear) removes both,
//! - [`get`](TokenStore::get) returns the last persisted pair, or `None`
//!   when no token is stored.
//!
//! No expiry is enforced here; that is the session layer's call.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::User;
use crate::KeyValueStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialised user record.
pub const USER_KEY: &str = "user";

/// Token and user as last persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub token: String,
    /// `None` when the user record is missing or unreadable.
    pub user: Option<User>,
}

/// Persistent slot for the authentication token and user.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct TokenStore {
    backend: Rc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Persist `token` and `user` under their fixed keys. The user goes
    /// first; on any failure neither key is left behind.
    pub fn set(&self, token: &str, user: &User) -> Result<(), StoreError> {
        let user_json = serde_json::to_string(user)?;
        let written = self
            .backend
            .set_item(USER_KEY, &user_json)
            .and_then(|()| self.backend.set_item(TOKEN_KEY, token));
        if let Err(e) = written {
            self.clear();
            return Err(e);
        }
        debug!("Stored credentials for user {}", user.id);
        Ok(())
    }

    /// Remove both token and user.
    pub fn clear(&self) {
        self.backend.remove_item(TOKEN_KEY);
        self.backend.remove_item(USER_KEY);
        debug!("Cleared stored credentials");
    }

    /// The last persisted pair, or `None` when no token is stored.
    pub fn get(&self) -> Option<Credentials> {
        let token = self.token()?;
        let user = self.backend.get_item(USER_KEY).and_then(|json| {
            serde_json::from_str::<User>(&json)
                .map_err(|e| warn!("Stored user record is unreadable: {}", e))
                .ok()
        });
        Some(Credentials { token, user })
    }

    /// Just the token, as attached to outgoing requests.
    pub fn token(&self) -> Option<String> {
        self.backend
            .get_item(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, Role};

    fn ana() -> User {
        User {
            id: "1".to_string(),
            username: "ana".to_string(),
            email: "ana@petspa.es".to_string(),
            role: Role::Cliente,
            name: Some("Ana".to_string()),
        }
    }

    #[test]
    fn test_empty_store_has_no_credentials() {
        let tokens = TokenStore::new(MemoryStore::new());
        assert!(tokens.get().is_none());
        assert!(tokens.token().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let backend = MemoryStore::new();
        let tokens = TokenStore::new(backend.clone());

        tokens.set("abc", &ana()).unwrap();

        assert_eq!(backend.get_item(TOKEN_KEY).as_deref(), Some("abc"));
        assert!(backend.get_item(USER_KEY).is_some());

        let creds = tokens.get().unwrap();
        assert_eq!(creds.token, "abc");
        assert_eq!(creds.user, Some(ana()));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let backend = MemoryStore::new();
        let tokens = TokenStore::new(backend.clone());
        tokens.set("abc", &ana()).unwrap();

        tokens.clear();

        assert!(backend.is_empty());
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_unreadable_user_is_reported_absent() {
        let backend = MemoryStore::new();
        backend.set_item(TOKEN_KEY, "abc").unwrap();
        backend.set_item(USER_KEY, "{not json").unwrap();

        let creds = TokenStore::new(backend).get().unwrap();
        assert_eq!(creds.token, "abc");
        assert!(creds.user.is_none());
    }

    /// Backend whose writes to one key always fail.
    #[derive(Clone)]
    struct RejectingStore {
        inner: MemoryStore,
        rejected: &'static str,
    }

    impl KeyValueStore for RejectingStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.rejected {
                return Err(StoreError::Unavailable("quota exceeded".to_string()));
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) {
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn test_failed_write_leaves_nothing_behind() {
        for rejected in [TOKEN_KEY, USER_KEY] {
            let inner = MemoryStore::new();
            let tokens = TokenStore::new(RejectingStore {
                inner: inner.clone(),
                rejected,
            });

            assert!(tokens.set("abc", &ana()).is_err());

            assert!(inner.is_empty(), "{rejected} write left data behind");
            assert!(tokens.get().is_none());
        }
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let backend = MemoryStore::new();
        backend.set_item(TOKEN_KEY, "  ").unwrap();
        assert!(TokenStore::new(backend).get().is_none());
    }
}
