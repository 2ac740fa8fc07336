//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used when the app runs natively
//! (development builds, `dx serve` desktop preview). Every key is one file
//! holding the raw string value.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token        # bearer token
//! └── user         # JSON-serialised session user
//! ```
//!
//! ## Platform data directories
//!
//! Callers pass [`dirs::data_dir()`]`/petspa` as the base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/petspa/` |
//! | Linux | `~/.local/share/petspa/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\petspa\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::path::PathBuf;

use tracing::warn;

use crate::error::StoreError;
use crate::KeyValueStore;

/// Filesystem-backed KeyValueStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        let path = self.item_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                warn!("Failed to remove {}: {}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Role, TokenStore, User};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("petspa_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");
        let store = FileStore::new(dir.clone());

        assert!(store.get_item("token").is_none());
        store.set_item("token", "abc.def.ghi").unwrap();
        assert_eq!(store.get_item("token").as_deref(), Some("abc.def.ghi"));

        store.remove_item("token");
        assert!(store.get_item("token").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_credentials_survive_reopen() {
        let dir = temp_dir("reopen");
        let user = User {
            id: "1".to_string(),
            username: "ana".to_string(),
            email: "ana@petspa.es".to_string(),
            role: Role::Admin,
            name: None,
        };

        TokenStore::new(FileStore::new(dir.clone()))
            .set("tok", &user)
            .unwrap();

        // Re-open from the same directory, as after a page reload
        let reopened = TokenStore::new(FileStore::new(dir.clone()));
        let creds = reopened.get().unwrap();
        assert_eq!(creds.token, "tok");
        assert_eq!(creds.user, Some(user));

        reopened.clear();
        assert!(TokenStore::new(FileStore::new(dir.clone())).get().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
