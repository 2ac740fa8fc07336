//! # Store crate — client-side persistence for PetSPA
//!
//! The front-end persists exactly one thing across page reloads: the bearer
//! token and the user it belongs to. This crate provides the storage seam for
//! that, plus the small TOML config that tells the app where the API lives.
//!
//! | Module | Platform | Purpose |
//! |--------|----------|---------|
//! | [`token_store`] | all | [`TokenStore`]: `set`/`get`/`clear` of the token + user pair under fixed keys |
//! | [`models`] | all | [`User`] and [`Role`], the session-persisted identity |
//! | [`config`] | all | [`AppConfig`] (`petspa.toml`) |
//! | `memory` | all | [`MemoryStore`] for tests and fallback |
//! | `file_store` | native | [`FileStore`], one file per key |
//! | `local_storage` | wasm32 + `web` | [`LocalStorage`], `window.localStorage` |

pub mod config;
pub mod error;
pub mod models;
pub mod token_store;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::{ApiConfig, AppConfig, HealthConfig};
pub use error::StoreError;
pub use models::{Role, User};
pub use token_store::{Credentials, TokenStore};

/// Synchronous string key-value slot, shaped after browser storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str);
}
