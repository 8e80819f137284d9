/// Key/value persistence.
///
/// The workflow controller only talks to the [`KeyValueStore`] trait, so it
/// runs the same against the on-disk [`FileStore`] and the in-process
/// [`MemoryStore`] used by tests. Values are JSON strings; the typed
/// helpers in [`records`] own the encoding and the lenient decoding rules.
pub mod file;
pub mod memory;
pub mod records;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage key holding the JSON array of past analyses.
pub const HISTORY_KEY: &str = "agrivision_history";

/// Storage key holding the JSON profile object.
pub const PROFILE_KEY: &str = "agrivision_profile";

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("storage is full or read-only; '{0}' was not written")]
    WriteRejected(String),
}

/// A minimal string key/value store.
///
/// Single-writer, last-write-wins. `delete` of an absent key is not an error.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}
