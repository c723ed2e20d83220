//! Error types for list operations and storage access

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Attempted to add an empty entry
    #[error("You can not Add Empty Item!")]
    EmptyItem,

    /// Persisted value is not a list of strings
    #[error("stored list is malformed: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// List could not be serialized for storage
    #[error("failed to serialize list: {0}")]
    Encode(#[source] serde_json::Error),

    /// Backing key-value store rejected a read or write
    #[error("storage error: {0}")]
    Storage(String),

    /// Required page element missing or of the wrong type
    #[error("DOM error: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl Error {
    /// Wrap a thrown JS value as a storage error
    pub fn storage(err: wasm_bindgen::JsValue) -> Self {
        Error::Storage(format!("{:?}", err))
    }
}
