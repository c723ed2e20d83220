//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory on native)
//! - Display (DOM on web)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod storage;

pub use storage::{KeyValueStore, MemoryStorage};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
