//! Persistent To-Do - a browser to-do list that survives reloads
//!
//! Core modules:
//! - `store`: Ordered in-memory item list
//! - `app`: Hydrate, add, remove, render and persist
//! - `view`: Display surface abstraction and rendering
//! - `platform`: Browser/native storage and DOM
//! - `persistence`: Serialized list format and corruption recovery
//! - `config`: Storage key, element ids and log level

pub mod app;
pub mod config;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod store;
pub mod view;

pub use app::TodoApp;
pub use config::Config;
pub use error::{Error, Result};
pub use store::ItemList;
