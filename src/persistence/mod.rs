//! Serialized form of the item list
//!
//! Features:
//! - JSON array of strings, order preserving
//! - Corruption detection (anything that is not an array of strings)
//! - Backup key for values that failed to parse

use crate::error::{Error, Result};
use crate::store::ItemList;

/// Suffix appended to the storage key when preserving a malformed value
pub const BACKUP_SUFFIX: &str = ".corrupt";

/// Serialize a list for storage
pub fn encode(items: &ItemList) -> Result<String> {
    serde_json::to_string(items).map_err(Error::Encode)
}

/// Parse a stored value back into a list
pub fn decode(raw: &str) -> Result<ItemList> {
    serde_json::from_str(raw).map_err(Error::Corrupt)
}

/// Key under which a malformed value for `key` is kept
pub fn backup_key(key: &str) -> String {
    format!("{key}{BACKUP_SUFFIX}")
}
