//! Key-value storage backends

use std::collections::HashMap;

use crate::error::Result;
#[cfg(target_arch = "wasm32")]
use crate::error::Error;

/// String-keyed store holding string values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrite any previous value at `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store used on native and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Open the window's LocalStorage (fails in private modes that disable it)
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::Storage("no window".into()))?;
        let inner = window
            .local_storage()
            .map_err(Error::storage)?
            .ok_or_else(|| Error::Storage("LocalStorage unavailable".into()))?;
        Ok(Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key).map_err(Error::storage)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner.set_item(key, value).map_err(Error::storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_overwrites() {
        let mut s = MemoryStorage::new();
        assert_eq!(s.get("items").unwrap(), None);
        s.set("items", "[]").unwrap();
        s.set("items", r#"["a"]"#).unwrap();
        assert_eq!(s.get("items").unwrap().as_deref(), Some(r#"["a"]"#));
        assert_eq!(s.get("other").unwrap(), None);
    }
}
