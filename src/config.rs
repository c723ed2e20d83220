//! Application configuration
//!
//! Optional overrides live in storage under [`Config::STORAGE_KEY`] as JSON;
//! any missing field takes its default.

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage key holding the serialized list
    pub storage_key: String,

    // === Page elements ===
    /// Container receiving rendered entries
    pub list_id: String,
    /// Text field read on add
    pub input_id: String,
    /// Button triggering add
    pub add_button_id: String,

    /// Log filter: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "items".to_string(),
            list_id: "items".to_string(),
            input_id: "itemInput".to_string(),
            add_button_id: "addItem".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub const STORAGE_KEY: &'static str = "todo_config";

    /// Load overrides from storage, falling back to defaults
    pub fn load<S: KeyValueStore + ?Sized>(storage: &S) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from storage");
                    return config;
                }
                Err(e) => log::warn!("Ignoring malformed config: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read config: {}", e),
        }
        Self::default()
    }

    /// Parsed log level (Info when unrecognized)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_defaults_when_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(Config::load(&storage), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let mut storage = MemoryStorage::new();
        storage
            .set(Config::STORAGE_KEY, r#"{"storage_key":"groceries","log_level":"debug"}"#)
            .unwrap();
        let config = Config::load(&storage);
        assert_eq!(config.storage_key, "groceries");
        assert_eq!(config.input_id, "itemInput");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_malformed_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set(Config::STORAGE_KEY, "{oops").unwrap();
        assert_eq!(Config::load(&storage), Config::default());
    }

    #[test]
    fn test_unknown_level_is_info() {
        let config = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
