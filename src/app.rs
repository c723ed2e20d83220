//! The to-do list application: state, rendering and persistence
//!
//! Every mutation runs mutate → render → persist, so the displayed removal
//! controls always match the current positions.

use crate::config::Config;
use crate::error::Result;
use crate::persistence;
use crate::platform::KeyValueStore;
use crate::store::ItemList;
use crate::view::{self, Surface};

/// Loaded list bound to its storage and display
pub struct TodoApp<S, V> {
    config: Config,
    storage: S,
    surface: V,
    items: ItemList,
}

impl<S: KeyValueStore, V: Surface> TodoApp<S, V> {
    /// Load the list from storage and render it.
    ///
    /// A missing key or empty value starts an empty list. A malformed value
    /// is copied to the backup key and replaced with an empty list; failed
    /// writes during that recovery are logged, never returned.
    pub fn hydrate(config: Config, mut storage: S, surface: V) -> Result<Self> {
        let key = config.storage_key.clone();
        let mut recovered = false;
        let items = match storage.get(&key)?.filter(|raw| !raw.is_empty()) {
            None => {
                log::info!("No saved items, starting fresh");
                ItemList::new()
            }
            Some(raw) => match persistence::decode(&raw) {
                Ok(items) => {
                    log::info!("Loaded {} items", items.len());
                    items
                }
                Err(e) => {
                    let backup = persistence::backup_key(&key);
                    log::warn!("Discarding saved items ({}), raw value kept at {:?}", e, backup);
                    if let Err(e) = storage.set(&backup, &raw) {
                        log::warn!("Could not back up malformed items: {}", e);
                    }
                    recovered = true;
                    ItemList::new()
                }
            },
        };

        let mut app = Self {
            config,
            storage,
            surface,
            items,
        };
        app.render();
        if recovered {
            if let Err(e) = app.persist() {
                log::warn!("Could not reset malformed items: {}", e);
            }
        }
        Ok(app)
    }

    /// Append `text` to the list.
    ///
    /// Empty text fails with [`crate::Error::EmptyItem`] and changes nothing.
    pub fn add(&mut self, text: &str) -> Result<()> {
        self.items.append(text)?;
        self.render();
        self.surface.clear_input();
        self.persist()
    }

    /// Remove the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<String>> {
        let Some(removed) = self.items.remove_at(index) else {
            log::debug!("Ignoring removal at {} (len {})", index, self.items.len());
            return Ok(None);
        };
        self.render();
        self.persist()?;
        Ok(Some(removed))
    }

    /// Redraw all entries
    pub fn render(&mut self) {
        view::render(&self.items, &mut self.surface);
    }

    /// Overwrite the stored list with the in-memory one
    pub fn persist(&mut self) -> Result<()> {
        let raw = persistence::encode(&self.items)?;
        self.storage.set(&self.config.storage_key, &raw)?;
        log::debug!("Saved {} items", self.items.len());
        Ok(())
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Give back storage and surface, e.g. to simulate a reload
    pub fn into_parts(self) -> (S, V) {
        (self.storage, self.surface)
    }
}
