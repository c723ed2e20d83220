//! Display surface abstraction and list rendering
//!
//! Rendering is a full rebuild: every entry is redrawn with the index it
//! holds at render time, so each removal control is only valid until the
//! next mutation. Callers must render after every mutation.

use crate::store::ItemList;

/// Where entries are shown and where user text is typed
pub trait Surface {
    /// Drop every displayed entry
    fn clear_entries(&mut self);
    /// Show `text` with a removal control bound to `index`
    fn show_entry(&mut self, index: usize, text: &str);
    /// Empty the input field after a successful add
    fn clear_input(&mut self);
}

/// Position carried by a removal control's index attribute
pub fn parse_index(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// Rebuild the displayed list from `items`
pub fn render<V: Surface + ?Sized>(items: &ItemList, surface: &mut V) {
    surface.clear_entries();
    for (index, text) in items.iter().enumerate() {
        surface.show_entry(index, text);
    }
}

/// Surface that writes entries to the log; used by the native build
#[derive(Debug, Default)]
pub struct LogSurface;

impl Surface for LogSurface {
    fn clear_entries(&mut self) {
        log::debug!("--- list ---");
    }

    fn show_entry(&mut self, index: usize, text: &str) {
        log::info!("  [{}] {}", index, text);
    }

    fn clear_input(&mut self) {}
}

/// Surface that records what was last rendered
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub entries: Vec<(usize, String)>,
    pub renders: usize,
    pub input_clears: usize,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear_entries(&mut self) {
        self.entries.clear();
        self.renders += 1;
    }

    fn show_entry(&mut self, index: usize, text: &str) {
        self.entries.push((index, text.to_string()));
    }

    fn clear_input(&mut self) {
        self.input_clears += 1;
    }
}
