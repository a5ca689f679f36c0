use std::collections::{BTreeMap, BTreeSet};

use log::warn;

use crate::storage::StateStore;

pub const DEFAULT_STORAGE_KEY: &str = "t-sidebar-state";

/// Durable per-workspace expand/collapse state for the sidebar.
///
/// The map is read once from storage at startup and written back whole on
/// every toggle. An absent key means collapsed. Storage failures degrade to
/// the in-memory map; they never surface to the UI.
pub struct ExpansionState {
    key: String,
    map: BTreeMap<String, bool>,
    store: Box<dyn StateStore>,
    write_failed: bool,
}

impl ExpansionState {
    pub fn load(store: Box<dyn StateStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let map = match store.read(&key) {
            None => BTreeMap::new(),
            Some(raw) => match serde_json::from_str::<BTreeMap<String, bool>>(&raw) {
                Ok(map) => map,
                Err(error) => {
                    warn!("discarding malformed sidebar state under '{key}': {error}");
                    BTreeMap::new()
                }
            },
        };

        Self {
            key,
            map,
            store,
            write_failed: false,
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.map.get(id).copied().unwrap_or(false)
    }

    /// Flips the flag for `id` (first toggle of an unknown id expands it) and
    /// persists the whole map.
    pub fn toggle(&mut self, id: &str) {
        let entry = self.map.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        self.persist();
    }

    /// The set of workspace ids currently marked expanded. Derived from the
    /// map on every call, never cached.
    pub fn default_open_sections(&self) -> BTreeSet<String> {
        self.map
            .iter()
            .filter(|(_, open)| **open)
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.map) {
            Ok(raw) => raw,
            Err(error) => {
                warn!("could not serialize sidebar state: {error}");
                return;
            }
        };

        if let Err(error) = self.store.write(&self.key, &raw) {
            if !self.write_failed {
                warn!(
                    "could not persist sidebar state under '{}': {error:#}",
                    self.key
                );
                self.write_failed = true;
            }
        }
    }
}
