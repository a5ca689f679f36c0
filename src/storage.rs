use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::warn;

use crate::config;

/// Process-external key-value storage for small JSON blobs that must survive
/// application restarts.
pub trait StateStore {
    /// Returns the stored value, or `None` if the key is absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` under the application state directory.
pub struct DiskStateStore {
    root: PathBuf,
}

impl DiskStateStore {
    pub fn open(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create state directory {root:?}"))?;
        Ok(Self { root })
    }

    pub fn open_default() -> Option<Self> {
        let root = config::config_dir()?.join("state");
        match Self::open(root) {
            Ok(store) => Some(store),
            Err(error) => {
                warn!("state directory unavailable: {error:#}");
                None
            }
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StateStore for DiskStateStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("failed to write state file {path:?}"))
    }
}

/// In-memory fallback used when disk storage is unavailable, and as a test
/// double. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    slots: HashMap<String, String>,
}

impl StateStore for MemoryStateStore {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DiskStateStore::open(dir.path().join("state")).unwrap();

        store.write("sidebar", r#"{"org_1":true}"#).unwrap();
        assert_eq!(store.read("sidebar").as_deref(), Some(r#"{"org_1":true}"#));
    }

    #[test]
    fn absent_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStateStore::open(dir.path().join("state")).unwrap();
        assert_eq!(store.read("missing"), None);
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStateStore::default();
        assert_eq!(store.read("slot"), None);

        store.write("slot", "{}").unwrap();
        assert_eq!(store.read("slot").as_deref(), Some("{}"));
    }
}
