//! Key-value storage collaborator.
//!
//! The session persists through this trait and never hard-codes a mechanism.
//! Values are JSON documents keyed by plain strings, mirroring the browser
//! storage layout the calendar data originally lived in.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{AgendaError, AgendaResult};

/// Storage key for the serialized event list.
pub const EVENTS_KEY: &str = "calendarEvents";

/// Storage key for the serialized custom non-working day list.
pub const NON_WORKING_KEY: &str = "customNonWorkingDays";

pub trait Storage {
    fn get(&self, key: &str) -> AgendaResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AgendaResult<()>;
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Clones share the same underlying map, so a value set through one handle is
/// visible through every other.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    // The map stays usable after a poisoning panic, so both accessors
    // recover the guard instead of surfacing an error.
    fn get(&self, key: &str) -> AgendaResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AgendaResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a single JSON document on disk.
///
/// The whole store is one `{ "key": "value" }` object and every `set`
/// rewrites the file. Fine at this scale, and keeps the store inspectable
/// with a text editor.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Default store location under the platform data directory.
    pub fn default_path() -> AgendaResult<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| AgendaError::Storage("Could not determine data directory".into()))?;
        Ok(data_dir.join("agenda").join("store.json"))
    }

    pub fn open_default() -> AgendaResult<Self> {
        Ok(Self::open(Self::default_path()?))
    }

    /// Open the store at `path`. A missing or unreadable file counts as an
    /// empty store; it gets created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        FileStorage { path, entries }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn flush(&self) -> AgendaResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> AgendaResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AgendaResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").unwrap(), None);

        storage.set("a", "1").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));

        // Clones see writes through either handle
        let clone = storage.clone();
        assert_eq!(clone.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_file_storage_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut storage = FileStorage::open(&path);
        assert_eq!(storage.get(EVENTS_KEY).unwrap(), None);
        storage.set(EVENTS_KEY, "[]").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get(EVENTS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_treats_garbage_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get(EVENTS_KEY).unwrap(), None);
    }
}
