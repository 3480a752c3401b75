//! File-backed session storage
//!
//! Persists the session entries as one small JSON object so a session
//! survives a restart of the consuming shell, mirroring what the browser's
//! local storage did for the original site.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::warn;
use vagtportal_core::SessionStorage;
use vagtportal_domain::Result;

use crate::errors::InfraError;

/// [`SessionStorage`] over a JSON file.
///
/// The whole entry map is rewritten on every mutation; with two small
/// entries that is the simplest thing that works. An unreadable or corrupt
/// file degrades to an empty store.
pub struct FileSessionStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self { path, entries: Mutex::new(entries) }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "session file is corrupt; starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "session file unreadable; starting empty");
                HashMap::new()
            }
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(InfraError::from)?;
            }
        }

        let serialized = serde_json::to_string_pretty(entries).map_err(InfraError::from)?;
        fs::write(&self.path, serialized).map_err(InfraError::from)?;
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_survive_a_new_instance_over_the_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileSessionStorage::new(&path);
        storage.set("volunteer_jwt", "tok123").unwrap();
        storage.set("volunteer_user", "{\"id\":1}").unwrap();

        let reloaded = FileSessionStorage::new(&path);
        assert_eq!(reloaded.get("volunteer_jwt").unwrap().as_deref(), Some("tok123"));
        assert_eq!(reloaded.get("volunteer_user").unwrap().as_deref(), Some("{\"id\":1}"));
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("absent.json"));

        assert_eq!(storage.get("volunteer_jwt").unwrap(), None);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileSessionStorage::new(&path);

        assert_eq!(storage.get("volunteer_jwt").unwrap(), None);
    }

    #[test]
    fn removing_an_absent_entry_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));

        storage.remove("volunteer_jwt").unwrap();
    }

    #[test]
    fn remove_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileSessionStorage::new(&path);
        storage.set("volunteer_jwt", "tok123").unwrap();
        storage.remove("volunteer_jwt").unwrap();

        let reloaded = FileSessionStorage::new(&path);
        assert_eq!(reloaded.get("volunteer_jwt").unwrap(), None);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("session.json");

        let storage = FileSessionStorage::new(&path);
        storage.set("volunteer_jwt", "tok123").unwrap();

        assert!(path.exists());
    }
}
