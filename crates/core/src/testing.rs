//! Test support shared by this crate's tests and downstream consumers

use std::collections::HashMap;

use parking_lot::Mutex;
use vagtportal_domain::Result;

use crate::session::ports::SessionStorage;

/// In-memory [`SessionStorage`] for tests and ephemeral shells.
#[derive(Default)]
pub struct MemorySessionStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
