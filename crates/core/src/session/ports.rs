//! Port interface for persisted session state
//!
//! The boundary between the session store and whatever keeps the two
//! session entries alive across reloads of the consuming shell.

use vagtportal_domain::Result;

/// Synchronous key-value persistence for session entries.
///
/// Reads and writes are synchronous by design: there is one logical writer
/// per shell instance and the store is consulted during construction,
/// before any async machinery exists.
pub trait SessionStorage: Send + Sync {
    /// Read an entry, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write or overwrite an entry.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove an entry. Removing an absent entry is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
