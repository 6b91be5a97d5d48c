//! Whole-document persistence for user records.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{LedgerError, UserRecord};

/// The full stored document: user identifier -> record.
pub type Records = BTreeMap<String, UserRecord>;

/// Flat JSON store holding every user record as a single document.
///
/// The document is read and rewritten wholesale on every mutation; there is
/// no incremental persistence. Two concurrent `save` calls race and the
/// later write wins, so a concurrent host must keep a single mutation in
/// flight per store. I/O and serialization faults propagate to the caller
/// unhandled.
#[derive(Clone, Debug)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full document.
    ///
    /// A missing backing file is initialized to an empty document on disk; a
    /// present-but-empty file reads as an empty mapping without error.
    pub fn load(&self) -> Result<Records, LedgerError> {
        if !self.path.exists() {
            let empty = Records::new();
            self.save(&empty)?;
            return Ok(empty);
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Records::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Serializes the full mapping, overwriting the store.
    pub fn save(&self, records: &Records) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
