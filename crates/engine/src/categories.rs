//! Spend category registry backed by a comma-joined text file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::LedgerError;

/// Registry of the category names offered when entering a transaction.
///
/// The backing file is a single comma-joined line; a missing or empty file
/// reads as no categories.
#[derive(Clone, Debug)]
pub struct CategoryRegistry {
    path: PathBuf,
}

impl CategoryRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> Result<Vec<String>, LedgerError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect())
    }

    pub fn add(&self, name: &str) -> Result<(), LedgerError> {
        let name = name.trim();
        if name.is_empty() || name.contains(',') {
            return Err(LedgerError::InvalidRecord(format!(
                "invalid category name: {name:?}"
            )));
        }
        let mut categories = self.list()?;
        if categories.iter().any(|existing| existing == name) {
            return Err(LedgerError::ExistingKey(name.to_string()));
        }
        categories.push(name.to_string());
        self.write(&categories)
    }

    pub fn delete(&self, name: &str) -> Result<(), LedgerError> {
        let mut categories = self.list()?;
        let before = categories.len();
        categories.retain(|existing| existing != name);
        if categories.len() == before {
            return Err(LedgerError::KeyNotFound(name.to_string()));
        }
        self.write(&categories)
    }

    fn write(&self, categories: &[String]) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, categories.join(","))?;
        Ok(())
    }
}
