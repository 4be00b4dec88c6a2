//! MemTable implementation
//!
//! HashMap-based table with create/update semantics that refuse to upsert.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{Result, StoreError};

/// In-memory key-value table
#[derive(Debug, Default, Clone)]
pub struct MemTable {
    entries: HashMap<String, String>,
}

impl MemTable {
    /// Create a new empty MemTable
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a MemTable from a previously persisted mapping
    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a key that must not exist yet
    pub fn create(&mut self, key: String, value: String) -> Result<()> {
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(StoreError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Overwrite a key that must already exist, returning the previous value
    pub fn update(&mut self, key: &str, value: String) -> Result<String> {
        match self.entries.get_mut(key) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(StoreError::NotFound),
        }
    }

    /// Remove a key, returning the value it held
    pub fn remove(&mut self, key: &str) -> Result<String> {
        self.entries.remove(key).ok_or(StoreError::NotFound)
    }

    /// Get entry count
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the whole mapping (for snapshots)
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}
