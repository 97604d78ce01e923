//! A single `[section]` of a document

use serde::Serialize;
use std::collections::HashMap;

/// Keys and raw values of one section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
    entries: HashMap<String, String>,
}

impl Section {
    /// Create an empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty section with room for `keys` entries
    pub fn with_capacity(keys: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(keys),
        }
    }

    /// Store a raw value, replacing any earlier value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over `(key, raw value)` pairs in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
