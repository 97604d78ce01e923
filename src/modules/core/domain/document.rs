//! Parsed document model

use serde::Serialize;
use std::collections::HashMap;

use super::Section;

/// Every section of a parsed INI source, keyed by section name.
///
/// Keys that appear before any header live in the section named `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: HashMap<String, Section>,
}

impl Document {
    /// Create an empty document with room for `sections` sections
    pub fn with_capacity(sections: usize) -> Self {
        Self {
            sections: HashMap::with_capacity(sections),
        }
    }

    /// Get the section with this name, creating it if absent.
    ///
    /// An existing section keeps its entries.
    pub fn open_section(&mut self, name: &str, key_capacity: usize) -> &mut Section {
        self.sections
            .entry(name.to_string())
            .or_insert_with(|| Section::with_capacity(key_capacity))
    }

    /// Find a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Raw value stored at `(section, key)`
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Iterate over `(name, section)` pairs in no particular order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Number of sections, including the unnamed one if it was used
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
