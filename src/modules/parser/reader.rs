//! Typed, defaulting access to a parsed document

use iniread_core::{Document, IniError};
use iniread_types::FromIniValue;
use std::path::Path;
use tracing::debug;

use crate::document::{parse_lines, ParseOptions};
use crate::source::{load_lines, InlineText, TextSource};

/// Read-only view over a parsed INI source.
///
/// Construction never fails and reading never fails: a missing source is an
/// empty document, and a missing or malformed value is the caller's default.
#[derive(Debug, Clone, Default)]
pub struct IniReader {
    document: Document,
}

impl IniReader {
    /// Parse the file at `path` with default capacity hints
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::open_with(path, ParseOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: ParseOptions) -> Self {
        Self::from_source(path.as_ref(), options)
    }

    /// Parse whatever `source` supplies; an unreadable source gives an empty document
    pub fn from_source<S>(source: &S, options: ParseOptions) -> Self
    where
        S: TextSource + ?Sized,
    {
        Self::from_document(parse_lines(load_lines(source), options))
    }

    /// Parse INI text held in memory
    pub fn from_text(text: &str) -> Self {
        Self::from_source(&InlineText(text), ParseOptions::default())
    }

    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_document(parse_lines(lines, ParseOptions::default()))
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.document.contains_section(section)
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.raw(section, key).is_some()
    }

    /// Raw stored string, before any conversion
    pub fn raw(&self, section: &str, key: &str) -> Option<&str> {
        self.document.get(section, key)
    }

    /// Read `[section] key` as `T`, or `default` if it is absent or does not convert.
    pub fn read<T: FromIniValue>(&self, section: &str, key: &str, default: T) -> T {
        self.read_with(section, key, default, false)
    }

    /// Like [`read`](Self::read); `lowercase` ASCII-lowercases string values.
    pub fn read_with<T: FromIniValue>(
        &self,
        section: &str,
        key: &str,
        default: T,
        lowercase: bool,
    ) -> T {
        match self.lookup(section, key, lowercase) {
            Ok(value) => value,
            Err(e) => {
                if !e.is_missing() {
                    debug!("Falling back to default: {}", e);
                }
                default
            }
        }
    }

    /// Read `[section] key` as `T`, reporting why no value could be produced.
    pub fn lookup<T: FromIniValue>(
        &self,
        section: &str,
        key: &str,
        lowercase: bool,
    ) -> Result<T, IniError> {
        let raw = self
            .document
            .section(section)
            .ok_or_else(|| IniError::SectionNotFound(section.to_string()))?
            .get(key)
            .ok_or_else(|| IniError::KeyNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })?;

        T::from_ini_value(raw, lowercase).ok_or_else(|| IniError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            expected: T::KIND,
            raw: raw.to_string(),
        })
    }
}
