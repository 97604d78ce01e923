//! INI parsing for iniread
//!
//! This crate turns INI text into a [`Document`], and wraps it in an
//! [`IniReader`] for typed reads that fall back to defaults instead of failing.

pub mod document;
pub mod normalize;
pub mod reader;
pub mod source;

pub use document::{parse_lines, DocumentParser, ParseOptions};
pub use reader::IniReader;
pub use source::{InlineText, Lines, TextSource};

pub use iniread_core::{Document, IniError, Section};
pub use iniread_types::{FromIniValue, ValueKind};

use std::path::Path;

/// Parse a file from a path; a missing or unreadable file gives an empty document
pub fn parse_file(path: impl AsRef<Path>) -> Document {
    parse_lines(source::load_lines(path.as_ref()), ParseOptions::default())
}

/// Parse INI text from a string
pub fn parse_string(content: &str) -> Document {
    parse_lines(content.split('\n'), ParseOptions::default())
}
