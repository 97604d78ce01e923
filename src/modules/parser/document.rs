//! Line-oriented document parser

use iniread_core::Document;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::normalize::{normalize, trim};

/// Capacity hints used to pre-size storage.
///
/// They never change what is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Expected number of sections
    pub section_capacity: usize,

    /// Expected number of keys in each section
    pub key_capacity: usize,
}

impl ParseOptions {
    pub fn with_section_capacity(mut self, sections: usize) -> Self {
        self.section_capacity = sections;
        self
    }

    pub fn with_key_capacity(mut self, keys: usize) -> Self {
        self.key_capacity = keys;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            section_capacity: 32,
            key_capacity: 8,
        }
    }
}

/// Represents an on-going parse.
///
/// Lines are fed one at a time; malformed lines are dropped silently.
#[derive(Debug)]
pub struct DocumentParser {
    document: Document,
    current: String,
    line: usize,
    options: ParseOptions,
}

impl DocumentParser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            document: Document::with_capacity(options.section_capacity),
            current: String::new(),
            line: 0,
            options,
        }
    }

    /// Name of the section new keys are filed under
    pub fn current_section(&self) -> &str {
        &self.current
    }

    /// Consume one raw line, without its terminator
    pub fn feed(&mut self, raw: &str) {
        self.line += 1;

        let line = normalize(raw);
        if line.is_empty() {
            return;
        }

        // A `[` always means a header attempt, even if the line also has `=`.
        if let Some(open) = line.find('[') {
            let Some(len) = line[open..].find(']') else {
                debug!(
                    "Dropping line {}: unterminated section header '{}'",
                    self.line, line
                );
                return;
            };

            let name = trim(&line[open + 1..open + len]);
            self.document.open_section(name, self.options.key_capacity);
            self.current = name.to_string();
        } else if let Some((key, value)) = line.split_once('=') {
            self.document
                .open_section(&self.current, self.options.key_capacity)
                .insert(trim(key), trim(value));
        }
    }

    /// Finish the parse and hand over the document
    pub fn finish(self) -> Document {
        trace!(
            "Parsed {} lines into {} sections",
            self.line,
            self.document.len()
        );
        self.document
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Parse a sequence of lines into a document
pub fn parse_lines<I>(lines: I, options: ParseOptions) -> Document
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parser = DocumentParser::new(options);
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}
