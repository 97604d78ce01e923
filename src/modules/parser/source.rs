//! Text sources that supply raw lines

use iniread_core::IniError;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Supplier of raw lines, without terminators
pub trait TextSource {
    fn read_lines(&self) -> Result<Vec<String>, IniError>;
}

impl TextSource for Path {
    fn read_lines(&self) -> Result<Vec<String>, IniError> {
        let bytes = std::fs::read(self).map_err(|source| IniError::Read {
            path: self.display().to_string(),
            source,
        })?;

        // An invalid byte should not cost the whole file.
        Ok(split_lines(&String::from_utf8_lossy(&bytes)))
    }
}

impl TextSource for PathBuf {
    fn read_lines(&self) -> Result<Vec<String>, IniError> {
        self.as_path().read_lines()
    }
}

/// INI text that is already in memory
#[derive(Debug, Clone, Copy)]
pub struct InlineText<'a>(pub &'a str);

impl TextSource for InlineText<'_> {
    fn read_lines(&self) -> Result<Vec<String>, IniError> {
        Ok(split_lines(self.0))
    }
}

/// Lines produced by an iterator
#[derive(Debug, Clone)]
pub struct Lines<I>(pub I);

impl<I> TextSource for Lines<I>
where
    I: Iterator + Clone,
    I::Item: AsRef<str>,
{
    fn read_lines(&self) -> Result<Vec<String>, IniError> {
        Ok(self.0.clone().map(|l| l.as_ref().to_string()).collect())
    }
}

/// Read every line of `source`, treating an unreadable source as empty.
pub fn load_lines<S>(source: &S) -> Vec<String>
where
    S: TextSource + ?Sized,
{
    match source.read_lines() {
        Ok(lines) => lines,
        Err(e) => {
            warn!("Using empty configuration: {}", e);
            Vec::new()
        }
    }
}

// Terminators are dropped except `\r`, which the normalizer trims.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
