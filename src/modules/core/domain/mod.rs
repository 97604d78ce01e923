//! Parsed INI document

mod document;
mod section;

pub use document::Document;
pub use section::Section;
