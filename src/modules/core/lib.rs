//! Core document model for iniread
//!
//! This crate contains the in-memory document built from INI text and the
//! error type shared by the diagnostic paths.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::IniError;
