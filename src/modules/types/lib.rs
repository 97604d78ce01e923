//! Value types for iniread
//!
//! This crate defines the closed set of types a raw INI value can be read as,
//! and the conversion rules for each of them.

pub mod kind;
pub mod value;

pub use kind::ValueKind;
pub use value::FromIniValue;
