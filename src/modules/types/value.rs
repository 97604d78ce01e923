//! Conversion from raw INI values
//!
//! [`FromIniValue`] is sealed: only the types listed here can be requested,
//! so asking for anything else fails to compile instead of failing at runtime.

use crate::ValueKind;

mod sealed {
    pub trait Sealed {}
}

/// Raw strings accepted as `true`. Matching is exact and case-sensitive.
pub const TRUE_LITERALS: &[&str] = &["true", "1", "on", "yes"];

/// A type a raw INI value can be read as
pub trait FromIniValue: Sized + sealed::Sealed {
    /// Kind reported in diagnostics
    const KIND: ValueKind;

    /// Convert a raw value, returning `None` when the caller's default should be used.
    ///
    /// `lowercase` only affects `String`.
    fn from_ini_value(raw: &str, lowercase: bool) -> Option<Self>;
}

impl sealed::Sealed for bool {}

impl FromIniValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn from_ini_value(raw: &str, _lowercase: bool) -> Option<Self> {
        // Anything unrecognized is false, never the default.
        Some(TRUE_LITERALS.contains(&raw))
    }
}

impl sealed::Sealed for char {}

impl FromIniValue for char {
    const KIND: ValueKind = ValueKind::Character;

    /// First `char` of the raw value. For non-ASCII text this is a whole
    /// Unicode scalar value, not the first byte.
    fn from_ini_value(raw: &str, _lowercase: bool) -> Option<Self> {
        raw.chars().next()
    }
}

impl sealed::Sealed for String {}

impl FromIniValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_ini_value(raw: &str, lowercase: bool) -> Option<Self> {
        if lowercase && raw.bytes().any(|b| b.is_ascii_uppercase()) {
            Some(raw.to_ascii_lowercase())
        } else {
            Some(raw.to_string())
        }
    }
}

macro_rules! impl_numeric {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromIniValue for $ty {
                const KIND: ValueKind = $kind;

                fn from_ini_value(raw: &str, _lowercase: bool) -> Option<Self> {
                    // A sign is only accepted when it is `-`.
                    if raw.starts_with('+') {
                        return None;
                    }
                    raw.parse().ok()
                }
            }
        )+
    };
}

impl_numeric!(ValueKind::Integer => i8, i16, i32, i64, i128, isize);
impl_numeric!(ValueKind::Integer => u8, u16, u32, u64, u128, usize);
impl_numeric!(ValueKind::Float => f32, f64);
