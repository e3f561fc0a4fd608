//! Case-mapping tables
//!
//! Every upper/lower/title step in the crate goes through a [`Locale`] so the
//! result never depends on process-wide state.

use serde::{Deserialize, Serialize};

/// Which case mapping to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Unicode default case mapping. A character may map to several
    /// (`ß` uppercases to `SS`).
    #[default]
    Invariant,
    /// Only `a-z` and `A-Z` are mapped; everything else passes through.
    Ascii,
}

impl Locale {
    pub fn lowercase(self, s: &str) -> String {
        match self {
            Locale::Invariant => s.to_lowercase(),
            Locale::Ascii => s.to_ascii_lowercase(),
        }
    }

    pub fn uppercase(self, s: &str) -> String {
        match self {
            Locale::Invariant => s.to_uppercase(),
            Locale::Ascii => s.to_ascii_uppercase(),
        }
    }

    pub fn push_upper(self, out: &mut String, c: char) {
        match self {
            Locale::Invariant => out.extend(c.to_uppercase()),
            Locale::Ascii => out.push(c.to_ascii_uppercase()),
        }
    }

    pub fn push_lower(self, out: &mut String, c: char) {
        match self {
            Locale::Invariant => out.extend(c.to_lowercase()),
            Locale::Ascii => out.push(c.to_ascii_lowercase()),
        }
    }
}
