//! Identifier word segmentation
//!
//! Splits Pascal/camel-case identifiers into space-separated words by scanning
//! characters and classifying each one, instead of relying on regex lookaround.
//!
//! A space goes in front of position `i` when any of these holds, checked in
//! order:
//!
//! | Rule | Previous | Current | Next | Example |
//! |------|----------|---------|------|---------|
//! | [`Boundary::AcronymEnd`] | upper | upper | lower | `HTTP│Server` |
//! | [`Boundary::CaseChange`] | not upper | upper | any | `my│Var`, `2│D` |
//! | [`Boundary::LetterToOther`] | letter | not a letter | any | `Item│2` |
//!
//! Letters are ASCII only; any other character (digits, punctuation,
//! whitespace, non-ASCII letters) classifies as [`CharClass::Other`].

use crate::whitespace::collapse_whitespace;

/// Character class used by the boundary rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_lowercase() {
            CharClass::Lower
        } else {
            CharClass::Other
        }
    }
}

/// Which rule produced a word boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Last capital of an acronym that starts a new word (`HTTPServer`)
    AcronymEnd,
    /// Anything but a capital followed by a capital (`myVar`)
    CaseChange,
    /// Letter followed by a non-letter (`Item2`)
    LetterToOther,
}

impl Boundary {
    fn classify(prev: CharClass, cur: CharClass, next: Option<CharClass>) -> Option<Self> {
        use CharClass::*;

        match (prev, cur, next) {
            (Upper, Upper, Some(Lower)) => Some(Boundary::AcronymEnd),
            (Lower | Other, Upper, _) => Some(Boundary::CaseChange),
            (Upper | Lower, Other, _) => Some(Boundary::LetterToOther),
            _ => None,
        }
    }
}

/// Byte offsets where a word starts, with the rule that matched there
///
/// Offset 0 never appears since every rule needs a preceding character.
///
/// # Examples
/// ```
/// use wordcase::split::{boundaries, Boundary};
/// assert_eq!(
///     boundaries("HTTPServerError"),
///     vec![(4, Boundary::AcronymEnd), (10, Boundary::CaseChange)]
/// );
/// ```
pub fn boundaries(input: &str) -> Vec<(usize, Boundary)> {
    let chars: Vec<(usize, CharClass)> = input
        .char_indices()
        .map(|(offset, c)| (offset, CharClass::of(c)))
        .collect();

    chars
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let (_, prev) = pair[0];
            let (offset, cur) = pair[1];
            let next = chars.get(i + 2).map(|&(_, class)| class);
            Boundary::classify(prev, cur, next).map(|rule| (offset, rule))
        })
        .collect()
}

/// Convert a Pascal or camel-case identifier into space-separated words
///
/// Inserts one space at every boundary, then collapses whitespace runs and
/// trims. Useful for turning enum variant names into display labels.
///
/// # Examples
/// ```
/// use wordcase::split_identifier_to_words;
/// assert_eq!(split_identifier_to_words("HTTPServerError"), "HTTP Server Error");
/// assert_eq!(split_identifier_to_words("myVariable2Name"), "my Variable 2 Name");
/// assert_eq!(split_identifier_to_words("simple"), "simple");
/// ```
pub fn split_identifier_to_words(input: &str) -> String {
    let mut spaced = String::with_capacity(input.len() + input.len() / 2);
    let mut last = 0;
    for (offset, _) in boundaries(input) {
        spaced.push_str(&input[last..offset]);
        spaced.push(' ');
        last = offset;
    }
    spaced.push_str(&input[last..]);

    collapse_whitespace(&spaced)
}
