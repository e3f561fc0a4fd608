//! Title, sentence, camel and Pascal case conversion
//!
//! The public functions use [`Locale::Invariant`]. The locale-parameterized
//! versions are reached through [`CaseTransformer`](crate::CaseTransformer).

use crate::error::TransformError;
use crate::locale::Locale;
use crate::split;
use crate::whitespace::strip_whitespace;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display case applied after splitting an identifier into words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCase {
    /// `http server error`
    AllLower,
    /// `HTTP SERVER ERROR`
    AllUpper,
    /// `Http Server Error`
    Title,
    /// `Http server error`
    Sentence,
}

impl WordCase {
    pub fn name(self) -> &'static str {
        match self {
            WordCase::AllLower => "all_lower",
            WordCase::AllUpper => "all_upper",
            WordCase::Title => "title",
            WordCase::Sentence => "sentence",
        }
    }

    pub(crate) fn apply(self, words: &str, locale: Locale) -> String {
        match self {
            WordCase::AllLower => locale.lowercase(words),
            WordCase::AllUpper => locale.uppercase(words),
            WordCase::Title => title_case(words, locale),
            WordCase::Sentence => sentence_case(words, locale),
        }
    }
}

impl std::fmt::Display for WordCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WordCase {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all_lower" | "alllower" | "lower" => Ok(WordCase::AllLower),
            "all_upper" | "allupper" | "upper" => Ok(WordCase::AllUpper),
            "title" => Ok(WordCase::Title),
            "sentence" => Ok(WordCase::Sentence),
            _ => Err(TransformError::new(
                "parse_word_case",
                format!("unknown word case `{}`", s),
            )),
        }
    }
}

pub(crate) fn title_case(input: &str, locale: Locale) -> String {
    capitalize_words(input, locale, true)
}

// Lowercase `input`, then uppercase the first letter of each
// whitespace-delimited word. Non-letters ahead of that letter (quotes,
// brackets, digits) are copied through. With `first_word` false the first
// word keeps its letter lowercase.
fn capitalize_words(input: &str, locale: Locale, first_word: bool) -> String {
    let lowered = locale.lowercase(input);
    let mut out = String::with_capacity(lowered.len());
    let mut capitalize_next = first_word;
    let mut seen_text = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            capitalize_next |= seen_text;
            out.push(c);
            continue;
        }
        seen_text = true;
        if c.is_alphabetic() && std::mem::take(&mut capitalize_next) {
            locale.push_upper(&mut out, c);
        } else {
            out.push(c);
        }
    }
    out
}

pub(crate) fn sentence_case(input: &str, locale: Locale) -> String {
    let lowered = locale.lowercase(input);
    let sentence = lowered.trim_start();
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) if !chars.as_str().is_empty() => {
            let mut out = String::with_capacity(sentence.len());
            locale.push_upper(&mut out, first);
            out.push_str(chars.as_str());
            out
        }
        _ => locale.uppercase(sentence),
    }
}

pub(crate) fn camel_case(input: &str, locale: Locale) -> String {
    strip_whitespace(&capitalize_words(input, locale, false))
}

pub(crate) fn pascal_case(input: &str, locale: Locale) -> String {
    strip_whitespace(&title_case(input, locale))
}

/// Lowercase everything, then capitalize the first letter of each
/// whitespace-delimited word
///
/// Whitespace is copied through as-is. Punctuation does not start a new word;
/// leading punctuation or digits are skipped to reach the word's first letter.
///
/// # Examples
/// ```
/// use wordcase::to_title_case;
/// assert_eq!(to_title_case("hello world"), "Hello World");
/// assert_eq!(to_title_case("HELLO WORLD"), "Hello World");
/// assert_eq!(to_title_case("rock-n-roll"), "Rock-n-roll");
/// assert_eq!(to_title_case("(hello) there"), "(Hello) There");
/// ```
pub fn to_title_case(input: &str) -> String {
    title_case(input, Locale::Invariant)
}

/// Lowercase everything, drop leading whitespace, capitalize the first character
///
/// # Examples
/// ```
/// use wordcase::to_sentence_case;
/// assert_eq!(to_sentence_case("hello world"), "Hello world");
/// assert_eq!(to_sentence_case("  SHOUTING"), "Shouting");
/// assert_eq!(to_sentence_case("a"), "A");
/// assert_eq!(to_sentence_case(""), "");
/// ```
pub fn to_sentence_case(input: &str) -> String {
    sentence_case(input, Locale::Invariant)
}

/// Title-case every word but the first, then remove all whitespace
///
/// The first word's first letter stays lowercase, so a letter that expands
/// when uppercased (`ß`) is never split.
///
/// # Examples
/// ```
/// use wordcase::to_camel_case;
/// assert_eq!(to_camel_case("Two Words"), "twoWords");
/// assert_eq!(to_camel_case("hello big world"), "helloBigWorld");
/// assert_eq!(to_camel_case("ßa b"), "ßaB");
/// ```
pub fn to_camel_case(input: &str) -> String {
    camel_case(input, Locale::Invariant)
}

/// Title-case, then remove all whitespace
///
/// # Examples
/// ```
/// use wordcase::to_pascal_case;
/// assert_eq!(to_pascal_case("hello world"), "HelloWorld");
/// ```
pub fn to_pascal_case(input: &str) -> String {
    pascal_case(input, Locale::Invariant)
}

/// Split an identifier into words and re-case them
///
/// # Examples
/// ```
/// use wordcase::{split_identifier_to_words_as, WordCase};
/// assert_eq!(
///     split_identifier_to_words_as("myVariable2Name", WordCase::AllUpper),
///     "MY VARIABLE 2 NAME"
/// );
/// assert_eq!(
///     split_identifier_to_words_as("HTTPServerError", WordCase::Sentence),
///     "Http server error"
/// );
/// ```
pub fn split_identifier_to_words_as(input: &str, mode: WordCase) -> String {
    mode.apply(&split::split_identifier_to_words(input), Locale::Invariant)
}
