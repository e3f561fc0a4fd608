//! Locale-bound transformer and operation dispatch
//!
//! [`CaseTransformer`] carries the [`Locale`] explicitly so every operation
//! stays a pure function of its arguments. [`Operation`] names each transform
//! for dispatch and for error reporting.

use crate::case::{self, WordCase};
use crate::error::{Result, TransformError};
use crate::locale::Locale;
use crate::split;
use crate::whitespace;

/// A single text transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Split an identifier into words, optionally re-cased
    SplitIdentifierToWords(Option<WordCase>),
    TitleCase,
    SentenceCase,
    CollapseWhitespace,
    CamelCase,
    PascalCase,
}

impl Operation {
    /// Stable name used in [`TransformError::operation`]
    pub fn name(self) -> &'static str {
        match self {
            Operation::SplitIdentifierToWords(_) => "split_identifier_to_words",
            Operation::TitleCase => "to_title_case",
            Operation::SentenceCase => "to_sentence_case",
            Operation::CollapseWhitespace => "collapse_whitespace",
            Operation::CamelCase => "to_camel_case",
            Operation::PascalCase => "to_pascal_case",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::SplitIdentifierToWords(Some(mode)) => write!(f, "{}({})", self.name(), mode),
            _ => f.write_str(self.name()),
        }
    }
}

/// Case transformer bound to an explicit [`Locale`]
///
/// # Examples
/// ```
/// use wordcase::{CaseTransformer, Locale};
///
/// let ascii = CaseTransformer::new(Locale::Ascii);
/// assert_eq!(ascii.to_title_case("élan vital"), "élan Vital");
///
/// let invariant = CaseTransformer::default();
/// assert_eq!(invariant.to_title_case("élan vital"), "Élan Vital");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseTransformer {
    locale: Locale,
}

impl CaseTransformer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Split a Pascal/camel-case identifier into words.
    ///
    /// Segmentation is locale-independent; see [`split`](crate::split).
    pub fn split_identifier_to_words(&self, input: &str) -> String {
        split::split_identifier_to_words(input)
    }

    pub fn split_identifier_to_words_as(&self, input: &str, mode: WordCase) -> String {
        mode.apply(&split::split_identifier_to_words(input), self.locale)
    }

    /// Split, then re-case by mode name.
    ///
    /// An absent or unrecognized mode name leaves the split words as they are.
    pub fn split_identifier_to_words_named(&self, input: &str, mode: Option<&str>) -> String {
        match mode.map(str::parse::<WordCase>) {
            Some(Ok(mode)) => self.split_identifier_to_words_as(input, mode),
            Some(Err(e)) => {
                log::trace!("passing words through unchanged: {}", e);
                self.split_identifier_to_words(input)
            }
            None => self.split_identifier_to_words(input),
        }
    }

    pub fn to_title_case(&self, input: &str) -> String {
        case::title_case(input, self.locale)
    }

    pub fn to_sentence_case(&self, input: &str) -> String {
        case::sentence_case(input, self.locale)
    }

    pub fn collapse_whitespace(&self, input: &str) -> String {
        whitespace::collapse_whitespace(input)
    }

    pub fn to_camel_case(&self, input: &str) -> String {
        case::camel_case(input, self.locale)
    }

    pub fn to_pascal_case(&self, input: &str) -> String {
        case::pascal_case(input, self.locale)
    }

    /// Run `op` on `input`
    pub fn apply(&self, op: Operation, input: &str) -> String {
        log::trace!("{} ({:?}) on {} bytes", op, self.locale, input.len());
        match op {
            Operation::SplitIdentifierToWords(None) => self.split_identifier_to_words(input),
            Operation::SplitIdentifierToWords(Some(mode)) => {
                self.split_identifier_to_words_as(input, mode)
            }
            Operation::TitleCase => self.to_title_case(input),
            Operation::SentenceCase => self.to_sentence_case(input),
            Operation::CollapseWhitespace => self.collapse_whitespace(input),
            Operation::CamelCase => self.to_camel_case(input),
            Operation::PascalCase => self.to_pascal_case(input),
        }
    }

    /// Run `op` on input that may be absent
    ///
    /// `None` fails with a [`TransformError`] naming `op`.
    pub fn try_apply(&self, op: Operation, input: Option<&str>) -> Result<String> {
        let input = input.ok_or_else(|| TransformError::missing_input(op.name()))?;
        Ok(self.apply(op, input))
    }

    /// Run `op` on raw bytes
    ///
    /// Bytes that are not valid UTF-8 fail with a [`TransformError`] naming
    /// `op` and carrying the decoding error.
    ///
    /// # Examples
    /// ```
    /// use wordcase::{CaseTransformer, Operation};
    ///
    /// let t = CaseTransformer::default();
    /// assert_eq!(t.try_apply_bytes(Operation::PascalCase, b"hello world").unwrap(), "HelloWorld");
    ///
    /// let err = t.try_apply_bytes(Operation::PascalCase, &[0x68, 0xff]).unwrap_err();
    /// assert_eq!(err.operation, "to_pascal_case");
    /// ```
    pub fn try_apply_bytes(&self, op: Operation, input: &[u8]) -> Result<String> {
        let input = std::str::from_utf8(input).map_err(|e| TransformError::from((op.name(), e)))?;
        Ok(self.apply(op, input))
    }
}

/// Case conversions as methods on `str`, using [`Locale::Invariant`]
///
/// # Examples
/// ```
/// use wordcase::{CaseExt, WordCase};
/// assert_eq!("OrderShipped".to_words_as(WordCase::Sentence), "Order shipped");
/// assert_eq!("order shipped".to_camel_case(), "orderShipped");
/// ```
pub trait CaseExt {
    fn to_words(&self) -> String;
    fn to_words_as(&self, mode: WordCase) -> String;
    fn to_title_case(&self) -> String;
    fn to_sentence_case(&self) -> String;
    fn collapse_whitespace(&self) -> String;
    fn to_camel_case(&self) -> String;
    fn to_pascal_case(&self) -> String;
}

impl CaseExt for str {
    fn to_words(&self) -> String {
        split::split_identifier_to_words(self)
    }

    fn to_words_as(&self, mode: WordCase) -> String {
        case::split_identifier_to_words_as(self, mode)
    }

    fn to_title_case(&self) -> String {
        case::to_title_case(self)
    }

    fn to_sentence_case(&self) -> String {
        case::to_sentence_case(self)
    }

    fn collapse_whitespace(&self) -> String {
        whitespace::collapse_whitespace(self)
    }

    fn to_camel_case(&self) -> String {
        case::to_camel_case(self)
    }

    fn to_pascal_case(&self) -> String {
        case::to_pascal_case(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatches_every_operation() {
        let t = CaseTransformer::default();
        assert_eq!(
            t.apply(Operation::SplitIdentifierToWords(None), "OrderShipped"),
            "Order Shipped"
        );
        assert_eq!(
            t.apply(Operation::SplitIdentifierToWords(Some(WordCase::AllLower)), "OrderShipped"),
            "order shipped"
        );
        assert_eq!(t.apply(Operation::TitleCase, "order shipped"), "Order Shipped");
        assert_eq!(t.apply(Operation::SentenceCase, "ORDER SHIPPED"), "Order shipped");
        assert_eq!(t.apply(Operation::CollapseWhitespace, " a   b "), "a b");
        assert_eq!(t.apply(Operation::CamelCase, "order shipped"), "orderShipped");
        assert_eq!(t.apply(Operation::PascalCase, "order shipped"), "OrderShipped");
    }

    #[test]
    fn test_try_apply_missing_input() {
        let t = CaseTransformer::default();
        let err = t.try_apply(Operation::TitleCase, None).unwrap_err();
        assert_eq!(err.operation, "to_title_case");
        assert_eq!(err.to_string(), "to_title_case failed: input is null");
    }

    #[test]
    fn test_try_apply_present_input() {
        let t = CaseTransformer::default();
        assert_eq!(t.try_apply(Operation::CamelCase, Some("")).unwrap(), "");
        assert_eq!(t.try_apply(Operation::PascalCase, Some("a b")).unwrap(), "AB");
    }

    #[test]
    fn test_try_apply_bytes_invalid_utf8() {
        let t = CaseTransformer::default();
        let err = t
            .try_apply_bytes(Operation::SplitIdentifierToWords(Some(WordCase::Title)), &[0xc3])
            .unwrap_err();
        assert_eq!(err.operation, "split_identifier_to_words");
        assert!(!err.cause.is_empty());
    }

    #[test]
    fn test_named_mode_passes_unknown_through() {
        let t = CaseTransformer::default();
        assert_eq!(
            t.split_identifier_to_words_named("OrderShipped", Some("upper")),
            "ORDER SHIPPED"
        );
        assert_eq!(
            t.split_identifier_to_words_named("OrderShipped", Some("bogus")),
            "Order Shipped"
        );
        assert_eq!(t.split_identifier_to_words_named("OrderShipped", None), "Order Shipped");
    }

    #[test]
    fn test_ascii_locale_flows_through_every_recasing() {
        let t = CaseTransformer::new(Locale::Ascii);
        assert_eq!(t.locale(), Locale::Ascii);
        assert_eq!(t.to_sentence_case("ÉCOLE"), "École");
        assert_eq!(t.to_pascal_case("straße ende"), "StraßeEnde");
        assert_eq!(
            t.split_identifier_to_words_as("StraßeEnde", WordCase::AllUpper),
            "STRA ßE ENDE"
        );
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::CamelCase.to_string(), "to_camel_case");
        assert_eq!(
            Operation::SplitIdentifierToWords(Some(WordCase::Title)).to_string(),
            "split_identifier_to_words(title)"
        );
    }

    #[test]
    fn test_case_ext_matches_free_functions() {
        assert_eq!("HTTPServerError".to_words(), "HTTP Server Error");
        assert_eq!("HELLO world".to_title_case(), "Hello World");
        assert_eq!("HELLO world".to_sentence_case(), "Hello world");
        assert_eq!(" a \t b ".collapse_whitespace(), "a b");
        assert_eq!("hello world".to_pascal_case(), "HelloWorld");
    }
}
