//! Whitespace normalization

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Failed to compile whitespace pattern"))
}

/// Replace every run of whitespace with a single space and trim both ends
///
/// # Examples
/// ```
/// use wordcase::collapse_whitespace;
/// assert_eq!(collapse_whitespace("  hello \t\n world  "), "hello world");
/// assert_eq!(collapse_whitespace(""), "");
/// ```
pub fn collapse_whitespace(input: &str) -> String {
    whitespace_run().replace_all(input, " ").trim().to_string()
}

/// Delete all whitespace
///
/// # Examples
/// ```
/// use wordcase::whitespace::strip_whitespace;
/// assert_eq!(strip_whitespace(" Hello  World "), "HelloWorld");
/// ```
pub fn strip_whitespace(input: &str) -> String {
    whitespace_run().replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b"), "a b");
        assert_eq!(collapse_whitespace("\ta\r\n\u{00a0}b "), "a b");
        assert_eq!(collapse_whitespace("   "), "");
        assert_eq!(collapse_whitespace("single"), "single");
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let once = collapse_whitespace("  x   y\n\nz ");
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace("a b\tc\nd"), "abcd");
        assert_eq!(strip_whitespace(""), "");
        assert_eq!(strip_whitespace("   "), "");
    }
}
