//! MiniJinja filters for case conversion
//!
//! Lets templates render identifiers as labels:
//!
//! ```text
//! {{ "OrderShipped" | words }}              -> Order Shipped
//! {{ "OrderShipped" | words("sentence") }}  -> Order shipped
//! {{ "order shipped" | camel_case }}        -> orderShipped
//! ```

use crate::transform::CaseTransformer;
use minijinja::Environment;

/// Register all case filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("words", words);
    env.add_filter("title_case", title_case);
    env.add_filter("sentence_case", sentence_case);
    env.add_filter("collapse_whitespace", collapse_whitespace);
    env.add_filter("camel_case", camel_case);
    env.add_filter("pascal_case", pascal_case);
}

// An unknown mode name leaves the words as split
fn words(value: &str, mode: Option<String>) -> String {
    CaseTransformer::default().split_identifier_to_words_named(value, mode.as_deref())
}

fn title_case(value: &str) -> String {
    crate::to_title_case(value)
}

fn sentence_case(value: &str) -> String {
    crate::to_sentence_case(value)
}

fn collapse_whitespace(value: &str) -> String {
    crate::collapse_whitespace(value)
}

fn camel_case(value: &str) -> String {
    crate::to_camel_case(value)
}

fn pascal_case(value: &str) -> String {
    crate::to_pascal_case(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn render(source: &str) -> String {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.render_str(source, context! { name => "HTTPServerError" })
            .unwrap()
    }

    #[test]
    fn test_words_filter() {
        assert_eq!(render("{{ name | words }}"), "HTTP Server Error");
        assert_eq!(render("{{ name | words('all_lower') }}"), "http server error");
        assert_eq!(render("{{ name | words('nope') }}"), "HTTP Server Error");
    }

    #[test]
    fn test_case_filters() {
        assert_eq!(render("{{ 'hello world' | title_case }}"), "Hello World");
        assert_eq!(render("{{ 'HELLO world' | sentence_case }}"), "Hello world");
        assert_eq!(render("{{ '  a   b ' | collapse_whitespace }}"), "a b");
        assert_eq!(render("{{ 'two words' | camel_case }}"), "twoWords");
        assert_eq!(render("{{ 'two words' | pascal_case }}"), "TwoWords");
    }
}
