//! Tests for `{field}` interpolation.

use super::interpolate;

fn lookup(key: &str) -> Option<String> {
    match key {
        "message" => Some("disk full".to_string()),
        "host" => Some("db1".to_string()),
        "empty" => Some(String::new()),
        _ => None,
    }
}

mod placeholders {
    use super::*;

    #[test]
    fn replaces_single_placeholder() {
        assert_eq!(interpolate("{message}", lookup), "disk full");
    }

    #[test]
    fn replaces_multiple_placeholders_and_keeps_literals() {
        assert_eq!(
            interpolate("[{host}] alert: {message}!", lookup),
            "[db1] alert: disk full!"
        );
    }

    #[test]
    fn repeated_placeholder_resolves_each_time() {
        assert_eq!(interpolate("{host}/{host}", lookup), "db1/db1");
    }

    #[test]
    fn missing_field_becomes_empty_string() {
        assert_eq!(interpolate("a{nope}b", lookup), "ab");
    }

    #[test]
    fn present_but_empty_value_becomes_empty_string() {
        assert_eq!(interpolate("<{empty}>", lookup), "<>");
    }

    #[test]
    fn placeholder_key_is_passed_verbatim() {
        let text = interpolate("{[host][name]}", |key| Some(key.to_uppercase()));
        assert_eq!(text, "[HOST][NAME]");
    }
}

mod literals {
    use super::*;

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(interpolate("plain text", lookup), "plain text");
    }

    #[test]
    fn empty_template_yields_empty_string() {
        assert_eq!(interpolate("", lookup), "");
    }

    #[test]
    fn empty_braces_are_literal() {
        assert_eq!(interpolate("json: {}", lookup), "json: {}");
    }

    #[test]
    fn unclosed_brace_is_literal() {
        assert_eq!(interpolate("oops {message", lookup), "oops {message");
    }

    #[test]
    fn stray_closing_brace_is_literal() {
        assert_eq!(interpolate("a } b", lookup), "a } b");
    }

    #[test]
    fn doubled_braces_keep_outer_pair() {
        assert_eq!(interpolate("{{message}}", lookup), "{disk full}");
    }

    #[test]
    fn multibyte_text_around_placeholders_is_preserved() {
        assert_eq!(interpolate("⚠ {message} ✓", lookup), "⚠ disk full ✓");
    }
}
