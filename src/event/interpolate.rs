//! `{field}` template interpolation.

/// Replaces every `{name}` placeholder in `template` using `lookup`.
///
/// A placeholder is `{`, followed by a non-empty run of characters that
/// contains neither `{` nor `}`, followed by `}`. Anything else, including
/// `{}` and unbalanced braces, is copied through as literal text.
/// Placeholders for which `lookup` returns `None` are replaced with the
/// empty string.
///
/// # Example
///
/// ```
/// use slack_relay::event::interpolate;
///
/// let text = interpolate("{level}: {message}{missing}", |key| match key {
///     "level" => Some("WARN".to_string()),
///     "message" => Some("disk full".to_string()),
///     _ => None,
/// });
/// assert_eq!(text, "WARN: disk full");
/// ```
pub fn interpolate<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match placeholder_len(after_open) {
            Some(len) => {
                if let Some(value) = lookup(&after_open[..len]) {
                    out.push_str(&value);
                }
                // Skip the key and its closing brace
                rest = &after_open[len + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the key length if `s` starts with `key}`.
fn placeholder_len(s: &str) -> Option<usize> {
    let end = s.find(['{', '}'])?;
    (end > 0 && s[end..].starts_with('}')).then_some(end)
}
