use std::borrow::Cow;

/// Escapes characters with meaning in the output markup (`& < > " '`).
///
/// Runs before any marker matching, so neither raw tags nor attribute-breaking
/// quotes reach the rendered output. None of the escaped characters is an
/// inline marker, so matching is unaffected.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
