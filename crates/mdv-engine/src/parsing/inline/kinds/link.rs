/// Inline link `[label](url)` delimiters and URL policy.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: char = '[';
    pub const LABEL_CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';

    /// Schemes that would execute or embed content when followed.
    pub const UNSAFE_SCHEMES: [&'static str; 3] = ["javascript:", "vbscript:", "data:"];

    /// Leading URL tokens inspected for a scheme; longer than any unsafe one.
    pub const SCHEME_WINDOW: usize = 16;

    pub fn is_safe_url(url: &str) -> bool {
        let url = url.trim().to_ascii_lowercase();
        !Self::UNSAFE_SCHEMES
            .iter()
            .any(|scheme| url.starts_with(scheme))
    }
}
