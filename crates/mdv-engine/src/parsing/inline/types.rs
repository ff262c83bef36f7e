/// A resolved inline span.
///
/// Text payloads are already markup-escaped. Emphasis and links nest; code
/// spans are opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// `**...**`
    Bold(Vec<InlineSpan>),
    /// `*...*`
    Italic(Vec<InlineSpan>),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    Code(String),
    /// `[label](url)`; the label is resolved for bold/italic.
    Link { label: Vec<InlineSpan>, url: String },
}

impl InlineSpan {
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text(s.into())
    }

    /// Concatenated visible text, without markers.
    pub fn plain_text(&self) -> String {
        match self {
            InlineSpan::Text(s) | InlineSpan::Code(s) => s.clone(),
            InlineSpan::Bold(children)
            | InlineSpan::Italic(children)
            | InlineSpan::Link {
                label: children, ..
            } => children.iter().map(InlineSpan::plain_text).collect(),
        }
    }
}
