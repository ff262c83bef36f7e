/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Inline transformation is applied
/// to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Joins accumulated paragraph lines.
    pub const LINE_SEPARATOR: &'static str = "\n";

    pub fn join(lines: &[String]) -> String {
        lines.join(Self::LINE_SEPARATOR)
    }
}
