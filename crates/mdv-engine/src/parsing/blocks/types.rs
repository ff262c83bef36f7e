use crate::parsing::{rope::span::Span, table::TableBlock};

/// The kind of a top-level block, with the text it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// `#`, `##` or `###` heading.
    Heading { level: u8, text: String },
    /// A fenced code block (``` or ~~~). Content is verbatim and never
    /// scanned for inline markers.
    CodeBlock {
        language: Option<String>,
        content: String,
        /// `false` when the input ended before a closing fence.
        terminated: bool,
    },
    /// One quoted line; `depth` counts stacked `>` markers.
    Blockquote { depth: u8, text: String },
    /// One list item line.
    ListItem {
        ordered: bool,
        number: Option<u64>,
        depth: u8,
        text: String,
    },
    /// A run of pipe-delimited lines.
    Table(TableBlock),
    /// A paragraph block (default when no other block opener matches).
    Paragraph { text: String },
}

/// A classified block with the byte span of its source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub span: Span,
}

impl Block {
    pub fn new(kind: BlockKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The text the inline transformer runs over, if this block has one.
    ///
    /// Code blocks are raw zones and tables carry per-cell text, so both
    /// return `None`.
    pub fn inline_text(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Heading { text, .. }
            | BlockKind::Blockquote { text, .. }
            | BlockKind::ListItem { text, .. }
            | BlockKind::Paragraph { text } => Some(text),
            BlockKind::CodeBlock { .. } | BlockKind::Table(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(kind: BlockKind) -> Block {
        Block::new(kind, Span::new(0, 1))
    }

    #[test]
    fn textual_blocks_expose_inline_text() {
        let quote = block(BlockKind::Blockquote {
            depth: 2,
            text: "*q*".into(),
        });
        assert_eq!(quote.inline_text(), Some("*q*"));
    }

    #[test]
    fn code_and_tables_have_no_inline_text() {
        let code = block(BlockKind::CodeBlock {
            language: None,
            content: "**x**".into(),
            terminated: true,
        });
        assert_eq!(code.inline_text(), None);
        assert_eq!(block(BlockKind::Table(TableBlock::default())).inline_text(), None);
    }
}
