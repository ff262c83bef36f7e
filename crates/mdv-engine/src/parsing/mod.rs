//! # Parsing
//!
//! Markdown source to [`Block`]s, and block text to [`InlineSpan`]s.
//!
//! - **`rope`**: line iteration with byte spans over an `xi_rope::Rope`
//! - **`blocks`**: line classifier and block builder state machine
//! - **`table`**: pipe table assembly
//! - **`inline`**: escape-first inline span resolution

pub mod blocks;
pub mod inline;
pub mod rope;
pub mod table;

use xi_rope::Rope;

pub use blocks::{Block, BlockKind};
pub use inline::{InlineSpan, transform};
pub use table::{Alignment, TableBlock};

use blocks::{BlockBuilder, MarkdownLineClassifier};
use rope::lines_with_spans;

/// Classifies a document into blocks, in source order.
///
/// Every input classifies; unterminated fences and ragged tables degrade
/// into blocks rather than errors.
pub fn classify(text: &str) -> Vec<Block> {
    let rope = Rope::from(text);
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(&rope) {
        builder.push(classifier.classify(&lr));
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<BlockKind> {
        classify(text).into_iter().map(|b| b.kind).collect()
    }

    fn para(text: &str) -> BlockKind {
        BlockKind::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(classify("").is_empty());
        assert!(classify("\n\n  \n").is_empty());
    }

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(
            kinds("# Title\nsome text\nmore text\n\nnext"),
            vec![
                BlockKind::Heading {
                    level: 1,
                    text: "Title".to_string()
                },
                para("some text\nmore text"),
                para("next"),
            ]
        );
    }

    #[test]
    fn four_hashes_is_paragraph() {
        assert_eq!(kinds("#### deep"), vec![para("#### deep")]);
    }

    #[test]
    fn opener_ends_paragraph() {
        assert_eq!(
            kinds("text\n> quoted\n- item"),
            vec![
                para("text"),
                BlockKind::Blockquote {
                    depth: 1,
                    text: "quoted".to_string()
                },
                BlockKind::ListItem {
                    ordered: false,
                    number: None,
                    depth: 0,
                    text: "item".to_string()
                },
            ]
        );
    }

    #[test]
    fn fence_swallows_markers() {
        assert_eq!(
            kinds("```rust\n# not a heading\n| a |\n```\nafter"),
            vec![
                BlockKind::CodeBlock {
                    language: Some("rust".to_string()),
                    content: "# not a heading\n| a |".to_string(),
                    terminated: true,
                },
                para("after"),
            ]
        );
    }

    #[test]
    fn unterminated_fence_takes_rest_of_input() {
        assert_eq!(
            kinds("```\ncode"),
            vec![BlockKind::CodeBlock {
                language: None,
                content: "code".to_string(),
                terminated: false,
            }]
        );
    }

    #[test]
    fn fence_preserves_blank_lines_and_indent() {
        let blocks = kinds("~~~\n  a\n\n  b\n~~~");
        assert_eq!(
            blocks,
            vec![BlockKind::CodeBlock {
                language: None,
                content: "  a\n\n  b".to_string(),
                terminated: true,
            }]
        );
    }

    #[test]
    fn table_run_ends_at_first_line_without_pipe() {
        let blocks = kinds("| a | b |\n|---|---|\n| 1 | 2 |\nplain");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            BlockKind::Table(t) => {
                assert_eq!(t.header, vec!["a", "b"]);
                assert_eq!(t.rows, vec![vec!["1".to_string(), "2".to_string()]]);
            }
            other => panic!("expected table, got {other:?}"),
        }
        assert_eq!(blocks[1], para("plain"));
    }

    #[test]
    fn table_without_border_pipes() {
        let blocks = kinds("a | b\n--|--\n1 | 2");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            BlockKind::Table(t) => {
                assert_eq!(t.header, vec!["a", "b"]);
                assert_eq!(t.rows, vec![vec!["1".to_string(), "2".to_string()]]);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn pipe_line_ends_paragraph() {
        let blocks = kinds("intro\nx | y");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], para("intro"));
        assert!(matches!(&blocks[1], BlockKind::Table(t) if t.header == vec!["x", "y"]));
    }

    #[test]
    fn blocks_keep_source_spans() {
        let blocks = classify("# a\n\nb\nc\n");
        assert_eq!(blocks[0].span, rope::span::Span::new(0, 4));
        assert_eq!(blocks[1].span, rope::span::Span::new(5, 9));
    }
}
