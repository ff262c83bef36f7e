//! # Rendering
//!
//! Maps [`Block`]s and their inline spans onto the [`RenderedNode`] tree,
//! resolving each node's style from the caller's [`StyleConfig`].
//!
//! The mapping is total: every block and span kind has a node kind, and
//! anything without a dedicated presentation becomes a `Literal` node.
//! Rendering is deterministic and reads nothing but its arguments.

pub mod html;
pub mod node;

pub use node::{NodeKind, RenderedNode};

use std::iter;

use crate::{
    parsing::{
        Block, BlockKind, InlineSpan,
        inline::{escape_markup, transform},
        table::{Alignment, TableBlock},
    },
    style::{StyleConfig, StyleKey},
};

/// Renders classified blocks into presentation nodes, in order.
pub fn render(blocks: &[Block], styles: &StyleConfig) -> Vec<RenderedNode> {
    let renderer = Renderer { styles };
    blocks.iter().map(|b| renderer.block(b)).collect()
}

struct Renderer<'a> {
    styles: &'a StyleConfig,
}

impl Renderer<'_> {
    fn node(&self, kind: NodeKind, key: StyleKey) -> RenderedNode {
        RenderedNode::new(kind, key, self.styles.resolve(key))
    }

    fn block(&self, block: &Block) -> RenderedNode {
        let node = match &block.kind {
            BlockKind::Heading { level, text } => match StyleKey::heading(*level) {
                Some(key) => self.node(NodeKind::Heading { level: *level }, key),
                None => {
                    tracing::debug!(
                        heading_level = *level,
                        "heading level has no style key, rendering literally"
                    );
                    return self.literal(text).with_span(block.span);
                }
            },
            BlockKind::Paragraph { .. } => self.node(NodeKind::Paragraph, StyleKey::Paragraph),
            BlockKind::Blockquote { depth, .. } => {
                self.node(NodeKind::Blockquote { depth: *depth }, StyleKey::Blockquote)
            }
            BlockKind::ListItem {
                ordered,
                number,
                depth,
                ..
            } => self.node(
                NodeKind::ListItem {
                    ordered: *ordered,
                    number: *number,
                    depth: *depth,
                },
                StyleKey::ListItem,
            ),
            BlockKind::CodeBlock {
                language,
                content,
                terminated,
            } => self.node(
                NodeKind::CodeBlock {
                    language: language.as_deref().map(|l| escape_markup(l).into_owned()),
                    content: escape_markup(content).into_owned(),
                    terminated: *terminated,
                },
                StyleKey::CodeBlock,
            ),
            BlockKind::Table(table) => self.table(table),
        };
        let node = match block.inline_text() {
            Some(text) => node.with_children(self.inline(text)),
            None => node,
        };
        node.with_span(block.span)
    }

    fn literal(&self, text: &str) -> RenderedNode {
        self.node(
            NodeKind::Literal {
                text: escape_markup(text).into_owned(),
            },
            StyleKey::Literal,
        )
    }

    fn inline(&self, text: &str) -> Vec<RenderedNode> {
        self.spans(&transform(text))
    }

    fn spans(&self, spans: &[InlineSpan]) -> Vec<RenderedNode> {
        spans.iter().map(|s| self.span(s)).collect()
    }

    fn span(&self, span: &InlineSpan) -> RenderedNode {
        match span {
            InlineSpan::Text(text) => self.node(NodeKind::Text { text: text.clone() }, StyleKey::Text),
            InlineSpan::Bold(children) => self
                .node(NodeKind::Bold, StyleKey::Bold)
                .with_children(self.spans(children)),
            InlineSpan::Italic(children) => self
                .node(NodeKind::Italic, StyleKey::Italic)
                .with_children(self.spans(children)),
            InlineSpan::Code(code) => {
                self.node(NodeKind::CodeSpan { code: code.clone() }, StyleKey::CodeSpan)
            }
            InlineSpan::Link { label, url } => self
                .node(NodeKind::Link { url: url.clone() }, StyleKey::Link)
                .with_children(self.spans(label)),
        }
    }

    fn table(&self, table: &TableBlock) -> RenderedNode {
        let header = self.row(&table.header, &table.alignments, true);
        let rows = table
            .rows
            .iter()
            .map(|row| self.row(row, &table.alignments, false));

        self.node(
            NodeKind::Table {
                alignments: table.alignments.clone(),
            },
            StyleKey::Table,
        )
        .with_children(iter::once(header).chain(rows).collect())
    }

    fn row(&self, cells: &[String], alignments: &[Alignment], header: bool) -> RenderedNode {
        let key = if header {
            StyleKey::TableHeader
        } else {
            StyleKey::TableCell
        };
        let cells = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let alignment = alignments.get(i).copied().unwrap_or_default();
                self.node(NodeKind::TableCell { alignment }, key)
                    .with_children(self.inline(cell))
            })
            .collect();

        self.node(NodeKind::TableRow { header }, StyleKey::TableRow)
            .with_children(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parsing::rope::Span, style::StyleAttrs};
    use pretty_assertions::assert_eq;

    fn block(kind: BlockKind) -> Block {
        Block::new(kind, Span::new(0, 1))
    }

    #[test]
    fn heading_gets_level_key_and_style() {
        let styles = StyleConfig::new().with(
            StyleKey::Heading2,
            StyleAttrs {
                color: Some("#123456".into()),
                ..Default::default()
            },
        );
        let nodes = render(
            &[block(BlockKind::Heading {
                level: 2,
                text: "Hi".into(),
            })],
            &styles,
        );

        assert_eq!(nodes[0].kind, NodeKind::Heading { level: 2 });
        assert_eq!(nodes[0].style_key, StyleKey::Heading2);
        assert_eq!(nodes[0].style.color.as_deref(), Some("#123456"));
        assert_eq!(nodes[0].span, Some(Span::new(0, 1)));
        assert_eq!(nodes[0].plain_text(), "Hi");
    }

    #[test]
    fn out_of_range_heading_falls_back_to_literal() {
        let nodes = render(
            &[block(BlockKind::Heading {
                level: 7,
                text: "<x>".into(),
            })],
            &StyleConfig::new(),
        );

        assert_eq!(
            nodes[0].kind,
            NodeKind::Literal {
                text: "&lt;x&gt;".into()
            }
        );
        assert_eq!(nodes[0].style_key, StyleKey::Literal);
        assert_eq!(nodes[0].span, Some(Span::new(0, 1)));
        assert!(nodes[0].children.is_empty());
    }

    #[test]
    fn code_block_content_is_escaped_not_parsed() {
        let nodes = render(
            &[block(BlockKind::CodeBlock {
                language: Some("html".into()),
                content: "<b>**x**</b>".into(),
                terminated: true,
            })],
            &StyleConfig::new(),
        );

        assert_eq!(
            nodes[0].kind,
            NodeKind::CodeBlock {
                language: Some("html".into()),
                content: "&lt;b&gt;**x**&lt;/b&gt;".into(),
                terminated: true,
            }
        );
        assert!(nodes[0].children.is_empty());
    }

    #[test]
    fn table_rows_and_cells() {
        let table = TableBlock {
            header: vec!["a".into(), "b".into()],
            alignments: vec![Alignment::Left, Alignment::Right],
            rows: vec![vec!["*1*".into(), "2".into()]],
        };
        let nodes = render(&[block(BlockKind::Table(table))], &StyleConfig::new());
        let rows = &nodes[0].children;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, NodeKind::TableRow { header: true });
        assert_eq!(rows[0].children[0].style_key, StyleKey::TableHeader);
        assert_eq!(rows[1].kind, NodeKind::TableRow { header: false });
        assert_eq!(
            rows[1].children[1].kind,
            NodeKind::TableCell {
                alignment: Alignment::Right
            }
        );
        assert_eq!(rows[1].children[0].children[0].kind, NodeKind::Italic);
    }

    #[test]
    fn unset_styles_resolve_to_defaults() {
        let nodes = render(
            &[block(BlockKind::Paragraph { text: "x".into() })],
            &StyleConfig::new(),
        );
        assert!(nodes[0].style.is_empty());
        assert!(nodes[0].children[0].style.is_empty());
    }
}
