use serde::Serialize;

use crate::{
    parsing::{rope::Span, table::Alignment},
    style::{StyleAttrs, StyleKey},
};

/// What a rendered node presents.
///
/// Every text payload is already markup-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Heading {
        level: u8,
    },
    Paragraph,
    Blockquote {
        depth: u8,
    },
    ListItem {
        ordered: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        number: Option<u64>,
        depth: u8,
    },
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        content: String,
        terminated: bool,
    },
    Table {
        alignments: Vec<Alignment>,
    },
    TableRow {
        header: bool,
    },
    TableCell {
        alignment: Alignment,
    },
    Text {
        text: String,
    },
    Bold,
    Italic,
    CodeSpan {
        code: String,
    },
    Link {
        url: String,
    },
    /// Fallback for anything without a dedicated presentation.
    Literal {
        text: String,
    },
}

impl NodeKind {
    /// Block-level kinds start on their own line.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Heading { .. }
                | NodeKind::Paragraph
                | NodeKind::Blockquote { .. }
                | NodeKind::ListItem { .. }
                | NodeKind::CodeBlock { .. }
                | NodeKind::Table { .. }
        )
    }
}

/// A node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNode {
    pub kind: NodeKind,
    pub style_key: StyleKey,
    /// Attributes resolved from the style configuration for `style_key`.
    #[serde(skip_serializing_if = "StyleAttrs::is_empty")]
    pub style: StyleAttrs,
    /// Source span; set on block-level nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    pub fn new(kind: NodeKind, style_key: StyleKey, style: StyleAttrs) -> Self {
        Self {
            kind,
            style_key,
            style,
            span: None,
            children: vec![],
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_children(mut self, children: Vec<RenderedNode>) -> Self {
        self.children = children;
        self
    }

    /// Visible text of this node and its descendants, still escaped.
    pub fn plain_text(&self) -> String {
        let own = match &self.kind {
            NodeKind::Text { text } | NodeKind::Literal { text } => text.as_str(),
            NodeKind::CodeSpan { code } => code.as_str(),
            NodeKind::CodeBlock { content, .. } => content.as_str(),
            _ => "",
        };
        let mut out = own.to_string();
        for child in &self.children {
            out.push_str(&child.plain_text());
        }
        out
    }

    /// Pre-order walk with the depth of each node below `self`.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(usize, &'a RenderedNode)) {
        fn go<'a>(
            node: &'a RenderedNode,
            depth: usize,
            visit: &mut impl FnMut(usize, &'a RenderedNode),
        ) {
            visit(depth, node);
            for child in &node.children {
                go(child, depth + 1, visit);
            }
        }
        go(self, 0, visit);
    }
}
