use crate::parsing::{rope::span::Span, table};

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceSig, Paragraph},
    open::BlockOpen,
    types::{Block, BlockKind},
};

/// The builder's state between lines.
///
/// `None` is the default state; the other variants accumulate the lines of
/// a multi-line block until something ends it.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { span: Span, lines: Vec<String> },
    Fence {
        sig: FenceSig,
        span: Span,
        lines: Vec<String>,
    },
    Table { span: Span, lines: Vec<String> },
}

/// Line-driven state machine that turns [`LineClass`]es into [`Block`]s.
///
/// Matching priority per line: inside a fence everything is content until the
/// closing fence; inside a table run every line with a pipe is a row; otherwise
/// blank line (ends a paragraph), fence opener, heading, blockquote, list
/// item, any line with a pipe (opens a table run), and finally paragraph text.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if self.in_table() {
            if c.is_pipe {
                self.extend_table(c.line, c.text);
                return;
            }
            self.flush_table();
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(open) = c.open {
            self.flush_paragraph();
            self.open_leaf(open, c.line);
            return;
        }

        if c.is_pipe {
            self.flush_paragraph();
            self.leaf = LeafState::Table {
                span: c.line,
                lines: vec![c.text],
            };
            return;
        }

        self.extend_paragraph(c.line, c.text);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_paragraph();
        self.flush_table();
        self.flush_fence(false);
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn in_table(&self) -> bool {
        matches!(self.leaf, LeafState::Table { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen, line: Span) {
        let kind = match open {
            BlockOpen::FencedCode(sig) => {
                self.leaf = LeafState::Fence {
                    sig,
                    span: line,
                    lines: vec![],
                };
                return;
            }
            BlockOpen::Heading { level, text } => BlockKind::Heading { level, text },
            BlockOpen::BlockQuote { depth, text } => BlockKind::Blockquote { depth, text },
            BlockOpen::ListItem {
                ordered,
                number,
                depth,
                text,
            } => BlockKind::ListItem {
                ordered,
                number,
                depth,
                text,
            },
        };
        self.out.push(Block::new(kind, line));
    }

    fn consume_fence_line(&mut self, c: LineClass) {
        let closes = match &mut self.leaf {
            LeafState::Fence { sig, span, lines } => {
                *span = span.cover(c.line);
                let closes = CodeFence::closes(sig, c.fence_sig.as_ref());
                if !closes {
                    lines.push(c.text);
                }
                closes
            }
            _ => return,
        };

        if closes {
            self.flush_fence(true);
        }
    }

    fn extend_paragraph(&mut self, line: Span, text: String) {
        let text = text.trim().to_string();
        match &mut self.leaf {
            LeafState::Paragraph { span, lines } => {
                *span = span.cover(line);
                lines.push(text);
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    span: line,
                    lines: vec![text],
                };
            }
        }
    }

    fn extend_table(&mut self, line: Span, text: String) {
        if let LeafState::Table { span, lines } = &mut self.leaf {
            *span = span.cover(line);
            lines.push(text);
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { span, lines } = prev {
            self.out.push(Block::new(
                BlockKind::Paragraph {
                    text: Paragraph::join(&lines),
                },
                span,
            ));
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Table { span, lines } = prev {
            self.out
                .push(Block::new(BlockKind::Table(table::assemble(&lines)), span));
        } else {
            self.leaf = prev;
        }
    }

    fn flush_fence(&mut self, terminated: bool) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { sig, span, lines } = prev {
            if !terminated {
                // Unterminated fence: emit as code block anyway
                tracing::debug!(
                    start = span.start,
                    lines = lines.len(),
                    "code fence runs to end of input"
                );
            }
            self.out.push(Block::new(
                BlockKind::CodeBlock {
                    language: CodeFence::language(&sig),
                    content: lines.join("\n"),
                    terminated,
                },
                span,
            ));
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
