use crate::parsing::{
    rope::{lines::LineRef, span::Span},
    table::is_pipe_line,
};

use super::{
    kinds::{CodeFence, FenceSig},
    open::{BlockOpen, try_open_leaf},
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block classification: each line is classified
/// independently; the [`BlockBuilder`](super::BlockBuilder) decides what the
/// facts mean given its current state.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line text without the line ending.
    pub text: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// The block this line would open outside a fence or table run.
    pub open: Option<BlockOpen>,
    /// Whether the line contains a pipe, for table runs.
    pub is_pipe: bool,
}

/// Classifies individual lines for the block classification phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.content();

        LineClass {
            line: lr.span,
            text: text.to_string(),
            is_blank: text.trim().is_empty(),
            fence_sig: CodeFence::sig(text),
            open: try_open_leaf(text),
            is_pipe: is_pipe_line(text),
        }
    }
}
