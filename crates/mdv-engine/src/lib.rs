//! # mdv-engine
//!
//! Markdown source text to a styled presentation tree.
//!
//! ```text
//! text ──▶ parsing::classify ──▶ [Block] ──▶ render::render ──▶ [RenderedNode]
//!                 │                               │
//!          table::assemble                inline::transform
//! ```
//!
//! Every input string renders; there is no error path.

pub mod parsing;
pub mod render;
pub mod style;

pub use parsing::{Alignment, Block, BlockKind, InlineSpan, classify, transform};
pub use render::{NodeKind, RenderedNode, html::to_html, render};
pub use style::{StyleAttrs, StyleConfig, StyleKey, Theme};

/// Classifies and renders a document in one pass.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn render_markdown(text: &str, styles: &StyleConfig) -> Vec<RenderedNode> {
    let blocks = classify(text);
    tracing::trace!(blocks = blocks.len(), "classified");
    render(&blocks, styles)
}
