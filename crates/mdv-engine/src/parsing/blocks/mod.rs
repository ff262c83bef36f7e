//! # Block Classification
//!
//! Two-phase, line-driven block classification.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a `LineClass`
//!    containing local facts (blank status, fence signature, block opener, pipe shape)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    (default, paragraph, code fence, table run) emits `Block`s in source order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, BlockQuote,
//!   ListMarker, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for single-line block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Output order equals source order
//! - Fenced code blocks are raw zones: no block/inline classification inside
//! - Only table rows and code fence lines are grouped; every other opener is one line
//! - All blocks store the byte span of their source lines

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, BlockKind};
