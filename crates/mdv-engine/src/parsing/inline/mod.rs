//! # Inline Parsing
//!
//! Cursor-based inline span resolution with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, blockquote and list item
//! text, table cells). Code block content never reaches it.
//!
//! Text is markup-escaped first. A cursor then splits it into tokens with
//! "raw zones" resolved:
//! - Code spans suppress all other inline parsing inside them
//! - Backslash escapes turn a marker into a literal character
//!
//! Bold, italic and link passes fold the remaining characters into a tree.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` tree (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: inline types with owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`escape`**: markup escaping
//! - **`token`**: raw-zone tokenizer
//! - **`parser`**: `transform()` entry point with the ordered passes

pub mod cursor;
pub mod escape;
pub mod kinds;
pub mod parser;
mod token;
pub mod types;

pub use escape::escape_markup;
pub use parser::transform;
pub use types::InlineSpan;
