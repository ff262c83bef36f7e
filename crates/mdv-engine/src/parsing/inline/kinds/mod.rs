//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `**` strong and `*` em markers
//! - **`Link`**: `[`, `]`, `(`, `)` and the unsafe URL scheme list
//! - **`Backslash`**: escapable punctuation
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod backslash;
pub mod code_span;
pub mod emphasis;
pub mod link;

pub use backslash::Backslash;
pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
