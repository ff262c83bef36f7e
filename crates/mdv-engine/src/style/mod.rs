//! # Styles
//!
//! Caller-supplied presentation attributes, keyed by block and inline kind.
//!
//! - **`key`**: `StyleKey`, the enumerated set of recognised keys
//! - **`attrs`**: `StyleAttrs`, optional colour, border, spacing and font attributes
//! - **`config`**: `StyleConfig`, the key to attributes mapping with merge
//! - **`theme`**: `Theme` presets and their `Palette`s

pub mod attrs;
pub mod config;
pub mod key;
pub mod theme;

pub use attrs::StyleAttrs;
pub use config::StyleConfig;
pub use key::{StyleKey, UnknownStyleKey};
pub use theme::{Palette, Theme, UnknownTheme};
