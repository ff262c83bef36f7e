use std::{fmt, str::FromStr};

use serde::Serialize;

/// A recognised style configuration key.
///
/// Every rendered node carries one; the configuration maps keys to
/// [`StyleAttrs`](super::StyleAttrs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKey {
    Body,
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Blockquote,
    ListItem,
    CodeBlock,
    CodeSpan,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    Text,
    Bold,
    Italic,
    Link,
    Literal,
}

impl StyleKey {
    pub const ALL: [StyleKey; 18] = [
        StyleKey::Body,
        StyleKey::Paragraph,
        StyleKey::Heading1,
        StyleKey::Heading2,
        StyleKey::Heading3,
        StyleKey::Blockquote,
        StyleKey::ListItem,
        StyleKey::CodeBlock,
        StyleKey::CodeSpan,
        StyleKey::Table,
        StyleKey::TableRow,
        StyleKey::TableHeader,
        StyleKey::TableCell,
        StyleKey::Text,
        StyleKey::Bold,
        StyleKey::Italic,
        StyleKey::Link,
        StyleKey::Literal,
    ];

    /// Key for a heading level; `None` outside 1..=3.
    pub fn heading(level: u8) -> Option<StyleKey> {
        match level {
            1 => Some(StyleKey::Heading1),
            2 => Some(StyleKey::Heading2),
            3 => Some(StyleKey::Heading3),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::Body => "body",
            StyleKey::Paragraph => "paragraph",
            StyleKey::Heading1 => "heading1",
            StyleKey::Heading2 => "heading2",
            StyleKey::Heading3 => "heading3",
            StyleKey::Blockquote => "blockquote",
            StyleKey::ListItem => "list_item",
            StyleKey::CodeBlock => "code_block",
            StyleKey::CodeSpan => "code_span",
            StyleKey::Table => "table",
            StyleKey::TableRow => "table_row",
            StyleKey::TableHeader => "table_header",
            StyleKey::TableCell => "table_cell",
            StyleKey::Text => "text",
            StyleKey::Bold => "bold",
            StyleKey::Italic => "italic",
            StyleKey::Link => "link",
            StyleKey::Literal => "literal",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style key `{0}`")]
pub struct UnknownStyleKey(pub String);

impl FromStr for StyleKey {
    type Err = UnknownStyleKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "code_inline" {
            return Ok(StyleKey::CodeSpan);
        }
        StyleKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| UnknownStyleKey(s.to_string()))
    }
}
