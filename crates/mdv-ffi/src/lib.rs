//! UniFFI bindings for the mdv mobile app
//!
//! The native preview screen asks the engine for either a flat node list
//! (drawn with native views) or an HTML fragment (shown in a web view).

use mdv_config::Config;
use mdv_engine::{
    Alignment, NodeKind, RenderedNode, StyleAttrs, StyleConfig, Theme, render_markdown, to_html,
};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid style configuration: {reason}")]
    InvalidConfig { reason: String },
}

fn styles_for(dark_mode: bool) -> StyleConfig {
    StyleConfig::for_theme(if dark_mode { Theme::Dark } else { Theme::Light })
}

fn parse_config(config_toml: &str) -> Result<Config, FfiError> {
    Config::from_toml_str(config_toml).map_err(|e| FfiError::InvalidConfig {
        reason: e.to_string(),
    })
}

// ============ Preview Handle ============

/// A live preview: the current document text and its styles.
///
/// Mobile apps keep one per open document and push edits into it.
#[derive(uniffi::Object)]
pub struct PreviewHandle {
    inner: Mutex<PreviewState>,
}

struct PreviewState {
    content: String,
    styles: StyleConfig,
}

#[uniffi::export]
impl PreviewHandle {
    #[uniffi::constructor]
    pub fn new(content: String, dark_mode: bool) -> Self {
        Self {
            inner: Mutex::new(PreviewState {
                content,
                styles: styles_for(dark_mode),
            }),
        }
    }

    /// Create a preview styled from a config file's TOML text.
    #[uniffi::constructor]
    pub fn with_config(content: String, config_toml: String) -> Result<Self, FfiError> {
        let config = parse_config(&config_toml)?;
        Ok(Self {
            inner: Mutex::new(PreviewState {
                content,
                styles: config.style_config(),
            }),
        })
    }

    pub fn set_content(&self, content: String) {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.content = content;
    }

    pub fn set_dark_mode(&self, dark_mode: bool) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.styles = styles_for(dark_mode);
    }

    pub fn get_text(&self) -> String {
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.content.clone()
    }

    pub fn get_nodes(&self) -> Vec<RenderedNodeDto> {
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        flatten(&render_markdown(&state.content, &state.styles))
    }

    pub fn get_html(&self) -> String {
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        to_html(&render_markdown(&state.content, &state.styles))
    }
}

// ============ DTOs ============

/// One node of the rendered tree, flattened in pre-order.
///
/// `depth` is 0 for block nodes; a node's children follow it with
/// `depth + 1`.
#[derive(uniffi::Record, Debug, Clone, PartialEq)]
pub struct RenderedNodeDto {
    pub depth: u32,
    /// Node type (e.g., "heading", "text", "table_cell")
    pub kind: String,
    /// Style configuration key (e.g., "heading1", "code_span")
    pub style_key: String,
    /// Displayable text with entities decoded, for text-bearing nodes
    pub text: Option<String>,
    /// Heading level (1-3) if this is a heading, 0 otherwise
    pub heading_level: u8,
    /// Quote or list nesting depth
    pub nesting: u8,
    pub ordered: bool,
    /// First number of an ordered list item
    pub number: Option<u64>,
    pub language: Option<String>,
    pub terminated: bool,
    pub url: Option<String>,
    pub header: bool,
    /// "left", "center", "right"; None when unaligned
    pub alignment: Option<String>,
    pub style: StyleDto,
}

/// Resolved style attributes; lengths in logical pixels.
#[derive(uniffi::Record, Debug, Clone, Default, PartialEq)]
pub struct StyleDto {
    pub color: Option<String>,
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub border_bottom_width: Option<f32>,
    pub border_left_width: Option<f32>,
    pub border_radius: Option<f32>,
    pub padding: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
    pub text_decoration: Option<String>,
}

impl StyleDto {
    fn from_engine(attrs: &StyleAttrs) -> Self {
        let attrs = attrs.clone();
        Self {
            color: attrs.color,
            background: attrs.background,
            border_color: attrs.border_color,
            border_bottom_width: attrs.border_bottom_width,
            border_left_width: attrs.border_left_width,
            border_radius: attrs.border_radius,
            padding: attrs.padding,
            padding_bottom: attrs.padding_bottom,
            margin_top: attrs.margin_top,
            margin_bottom: attrs.margin_bottom,
            font_family: attrs.font_family,
            font_size: attrs.font_size,
            font_weight: attrs.font_weight,
            font_style: attrs.font_style,
            text_decoration: attrs.text_decoration,
        }
    }
}

impl RenderedNodeDto {
    fn from_engine(depth: usize, node: &RenderedNode) -> Self {
        let decode = |s: &str| html_escape::decode_html_entities(s).into_owned();
        let mut dto = Self {
            depth: u32::try_from(depth).unwrap_or(u32::MAX),
            kind: kind_name(&node.kind).to_string(),
            style_key: node.style_key.to_string(),
            text: None,
            heading_level: 0,
            nesting: 0,
            ordered: false,
            number: None,
            language: None,
            terminated: true,
            url: None,
            header: false,
            alignment: None,
            style: StyleDto::from_engine(&node.style),
        };

        match &node.kind {
            NodeKind::Heading { level } => dto.heading_level = *level,
            NodeKind::Blockquote { depth } => dto.nesting = *depth,
            NodeKind::ListItem {
                ordered,
                number,
                depth,
            } => {
                dto.ordered = *ordered;
                dto.number = *number;
                dto.nesting = *depth;
            }
            NodeKind::CodeBlock {
                language,
                content,
                terminated,
            } => {
                dto.language = language.as_deref().map(decode);
                dto.text = Some(decode(content));
                dto.terminated = *terminated;
            }
            NodeKind::TableRow { header } => dto.header = *header,
            NodeKind::TableCell { alignment } => {
                dto.alignment = alignment_name(*alignment).map(str::to_string);
            }
            NodeKind::Text { text } | NodeKind::Literal { text } => dto.text = Some(decode(text)),
            NodeKind::CodeSpan { code } => dto.text = Some(decode(code)),
            NodeKind::Link { url } => dto.url = Some(decode(url)),
            NodeKind::Paragraph | NodeKind::Table { .. } | NodeKind::Bold | NodeKind::Italic => {}
        }
        dto
    }
}

fn kind_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Heading { .. } => "heading",
        NodeKind::Paragraph => "paragraph",
        NodeKind::Blockquote { .. } => "blockquote",
        NodeKind::ListItem { .. } => "list_item",
        NodeKind::CodeBlock { .. } => "code_block",
        NodeKind::Table { .. } => "table",
        NodeKind::TableRow { .. } => "table_row",
        NodeKind::TableCell { .. } => "table_cell",
        NodeKind::Text { .. } => "text",
        NodeKind::Bold => "bold",
        NodeKind::Italic => "italic",
        NodeKind::CodeSpan { .. } => "code_span",
        NodeKind::Link { .. } => "link",
        NodeKind::Literal { .. } => "literal",
    }
}

fn alignment_name(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::None => None,
        Alignment::Left => Some("left"),
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
    }
}

fn flatten(nodes: &[RenderedNode]) -> Vec<RenderedNodeDto> {
    let mut out = vec![];
    for node in nodes {
        node.walk(&mut |depth: usize, n: &RenderedNode| {
            out.push(RenderedNodeDto::from_engine(depth, n));
        });
    }
    out
}

// ============ Standalone Functions ============

/// Render markdown into a flat, pre-order node list with a built-in theme.
#[uniffi::export]
pub fn render_nodes(content: String, dark_mode: bool) -> Vec<RenderedNodeDto> {
    flatten(&render_markdown(&content, &styles_for(dark_mode)))
}

/// Render markdown into an HTML fragment with a built-in theme.
#[uniffi::export]
pub fn render_html(content: String, dark_mode: bool) -> String {
    to_html(&render_markdown(&content, &styles_for(dark_mode)))
}

/// Render markdown into an HTML fragment styled by config TOML
/// (`theme = "light"` plus `[styles.<key>]` tables).
#[uniffi::export]
pub fn render_html_with_config(content: String, config_toml: String) -> Result<String, FfiError> {
    let styles = parse_config(&config_toml)?.style_config();
    Ok(to_html(&render_markdown(&content, &styles)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_nodes_pre_order() {
        let nodes = render_nodes("# Hi **there**".to_string(), true);
        let shape: Vec<(u32, &str)> = nodes.iter().map(|n| (n.depth, n.kind.as_str())).collect();

        assert_eq!(
            shape,
            vec![(0, "heading"), (1, "text"), (1, "bold"), (2, "text")]
        );
        assert_eq!(nodes[0].heading_level, 1);
        assert_eq!(nodes[0].style_key, "heading1");
        assert_eq!(nodes[0].style.color.as_deref(), Some("#007acc"));
        assert_eq!(nodes[3].text.as_deref(), Some("there"));
    }

    #[test]
    fn test_text_is_decoded_for_native_views() {
        let nodes = render_nodes("a < b & c".to_string(), false);
        assert_eq!(nodes[1].text.as_deref(), Some("a < b & c"));
    }

    #[test]
    fn test_code_block_and_table_fields() {
        let content = "```rust\nfn a() {}\n\n| a | b |\n|--:|---|\n| 1 | 2 |";
        let nodes = render_nodes(content.to_string(), true);

        let code = &nodes[0];
        assert_eq!(code.kind, "code_block");
        assert_eq!(code.language.as_deref(), Some("rust"));
        assert!(!code.terminated);
        // The table is inside the unterminated fence
        assert_eq!(nodes.len(), 1);
        assert!(code.text.as_deref().unwrap_or_default().contains("| 1 | 2 |"));

        let nodes = render_nodes("| a | b |\n|--:|---|\n| 1 | 2 |".to_string(), true);
        let cells: Vec<_> = nodes.iter().filter(|n| n.kind == "table_cell").collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].alignment.as_deref(), Some("right"));
        assert_eq!(cells[1].alignment, None);
        assert!(nodes.iter().any(|n| n.kind == "table_row" && n.header));
    }

    #[test]
    fn test_list_item_fields() {
        let nodes = render_nodes("5. five\n  - sub".to_string(), true);
        let items: Vec<_> = nodes.iter().filter(|n| n.kind == "list_item").collect();

        assert!(items[0].ordered);
        assert_eq!(items[0].number, Some(5));
        assert!(!items[1].ordered);
        assert_eq!(items[1].nesting, 1);
    }

    #[test]
    fn test_render_html_escapes_markup() {
        let html = render_html("<script>x</script>".to_string(), true);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_html_with_config_overrides() {
        let html = render_html_with_config(
            "# Title".to_string(),
            "theme = \"light\"\n[styles.heading1]\ncolor = \"#ff8800\"\n".to_string(),
        )
        .unwrap();
        assert!(html.contains("color:#ff8800"));
        assert!(html.starts_with("<h1 style="));
    }

    #[test]
    fn test_render_html_with_invalid_config() {
        let result = render_html_with_config("x".to_string(), "theme = [".to_string());
        assert!(matches!(result, Err(FfiError::InvalidConfig { .. })));
    }

    #[test]
    fn test_preview_handle_updates() {
        let preview = PreviewHandle::new("# One".to_string(), true);
        assert_eq!(preview.get_nodes()[0].kind, "heading");

        preview.set_content("plain".to_string());
        assert_eq!(preview.get_text(), "plain");
        assert_eq!(preview.get_nodes()[0].kind, "paragraph");

        preview.set_dark_mode(false);
        assert_eq!(preview.get_html(), "<p>plain</p>\n");
    }

    #[test]
    fn test_preview_handle_with_config() {
        let preview =
            PreviewHandle::with_config("[a](b)".to_string(), "theme = \"dark\"".to_string())
                .unwrap();
        let link = preview
            .get_nodes()
            .into_iter()
            .find(|n| n.kind == "link")
            .unwrap();
        assert_eq!(link.url.as_deref(), Some("b"));
        assert_eq!(link.style.text_decoration.as_deref(), Some("underline"));
    }
}
