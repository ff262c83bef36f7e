//! Terminal presentation of a rendered document.
//!
//! Node text arrives markup-escaped, so entities are decoded here before
//! they reach the terminal.

use std::{borrow::Cow, mem};

use mdv_engine::{Alignment, NodeKind, RenderedNode, StyleAttrs};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Lays out rendered nodes as terminal lines.
pub fn to_lines(nodes: &[RenderedNode]) -> Vec<Line<'static>> {
    let mut out = LineBuf::default();
    for (i, node) in nodes.iter().enumerate() {
        block(&mut out, node);
        let grouped = nodes.get(i + 1).is_some_and(|next| groups_with(node, next));
        if !grouped {
            out.blank();
        }
    }
    out.finish()
}

/// Terminal style for a set of style attributes.
pub fn style_of(attrs: &StyleAttrs) -> Style {
    let mut style = Style::default();
    if let Some(fg) = attrs.color.as_deref().and_then(parse_hex_color) {
        style = style.fg(fg);
    }
    if let Some(bg) = attrs.background.as_deref().and_then(parse_hex_color) {
        style = style.bg(bg);
    }
    if attrs.font_weight.as_deref().is_some_and(is_bold_weight) {
        style = style.add_modifier(Modifier::BOLD);
    }
    if attrs.font_style.as_deref() == Some("italic") {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if attrs
        .text_decoration
        .as_deref()
        .is_some_and(|d| d.contains("underline"))
    {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Parses `#rrggbb` or `#rgb`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

fn is_bold_weight(weight: &str) -> bool {
    matches!(weight, "bold" | "bolder" | "600" | "700" | "800" | "900")
}

fn decode(s: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(s)
}

fn groups_with(node: &RenderedNode, next: &RenderedNode) -> bool {
    matches!(
        (&node.kind, &next.kind),
        (NodeKind::ListItem { .. }, NodeKind::ListItem { .. })
            | (NodeKind::Blockquote { .. }, NodeKind::Blockquote { .. })
    )
}

#[derive(Default)]
struct LineBuf {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuf {
    /// Appends text; embedded newlines start new lines.
    fn push(&mut self, text: &str, style: Style) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if !part.is_empty() {
                self.current.push(Span::styled(part.to_string(), style));
            }
        }
    }

    fn newline(&mut self) {
        let spans = mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn end_line(&mut self) {
        if !self.current.is_empty() {
            self.newline();
        }
    }

    fn blank(&mut self) {
        self.end_line();
        self.lines.push(Line::default());
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.end_line();
        while self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

fn block(out: &mut LineBuf, node: &RenderedNode) {
    let style = style_of(&node.style);
    match &node.kind {
        NodeKind::Heading { level } => {
            let style = style.add_modifier(Modifier::BOLD);
            out.push(&format!("{} ", "#".repeat(usize::from(*level))), style);
            children(out, node, style);
        }
        NodeKind::Blockquote { depth } => {
            let bar = node
                .style
                .border_color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(Color::DarkGray);
            out.push(&"│ ".repeat(usize::from(*depth)), Style::default().fg(bar));
            children(out, node, style);
        }
        NodeKind::ListItem {
            ordered,
            number,
            depth,
        } => {
            let indent = "  ".repeat(usize::from(*depth));
            let marker = if *ordered {
                format!("{}. ", number.unwrap_or(1))
            } else {
                "• ".to_string()
            };
            out.push(&format!("{indent}{marker}"), style);
            children(out, node, style);
        }
        NodeKind::CodeBlock {
            language, content, ..
        } => {
            if let Some(lang) = language {
                out.push(&decode(lang), style.add_modifier(Modifier::DIM));
                out.end_line();
            }
            for line in decode(content).split('\n') {
                out.push(&format!("  {line}"), style);
                out.end_line();
            }
        }
        NodeKind::Table { alignments } => table(out, node, alignments),
        _ => inline(out, node, Style::default()),
    }
    out.end_line();
}

fn children(out: &mut LineBuf, node: &RenderedNode, style: Style) {
    for child in &node.children {
        inline(out, child, style);
    }
}

fn inline(out: &mut LineBuf, node: &RenderedNode, inherited: Style) {
    let style = inherited.patch(style_of(&node.style));
    match &node.kind {
        NodeKind::Text { text } | NodeKind::Literal { text } => out.push(&decode(text), style),
        NodeKind::CodeSpan { code } => out.push(&decode(code), style),
        NodeKind::Bold => children(out, node, style.add_modifier(Modifier::BOLD)),
        NodeKind::Italic => children(out, node, style.add_modifier(Modifier::ITALIC)),
        NodeKind::Link { url } => {
            children(out, node, style);
            out.push(
                &format!(" ({})", decode(url)),
                inherited.add_modifier(Modifier::DIM),
            );
        }
        _ => children(out, node, style),
    }
}

fn table(out: &mut LineBuf, node: &RenderedNode, alignments: &[Alignment]) {
    let rows: Vec<Vec<String>> = node
        .children
        .iter()
        .map(|row| {
            row.children
                .iter()
                .map(|cell| decode(&cell.plain_text()).into_owned())
                .collect()
        })
        .collect();
    let columns = rows.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();
    let rule = Style::default().fg(Color::DarkGray);

    for (r, (row, cells)) in node.children.iter().zip(&rows).enumerate() {
        for (c, (cell, text)) in row.children.iter().zip(cells).enumerate() {
            if c > 0 {
                out.push(" │ ", rule);
            }
            let mut style = style_of(&cell.style);
            if matches!(row.kind, NodeKind::TableRow { header: true }) {
                style = style.add_modifier(Modifier::BOLD);
            }
            let alignment = alignments.get(c).copied().unwrap_or_default();
            out.push(&pad(text, widths[c], alignment), style);
        }
        out.end_line();
        if r == 0 {
            let line: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
            out.push(&line.join("─┼─"), rule);
            out.end_line();
        }
    }
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Right => format!("{text:>width$}"),
        Alignment::Center => format!("{text:^width$}"),
        Alignment::None | Alignment::Left => format!("{text:<width$}"),
    }
}
