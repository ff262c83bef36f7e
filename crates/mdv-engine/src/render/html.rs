//! HTML fragment output for rendered node trees.
//!
//! Text payloads are already escaped and go out verbatim. Style attribute
//! values come from configuration and are escaped here.

use crate::{
    parsing::table::Alignment,
    style::StyleAttrs,
};

use super::{NodeKind, RenderedNode};

/// Serialises nodes into an HTML fragment.
///
/// Consecutive list items of the same kind share one `<ul>` or `<ol>`.
pub fn to_html(nodes: &[RenderedNode]) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < nodes.len() {
        if let NodeKind::ListItem {
            ordered, number, ..
        } = &nodes[i].kind
        {
            let end = nodes[i..]
                .iter()
                .position(|n| !matches!(&n.kind, NodeKind::ListItem { ordered: o, .. } if o == ordered))
                .map_or(nodes.len(), |p| i + p);
            write_list(&mut out, &nodes[i..end], *ordered, *number);
            i = end;
            continue;
        }
        write_node(&mut out, &nodes[i]);
        i += 1;
    }
    out
}

fn write_list(out: &mut String, items: &[RenderedNode], ordered: bool, first: Option<u64>) {
    let tag = if ordered { "ol" } else { "ul" };
    out.push('<');
    out.push_str(tag);
    if let Some(start) = first.filter(|n| ordered && *n != 1) {
        out.push_str(&format!(" start=\"{start}\""));
    }
    out.push_str(">\n");
    for item in items {
        write_node(out, item);
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn write_node(out: &mut String, node: &RenderedNode) {
    let style = style_attr(&node.style, None);
    match &node.kind {
        NodeKind::Heading { level } => {
            out.push_str(&format!("<h{level}{style}>"));
            write_children(out, node);
            out.push_str(&format!("</h{level}>"));
        }
        NodeKind::Paragraph => wrap(out, "p", &style, node),
        NodeKind::Blockquote { depth } => {
            let depth = usize::from((*depth).max(1));
            out.push_str(&format!("<blockquote{style}>"));
            out.push_str(&"<blockquote>".repeat(depth - 1));
            write_children(out, node);
            out.push_str(&"</blockquote>".repeat(depth));
        }
        NodeKind::ListItem { .. } => wrap(out, "li", &style, node),
        NodeKind::CodeBlock {
            language, content, ..
        } => {
            let class = language
                .as_deref()
                .map(|l| format!(" class=\"language-{l}\""))
                .unwrap_or_default();
            out.push_str(&format!("<pre{style}><code{class}>{content}</code></pre>"));
        }
        NodeKind::Table { .. } => write_table(out, node, &style),
        // Rows and cells are written by `write_table`; reaching here means a
        // caller built a detached row, so emit it plainly.
        NodeKind::TableRow { .. } => wrap(out, "tr", &style, node),
        NodeKind::TableCell { .. } => write_cell(out, node, "td"),
        NodeKind::Text { text } => out.push_str(text),
        NodeKind::Bold => wrap(out, "strong", &style, node),
        NodeKind::Italic => wrap(out, "em", &style, node),
        NodeKind::CodeSpan { code } => out.push_str(&format!("<code{style}>{code}</code>")),
        NodeKind::Link { url } => {
            out.push_str(&format!("<a href=\"{url}\"{style}>"));
            write_children(out, node);
            out.push_str("</a>");
        }
        NodeKind::Literal { text } => out.push_str(&format!("<span{style}>{text}</span>")),
    }
    if node.kind.is_block() {
        out.push('\n');
    }
}

fn wrap(out: &mut String, tag: &str, style: &str, node: &RenderedNode) {
    out.push_str(&format!("<{tag}{style}>"));
    write_children(out, node);
    out.push_str(&format!("</{tag}>"));
}

fn write_children(out: &mut String, node: &RenderedNode) {
    for child in &node.children {
        write_node(out, child);
    }
}

fn write_table(out: &mut String, table: &RenderedNode, style: &str) {
    out.push_str(&format!("<table{style}>\n"));
    let (header, body): (Vec<_>, Vec<_>) = table
        .children
        .iter()
        .partition(|row| matches!(row.kind, NodeKind::TableRow { header: true }));

    for (section, rows, cell_tag) in [("thead", header, "th"), ("tbody", body, "td")] {
        if rows.is_empty() {
            continue;
        }
        out.push_str(&format!("<{section}>\n"));
        for row in rows {
            out.push_str(&format!("<tr{}>", style_attr(&row.style, None)));
            for cell in &row.children {
                write_cell(out, cell, cell_tag);
            }
            out.push_str("</tr>\n");
        }
        out.push_str(&format!("</{section}>\n"));
    }
    out.push_str("</table>");
}

fn write_cell(out: &mut String, cell: &RenderedNode, tag: &str) {
    let align = match cell.kind {
        NodeKind::TableCell { alignment } => text_align(alignment),
        _ => None,
    };
    out.push_str(&format!("<{tag}{}>", style_attr(&cell.style, align)));
    write_children(out, cell);
    out.push_str(&format!("</{tag}>"));
}

fn text_align(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::None => None,
        Alignment::Left => Some("left"),
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
    }
}

/// Builds a ` style="..."` attribute, or an empty string when nothing is set.
fn style_attr(attrs: &StyleAttrs, text_align: Option<&str>) -> String {
    let css = css(attrs, text_align);
    if css.is_empty() {
        return String::new();
    }
    format!(
        " style=\"{}\"",
        html_escape::encode_double_quoted_attribute(&css)
    )
}

fn css(attrs: &StyleAttrs, text_align: Option<&str>) -> String {
    let mut decls: Vec<String> = vec![];
    let mut push = |prop: &str, value: Option<String>| {
        if let Some(value) = value {
            decls.push(format!("{prop}:{value}"));
        }
    };
    let px = |v: Option<f32>| v.map(|v| format!("{v}px"));
    let border_color = attrs.border_color.as_deref().unwrap_or("currentColor");
    let border = |w: Option<f32>| w.map(|w| format!("{w}px solid {border_color}"));

    push("color", attrs.color.clone());
    push("background-color", attrs.background.clone());
    push("border-bottom", border(attrs.border_bottom_width));
    push("border-left", border(attrs.border_left_width));
    if attrs.border_bottom_width.is_none() && attrs.border_left_width.is_none() {
        push("border", attrs.border_color.as_ref().map(|c| format!("1px solid {c}")));
    }
    push("border-radius", px(attrs.border_radius));
    push("padding", px(attrs.padding));
    push("padding-bottom", px(attrs.padding_bottom));
    push("margin-top", px(attrs.margin_top));
    push("margin-bottom", px(attrs.margin_bottom));
    push("font-family", attrs.font_family.clone());
    push("font-size", px(attrs.font_size));
    push("font-weight", attrs.font_weight.clone());
    push("font-style", attrs.font_style.clone());
    push("text-decoration", attrs.text_decoration.clone());
    push("text-align", text_align.map(str::to_string));

    decls.join(";")
}
