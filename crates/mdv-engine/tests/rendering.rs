use mdv_engine::{
    Alignment, NodeKind, RenderedNode, StyleConfig, StyleKey, classify, render_markdown, to_html,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn kinds(nodes: &[RenderedNode]) -> Vec<&NodeKind> {
    nodes.iter().map(|n| &n.kind).collect()
}

/// Every text payload in the tree, in pre-order.
fn payloads(nodes: &[RenderedNode]) -> Vec<String> {
    let mut out = vec![];
    for node in nodes {
        node.walk(&mut |_: usize, n: &RenderedNode| match &n.kind {
            NodeKind::Text { text } | NodeKind::Literal { text } => out.push(text.clone()),
            NodeKind::CodeSpan { code } => out.push(code.clone()),
            NodeKind::CodeBlock {
                content, language, ..
            } => {
                out.push(content.clone());
                out.extend(language.clone());
            }
            NodeKind::Link { url } => out.push(url.clone()),
            _ => {}
        });
    }
    out
}

#[test]
fn title_renders_as_level_one_heading() {
    let nodes = render_markdown("# Title", &StyleConfig::new());

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind, NodeKind::Heading { level: 1 });
    assert_eq!(nodes[0].style_key, StyleKey::Heading1);
    assert_eq!(nodes[0].plain_text(), "Title");
}

#[test]
fn bold_then_text_then_italic() {
    let nodes = render_markdown("**a** and *b*", &StyleConfig::new());
    let inline = &nodes[0].children;

    assert_eq!(
        kinds(inline),
        vec![
            &NodeKind::Bold,
            &NodeKind::Text {
                text: " and ".into()
            },
            &NodeKind::Italic,
        ]
    );
    assert_eq!(inline[0].plain_text(), "a");
    assert_eq!(inline[2].plain_text(), "b");
}

#[test]
fn table_with_header_and_one_row() {
    let nodes = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |", &StyleConfig::new());

    assert_eq!(nodes.len(), 1);
    assert_eq!(
        nodes[0].kind,
        NodeKind::Table {
            alignments: vec![Alignment::None, Alignment::None]
        }
    );
    let rows: Vec<Vec<String>> = nodes[0]
        .children
        .iter()
        .map(|row| row.children.iter().map(RenderedNode::plain_text).collect())
        .collect();
    assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
}

#[test]
fn unterminated_fence_is_not_an_error() {
    let nodes = render_markdown("```\ncode", &StyleConfig::new());

    assert_eq!(
        kinds(&nodes),
        vec![&NodeKind::CodeBlock {
            language: None,
            content: "code".into(),
            terminated: false,
        }]
    );
}

#[test]
fn script_tag_is_escaped_text() {
    let nodes = render_markdown("<script>alert(1)</script>", &StyleConfig::new());

    assert_eq!(
        nodes[0].plain_text(),
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
}

#[rstest]
#[case::empty("")]
#[case::blank_lines("\n\n   \n")]
fn nothing_to_render(#[case] input: &str) {
    assert!(render_markdown(input, &StyleConfig::dark()).is_empty());
}

#[rstest]
#[case::readme("readme")]
#[case::hostile("hostile")]
fn rendering_is_deterministic(#[case] name: &str) {
    let md = fixture(name);
    let styles = StyleConfig::dark();

    let first = render_markdown(&md, &styles);
    let second = render_markdown(&md, &styles);
    assert_eq!(first, second);
    assert_eq!(to_html(&first), to_html(&second));
}

#[rstest]
#[case::readme("readme")]
#[case::hostile("hostile")]
fn no_payload_carries_raw_markup(#[case] name: &str) {
    let nodes = render_markdown(&fixture(name), &StyleConfig::light());

    for text in payloads(&nodes) {
        assert!(
            !text.contains(['<', '>', '"']),
            "unescaped markup in {text:?}"
        );
    }
}

#[test]
fn block_order_follows_source() {
    let md = fixture("readme");
    let blocks = classify(&md);

    let starts: Vec<usize> = blocks.iter().map(|b| b.span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);

    let nodes = render_markdown(&md, &StyleConfig::new());
    assert_eq!(nodes.len(), blocks.len());
}

#[test]
fn readme_block_kinds() {
    let nodes = render_markdown(&fixture("readme"), &StyleConfig::new());
    let keys: Vec<StyleKey> = nodes.iter().map(|n| n.style_key).collect();

    assert_eq!(
        keys,
        vec![
            StyleKey::Heading1,
            StyleKey::Paragraph,
            StyleKey::Heading2,
            StyleKey::ListItem,
            StyleKey::ListItem,
            StyleKey::ListItem,
            StyleKey::ListItem,
            StyleKey::ListItem,
            StyleKey::Blockquote,
            StyleKey::Blockquote,
            StyleKey::CodeBlock,
            StyleKey::Table,
            StyleKey::Heading3,
            StyleKey::Paragraph,
        ]
    );
}

#[test]
fn hostile_links_stay_literal() {
    let nodes = render_markdown(&fixture("hostile"), &StyleConfig::new());
    let html = to_html(&nodes);

    assert!(!html.contains("href=\"javascript"));
    assert!(!html.contains("href=\"JAVASCRIPT"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("<iframe"));
    assert!(!html.contains("<img"));
}

#[test]
fn hostile_table_is_padded_and_truncated() {
    let nodes = render_markdown(&fixture("hostile"), &StyleConfig::new());
    let table = nodes
        .iter()
        .find(|n| matches!(n.kind, NodeKind::Table { .. }))
        .unwrap();

    for row in &table.children {
        assert_eq!(row.children.len(), 2);
    }
    let last = table.children.last().unwrap();
    assert_eq!(last.children[0].plain_text(), "&lt;b&gt;");
    assert_eq!(last.children[1].plain_text(), "");
}

#[test]
fn hostile_fence_runs_to_end() {
    let nodes = render_markdown(&fixture("hostile"), &StyleConfig::new());

    match &nodes.last().unwrap().kind {
        NodeKind::CodeBlock {
            language,
            content,
            terminated,
        } => {
            assert_eq!(language.as_deref(), Some("html"));
            assert!(content.starts_with("&lt;iframe"));
            assert!(!terminated);
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn styles_are_resolved_per_key() {
    let nodes = render_markdown("[a](b)", &StyleConfig::dark());
    let link = &nodes[0].children[0];

    assert_eq!(link.style_key, StyleKey::Link);
    assert_eq!(link.style.text_decoration.as_deref(), Some("underline"));
    assert!(nodes[0].style.is_empty());
}
