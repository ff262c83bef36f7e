// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, `code` and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n1. Ordered item\n\n> A quote\n\n| a | b |\n|:--|--:|\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(words: usize) -> String {
    (0..words)
        .map(|i| match i % 5 {
            0 => format!("**w{i}**"),
            1 => format!("*w{i}*"),
            2 => format!("`w{i}`"),
            3 => format!("[w{i}](https://example.com/{i})"),
            _ => format!("w{i} <&>"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// An opener repeated with no closer anywhere after it.
#[allow(dead_code)]
pub fn generate_unmatched(unit: &str, count: usize) -> String {
    unit.repeat(count)
}
