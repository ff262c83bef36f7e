use std::sync::OnceLock;

use regex::Regex;

/// A list item line split into its marker facts and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub ordered: bool,
    /// The number of an ordered marker (`3.` gives `Some(3)`).
    pub number: Option<u64>,
    /// Indentation columns / 2.
    pub depth: u8,
    pub text: &'a str,
}

/// List marker syntax: `-`, `*`, `+` bullets or `N.` / `N)` numbers,
/// always followed by whitespace.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const TAB_WIDTH: usize = 4;
    pub const INDENT_PER_LEVEL: usize = 2;

    fn pattern() -> &'static Regex {
        static LIST_REGEX: OnceLock<Regex> = OnceLock::new();
        LIST_REGEX.get_or_init(|| {
            Regex::new(
                r"^(?P<indent>[ \t]*)(?:(?P<bullet>[-*+])|(?P<number>\d{1,9})[.)])[ \t]+(?P<text>.*)$",
            )
            .expect("Invalid list marker regex")
        })
    }

    pub fn parse(line: &str) -> Option<ListLine<'_>> {
        let caps = Self::pattern().captures(line)?;
        let indent = caps.name("indent").map_or("", |m| m.as_str());
        let number = caps
            .name("number")
            .and_then(|m| m.as_str().parse::<u64>().ok());
        let text = caps.name("text").map_or("", |m| m.as_str()).trim();

        Some(ListLine {
            ordered: caps.name("bullet").is_none(),
            number,
            depth: Self::depth(indent),
            text,
        })
    }

    fn depth(indent: &str) -> u8 {
        let columns: usize = indent
            .chars()
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum();
        (columns / Self::INDENT_PER_LEVEL).min(usize::from(u8::MAX)) as u8
    }
}
