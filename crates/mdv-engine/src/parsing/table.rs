//! # Table Assembly
//!
//! Groups a run of pipe-delimited lines into one [`TableBlock`].
//!
//! - The first line is the header row and fixes the column count.
//! - A second line made only of separator cells (`---`, `:--`, `:-:`, `--:`)
//!   is consumed for column alignment and never emitted as data.
//! - Shorter rows are padded with empty cells; longer rows are truncated to
//!   the header width.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Column alignment declared by the separator row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// A grouped table: header cells, per-column alignment, and data rows.
///
/// Every row has exactly `header.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBlock {
    pub header: Vec<String>,
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Vec<String>>,
}

/// Cell delimiter.
pub const PIPE: char = '|';

/// Whether a line belongs to a table run. The first such line opens a run
/// and the first line without one ends it.
pub fn is_pipe_line(line: &str) -> bool {
    line.contains(PIPE)
}

/// Assembles candidate lines (a maximal pipe run) into a table.
///
/// An empty run yields an empty table with no columns.
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> TableBlock {
    let mut rows = lines.iter().map(|l| split_cells(l.as_ref()));
    let Some(header) = rows.next() else {
        return TableBlock::default();
    };
    let columns = header.len();
    let mut body: Vec<Vec<String>> = rows.collect();

    let alignments = match body.first().and_then(|row| separator_alignments(row)) {
        Some(alignments) => {
            body.remove(0);
            fit(alignments, columns, Alignment::None)
        }
        None => vec![Alignment::None; columns],
    };

    let rows = body
        .into_iter()
        .map(|row| fit(row, columns, String::new()))
        .collect();

    TableBlock {
        header,
        alignments,
        rows,
    }
}

/// Splits a table line into trimmed cells.
///
/// One leading and one trailing pipe are optional borders; `\|` is a literal
/// pipe inside a cell.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix(PIPE) {
        s = stripped;
    }
    if s.ends_with(PIPE) && !s.ends_with("\\|") {
        s = &s[..s.len() - 1];
    }

    let mut cells = vec![];
    let mut cell = String::new();
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&PIPE) => {
                cell.push(PIPE);
                chars.next();
            }
            PIPE => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(ch),
        }
    }
    cells.push(cell.trim().to_string());
    cells
}

fn separator_cell() -> &'static Regex {
    static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_REGEX
        .get_or_init(|| Regex::new(r"^(:?)-+(:?)$").expect("Invalid separator cell regex"))
}

/// Returns per-cell alignment if every cell of `row` is a separator cell.
fn separator_alignments(row: &[String]) -> Option<Vec<Alignment>> {
    row.iter()
        .map(|cell| {
            let caps = separator_cell().captures(cell)?;
            let left = caps.get(1).is_some_and(|m| !m.is_empty());
            let right = caps.get(2).is_some_and(|m| !m.is_empty());
            Some(match (left, right) {
                (true, true) => Alignment::Center,
                (true, false) => Alignment::Left,
                (false, true) => Alignment::Right,
                (false, false) => Alignment::None,
            })
        })
        .collect()
}

/// Pads with `fill` or truncates to exactly `columns` entries.
fn fit<T: Clone>(mut row: Vec<T>, columns: usize, fill: T) -> Vec<T> {
    if row.len() > columns {
        tracing::trace!(
            cells = row.len(),
            columns,
            "truncating table row to header width"
        );
    }
    row.resize(columns, fill);
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn header_separator_and_row() {
        let table = assemble(&["|a|b|", "|--|--|", "|1|2|"]);
        assert_eq!(table.header, strings(&["a", "b"]));
        assert_eq!(table.rows, vec![strings(&["1", "2"])]);
        assert_eq!(table.alignments, vec![Alignment::None, Alignment::None]);
    }

    #[test]
    fn separator_sets_alignment() {
        let table = assemble(&["| l | c | r | n |", "|:--|:-:|--:|---|"]);
        assert_eq!(
            table.alignments,
            vec![
                Alignment::Left,
                Alignment::Center,
                Alignment::Right,
                Alignment::None
            ]
        );
        assert!(table.rows.is_empty());
    }

    #[test]
    fn missing_separator_keeps_second_line_as_data() {
        let table = assemble(&["| a | b |", "| 1 | 2 |"]);
        assert_eq!(table.rows, vec![strings(&["1", "2"])]);
    }

    #[test]
    fn separator_only_recognised_on_second_line() {
        let table = assemble(&["| a |", "| 1 |", "| --- |"]);
        assert_eq!(table.rows, vec![strings(&["1"]), strings(&["---"])]);
    }

    #[test]
    fn short_rows_are_padded_long_rows_truncated() {
        let table = assemble(&["| a | b | c |", "|---|---|---|", "| 1 |", "| 1 | 2 | 3 | 4 |"]);
        assert_eq!(
            table.rows,
            vec![strings(&["1", "", ""]), strings(&["1", "2", "3"])]
        );
    }

    #[test]
    fn empty_run_is_empty_table() {
        let table = assemble::<&str>(&[]);
        assert_eq!(table, TableBlock::default());
        assert!(table.header.is_empty());
    }

    #[rstest]
    #[case("| a | b |", &["a", "b"])]
    #[case("a | b", &["a", "b"])]
    #[case("| a |  | c", &["a", "", "c"])]
    #[case(r"| a \| b | c |", &["a | b", "c"])]
    #[case("|", &[""])]
    fn split_cells_cases(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(split_cells(line), strings(expected));
    }

    #[rstest]
    #[case("| a |", true)]
    #[case("  |a", true)]
    #[case("a | b", true)]
    #[case("--|--", true)]
    #[case("no pipes", false)]
    fn pipe_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_pipe_line(line), expected);
    }
}
