/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            let mut j = i;
            while j < b.len() && b[j] == b' ' {
                j += 1;
            }
            if j < b.len() && b[j] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i = j + 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Parses a quoted line into its depth and trimmed text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        match Self::strip_prefixes(line) {
            (0, _) => None,
            (depth, idx) => Some((depth, line[idx..].trim())),
        }
    }
}
