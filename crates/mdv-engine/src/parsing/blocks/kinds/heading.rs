/// ATX heading with owned delimiter constants.
///
/// Only levels 1-3 are recognised; deeper markers stay paragraph text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 3;
    pub const MAX_INDENT: usize = 3;

    /// Parses `line` into its level and trimmed text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(' ');
        if line.len() - rest.len() > Self::MAX_INDENT {
            return None;
        }

        let hashes = rest.len() - rest.trim_start_matches(Self::MARKER).len();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }

        let after = &rest[hashes..];
        if !after.starts_with([' ', '\t']) {
            return None;
        }
        Some((hashes as u8, after.trim()))
    }
}
