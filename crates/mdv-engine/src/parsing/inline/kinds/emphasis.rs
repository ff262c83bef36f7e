/// Bold (`**`) and italic (`*`) delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strong,
    Em,
}

impl Emphasis {
    pub const MARKER: char = '*';

    /// Number of marker characters on each side.
    pub fn width(self) -> usize {
        match self {
            Emphasis::Strong => 2,
            Emphasis::Em => 1,
        }
    }
}
