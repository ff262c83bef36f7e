/// Which delimiter character a fence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// What a line looks like if it could open or close a fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the delimiter run (at least [`CodeFence::MIN_LEN`]).
    pub len: usize,
    /// Trimmed text after the delimiter run.
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LEN: usize = 3;
    pub const MAX_INDENT: usize = 3;

    /// Returns the fence signature of `line`, if it has one.
    ///
    /// A backtick fence whose info string contains a backtick is inline code,
    /// not a fence (```` ```a``` ```` stays paragraph text).
    pub fn sig(line: &str) -> Option<FenceSig> {
        let line = line.trim_end_matches(['\r', '\n']);
        let rest = line.trim_start_matches(' ');
        if line.len() - rest.len() > Self::MAX_INDENT {
            return None;
        }

        let (kind, ch) = match rest.chars().next()? {
            Self::BACKTICK => (FenceKind::Backticks, Self::BACKTICK),
            Self::TILDE => (FenceKind::Tildes, Self::TILDE),
            _ => return None,
        };
        let len = rest.len() - rest.trim_start_matches(ch).len();
        if len < Self::MIN_LEN {
            return None;
        }

        let info = rest[len..].trim();
        if kind == FenceKind::Backticks && info.contains(Self::BACKTICK) {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    /// First word of the info string, if any.
    pub fn language(sig: &FenceSig) -> Option<String> {
        sig.info.split_whitespace().next().map(str::to_string)
    }

    /// A closing fence uses the opener's character, is at least as long,
    /// and carries no info string.
    pub fn closes(open: &FenceSig, candidate: Option<&FenceSig>) -> bool {
        matches!(
            candidate,
            Some(c) if c.kind == open.kind && c.len >= open.len && c.info.is_empty()
        )
    }
}
