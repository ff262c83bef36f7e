use super::kinds::{BlockQuote, CodeFence, FenceSig, Heading, ListMarker};

/// A block opener recognised on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode(FenceSig),
    Heading {
        level: u8,
        text: String,
    },
    BlockQuote {
        depth: u8,
        text: String,
    },
    ListItem {
        ordered: bool,
        number: Option<u64>,
        depth: u8,
        text: String,
    },
}

pub fn try_open_leaf(line: &str) -> Option<BlockOpen> {
    // Precedence: fence, heading, blockquote, list.
    if let Some(sig) = CodeFence::sig(line) {
        return Some(BlockOpen::FencedCode(sig));
    }
    if let Some((level, text)) = Heading::parse(line) {
        return Some(BlockOpen::Heading {
            level,
            text: text.to_string(),
        });
    }
    if let Some((depth, text)) = BlockQuote::parse(line) {
        return Some(BlockOpen::BlockQuote {
            depth,
            text: text.to_string(),
        });
    }
    if let Some(item) = ListMarker::parse(line) {
        return Some(BlockOpen::ListItem {
            ordered: item.ordered,
            number: item.number,
            depth: item.depth,
            text: item.text.to_string(),
        });
    }
    None
}
