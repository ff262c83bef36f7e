use super::{
    cursor::Cursor,
    kinds::{Backslash, CodeSpan, Emphasis, Link},
};

/// Intermediate inline token.
///
/// Tokenizing resolves the raw zones (code spans, backslash escapes); the
/// emphasis and link passes then fold runs of `Char` into nested tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Tok {
    /// A character that may still act as a marker.
    Char(char),
    /// A backslash-escaped character; always literal.
    Escaped(char),
    Code(String),
    Bold(Vec<Tok>),
    Italic(Vec<Tok>),
    Link { label: Vec<Tok>, url: String },
}

impl Tok {
    pub(crate) fn is_char(&self, c: char) -> bool {
        matches!(self, Tok::Char(x) if *x == c)
    }

    pub(crate) fn is_whitespace(&self) -> bool {
        matches!(self, Tok::Char(c) if c.is_whitespace())
    }

    /// Writes the source text this token was read from.
    pub(crate) fn write_source(&self, out: &mut String) {
        match self {
            Tok::Char(c) | Tok::Escaped(c) => out.push(*c),
            Tok::Code(code) => {
                out.push(CodeSpan::TICK as char);
                out.push_str(code);
                out.push(CodeSpan::TICK as char);
            }
            Tok::Bold(inner) => write_emphasis(out, Emphasis::Strong, inner),
            Tok::Italic(inner) => write_emphasis(out, Emphasis::Em, inner),
            Tok::Link { label, url } => {
                out.push(Link::LABEL_OPEN);
                label.iter().for_each(|t| t.write_source(out));
                out.push(Link::LABEL_CLOSE);
                out.push(Link::URL_OPEN);
                out.push_str(url);
                out.push(Link::URL_CLOSE);
            }
        }
    }
}

fn write_emphasis(out: &mut String, kind: Emphasis, inner: &[Tok]) {
    let marker = Emphasis::MARKER.to_string().repeat(kind.width());
    out.push_str(&marker);
    inner.iter().for_each(|t| t.write_source(out));
    out.push_str(&marker);
}

/// Source text of a token run.
pub(crate) fn source_of(toks: &[Tok]) -> String {
    let mut out = String::new();
    toks.iter().for_each(|t| t.write_source(&mut out));
    out
}

/// Splits already-escaped text into tokens, extracting code spans and
/// backslash escapes before any marker is considered.
pub(crate) fn tokenize(s: &str) -> Vec<Tok> {
    let mut cur = Cursor::new(s);
    let mut toks = Vec::with_capacity(s.len());

    while !cur.eof() {
        if let Some(tok) = try_escape(&mut cur).or_else(|| try_code_span(&mut cur)) {
            toks.push(tok);
            continue;
        }
        if let Some(ch) = cur.bump_char() {
            toks.push(Tok::Char(ch));
        }
    }
    toks
}

fn try_escape(cur: &mut Cursor<'_>) -> Option<Tok> {
    if cur.peek() != Some(Backslash::ESCAPE) {
        return None;
    }
    let escaped = cur.peek_at(1).filter(|b| Backslash::escapes(*b))?;
    cur.bump();
    cur.bump();
    Some(Tok::Escaped(escaped as char))
}

/// Attempts to read a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty or if it isn't
/// closed. On failure, cursor position is restored.
fn try_code_span(cur: &mut Cursor<'_>) -> Option<Tok> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump_char();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(Tok::Code(cur.slice(inner_start, inner_end).to_string()))
}
