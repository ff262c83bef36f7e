use super::{
    escape::escape_markup,
    kinds::{Emphasis, Link},
    token::{Tok, source_of, tokenize},
    types::InlineSpan,
};

/// Resolves inline spans inside the text of a block.
///
/// Markup is escaped before any matching. The passes then run in a fixed
/// order:
/// 1. code spans and backslash escapes (raw zones, never rescanned)
/// 2. bold `**...**`, so `**` is never read as two italics
/// 3. italic `*...*`, also inside bold
/// 4. links `[label](url)`, whose labels are already resolved
///
/// Matching is non-greedy and a pass never nests a span inside another span
/// of its own kind. Markers without a counterpart stay literal text.
pub fn transform(text: &str) -> Vec<InlineSpan> {
    let escaped = escape_markup(text);
    let toks = tokenize(&escaped);
    let toks = pair_emphasis(toks, Emphasis::Strong);
    let toks = pair_emphasis(toks, Emphasis::Em);
    let toks = pair_links(toks);
    into_spans(toks)
}

fn pair_emphasis(toks: Vec<Tok>, kind: Emphasis) -> Vec<Tok> {
    let toks: Vec<Tok> = match kind {
        Emphasis::Strong => toks,
        Emphasis::Em => toks
            .into_iter()
            .map(|tok| match tok {
                Tok::Bold(inner) => Tok::Bold(pair_emphasis(inner, kind)),
                other => other,
            })
            .collect(),
    };

    let width = kind.width();
    let closers = next_index(&toks, |j| {
        j > 0 && is_marker_run(&toks, j, width) && !toks[j - 1].is_whitespace()
    });
    let mut out = Vec::with_capacity(toks.len());
    let mut i = 0;
    while i < toks.len() {
        match emphasis_close(&toks, &closers, i, width) {
            Some(close) => {
                let inner = toks[i + width..close].to_vec();
                out.push(match kind {
                    Emphasis::Strong => Tok::Bold(inner),
                    Emphasis::Em => Tok::Italic(inner),
                });
                i = close + width;
            }
            None => {
                out.push(toks[i].clone());
                i += 1;
            }
        }
    }
    out
}

/// For every position `k`, the first index `>= k` satisfying `pred`.
///
/// Built right to left in one sweep; openers look their closer up here.
fn next_index(toks: &[Tok], pred: impl Fn(usize) -> bool) -> Vec<Option<usize>> {
    let mut next = vec![None; toks.len() + 1];
    for k in (0..toks.len()).rev() {
        next[k] = if pred(k) { Some(k) } else { next[k + 1] };
    }
    next
}

/// Index of the closing run for an opening run at `open`, if both flank.
fn emphasis_close(
    toks: &[Tok],
    closers: &[Option<usize>],
    open: usize,
    width: usize,
) -> Option<usize> {
    if !is_marker_run(toks, open, width) || toks.get(open + width)?.is_whitespace() {
        return None;
    }
    closers.get(open + width + 1).copied().flatten()
}

fn is_marker_run(toks: &[Tok], at: usize, width: usize) -> bool {
    toks.get(at..at + width)
        .is_some_and(|run| run.iter().all(|t| t.is_char(Emphasis::MARKER)))
}

/// Next-index tables for the link delimiters of one token run.
struct LinkIndex {
    label_close: Vec<Option<usize>>,
    url_close: Vec<Option<usize>>,
    space: Vec<Option<usize>>,
}

impl LinkIndex {
    fn new(toks: &[Tok]) -> Self {
        Self {
            label_close: next_index(toks, |j| toks[j].is_char(Link::LABEL_CLOSE)),
            url_close: next_index(toks, |j| toks[j].is_char(Link::URL_CLOSE)),
            space: next_index(toks, |j| toks[j].is_whitespace()),
        }
    }
}

fn pair_links(toks: Vec<Tok>) -> Vec<Tok> {
    let toks: Vec<Tok> = toks
        .into_iter()
        .map(|tok| match tok {
            Tok::Bold(inner) => Tok::Bold(pair_links(inner)),
            Tok::Italic(inner) => Tok::Italic(pair_links(inner)),
            other => other,
        })
        .collect();

    let index = LinkIndex::new(&toks);
    let mut out = Vec::with_capacity(toks.len());
    let mut i = 0;
    while i < toks.len() {
        match link_at(&toks, &index, i) {
            Some((label_end, url_end, url)) => {
                out.push(Tok::Link {
                    label: toks[i + 1..label_end].to_vec(),
                    url,
                });
                i = url_end + 1;
            }
            None => {
                out.push(toks[i].clone());
                i += 1;
            }
        }
    }
    out
}

/// Matches `[label](url)` at `open`, returning the `]` index, the `)` index
/// and the URL.
fn link_at(toks: &[Tok], index: &LinkIndex, open: usize) -> Option<(usize, usize, String)> {
    if !toks[open].is_char(Link::LABEL_OPEN) {
        return None;
    }
    let label_end = index.label_close[open + 1]?;
    if label_end == open + 1 || !toks.get(label_end + 1)?.is_char(Link::URL_OPEN) {
        return None;
    }
    let url_start = label_end + 2;
    let url_end = index.url_close.get(url_start).copied().flatten()?;
    if url_end == url_start || index.space[url_start].is_some_and(|sp| sp < url_end) {
        return None;
    }

    // Only the leading tokens can spell a scheme.
    let head = source_of(&toks[url_start..url_end.min(url_start + Link::SCHEME_WINDOW)]);
    if !Link::is_safe_url(&head) {
        tracing::debug!(url = %head, "refusing to link unsafe url");
        return None;
    }
    let url = source_of(&toks[url_start..url_end]);
    if url.chars().any(char::is_whitespace) {
        return None;
    }
    Some((label_end, url_end, url))
}

fn into_spans(toks: Vec<Tok>) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    let mut text = String::new();

    for tok in toks {
        let span = match tok {
            Tok::Char(c) | Tok::Escaped(c) => {
                text.push(c);
                continue;
            }
            Tok::Code(code) => InlineSpan::Code(code),
            Tok::Bold(inner) => InlineSpan::Bold(into_spans(inner)),
            Tok::Italic(inner) => InlineSpan::Italic(into_spans(inner)),
            Tok::Link { label, url } => InlineSpan::Link {
                label: into_spans(label),
                url,
            },
        };
        if !text.is_empty() {
            out.push(InlineSpan::Text(std::mem::take(&mut text)));
        }
        out.push(span);
    }

    if !text.is_empty() {
        out.push(InlineSpan::Text(text));
    }
    out
}
