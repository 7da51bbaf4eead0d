//! First inline stage: scans a paragraph's text left to right into
//! provisional tokens.
//!
//! Code spans and escapes come out fully formed; `*`/`_` runs come out as
//! [`DelimiterRun`] tokens carrying the flanking classification the emphasis
//! resolver consumes. Everything else is plain text with whitespace runs
//! collapsed to single spaces.

use crate::chars::{collapse_whitespace, is_punctuation, is_whitespace};
use crate::node::MarkdownNode;

/// A provisional token; delimiter metadata lives directly on the token
/// instead of in a side table keyed by node identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InlineToken {
    /// A node already in final form.
    Node(MarkdownNode),
    /// A run of `*` or `_` that may yet open or close emphasis.
    Delimiter(DelimiterRun),
}

/// A maximal run of one emphasis marker with its remaining length and
/// open/close capabilities. The literal text is always `marker` repeated
/// `length` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DelimiterRun {
    pub marker: char,
    pub length: usize,
    pub can_open: bool,
    pub can_close: bool,
}

impl DelimiterRun {
    pub(crate) fn literal(&self) -> String {
        self.marker.to_string().repeat(self.length)
    }
}

impl InlineToken {
    /// Final form of the token; unconsumed delimiter runs fall back to
    /// their literal text.
    pub(crate) fn into_node(self) -> MarkdownNode {
        match self {
            InlineToken::Node(node) => node,
            InlineToken::Delimiter(run) => MarkdownNode::Text(run.literal()),
        }
    }
}

pub(crate) fn tokenize(text: &str) -> Vec<InlineToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '`' {
            flush_plain(&mut tokens, &mut plain);
            i = scan_code_span(&chars, i, &mut tokens);
        } else if c == '\\'
            && let Some(&escaped) = chars.get(i + 1)
            && escaped.is_ascii_punctuation()
        {
            flush_plain(&mut tokens, &mut plain);
            tokens.push(InlineToken::Node(MarkdownNode::Text(escaped.to_string())));
            i += 2;
        } else if c == '*' || c == '_' {
            flush_plain(&mut tokens, &mut plain);
            let mut length = 1;
            while chars.get(i + length) == Some(&c) {
                length += 1;
            }
            let prev = if i == 0 { None } else { Some(chars[i - 1]) };
            let next = chars.get(i + length).copied();
            tokens.push(InlineToken::Delimiter(classify(c, length, prev, next)));
            i += length;
        } else {
            plain.push(c);
            i += 1;
        }
    }

    flush_plain(&mut tokens, &mut plain);
    tokens
}

fn flush_plain(tokens: &mut Vec<InlineToken>, plain: &mut String) {
    if !plain.is_empty() {
        tokens.push(InlineToken::Node(MarkdownNode::Text(collapse_whitespace(
            plain,
        ))));
        plain.clear();
    }
}

/// Consumes a backtick run at `start` and searches for a closing run of the
/// same length, skipping runs of other sizes. Returns the index to resume
/// scanning from. Without a closer the opening run is emitted verbatim.
fn scan_code_span(chars: &[char], start: usize, tokens: &mut Vec<InlineToken>) -> usize {
    let mut ticks = 1;
    while chars.get(start + ticks) == Some(&'`') {
        ticks += 1;
    }

    let mut j = start + ticks;
    while j < chars.len() {
        if chars[j] != '`' {
            j += 1;
            continue;
        }
        let mut run = 1;
        while chars.get(j + run) == Some(&'`') {
            run += 1;
        }
        if run == ticks {
            let interior: String = chars[start + ticks..j].iter().collect();
            let content = collapse_whitespace(interior.trim());
            tokens.push(InlineToken::Node(MarkdownNode::CodeSpan(vec![
                MarkdownNode::Text(content),
            ])));
            return j + run;
        }
        j += run;
    }

    tokens.push(InlineToken::Node(MarkdownNode::Text("`".repeat(ticks))));
    start + ticks
}

/// CommonMark flanking classification for a delimiter run, given the
/// characters adjacent to it. Start and end of string count as whitespace.
fn classify(marker: char, length: usize, prev: Option<char>, next: Option<char>) -> DelimiterRun {
    let next_white = next.is_none_or(is_whitespace);
    let prev_white = prev.is_none_or(is_whitespace);
    let next_punct = next.is_some_and(is_punctuation);
    let prev_punct = prev.is_some_and(is_punctuation);

    let left_flanking = !next_white && (!next_punct || prev_white || prev_punct);
    let right_flanking = !prev_white && (!prev_punct || next_white || next_punct);

    // Underscore has the extra intra-word restrictions; asterisk does not.
    let (can_open, can_close) = if marker == '_' {
        (
            left_flanking && (!right_flanking || prev_punct),
            right_flanking && (!left_flanking || next_punct),
        )
    } else {
        (left_flanking, right_flanking)
    };

    DelimiterRun {
        marker,
        length,
        can_open,
        can_close,
    }
}
