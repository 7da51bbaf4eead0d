//! Block phase: groups lines into top-level nodes.
//!
//! Paragraph is the default; indented code blocks and bullet lists take
//! precedence. List items re-enter this phase recursively with their
//! accumulated text, which is how nesting arises.

mod code_block;
mod list;

use crate::node::MarkdownNode;
use crate::parsing::inline;
use crate::parsing::lines::{self, is_blank, leading_spaces};

/// Nesting cap for list recursion. At the cap a bullet line falls through
/// to paragraph handling, so hostile input degrades to text instead of
/// exhausting the stack.
const MAX_LIST_DEPTH: usize = 100;

pub(crate) fn parse_document(text: &str) -> Vec<MarkdownNode> {
    parse_blocks(text, 0)
}

pub(crate) fn parse_blocks(text: &str, depth: usize) -> Vec<MarkdownNode> {
    let lines = lines::split_lines(text);
    let mut out = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) {
            i += 1;
            continue;
        }
        if leading_spaces(line) >= code_block::CODE_INDENT {
            let (node, next) = code_block::parse(&lines, i);
            out.push(node);
            i = next;
            continue;
        }
        if depth < MAX_LIST_DEPTH
            && let Some(bullet) = list::scan_bullet(line)
        {
            let (node, next) = list::parse(&lines, i, bullet, depth);
            out.push(node);
            i = next;
            continue;
        }
        let (node, next) = parse_paragraph(&lines, i);
        out.push(node);
        i = next;
    }
    out
}

/// Accumulates left-trimmed lines until a blank line, end of input, or a
/// line opening a non-empty bullet item, then hands the joined text to the
/// inline pipeline.
fn parse_paragraph(lines: &[&str], start: usize) -> (MarkdownNode, usize) {
    let mut text = lines[start].trim_start().to_string();
    let mut i = start + 1;
    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) {
            break;
        }
        if let Some(bullet) = list::scan_bullet(line)
            && !bullet.blank
        {
            break;
        }
        text.push_str(line.trim_start());
        i += 1;
    }
    (MarkdownNode::Paragraph(inline::parse_inline(text.trim())), i)
}
