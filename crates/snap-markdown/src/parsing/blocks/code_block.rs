//! Indented code blocks.

use crate::node::MarkdownNode;
use crate::parsing::lines::{is_blank, leading_spaces, skip_chars};

/// Columns of indentation that put a line inside a code block.
pub(crate) const CODE_INDENT: usize = 4;

/// Parses a code block starting at `lines[start]`, which must have at least
/// [`CODE_INDENT`] leading spaces. Returns the node and the index of the
/// first unconsumed line.
///
/// Qualifying lines keep everything after the first four characters
/// verbatim, terminator included; blank lines contribute a bare newline.
/// Trailing blank lines are trimmed from the result.
pub(crate) fn parse(lines: &[&str], start: usize) -> (MarkdownNode, usize) {
    let mut text = String::new();
    let mut i = start;
    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) {
            text.push('\n');
        } else if leading_spaces(line) >= CODE_INDENT {
            text.push_str(skip_chars(line, CODE_INDENT));
        } else {
            break;
        }
        i += 1;
    }

    trim_trailing_blank_lines(&mut text);
    (MarkdownNode::CodeBlock(vec![MarkdownNode::Text(text)]), i)
}

fn trim_trailing_blank_lines(text: &mut String) {
    while text.ends_with('\n') {
        let rest = &text[..text.len() - 1];
        if rest.is_empty() || rest.ends_with('\n') {
            text.truncate(text.len() - 1);
        } else {
            break;
        }
    }
}
