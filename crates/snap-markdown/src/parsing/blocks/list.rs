//! Bullet lists: marker scanning and item accumulation.

use crate::node::MarkdownNode;
use crate::parsing::lines::{is_blank, leading_whitespace, skip_chars};

/// A successfully scanned bullet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bullet {
    /// The marker character: `-`, `+` or `*`.
    pub marker: char,
    /// Column where the item's text starts. Continuation lines must be
    /// indented at least this far and have exactly this many characters
    /// stripped. For an empty item this is one past the marker, not past
    /// the whitespace that follows it.
    pub text_offset: usize,
    /// True when nothing but whitespace follows the marker.
    pub blank: bool,
}

/// Scans a line for a bullet: optional leading whitespace, a marker from
/// `-`/`+`/`*`, then a whitespace character.
pub(crate) fn scan_bullet(line: &str) -> Option<Bullet> {
    let mut chars = line.chars();
    let mut col = 0;
    let marker = loop {
        let c = chars.next()?;
        if c.is_whitespace() {
            col += 1;
            continue;
        }
        break c;
    };
    if !matches!(marker, '-' | '+' | '*') {
        return None;
    }
    if !chars.next()?.is_whitespace() {
        return None;
    }

    let mut text_col = col + 2;
    for c in chars {
        if !c.is_whitespace() {
            return Some(Bullet {
                marker,
                text_offset: text_col,
                blank: false,
            });
        }
        text_col += 1;
    }
    Some(Bullet {
        marker,
        text_offset: col + 1,
        blank: true,
    })
}

/// Parses a list starting at `lines[start]` (already scanned as `first`).
/// Returns the `UnorderedList` node and the first unconsumed line index.
///
/// Per line, in order: a blank line ends the list if the current item
/// started empty and otherwise joins it as a bare newline; a line indented
/// to the item's text offset continues the item; a bullet with the same
/// marker starts a new item (its indentation is deliberately not checked
/// against the original offset); anything else ends the list and is left
/// for the caller. Each item's accumulated text is re-parsed by the whole
/// block phase, which is what makes nested structure work.
pub(crate) fn parse(lines: &[&str], start: usize, first: Bullet, depth: usize) -> (MarkdownNode, usize) {
    let mut items = Vec::new();
    let mut bullet = first;
    let mut item_text = skip_chars(lines[start], bullet.text_offset).to_string();
    let mut i = start + 1;

    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) {
            if bullet.blank {
                break;
            }
            item_text.push('\n');
            i += 1;
            continue;
        }
        if leading_whitespace(line) >= bullet.text_offset {
            item_text.push_str(skip_chars(line, bullet.text_offset));
            i += 1;
            continue;
        }
        match scan_bullet(line) {
            Some(next) if next.marker == bullet.marker => {
                items.push(finish_item(&item_text, depth));
                bullet = next;
                item_text = skip_chars(line, bullet.text_offset).to_string();
                i += 1;
            }
            _ => break,
        }
    }

    items.push(finish_item(&item_text, depth));
    (MarkdownNode::UnorderedList(items), i)
}

fn finish_item(text: &str, depth: usize) -> MarkdownNode {
    MarkdownNode::ListItem(super::parse_blocks(text, depth + 1))
}
