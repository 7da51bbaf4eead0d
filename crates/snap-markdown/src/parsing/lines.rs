//! Line-level helpers for the block phase.
//!
//! Lines keep their original terminators attached so item and code block
//! text can be reassembled verbatim before being re-parsed.

/// Splits `text` into lines, each retaining its trailing `\n` if present.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            lines.push(&text[start..=i]);
            start = i + 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// True for empty or all-whitespace lines (the terminator counts).
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Number of leading space characters, for indented code block detection.
pub(crate) fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// Number of leading whitespace characters, for list continuation checks.
pub(crate) fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// The line with its first `n` characters removed; empty if shorter.
pub(crate) fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((i, _)) => &line[i..],
        None => "",
    }
}
