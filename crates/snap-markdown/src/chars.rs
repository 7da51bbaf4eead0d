//! Character classification shared by the block and inline phases.

/// Whitespace as understood by the grammar (includes line terminators).
pub(crate) fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Punctuation for flanking tests and backslash escapes: the ASCII
/// punctuation set.
pub(crate) fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Characters that may appear inside an auto-detected URL.
pub(crate) fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '$' | '-'
                | '_'
                | '.'
                | '+'
                | ';'
                | '/'
                | '?'
                | ':'
                | '@'
                | '&'
                | '='
                | '~'
                | '#'
                | '['
                | ']'
                | '!'
                | '\''
                | '('
                | ')'
                | '*'
                | ','
                | '%'
        )
        || !c.is_ascii()
}

/// Rewrites every run of whitespace as a single ASCII space.
///
/// Leading and trailing runs are collapsed too, not stripped; callers that
/// want stripping trim first.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_whitespace = false;
    for c in s.chars() {
        if is_whitespace(c) {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}
