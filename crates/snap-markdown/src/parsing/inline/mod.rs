//! Inline phase: character-level parsing of paragraph text.
//!
//! Stages run in a fixed order: tokenize, resolve emphasis, convert the
//! surviving tokens to nodes, coalesce adjacent text, extract URLs.

mod autolink;
mod coalesce;
mod emphasis;
mod tokenizer;

use crate::node::MarkdownNode;

use tokenizer::InlineToken;

/// Parses one logical paragraph string (already stripped of leading and
/// trailing whitespace) into its child nodes.
pub(crate) fn parse_inline(text: &str) -> Vec<MarkdownNode> {
    let mut tokens = tokenizer::tokenize(text);
    emphasis::resolve(&mut tokens);
    let mut nodes: Vec<MarkdownNode> = tokens.into_iter().map(InlineToken::into_node).collect();
    coalesce::merge_text(&mut nodes);
    autolink::extract_urls(&mut nodes);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MarkdownNode {
        MarkdownNode::Text(s.into())
    }

    #[test]
    fn plain_text_is_a_single_node() {
        assert_eq!(parse_inline("just words"), vec![text("just words")]);
    }

    #[test]
    fn unmatched_delimiters_coalesce_back_into_text() {
        assert_eq!(parse_inline("a*b"), vec![text("a*b")]);
        assert_eq!(parse_inline("`open"), vec![text("`open")]);
    }

    #[test]
    fn stages_compose() {
        assert_eq!(
            parse_inline("see *this* at http://example.com now"),
            vec![
                text("see "),
                MarkdownNode::Emphasis(vec![text("this")]),
                text(" at "),
                MarkdownNode::Url(vec![text("http://example.com")]),
                text(" now"),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_nodes() {
        assert!(parse_inline("").is_empty());
    }
}
