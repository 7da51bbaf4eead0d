//! Final inline stage: wraps bare URLs in `Url` nodes.

use crate::chars::is_url_char;
use crate::node::MarkdownNode;

const URL_PREFIXES: [&str; 3] = ["http://", "https://", "mailto:"];

/// Post-order walk splitting the first autolink-eligible substring out of
/// each `Text` node. Already-extracted `Url` nodes are not descended into,
/// and the trailing `Text` produced by a split is not rescanned, so each
/// original text run yields at most one URL.
pub(crate) fn extract_urls(nodes: &mut Vec<MarkdownNode>) {
    let mut i = 0;
    while i < nodes.len() {
        match &mut nodes[i] {
            MarkdownNode::Url(_) => i += 1,
            MarkdownNode::Text(s) => {
                let Some((start, end)) = find_url(s) else {
                    i += 1;
                    continue;
                };
                let before = s[..start].to_string();
                let url = s[start..end].to_string();
                let after = s[end..].to_string();

                let mut replacement = Vec::with_capacity(3);
                if !before.is_empty() {
                    replacement.push(MarkdownNode::Text(before));
                }
                replacement.push(MarkdownNode::Url(vec![MarkdownNode::Text(url)]));
                if !after.is_empty() {
                    replacement.push(MarkdownNode::Text(after));
                }
                let advance = replacement.len();
                nodes.splice(i..=i, replacement);
                i += advance;
            }
            other => {
                if let Some(children) = other.children_mut() {
                    extract_urls(children);
                }
                i += 1;
            }
        }
    }
}

/// Byte range of the first URL in `s`, if any.
///
/// The scan starts at the earliest occurrence of a known prefix and runs
/// while characters stay in the URL class. A `)` with no matching `(`
/// earlier in the URL ends it, so `(see http://x)` keeps the closing paren
/// out of the link.
fn find_url(s: &str) -> Option<(usize, usize)> {
    let start = URL_PREFIXES.iter().filter_map(|p| s.find(p)).min()?;

    let mut end = start;
    let mut open_parens: u32 = 0;
    for (offset, c) in s[start..].char_indices() {
        if !is_url_char(c) {
            break;
        }
        match c {
            '(' => open_parens += 1,
            ')' => {
                if open_parens == 0 {
                    break;
                }
                open_parens -= 1;
            }
            _ => {}
        }
        end = start + offset + c.len_utf8();
    }
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MarkdownNode {
        MarkdownNode::Text(s.into())
    }

    fn url(s: &str) -> MarkdownNode {
        MarkdownNode::Url(vec![text(s)])
    }

    #[test]
    fn splits_url_with_surrounding_text() {
        let mut nodes = vec![text("Visit http://example.com today")];
        extract_urls(&mut nodes);
        assert_eq!(
            nodes,
            vec![text("Visit "), url("http://example.com"), text(" today")]
        );
    }

    #[test]
    fn url_at_start_has_no_leading_text() {
        let mut nodes = vec![text("https://example.com rocks")];
        extract_urls(&mut nodes);
        assert_eq!(nodes, vec![url("https://example.com"), text(" rocks")]);
    }

    #[test]
    fn whole_node_may_be_url() {
        let mut nodes = vec![text("mailto:hi@example.com")];
        extract_urls(&mut nodes);
        assert_eq!(nodes, vec![url("mailto:hi@example.com")]);
    }

    #[test]
    fn earliest_prefix_wins() {
        let mut nodes = vec![text("see mailto:a@b or http://c")];
        extract_urls(&mut nodes);
        assert_eq!(
            nodes,
            vec![text("see "), url("mailto:a@b"), text(" or http://c")]
        );
    }

    #[test]
    fn unmatched_close_paren_is_excluded() {
        let mut nodes = vec![text("(see http://example.com/a) after")];
        extract_urls(&mut nodes);
        assert_eq!(
            nodes,
            vec![
                text("(see "),
                url("http://example.com/a"),
                text(") after"),
            ]
        );
    }

    #[test]
    fn balanced_parens_stay_inside_url() {
        let mut nodes = vec![text("http://example.com/x(y)z end")];
        extract_urls(&mut nodes);
        assert_eq!(nodes, vec![url("http://example.com/x(y)z"), text(" end")]);
    }

    #[test]
    fn no_prefix_leaves_node_unchanged() {
        let mut nodes = vec![text("nothing to see here")];
        extract_urls(&mut nodes);
        assert_eq!(nodes, vec![text("nothing to see here")]);
    }

    #[test]
    fn one_url_per_text_run() {
        let mut nodes = vec![text("a http://x b http://y c")];
        extract_urls(&mut nodes);
        assert_eq!(
            nodes,
            vec![text("a "), url("http://x"), text(" b http://y c")]
        );
    }

    #[test]
    fn recurses_into_containers_but_not_urls() {
        let mut nodes = vec![MarkdownNode::Emphasis(vec![text("go to http://a now")])];
        extract_urls(&mut nodes);
        assert_eq!(
            nodes,
            vec![MarkdownNode::Emphasis(vec![
                text("go to "),
                url("http://a"),
                text(" now"),
            ])]
        );
    }

    #[test]
    fn non_ascii_stays_in_url() {
        let mut nodes = vec![text("http://ex.com/café end")];
        extract_urls(&mut nodes);
        assert_eq!(nodes, vec![url("http://ex.com/café"), text(" end")]);
    }
}
