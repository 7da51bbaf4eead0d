//! Third inline stage: merges adjacent text nodes.

use crate::node::MarkdownNode;

/// Post-order pass replacing every run of adjacent `Text` siblings with a
/// single concatenated `Text`. Children are finalized before their parent's
/// sequence is scanned.
pub(crate) fn merge_text(nodes: &mut Vec<MarkdownNode>) {
    for node in nodes.iter_mut() {
        if let Some(children) = node.children_mut() {
            merge_text(children);
        }
    }

    let mut i = 0;
    while i + 1 < nodes.len() {
        if matches!(
            (&nodes[i], &nodes[i + 1]),
            (MarkdownNode::Text(_), MarkdownNode::Text(_))
        ) {
            if let MarkdownNode::Text(next) = nodes.remove(i + 1)
                && let MarkdownNode::Text(current) = &mut nodes[i]
            {
                current.push_str(&next);
            }
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MarkdownNode {
        MarkdownNode::Text(s.into())
    }

    #[test]
    fn merges_adjacent_runs() {
        let mut nodes = vec![text("a"), text("b"), text("c")];
        merge_text(&mut nodes);
        assert_eq!(nodes, vec![text("abc")]);
    }

    #[test]
    fn containers_break_runs() {
        let mut nodes = vec![
            text("a"),
            MarkdownNode::Emphasis(vec![text("b")]),
            text("c"),
            text("d"),
        ];
        merge_text(&mut nodes);
        assert_eq!(
            nodes,
            vec![
                text("a"),
                MarkdownNode::Emphasis(vec![text("b")]),
                text("cd"),
            ]
        );
    }

    #[test]
    fn recurses_into_children_first() {
        let mut nodes = vec![MarkdownNode::Emphasis(vec![text("x"), text("y")])];
        merge_text(&mut nodes);
        assert_eq!(nodes, vec![MarkdownNode::Emphasis(vec![text("xy")])]);
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let mut nodes: Vec<MarkdownNode> = vec![];
        merge_text(&mut nodes);
        assert!(nodes.is_empty());

        let mut nodes = vec![text("a")];
        merge_text(&mut nodes);
        assert_eq!(nodes, vec![text("a")]);
    }
}
