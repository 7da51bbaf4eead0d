use serde::{Deserialize, Serialize};

/// A node in a parsed snap description.
///
/// `Text` is the only variant carrying a string payload; every other variant
/// is a container holding an ordered sequence of children. The tree is built
/// bottom-up during parsing and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkdownNode {
    /// Literal text with whitespace runs already collapsed.
    Text(String),
    Paragraph(Vec<MarkdownNode>),
    UnorderedList(Vec<MarkdownNode>),
    ListItem(Vec<MarkdownNode>),
    /// An indented code block. Always wraps a single `Text` child holding
    /// the verbatim (4-space-stripped) content.
    CodeBlock(Vec<MarkdownNode>),
    /// A backtick code span. Always wraps a single `Text` child.
    CodeSpan(Vec<MarkdownNode>),
    Emphasis(Vec<MarkdownNode>),
    StrongEmphasis(Vec<MarkdownNode>),
    /// An auto-detected link. Always wraps a single `Text` child holding the
    /// matched URL.
    Url(Vec<MarkdownNode>),
}

/// The variant tag of a [`MarkdownNode`], detached from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Text,
    Paragraph,
    UnorderedList,
    ListItem,
    CodeBlock,
    CodeSpan,
    Emphasis,
    StrongEmphasis,
    Url,
}

impl MarkdownNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            MarkdownNode::Text(_) => NodeKind::Text,
            MarkdownNode::Paragraph(_) => NodeKind::Paragraph,
            MarkdownNode::UnorderedList(_) => NodeKind::UnorderedList,
            MarkdownNode::ListItem(_) => NodeKind::ListItem,
            MarkdownNode::CodeBlock(_) => NodeKind::CodeBlock,
            MarkdownNode::CodeSpan(_) => NodeKind::CodeSpan,
            MarkdownNode::Emphasis(_) => NodeKind::Emphasis,
            MarkdownNode::StrongEmphasis(_) => NodeKind::StrongEmphasis,
            MarkdownNode::Url(_) => NodeKind::Url,
        }
    }

    /// The string payload, present only on `Text` nodes.
    pub fn text(&self) -> Option<&str> {
        match self {
            MarkdownNode::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Ordered children; empty for `Text` nodes.
    pub fn children(&self) -> &[MarkdownNode] {
        match self {
            MarkdownNode::Text(_) => &[],
            MarkdownNode::Paragraph(c)
            | MarkdownNode::UnorderedList(c)
            | MarkdownNode::ListItem(c)
            | MarkdownNode::CodeBlock(c)
            | MarkdownNode::CodeSpan(c)
            | MarkdownNode::Emphasis(c)
            | MarkdownNode::StrongEmphasis(c)
            | MarkdownNode::Url(c) => c,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<MarkdownNode>> {
        match self {
            MarkdownNode::Text(_) => None,
            MarkdownNode::Paragraph(c)
            | MarkdownNode::UnorderedList(c)
            | MarkdownNode::ListItem(c)
            | MarkdownNode::CodeBlock(c)
            | MarkdownNode::CodeSpan(c)
            | MarkdownNode::Emphasis(c)
            | MarkdownNode::StrongEmphasis(c)
            | MarkdownNode::Url(c) => Some(c),
        }
    }

    /// Concatenated literal text of this node and all its descendants, with
    /// container boundaries flattened away.
    pub fn plain_text(&self) -> String {
        fn walk(node: &MarkdownNode, out: &mut String) {
            match node {
                MarkdownNode::Text(s) => out.push_str(s),
                _ => {
                    for child in node.children() {
                        walk(child, out);
                    }
                }
            }
        }
        let mut out = String::new();
        walk(self, &mut out);
        out
    }
}
