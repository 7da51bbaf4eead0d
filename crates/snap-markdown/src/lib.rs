//! Restricted-markdown parser for snap package descriptions.
//!
//! Snap descriptions allow a small CommonMark subset: paragraphs, unordered
//! lists, indented code blocks, code spans, emphasis and strong emphasis,
//! plus bare URLs detected without link syntax. [`parse`] turns a
//! description into an ordered tree of [`MarkdownNode`]s and never fails;
//! anything the grammar does not recognize comes back as plain text.
//!
//! ```
//! use snap_markdown::{MarkdownNode, MarkdownVersion, parse};
//!
//! let nodes = parse(MarkdownVersion::V0, "Visit *our* site\n");
//! let MarkdownNode::Paragraph(children) = &nodes[0] else {
//!     panic!("expected a paragraph");
//! };
//! assert_eq!(children[0].text(), Some("Visit "));
//! assert_eq!(children[1], MarkdownNode::Emphasis(vec![
//!     MarkdownNode::Text("our".into()),
//! ]));
//! ```

mod chars;
mod node;
mod parsing;
mod version;

pub use node::{MarkdownNode, NodeKind};
pub use parsing::parse;
pub use version::{MarkdownVersion, UnknownVersionError};
