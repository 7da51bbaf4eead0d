//! The two-phase description parser.
//!
//! Phase one ([`blocks`]) splits the input into terminator-preserving lines
//! and groups them into paragraphs, lists and code blocks. Phase two
//! ([`inline`]) scans each paragraph's text for code spans, escapes,
//! emphasis and URLs. List items feed their accumulated text back through
//! phase one.

pub(crate) mod blocks;
pub(crate) mod inline;
pub(crate) mod lines;

use crate::node::MarkdownNode;
use crate::version::MarkdownVersion;

/// Parses a snap description into its top-level block nodes.
///
/// Total over all inputs: malformed markup degrades to plain text and the
/// empty string yields an empty sequence. `version` names the node-kind
/// vocabulary the caller accepts; every version parses identically today.
pub fn parse(version: MarkdownVersion, text: &str) -> Vec<MarkdownNode> {
    match version {
        MarkdownVersion::V0 => blocks::parse_document(text),
    }
}
