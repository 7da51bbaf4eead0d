use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::node::NodeKind;

/// Grammar version advertised by clients of the parser.
///
/// The version selects which node kinds a caller is prepared to receive, so
/// a future grammar revision can add node kinds without breaking existing
/// consumers. It does not change how the current grammar parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkdownVersion {
    /// The initial grammar: paragraphs, unordered lists, indented code
    /// blocks, code spans, emphasis, strong emphasis and bare URLs.
    #[default]
    V0,
}

impl MarkdownVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkdownVersion::V0 => "0",
        }
    }

    /// Node kinds that may appear in output for this version.
    pub fn supported_kinds(self) -> &'static [NodeKind] {
        match self {
            MarkdownVersion::V0 => &[
                NodeKind::Text,
                NodeKind::Paragraph,
                NodeKind::UnorderedList,
                NodeKind::ListItem,
                NodeKind::CodeBlock,
                NodeKind::CodeSpan,
                NodeKind::Emphasis,
                NodeKind::StrongEmphasis,
                NodeKind::Url,
            ],
        }
    }

    pub fn supports(self, kind: NodeKind) -> bool {
        self.supported_kinds().contains(&kind)
    }
}

impl fmt::Display for MarkdownVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown markdown version: {0:?}")]
pub struct UnknownVersionError(String);

impl FromStr for MarkdownVersion {
    type Err = UnknownVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(MarkdownVersion::V0),
            other => Err(UnknownVersionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_version() {
        assert_eq!("0".parse::<MarkdownVersion>(), Ok(MarkdownVersion::V0));
    }

    #[test]
    fn reject_unknown_version() {
        assert!("1".parse::<MarkdownVersion>().is_err());
        assert!("".parse::<MarkdownVersion>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let v = MarkdownVersion::V0;
        assert_eq!(v.to_string().parse::<MarkdownVersion>(), Ok(v));
    }

    #[test]
    fn v0_supports_every_kind() {
        assert!(MarkdownVersion::V0.supports(NodeKind::Url));
        assert_eq!(MarkdownVersion::V0.supported_kinds().len(), 9);
    }
}
