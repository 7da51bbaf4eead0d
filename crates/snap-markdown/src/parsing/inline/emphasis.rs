//! Second inline stage: folds matched delimiter runs into `Emphasis` and
//! `StrongEmphasis` containers.
//!
//! The scan is quadratic in the number of delimiter tokens in the worst
//! case, which is fine for description-length text. Termination holds
//! because every match strictly reduces the total remaining delimiter
//! length.

use crate::node::MarkdownNode;

use super::tokenizer::{DelimiterRun, InlineToken};

/// Resolves emphasis in place, consuming delimiter metadata.
///
/// For each token that can close, the nearest earlier token that can open
/// with the same marker is located. Matched endpoints give up one delimiter
/// character each (two when both runs have more than one left, making the
/// match strong); the inclusive range between them collapses into a single
/// container and any leftover run length is re-emitted as a smaller
/// delimiter token next to it. The scan then resumes from the opener's
/// position so leftovers are revisited.
pub(crate) fn resolve(tokens: &mut Vec<InlineToken>) {
    let mut end = 0;
    while end < tokens.len() {
        let closer = match &tokens[end] {
            InlineToken::Delimiter(run) if run.can_close => run.clone(),
            _ => {
                end += 1;
                continue;
            }
        };
        let Some((start, opener)) = find_opener(tokens, end, &closer) else {
            end += 1;
            continue;
        };

        let strong = opener.length > 1 && closer.length > 1;
        let consumed = if strong { 2 } else { 1 };

        let mut removed: Vec<InlineToken> = tokens.drain(start..=end).collect();
        removed.pop(); // the closer itself
        let children: Vec<MarkdownNode> = removed
            .drain(1..) // everything strictly between the endpoints
            .map(InlineToken::into_node)
            .collect();
        let container = if strong {
            MarkdownNode::StrongEmphasis(children)
        } else {
            MarkdownNode::Emphasis(children)
        };

        let mut replacement = Vec::with_capacity(3);
        if opener.length > consumed {
            replacement.push(InlineToken::Delimiter(DelimiterRun {
                length: opener.length - consumed,
                ..opener
            }));
        }
        replacement.push(InlineToken::Node(container));
        if closer.length > consumed {
            replacement.push(InlineToken::Delimiter(DelimiterRun {
                length: closer.length - consumed,
                ..closer
            }));
        }
        tokens.splice(start..start, replacement);

        // Revisit from the opener so re-emitted leftovers get another look.
        end = start;
    }
}

/// Backward scan for the nearest compatible opener.
///
/// The multiple-of-three rule rejects a candidate when both endpoints could
/// open and close and their combined lengths divide by three. Only the
/// first such candidate is skipped; there is no exhaustive backtracking.
fn find_opener(
    tokens: &[InlineToken],
    end: usize,
    closer: &DelimiterRun,
) -> Option<(usize, DelimiterRun)> {
    let mut skipped = false;
    for start in (0..end).rev() {
        let InlineToken::Delimiter(run) = &tokens[start] else {
            continue;
        };
        if !run.can_open || run.marker != closer.marker {
            continue;
        }
        let both_dual = run.can_open && run.can_close && closer.can_open && closer.can_close;
        if both_dual && (run.length + closer.length) % 3 == 0 && !skipped {
            skipped = true;
            continue;
        }
        return Some((start, run.clone()));
    }
    None
}
