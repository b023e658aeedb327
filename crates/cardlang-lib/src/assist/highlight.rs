use rowan::NodeOrToken;
use serde::Serialize;

use super::HighlightClass;
use crate::syntax::SyntaxLanguage;

/// Byte range `[from, to)` of one token and its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub from: u32,
    pub to: u32,
    pub class: HighlightClass,
}

/// Classifies every non-trivia token of `root`, in source order.
///
/// A token inside an error node is `Invalid`. Otherwise it takes its own
/// class, falling back to the nearest ancestor with a class other than `Text`.
pub fn highlight<L: SyntaxLanguage>(root: &rowan::SyntaxNode<L>) -> Vec<HighlightSpan> {
    let spans: Vec<HighlightSpan> = root
        .descendants_with_tokens()
        .filter_map(NodeOrToken::into_token)
        .filter(|token| !L::is_trivia(token.kind()))
        .map(|token| {
            let range = token.text_range();
            HighlightSpan {
                from: range.start().into(),
                to: range.end().into(),
                class: classify(&token),
            }
        })
        .collect();

    tracing::trace!(spans = spans.len(), "highlighted {}", L::ROOT_NAME);
    spans
}

fn classify<L: SyntaxLanguage>(token: &rowan::SyntaxToken<L>) -> HighlightClass {
    let ancestors = || token.parent().into_iter().flat_map(|parent| parent.ancestors());

    if ancestors().any(|node| L::is_error(node.kind())) {
        return HighlightClass::Invalid;
    }

    let own = L::highlight(token.kind());
    if own != HighlightClass::Text {
        return own;
    }

    ancestors()
        .map(|node| L::highlight(node.kind()))
        .find(|class| *class != HighlightClass::Text)
        .unwrap_or(HighlightClass::Text)
}
