//! Syntax error collection over either language's tree.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::syntax::SyntaxLanguage;

/// One `Syntax error.` per `Error` node, in pre-order.
pub fn lint<L: SyntaxLanguage>(root: &rowan::SyntaxNode<L>) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    for node in root.descendants() {
        if L::is_error(node.kind()) {
            diagnostics
                .report(DiagnosticKind::SyntaxError, node.text_range())
                .emit();
        }
    }
    tracing::debug!(errors = diagnostics.len(), "linted {}", L::ROOT_NAME);
    diagnostics
}
