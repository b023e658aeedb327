use serde::Serialize;

use crate::query::{Program, SyntaxKind, SyntaxNode};

/// Filter prefixes offered at the start of a term.
const PREFIX_OPTIONS: [&str; 3] = ["deck", "tag", "template"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub label: String,
    /// Text that replaces the completion range.
    pub apply: String,
}

/// Completions replacing the byte range `[from, to)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    pub from: u32,
    pub to: u32,
    pub options: Vec<Completion>,
}

/// Prefix completions for the query cursor at byte `offset`.
///
/// Offered at the top level and inside groups, replacing the word fragment
/// left of the cursor. With nothing typed yet, only an `explicit` request
/// (not one triggered by typing) gets completions.
pub fn complete_query(program: &Program, offset: u32, explicit: bool) -> Option<CompletionResult> {
    let root = program.as_cst();
    let source = root.text().to_string();
    let cursor = usize::try_from(offset).ok()?;
    let before = source.get(..cursor)?;

    let context = context_at(root, offset)?;
    if !offers_prefixes(&context) {
        return None;
    }

    let fragment_len: usize = before
        .chars()
        .rev()
        .take_while(|c| is_word_char(*c))
        .map(char::len_utf8)
        .sum();
    if fragment_len == 0 && !explicit {
        return None;
    }

    let from = (cursor - fragment_len) as u32;
    tracing::trace!(from, to = offset, "completing query prefixes");

    Some(CompletionResult {
        from,
        to: offset,
        options: PREFIX_OPTIONS
            .iter()
            .map(|option| Completion {
                label: (*option).to_string(),
                apply: format!("{option}:"),
            })
            .collect(),
    })
}

/// Innermost node at `offset`, preferring the token left of the cursor.
fn context_at(root: &SyntaxNode, offset: u32) -> Option<SyntaxNode> {
    if root.text_range().is_empty() {
        return Some(root.clone());
    }
    let token = root.token_at_offset(offset.into()).left_biased()?;
    token.parent()
}

fn offers_prefixes(node: &SyntaxNode) -> bool {
    match node.kind() {
        SyntaxKind::Program => true,
        SyntaxKind::SimpleString => node.parent().is_some_and(|parent| {
            matches!(
                parent.kind(),
                SyntaxKind::Program | SyntaxKind::ParenthesizedExpression
            )
        }),
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
