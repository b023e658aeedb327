//! Cloze deletions inside field values: `{{c1::answer}}` and `{{c1::answer::hint}}`.
//!
//! The marker for the card's ordinal is hidden on the question side and
//! highlighted on the answer side. Other markers show their answer text.
//! A marker without its closing `}}` is kept as written.

use logos::Logos;

use super::fields::Side;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum ClozeToken {
    #[regex(r"\{\{c[0-9]+::")]
    Open,

    #[token("::")]
    Separator,

    #[token("}}")]
    Close,

    #[regex(r"[^{}:]+", allow_greedy = true)]
    Text,

    #[regex(r"[{}:]")]
    Char,
}

struct Marker {
    ordinal: Option<u32>,
    start: usize,
    answer: String,
    hint: Option<String>,
}

impl Marker {
    fn push(&mut self, text: &str) {
        match &mut self.hint {
            Some(hint) => hint.push_str(text),
            None => self.answer.push_str(text),
        }
    }
}

/// Renders every cloze marker in `value` for card `ordinal` on `side`.
pub fn render(value: &str, ordinal: u32, side: Side) -> String {
    let mut out = String::with_capacity(value.len());
    let mut marker: Option<Marker> = None;
    let mut lexer = ClozeToken::lexer(value);

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        let Some(open) = marker.as_mut() else {
            if let Ok(ClozeToken::Open) = result {
                marker = Some(Marker {
                    ordinal: parse_ordinal(slice),
                    start: lexer.span().start,
                    answer: String::new(),
                    hint: None,
                });
            } else {
                out.push_str(slice);
            }
            continue;
        };

        match result {
            Ok(ClozeToken::Separator) if open.hint.is_none() => open.hint = Some(String::new()),
            Ok(ClozeToken::Close) => {
                if let Some(done) = marker.take() {
                    render_marker(&done, ordinal, side, &mut out);
                }
            }
            _ => open.push(slice),
        }
    }

    if let Some(unterminated) = marker {
        out.push_str(&value[unterminated.start..]);
    }

    out
}

/// Cloze numbers present in `value`, sorted and deduplicated.
pub fn ordinals(value: &str) -> Vec<u32> {
    let mut found: Vec<u32> = ClozeToken::lexer(value)
        .spanned()
        .filter(|(token, _)| *token == Ok(ClozeToken::Open))
        .filter_map(|(_, span)| parse_ordinal(&value[span]))
        .collect();
    found.sort_unstable();
    found.dedup();
    found
}

/// `{{c12::` -> `12`
fn parse_ordinal(open: &str) -> Option<u32> {
    open.strip_prefix("{{c")?.strip_suffix("::")?.parse().ok()
}

fn render_marker(marker: &Marker, ordinal: u32, side: Side, out: &mut String) {
    if marker.ordinal != Some(ordinal) {
        out.push_str(&marker.answer);
        return;
    }

    out.push_str(r#"<span class="cloze">"#);
    match side {
        Side::Question => {
            let hint = marker.hint.as_deref().filter(|h| !h.is_empty());
            out.push('[');
            out.push_str(hint.unwrap_or("..."));
            out.push(']');
        }
        Side::Answer => out.push_str(&marker.answer),
    }
    out.push_str("</span>");
}
