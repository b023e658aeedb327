//! Lexer for the search query language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! Logos recognizes the raw shapes; a post-processing pass then:
//! - splits string literals into quote + content + quote
//! - turns the bare word `OR` into a keyword
//! - splits `tag:`, `deck:` and `template:` prefixes off the word they start
//! - coalesces consecutive lexer errors into single `Garbage` tokens

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

const PREFIXES: [(&str, SyntaxKind); 3] = [
    ("tag:", SyntaxKind::TagPrefix),
    ("deck:", SyntaxKind::DeckPrefix),
    ("template:", SyntaxKind::TemplatePrefix),
];

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }

                let span = lexer.span();
                match kind {
                    SyntaxKind::StringLiteral => split_string_literal(span, true, &mut tokens),
                    SyntaxKind::UnterminatedStringLiteral => {
                        split_string_literal(span, false, &mut tokens)
                    }
                    SyntaxKind::Word => split_word(source, span, &mut tokens),
                    _ => tokens.push(Token::new(kind, range_to_text_range(span))),
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tracing::trace!(tokens = tokens.len(), "lexed query");
    tokens
}

/// Splits a string literal token into: quote + content + quote.
/// Unterminated literals get no closing quote.
fn split_string_literal(span: Range<usize>, terminated: bool, tokens: &mut Vec<Token>) {
    let start = span.start;
    let content_end = if terminated { span.end - 1 } else { span.end };

    tokens.push(Token::new(
        SyntaxKind::DoubleQuote,
        range_to_text_range(start..start + 1),
    ));

    if content_end > start + 1 {
        tokens.push(Token::new(
            SyntaxKind::StrVal,
            range_to_text_range(start + 1..content_end),
        ));
    }

    if terminated {
        tokens.push(Token::new(
            SyntaxKind::DoubleQuote,
            range_to_text_range(span.end - 1..span.end),
        ));
    }
}

/// Classifies a bare word: `OR` keyword, prefixed value, or plain word.
fn split_word(source: &str, span: Range<usize>, tokens: &mut Vec<Token>) {
    let text = &source[span.clone()];
    if text == "OR" {
        tokens.push(Token::new(SyntaxKind::KwOr, range_to_text_range(span)));
        return;
    }

    for (prefix, kind) in PREFIXES {
        let matches = text
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if !matches {
            continue;
        }
        let split = span.start + prefix.len();
        tokens.push(Token::new(kind, range_to_text_range(span.start..split)));
        if split < span.end {
            tokens.push(Token::new(
                SyntaxKind::Word,
                range_to_text_range(split..span.end),
            ));
        }
        return;
    }

    tokens.push(Token::new(SyntaxKind::Word, range_to_text_range(span)));
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
