//! Modal lexer for the card template language.
//!
//! Text mode recognizes `{{` and `{{/` and keeps everything else as text.
//! Tag mode recognizes names and punctuation up to `}}`. A newline or `{`
//! inside a tag ends tag mode without being consumed; a lone `}` is `Garbage`.
//!
//! Each mode is its own Logos enum; switching modes re-lexes from a byte offset.

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

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum TextMode {
    #[token("{{")]
    Open,

    #[token("{{/")]
    OpenClose,

    #[regex(r"[^{]+", allow_greedy = true)]
    Text,

    /// Single `{` that does not start a tag
    #[token("{")]
    Brace,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum TagMode {
    #[token("}}")]
    Close,

    #[token(":")]
    Colon,

    #[token("#")]
    Hash,

    #[token("^")]
    Caret,

    /// Lone `}`
    #[token("}")]
    StrayBrace,

    #[regex(r"[^:{}#^\r\n]+", allow_greedy = true)]
    Name,
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < source.len() {
        offset = lex_text(source, offset, &mut tokens);
        if offset < source.len() {
            offset = lex_tag(source, offset, &mut tokens);
        }
    }

    tracing::trace!(tokens = tokens.len(), "lexed template");
    tokens
}

/// Lexes text until a tag opener. Returns the offset just past the opener.
fn lex_text(source: &str, offset: usize, tokens: &mut Vec<Token>) -> usize {
    let mut lexer = TextMode::lexer(&source[offset..]);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let range = offset + span.start..offset + span.end;
        // Every character matches some text-mode token
        let Ok(kind) = result else {
            tokens.push(Token::new(SyntaxKind::TextContent, range_to_text_range(range)));
            continue;
        };
        match kind {
            TextMode::Open => {
                tokens.push(Token::new(SyntaxKind::StartTag, range_to_text_range(range)));
                return offset + span.end;
            }
            TextMode::OpenClose => {
                tokens.push(Token::new(
                    SyntaxKind::StartCloseTag,
                    range_to_text_range(range),
                ));
                return offset + span.end;
            }
            TextMode::Text | TextMode::Brace => {
                tokens.push(Token::new(SyntaxKind::TextContent, range_to_text_range(range)));
            }
        }
    }

    source.len()
}

/// Lexes tag contents. Returns the offset where text mode resumes.
fn lex_tag(source: &str, offset: usize, tokens: &mut Vec<Token>) -> usize {
    let mut lexer = TagMode::lexer(&source[offset..]);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let range = offset + span.start..offset + span.end;
        let kind = match result {
            Ok(TagMode::Close) => {
                tokens.push(Token::new(SyntaxKind::EndTag, range_to_text_range(range)));
                return offset + span.end;
            }
            Ok(TagMode::Colon) => SyntaxKind::TransformerDelimiter,
            Ok(TagMode::Hash) => SyntaxKind::If,
            Ok(TagMode::Caret) => SyntaxKind::Unless,
            Ok(TagMode::Name) => SyntaxKind::Name,
            Ok(TagMode::StrayBrace) => SyntaxKind::Garbage,
            // Newline or `{`: the tag is broken, resume in text mode here
            Err(()) => return offset + span.start,
        };
        tokens.push(Token::new(kind, range_to_text_range(range)));
    }

    source.len()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'t>(source: &'t str, token: &Token) -> &'t str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
