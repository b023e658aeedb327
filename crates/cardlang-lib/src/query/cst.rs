//! Syntax kinds for the search query language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `QueryLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

use crate::assist::HighlightClass;
use crate::syntax::SyntaxLanguage;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    /// Negation prefix. Only a word's first character can be a `Minus`.
    #[token("-")]
    Minus,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[doc(hidden)]
    StringLiteral, // Lexer-internal only

    /// A string missing its closing quote; runs to end of input.
    #[regex(r#""(?:[^"\\]|\\.)*\\?"#, allow_greedy = true)]
    #[doc(hidden)]
    UnterminatedStringLiteral, // Lexer-internal only

    DoubleQuote,
    /// String content between quotes, escapes still in place
    StrVal,

    /// Bare text. `tag:`/`deck:`/`template:` prefixes and `OR` are split off by the lexer.
    #[regex(r#"[^\s()"\-][^\s()"]*"#, allow_greedy = true)]
    Word,

    /// Case-sensitive `OR`
    KwOr,
    TagPrefix,
    DeckPrefix,
    TemplatePrefix,

    #[regex(r"\s+")]
    Whitespace,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Program,
    SimpleString,
    QuotedString,
    Not,
    Or,
    ParenthesizedExpression,
    Tag,
    Deck,
    Template,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueryLang {}

impl Language for QueryLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

impl SyntaxLanguage for QueryLang {
    const ROOT_NAME: &'static str = "Program";

    fn is_error(kind: SyntaxKind) -> bool {
        kind == Error
    }

    fn is_trivia(kind: SyntaxKind) -> bool {
        kind.is_trivia()
    }

    fn highlight(kind: SyntaxKind) -> HighlightClass {
        match kind {
            ParenOpen | ParenClose => HighlightClass::Brace,
            // `Not` stays plain: its operand is highlighted on its own
            Minus | KwOr | Or => HighlightClass::ControlOperator,
            TagPrefix | DeckPrefix | TemplatePrefix => HighlightClass::AttributeName,
            Tag | Deck | Template => HighlightClass::TagName,
            Garbage | Error => HighlightClass::Invalid,
            StringLiteral | UnterminatedStringLiteral | DoubleQuote | StrVal | Word
            | Whitespace | Program | SimpleString | QuotedString | Not
            | ParenthesizedExpression | __LAST => HighlightClass::Text,
        }
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<QueryLang>;
pub type SyntaxToken = rowan::SyntaxToken<QueryLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind = QueryLang::kind_from_raw(rowan::SyntaxKind(i));
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const PREFIXES: TokenSet = TokenSet::new(&[TagPrefix, DeckPrefix, TemplatePrefix]);

    /// FIRST set of a term. `KwOr` and `ParenClose` are handled by the program loop.
    pub const TERM_FIRST: TokenSet =
        TokenSet::new(&[ParenOpen, Minus, DoubleQuote, Word, Garbage]).union(PREFIXES);

    /// Tokens that may directly follow `-` to form a negation.
    pub const NOT_OPERAND_FIRST: TokenSet =
        TokenSet::new(&[ParenOpen, Minus, DoubleQuote, Word]).union(PREFIXES);

    /// Tokens that may directly follow a `tag:`-style prefix.
    pub const PREFIX_VALUE_FIRST: TokenSet = TokenSet::new(&[Word, DoubleQuote]);
}
