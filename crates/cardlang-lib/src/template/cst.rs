//! Syntax kinds for the card template language.
//!
//! Tokens come from the modal lexer in [`super::lexer`], so `SyntaxKind` does
//! not derive `Logos` itself. `TemplateLang` implements Rowan's `Language` trait.

use rowan::Language;

use crate::assist::HighlightClass;
use crate::syntax::SyntaxLanguage;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    /// `{{`
    StartTag = 0,
    /// `{{/`
    StartCloseTag,
    /// `}}` of an open or close tag
    EndTag,
    /// `}}` of a self-closing tag. Lexed as `EndTag`, remapped by the parser.
    SelfCloseEndTag,
    /// `#`
    If,
    /// `^`
    Unless,
    /// `:`
    TransformerDelimiter,
    /// Field or transformer name, surrounding spaces included
    Name,
    TextContent,
    /// Lone `}` inside a tag
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Document,
    Text,
    Element,
    OpenTag,
    SelfClosingTag,
    CloseTag,
    TagName,
    Transformer,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Tokens only produced between `{{` and `}}`.
    #[inline]
    pub fn is_tag_token(self) -> bool {
        matches!(
            self,
            EndTag | SelfCloseEndTag | If | Unless | TransformerDelimiter | Name | Garbage
        )
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
pub enum TemplateLang {}

impl Language for TemplateLang {
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

impl SyntaxLanguage for TemplateLang {
    const ROOT_NAME: &'static str = "Document";

    fn is_error(kind: SyntaxKind) -> bool {
        kind == Error
    }

    fn is_trivia(_kind: SyntaxKind) -> bool {
        false
    }

    fn highlight(kind: SyntaxKind) -> HighlightClass {
        match kind {
            StartTag | StartCloseTag | EndTag | SelfCloseEndTag => HighlightClass::Brace,
            If | Unless => HighlightClass::ControlOperator,
            TransformerDelimiter => HighlightClass::Separator,
            TagName => HighlightClass::TagName,
            Transformer => HighlightClass::AttributeName,
            Garbage | Error => HighlightClass::Invalid,
            Name | TextContent | Document | Text | Element | OpenTag | SelfClosingTag
            | CloseTag | __LAST => HighlightClass::Text,
        }
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<TemplateLang>;
pub type SyntaxToken = rowan::SyntaxToken<TemplateLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;
