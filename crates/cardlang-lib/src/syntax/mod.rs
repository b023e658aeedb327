//! Infrastructure shared by the query and template syntax trees.
//!
//! Both languages build lossless Rowan trees. Each language provides a
//! `SyntaxKind` enum and a Rowan `Language` tag; [`SyntaxLanguage`] adds the
//! per-kind facts generic passes need (error detection, trivia, highlighting).

mod printer;


pub use printer::CstPrinter;

use crate::assist::HighlightClass;

/// Per-language classification of syntax kinds, used by generic tree walkers.
pub trait SyntaxLanguage: rowan::Language {
    /// Name of the root node kind, for contract-violation errors.
    const ROOT_NAME: &'static str;

    /// Whether nodes of this kind mark a recovered syntax error.
    fn is_error(kind: Self::Kind) -> bool;

    /// Whether tokens of this kind carry no meaning (whitespace).
    fn is_trivia(kind: Self::Kind) -> bool;

    /// Semantic style class of this kind. Must be total over the kind enum.
    fn highlight(kind: Self::Kind) -> HighlightClass;
}

/// Default nesting depth before the parsers stop descending.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Parser configuration shared by both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub(crate) recursion_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Past this depth the rest of the input is kept as a single error node.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}
