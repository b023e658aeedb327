//! Grammar productions for the search query language.
//!
//! ```text
//! program  = (term | or)*
//! term     = not | group | quoted | simple | prefixed
//! not      = '-' term            (no whitespace after '-')
//! group    = '(' program ')'
//! prefixed = ('tag:' | 'deck:' | 'template:') (simple | quoted)
//! or       = 'OR'                (operands are the neighbouring terms)
//! ```

use super::core::Parser;
use crate::query::cst::SyntaxKind;
use crate::query::cst::token_sets::{NOT_OPERAND_FIRST, PREFIX_VALUE_FIRST, TERM_FIRST};

impl Parser<'_> {
    pub(super) fn parse_program(&mut self) {
        self.start_node(SyntaxKind::Program);
        self.parse_terms(false);
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.finish_node();
    }

    /// Parses siblings until EOF, or until `)` inside a group.
    /// Returns how many sibling nodes were produced.
    fn parse_terms(&mut self, in_group: bool) -> usize {
        let mut count = 0;
        let mut has_left = false;

        loop {
            let kind = self.current();
            if self.eof() {
                break;
            }
            match kind {
                SyntaxKind::ParenClose if in_group => break,
                SyntaxKind::ParenClose => {
                    // Stray `)` at top level
                    self.bump_as_error();
                    has_left = true;
                }
                SyntaxKind::KwOr => {
                    self.parse_or(has_left);
                    has_left = false;
                }
                _ => {
                    self.parse_term();
                    has_left = true;
                }
            }
            count += 1;
        }

        count
    }

    /// `OR` is only an operator with a sibling on each side.
    fn parse_or(&mut self, has_left: bool) {
        self.assert_current(SyntaxKind::KwOr);
        let has_right = self.peek_nth(1).is_some_and(|kind| TERM_FIRST.contains(kind));

        if has_left && has_right {
            self.start_node(SyntaxKind::Or);
            self.bump();
            self.finish_node();
        } else {
            self.bump_as_error();
        }
    }

    fn parse_term(&mut self) {
        if !self.enter_recursion() {
            self.bump_rest_as_error();
            return;
        }

        match self.current() {
            SyntaxKind::Minus => self.parse_not(),
            SyntaxKind::ParenOpen => self.parse_group(),
            SyntaxKind::DoubleQuote => self.parse_quoted(),
            SyntaxKind::Word => self.parse_simple(),
            SyntaxKind::TagPrefix => self.parse_prefixed(SyntaxKind::Tag),
            SyntaxKind::DeckPrefix => self.parse_prefixed(SyntaxKind::Deck),
            SyntaxKind::TemplatePrefix => self.parse_prefixed(SyntaxKind::Template),
            _ => self.bump_as_error(),
        }

        self.exit_recursion();
    }

    /// `-term`. A `-` not directly followed by a term is an error on its own.
    fn parse_not(&mut self) {
        self.assert_current(SyntaxKind::Minus);
        if !NOT_OPERAND_FIRST.contains(self.nth_raw(1)) {
            self.bump_as_error();
            return;
        }

        self.start_node(SyntaxKind::Not);
        self.bump();
        self.parse_term();
        self.finish_node();
    }

    /// `( program )`. Unclosed and empty groups are wrapped in `Error`.
    fn parse_group(&mut self) {
        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::ParenthesizedExpression);
        self.bump(); // consume '('

        let count = self.parse_terms(true);

        let closed = !self.eof() && self.current() == SyntaxKind::ParenClose;
        if closed {
            self.bump();
        }
        self.finish_node();

        if !closed || count == 0 {
            self.wrap_error(checkpoint);
        }
    }

    /// `"..."`. The lexer only omits the closing quote for unterminated strings.
    fn parse_quoted(&mut self) {
        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::QuotedString);
        self.bump(); // opening quote

        if self.nth_raw(0) == SyntaxKind::StrVal {
            self.bump();
        }

        let terminated = self.nth_raw(0) == SyntaxKind::DoubleQuote;
        if terminated {
            self.bump();
        }
        self.finish_node();

        if !terminated {
            self.wrap_error(checkpoint);
        }
    }

    fn parse_simple(&mut self) {
        self.start_node(SyntaxKind::SimpleString);
        self.bump();
        self.finish_node();
    }

    /// `tag:value`, `deck:"a b"`, `template:name`. The value must touch the prefix.
    fn parse_prefixed(&mut self, kind: SyntaxKind) {
        let checkpoint = self.checkpoint();
        self.start_node(kind);
        self.bump(); // prefix

        let value = self.nth_raw(0);
        let has_value = PREFIX_VALUE_FIRST.contains(value);
        match value {
            SyntaxKind::Word => self.parse_simple(),
            SyntaxKind::DoubleQuote => self.parse_quoted(),
            _ => {}
        }
        self.finish_node();

        if !has_value {
            self.wrap_error(checkpoint);
        }
    }
}
