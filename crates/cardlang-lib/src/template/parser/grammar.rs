//! Grammar productions for the card template language.
//!
//! ```text
//! document     = content*
//! content      = text | element
//! element      = self_closing | open_tag content* close_tag?
//! self_closing = '{{' chain '}}'
//! open_tag     = '{{' ('#' | '^') chain '}}'
//! close_tag    = '{{/' name '}}'
//! chain        = (name ':')* name
//! ```

use super::core::Parser;
use crate::template::cst::SyntaxKind;

impl<'src> Parser<'src> {
    pub(super) fn parse_document(&mut self) {
        self.start_node(SyntaxKind::Document);
        self.parse_contents(None);
        self.finish_node();
    }

    /// Parses content until EOF or the close tag matching `enclosing`.
    fn parse_contents(&mut self, enclosing: Option<&str>) {
        loop {
            if self.eof() {
                return;
            }
            match self.current() {
                SyntaxKind::TextContent => {
                    self.start_node(SyntaxKind::Text);
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::StartTag => self.parse_element(),
                SyntaxKind::StartCloseTag => {
                    if enclosing.is_some() && self.close_tag_name() == enclosing {
                        return;
                    }
                    let checkpoint = self.checkpoint();
                    self.parse_close_tag();
                    self.wrap_error(checkpoint);
                }
                _ => self.bump_as_error(),
            }
        }
    }

    fn parse_element(&mut self) {
        self.assert_current(SyntaxKind::StartTag);
        match self.nth(1) {
            SyntaxKind::If | SyntaxKind::Unless => self.parse_block_element(),
            _ => self.parse_self_closing_element(),
        }
    }

    /// `{{type:cloze:Text}}`
    fn parse_self_closing_element(&mut self) {
        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::Element);
        self.start_node(SyntaxKind::SelfClosingTag);
        self.bump(); // consume '{{'

        let mut valid = self.parse_chain().is_some();
        if valid && self.current() == SyntaxKind::EndTag {
            self.bump_remap(SyntaxKind::SelfCloseEndTag);
        } else {
            valid = false;
            self.absorb_broken_tag();
        }

        self.finish_node();
        self.finish_node();
        if !valid {
            self.wrap_error(checkpoint);
        }
    }

    /// `{{#Name}} ... {{/Name}}` and `{{^Name}} ... {{/Name}}`
    fn parse_block_element(&mut self) {
        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::Element);
        self.start_node(SyntaxKind::OpenTag);
        self.bump(); // consume '{{'
        self.bump(); // consume '#' or '^'

        let name = self.parse_chain();
        let valid = name.is_some() && self.current() == SyntaxKind::EndTag;
        if valid {
            self.bump();
        } else {
            self.absorb_broken_tag();
        }
        self.finish_node();

        let Some(name) = name.filter(|_| valid) else {
            self.finish_node();
            self.wrap_error(checkpoint);
            return;
        };

        if !self.enter_recursion() {
            self.bump_rest_as_error();
            self.finish_node();
            return;
        }
        self.parse_contents(Some(name.trim()));
        self.exit_recursion();

        if self.current() == SyntaxKind::StartCloseTag {
            self.parse_close_tag();
        }
        self.finish_node();
    }

    /// `(Name ':')* Name`. Returns the text of the final name.
    fn parse_chain(&mut self) -> Option<&'src str> {
        loop {
            if self.current() != SyntaxKind::Name {
                return None;
            }
            if self.nth(1) == SyntaxKind::TransformerDelimiter {
                self.start_node(SyntaxKind::Transformer);
                self.bump();
                self.finish_node();
                self.bump(); // consume ':'
                continue;
            }
            let name = self.nth_text(0);
            self.start_node(SyntaxKind::TagName);
            self.bump();
            self.finish_node();
            return name;
        }
    }

    /// `{{/Name}}`. Callers decide whether it matches.
    fn parse_close_tag(&mut self) {
        self.assert_current(SyntaxKind::StartCloseTag);
        self.start_node(SyntaxKind::CloseTag);
        self.bump();

        if self.current() == SyntaxKind::Name && self.nth(1) == SyntaxKind::EndTag {
            self.start_node(SyntaxKind::TagName);
            self.bump();
            self.finish_node();
            self.bump();
        } else {
            self.absorb_broken_tag();
        }
        self.finish_node();
    }

    /// Trimmed name of the close tag at the cursor, if it is well formed.
    fn close_tag_name(&self) -> Option<&'src str> {
        let well_formed =
            self.nth(1) == SyntaxKind::Name && self.nth(2) == SyntaxKind::EndTag;
        if !well_formed {
            return None;
        }
        self.nth_text(1).map(str::trim)
    }

    /// Consumes the rest of a broken tag, through its `}}` if it has one.
    fn absorb_broken_tag(&mut self) {
        while !self.eof() && self.current().is_tag_token() {
            let kind = self.current();
            self.bump();
            if kind == SyntaxKind::EndTag {
                break;
            }
        }
    }
}
