//! Card template language: `{{#Hint}}{{hint:Hint}}{{/Hint}} {{type:cloze:Text}}`.
//!
//! Source is lexed and parsed into an error-tolerant CST ([`Document`]), which
//! the compiler renders against a note's [`Fields`] into HTML.

pub mod ast;
pub mod cloze;
pub mod compile;
pub mod cst;
pub mod fields;
pub mod html;
pub mod lexer;
pub mod parser;

mod dump;

#[cfg(test)]
mod compile_tests;
#[cfg(test)]
mod lexer_tests;

pub use ast::{Content, Document};
pub use compile::{CompiledTemplate, TransformerKind, compile, compile_with_diagnostics, lint};
pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken, TemplateLang};
pub use fields::{FieldValue, Fields, RenderContext, Side};

use crate::syntax::{CstPrinter, ParseOptions};
use parser::Parser;

/// Parses a template with default options. Never fails: malformed input becomes `Error` nodes.
pub fn parse_template(source: &str) -> Document {
    parse_template_with(source, &ParseOptions::default())
}

pub fn parse_template_with(source: &str, options: &ParseOptions) -> Document {
    let tokens = lexer::lex(source);
    let green = Parser::new(source, tokens).with_options(options).parse();
    tracing::debug!(len = source.len(), "parsed template");
    Document::cast(SyntaxNode::new_root(green)).expect("parser always produces Document")
}

impl Document {
    pub fn printer(&self) -> CstPrinter<'_, TemplateLang> {
        CstPrinter::new(self.as_cst())
    }
}
