//! Search query language: `tag:verbs -deck:"Spanish::Old" (hablar OR comer)`.
//!
//! Source is lexed and parsed into an error-tolerant CST ([`Program`]), which
//! the compiler lowers into a SQL predicate with positional parameters.

pub mod ast;
pub mod compile;
pub mod cst;
pub mod lexer;
pub mod parser;

mod dump;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod lexer_tests;

pub use ast::{Program, Term};
pub use compile::{CompiledQuery, QueryCompiler, QueryCompilerConfig, case_fold, compile};
pub use cst::{QueryLang, SyntaxKind, SyntaxNode, SyntaxToken};

use crate::syntax::{CstPrinter, ParseOptions};
use parser::Parser;

/// Parses a query with default options. Never fails: malformed input becomes `Error` nodes.
pub fn parse_query(source: &str) -> Program {
    parse_query_with(source, &ParseOptions::default())
}

pub fn parse_query_with(source: &str, options: &ParseOptions) -> Program {
    let tokens = lexer::lex(source);
    let green = Parser::new(source, tokens).with_options(options).parse();
    tracing::debug!(len = source.len(), "parsed query");
    Program::cast(SyntaxNode::new_root(green)).expect("parser always produces Program")
}

impl Program {
    pub fn printer(&self) -> CstPrinter<'_, QueryLang> {
        CstPrinter::new(self.as_cst())
    }
}
