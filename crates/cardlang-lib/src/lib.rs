//! cardlang: the search query and card template languages of a flashcard application.
//!
//! Both languages share the same pipeline shape:
//! - `query` - search query lexer, CST, typed AST, SQL predicate compiler
//! - `template` - card template lexer, CST, typed AST, HTML renderer
//! - `diagnostics` - positioned errors and warnings, plain and annotated rendering
//! - `lint` - syntax error collection over either CST
//! - `assist` - highlighting and completion for live editors
//! - `syntax` - pieces shared by both trees (language trait, CST printer)
//!
//! # Example
//!
//! ```
//! use cardlang_lib::query;
//!
//! let program = query::parse_query(r#"tag:verbs -deck:"Spanish::Old" hablar"#);
//! let compiled = query::compile(&program);
//! assert_eq!(compiled.params.len(), 3);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod assist;
pub mod diagnostics;
pub mod lint;
pub mod query;
pub mod syntax;
pub mod template;

#[cfg(test)]
mod lint_tests;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use lint::lint;
pub use syntax::{ParseOptions, SyntaxLanguage};

/// Errors returned for caller-contract violations.
///
/// Malformed user input never produces an `Error`: it is recovered into the
/// syntax tree and reported through [`Diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A syntax node handed to a typed constructor is not the expected root.
    #[error("expected a `{expected}` root node, found `{found}`")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
}

/// Result type for cardlang operations.
pub type Result<T> = std::result::Result<T, Error>;
