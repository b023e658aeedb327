//! Parser for the search query language.
//!
//! Produces a lossless concrete syntax tree via Rowan's green tree builder:
//!
//! - Zero-copy parsing: tokens carry spans, text is sliced only when building tree nodes
//! - Trivia buffering: whitespace is collected, then attached in front of the next node
//! - Checkpoint-based wrapping: unclosed groups and strings are retroactively wrapped in `Error`
//!
//! # Recovery
//!
//! The parser never fails. Malformed input is kept in `SyntaxKind::Error` nodes:
//!
//! 1. Tokens that cannot start a term become single-token `Error` nodes
//! 2. Constructs missing their closing token are wrapped in `Error` with their partial children
//! 3. On recursion limit, the remaining input goes into a single `Error` node

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use core::Parser;
