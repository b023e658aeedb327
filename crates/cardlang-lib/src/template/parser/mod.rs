//! Parser for the card template language.
//!
//! Same shape as the query parser: a Rowan green tree builder fed by a
//! span-only token stream, checkpoints to wrap broken constructs in `Error`
//! after the fact, and a recursion limit on nested conditionals.
//!
//! # Recovery
//!
//! - A tag with a missing name, missing `}}` or stray tokens becomes
//!   `Error(Element)` holding every token of the broken tag
//! - A close tag not matching the innermost open element becomes
//!   `Error(CloseTag)`; parsing continues inside the current element
//! - Open elements with no close tag run to end of input

mod core;
mod grammar;
mod invariants;


pub use core::Parser;
