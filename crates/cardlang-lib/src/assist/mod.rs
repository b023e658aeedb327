//! Editor assist: semantic highlighting and query completion.
//!
//! Both work on the lossless CST, so they behave the same on broken input as
//! on valid input.

mod completion;
mod highlight;

#[cfg(test)]
mod highlight_tests;

use serde::Serialize;

pub use completion::{Completion, CompletionResult, complete_query};
pub use highlight::{HighlightSpan, highlight};

/// Style class of a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightClass {
    Text,
    Brace,
    TagName,
    AttributeName,
    Separator,
    ControlOperator,
    Invalid,
}

impl HighlightClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Brace => "brace",
            Self::TagName => "tagName",
            Self::AttributeName => "attributeName",
            Self::Separator => "separator",
            Self::ControlOperator => "controlOperator",
            Self::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for HighlightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
