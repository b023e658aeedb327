use rowan::{TextRange, TextSize};
use serde::Serialize;

/// Diagnostic kinds ordered from syntax to semantics.
///
/// The kind fixes the default severity and message; call sites may add detail
/// through [`DiagnosticKind::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Recovered parse errors, one per `Error` node
    SyntaxError,

    // Template semantics that drop the element from the output
    UnknownTransformer,
    TransformersOnConditional,

    // Template semantics that keep rendering
    UnknownField,
    UnknownConditionalField,
    UnclosedConditional,
    MissingClozeOrdinal,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::SyntaxError | Self::UnknownTransformer | Self::TransformersOnConditional => {
                Severity::Error
            }
            Self::UnknownField
            | Self::UnknownConditionalField
            | Self::UnclosedConditional
            | Self::MissingClozeOrdinal => Severity::Warning,
        }
    }

    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::SyntaxError => "Syntax error.",
            Self::UnknownTransformer => "unknown transformer",
            Self::TransformersOnConditional => "conditional blocks cannot use transformers",
            Self::UnknownField => "unknown field",
            Self::UnknownConditionalField => "unknown field in conditional",
            Self::UnclosedConditional => "conditional block is never closed",
            Self::MissingClozeOrdinal => "no cloze deletion for this card",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            // Fixed wording: editors match on it
            Self::SyntaxError => self.fallback_message().to_string(),
            Self::UnknownTransformer => "unknown transformer `{}`".to_string(),
            Self::UnknownField => "unknown field `{}`, rendered as text".to_string(),
            Self::UnknownConditionalField => "unknown field `{}`, treated as empty".to_string(),
            Self::UnclosedConditional => "`{}` is never closed".to_string(),
            Self::MissingClozeOrdinal => "`{}` has no cloze deletion for this card".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A positioned message: `{ from, to, severity, message }` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(skip)]
    pub(crate) kind: DiagnosticKind,
    pub(crate) from: u32,
    pub(crate) to: u32,
    pub(crate) severity: Severity,
    pub(crate) message: String,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            from: range.start().into(),
            to: range.end().into(),
            severity: kind.default_severity(),
            message: message.into(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn from(&self) -> u32 {
        self.from
    }

    pub fn to(&self) -> u32 {
        self.to
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(TextSize::from(self.from), TextSize::from(self.to))
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity, self.from, self.to, self.message
        )
    }
}
