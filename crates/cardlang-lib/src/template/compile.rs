//! Renders a template tree into HTML.
//!
//! Rendering is total: every tree produces a body. Problems are reported as
//! diagnostics in document order, including those inside hidden conditional
//! bodies, so linting is rendering with the output discarded. The one
//! exception is a cloze field with no deletion for the card's ordinal, which
//! depends on the card and is only reported while rendering.

use serde::Serialize;

use super::ast::{
    Condition, Content, Document, Element, OpenTag, SelfClosingTag, Tag, Transformer,
};
use super::cloze;
use super::cst::SyntaxKind;
use super::fields::{FRONT_SIDE, Fields, RenderContext, Side};
use super::html;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};

/// Rendered card face plus what went wrong while rendering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledTemplate {
    pub body: String,
    pub css: Option<String>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

/// Field transformers, the `type:cloze:` part of `{{type:cloze:Text}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformerKind {
    Cloze,
    Type,
    Text,
    Hint,
}

impl TransformerKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cloze" => Some(Self::Cloze),
            "type" => Some(Self::Type),
            "text" => Some(Self::Text),
            "hint" => Some(Self::Hint),
            _ => None,
        }
    }

    /// `transformed` is set when an inner transformer already rendered `value`.
    fn apply(
        self,
        value: String,
        field: &str,
        transformed: bool,
        context: &RenderContext,
    ) -> String {
        match self {
            Self::Cloze => cloze::render(&value, context.ordinal, context.side),
            Self::Type => match context.side {
                // A bare field is the answer itself, so only the input is shown
                Side::Question if !transformed => type_input(field),
                Side::Question => format!("{value}{}", type_input(field)),
                Side::Answer => format!(r#"<div class="type-answer">{value}</div>"#),
            },
            Self::Text => html::strip_tags(&value),
            Self::Hint if value.trim().is_empty() => String::new(),
            Self::Hint => {
                format!(r#"<details class="hint"><summary>Hint</summary>{value}</details>"#)
            }
        }
    }
}

fn type_input(field: &str) -> String {
    format!(
        r#"<input type="text" class="type-answer" data-field="{}">"#,
        html::escape(field)
    )
}

/// Renders `document` with `fields` for the card described by `context`.
pub fn compile(document: &Document, fields: &Fields, context: &RenderContext) -> CompiledTemplate {
    compile_with_diagnostics(document, fields, context).0
}

/// Like [`compile`], also returning all diagnostics in the order they were
/// emitted, before the split into errors and warnings.
pub fn compile_with_diagnostics(
    document: &Document,
    fields: &Fields,
    context: &RenderContext,
) -> (CompiledTemplate, Diagnostics) {
    let mut renderer = Renderer::new(fields, context);
    let mut body = String::new();
    renderer.contents(document.contents(), Some(&mut body));

    let diagnostics = renderer.diagnostics;
    tracing::debug!(
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "compiled template"
    );

    let (errors, warnings) = diagnostics.clone().partition();
    let compiled = CompiledTemplate {
        body,
        css: context.css.clone(),
        errors,
        warnings,
    };
    (compiled, diagnostics)
}

/// Syntax and semantic diagnostics for `document`, in document order.
pub fn lint(document: &Document, fields: &Fields) -> Diagnostics {
    let context = RenderContext::default();
    let mut renderer = Renderer::new(fields, &context);
    renderer.contents(document.contents(), None);
    renderer.diagnostics
}

struct Renderer<'a> {
    fields: &'a Fields,
    context: &'a RenderContext,
    diagnostics: Diagnostics,
}

impl<'a> Renderer<'a> {
    fn new(fields: &'a Fields, context: &'a RenderContext) -> Self {
        Self {
            fields,
            context,
            diagnostics: Diagnostics::new(),
        }
    }

    /// `out` is `None` inside hidden or omitted blocks.
    fn contents(&mut self, contents: impl Iterator<Item = Content>, mut out: Option<&mut String>) {
        for content in contents {
            match content {
                Content::Text(text) => {
                    if let Some(out) = out.as_deref_mut() {
                        out.push_str(&text.text());
                    }
                }
                Content::Element(element) => self.element(&element, out.as_deref_mut()),
                Content::Error(error) => {
                    for node in error.as_cst().descendants() {
                        if node.kind() == SyntaxKind::Error {
                            self.diagnostics
                                .report(DiagnosticKind::SyntaxError, node.text_range())
                                .emit();
                        }
                    }
                }
            }
        }
    }

    fn element(&mut self, element: &Element, out: Option<&mut String>) {
        match element.tag() {
            Some(Tag::SelfClosing(tag)) => self.field_reference(element, &tag, out),
            Some(Tag::Open(tag)) => self.conditional(element, &tag, out),
            None => {}
        }
    }

    fn field_reference(
        &mut self,
        element: &Element,
        tag: &SelfClosingTag,
        out: Option<&mut String>,
    ) {
        let Some(name) = tag.name() else {
            return;
        };
        let field = name.text();
        let transformers = self.resolve_transformers(tag.transformers());
        let value = self.lookup(&field);

        if value.is_none() {
            self.diagnostics
                .report(DiagnosticKind::UnknownField, name.as_cst().text_range())
                .message(field.as_str())
                .emit();
        }

        let (Some(transformers), Some(out)) = (transformers, out) else {
            return;
        };
        let Some((value, raw)) = value else {
            out.push_str(&element.as_cst().text().to_string());
            return;
        };

        if transformers.contains(&TransformerKind::Cloze) && self.misses_ordinal(&value) {
            self.diagnostics
                .report(DiagnosticKind::MissingClozeOrdinal, name.as_cst().text_range())
                .message(field.as_str())
                .emit();
        }

        let mut rendered = if raw { value } else { html::escape(&value) };
        for (applied, transformer) in transformers.iter().rev().enumerate() {
            rendered = transformer.apply(rendered, &field, applied > 0, self.context);
        }
        out.push_str(&rendered);
    }

    /// Plain text under `cloze` is fine; deletions that skip this card are not.
    fn misses_ordinal(&self, value: &str) -> bool {
        let ordinals = cloze::ordinals(value);
        !ordinals.is_empty() && !ordinals.contains(&self.context.ordinal)
    }

    fn conditional(&mut self, element: &Element, tag: &OpenTag, out: Option<&mut String>) {
        let Some(name) = tag.name() else {
            return;
        };
        let field = name.text();

        let mut visible = out.is_some();
        if tag.transformers().next().is_some() {
            self.diagnostics
                .report(
                    DiagnosticKind::TransformersOnConditional,
                    tag.as_cst().text_range(),
                )
                .emit();
            visible = false;
        }

        let non_empty = match self.lookup(&field) {
            Some((value, _)) => !value.trim().is_empty(),
            None => {
                self.diagnostics
                    .report(
                        DiagnosticKind::UnknownConditionalField,
                        name.as_cst().text_range(),
                    )
                    .message(field.as_str())
                    .emit();
                false
            }
        };
        visible &= match tag.condition() {
            Some(Condition::If) => non_empty,
            Some(Condition::Unless) => !non_empty,
            None => false,
        };

        if element.close_tag().is_none() {
            self.diagnostics
                .report(DiagnosticKind::UnclosedConditional, tag.as_cst().text_range())
                .message(field.as_str())
                .emit();
        }

        let body_out = if visible { out } else { None };
        self.contents(element.contents(), body_out);
    }

    /// `None` when any transformer is unknown; each one is reported.
    fn resolve_transformers(
        &mut self,
        transformers: impl Iterator<Item = Transformer>,
    ) -> Option<Vec<TransformerKind>> {
        let mut resolved = Some(Vec::new());
        for transformer in transformers {
            let name = transformer.name();
            match TransformerKind::from_name(&name) {
                Some(kind) => {
                    if let Some(kinds) = resolved.as_mut() {
                        kinds.push(kind);
                    }
                }
                None => {
                    self.diagnostics
                        .report(
                            DiagnosticKind::UnknownTransformer,
                            transformer.as_cst().text_range(),
                        )
                        .message(name.as_str())
                        .emit();
                    resolved = None;
                }
            }
        }
        resolved
    }

    /// Field value and whether it is raw HTML.
    fn lookup(&self, field: &str) -> Option<(String, bool)> {
        if field == FRONT_SIDE {
            let front = self.context.front_side.clone().unwrap_or_default();
            return Some((front, true));
        }
        self.fields
            .get(field)
            .map(|value| (value.value.clone(), value.raw))
    }
}
