//! Lowers a query tree into a SQL predicate with positional `?` parameters.
//!
//! Juxtaposed terms are joined with `AND`. An `Or` node joins the terms on
//! either side of it. Error terms compile to the always-false predicate `0`
//! and bind nothing, so a malformed term never widens the result set. A
//! negation over anything malformed is also always false.

use serde::{Deserialize, Serialize};

use super::ast::{Program, Term, Value};
use super::cst::SyntaxKind;

const ALWAYS_TRUE: &str = "1";
const ALWAYS_FALSE: &str = "0";

/// SQL predicate plus its parameters, in left-to-right source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledQuery {
    pub predicate: String,
    pub params: Vec<String>,
}

/// SQL fragments for each kind of term. Each fragment binds exactly one `?`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryCompilerConfig {
    /// Matched against `%text%` with `\` as the LIKE escape character.
    pub text_predicate: String,
    pub tag_predicate: String,
    pub deck_predicate: String,
    pub template_predicate: String,
}

impl Default for QueryCompilerConfig {
    fn default() -> Self {
        Self {
            text_predicate: r"n.flds LIKE ? ESCAPE '\'".to_string(),
            tag_predicate:
                "EXISTS (SELECT 1 FROM note_tags t WHERE t.note_id = n.id AND lower(t.tag) = ?)"
                    .to_string(),
            deck_predicate: "lower(d.name) = ?".to_string(),
            template_predicate: "lower(m.name) = ?".to_string(),
        }
    }
}

/// Compiles with [`QueryCompilerConfig::default`].
pub fn compile(program: &Program) -> CompiledQuery {
    QueryCompiler::new(&QueryCompilerConfig::default()).compile(program)
}

/// Normalizes tag, deck and template names before comparison.
pub fn case_fold(value: &str) -> String {
    value.to_lowercase()
}

pub struct QueryCompiler<'c> {
    config: &'c QueryCompilerConfig,
}

impl<'c> QueryCompiler<'c> {
    pub fn new(config: &'c QueryCompilerConfig) -> Self {
        Self { config }
    }

    pub fn compile(&self, program: &Program) -> CompiledQuery {
        let mut params = Vec::new();
        let predicate = self
            .sequence(program.terms(), &mut params)
            .unwrap_or_else(|| ALWAYS_TRUE.to_string());

        tracing::debug!(params = params.len(), "compiled query");
        CompiledQuery { predicate, params }
    }

    /// `None` when there are no terms.
    fn sequence(
        &self,
        terms: impl Iterator<Item = Term>,
        params: &mut Vec<String>,
    ) -> Option<String> {
        let mut conjuncts: Vec<String> = Vec::new();
        let mut pending_or = false;

        for term in terms {
            if let Term::Or(_) = term {
                pending_or = true;
                continue;
            }

            let right = self.term(&term, params);
            match conjuncts.pop() {
                Some(left) if pending_or => conjuncts.push(format!("({left} OR {right})")),
                Some(left) => {
                    conjuncts.push(left);
                    conjuncts.push(right);
                }
                None => conjuncts.push(right),
            }
            pending_or = false;
        }

        (!conjuncts.is_empty()).then(|| conjuncts.join(" AND "))
    }

    fn term(&self, term: &Term, params: &mut Vec<String>) -> String {
        match term {
            Term::Simple(node) => self.text(&node.value(), params),
            Term::Quoted(node) => self.text(&node.value(), params),
            Term::Not(node) => {
                let malformed = node
                    .as_cst()
                    .descendants()
                    .any(|n| n.kind() == SyntaxKind::Error);
                match node.operand() {
                    Some(operand) if !malformed => {
                        format!("NOT ({})", self.term(&operand, params))
                    }
                    _ => ALWAYS_FALSE.to_string(),
                }
            }
            // Handled by `sequence`
            Term::Or(_) => ALWAYS_FALSE.to_string(),
            Term::Group(node) => {
                let inner = self
                    .sequence(node.terms(), params)
                    .unwrap_or_else(|| ALWAYS_TRUE.to_string());
                format!("({inner})")
            }
            Term::Tag(node) => self.equality(&self.config.tag_predicate, node.value(), params),
            Term::Deck(node) => self.equality(&self.config.deck_predicate, node.value(), params),
            Term::Template(node) => {
                self.equality(&self.config.template_predicate, node.value(), params)
            }
            Term::Error(_) => ALWAYS_FALSE.to_string(),
        }
    }

    fn text(&self, value: &str, params: &mut Vec<String>) -> String {
        params.push(format!("%{}%", like_pattern(value)));
        self.config.text_predicate.clone()
    }

    fn equality(&self, predicate: &str, value: Option<Value>, params: &mut Vec<String>) -> String {
        let Some(value) = value else {
            return ALWAYS_FALSE.to_string();
        };
        params.push(case_fold(&value.text()));
        predicate.to_string()
    }
}

/// Escapes LIKE metacharacters with `\` and turns `*` into `%`.
fn like_pattern(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            '*' => out.push('%'),
            _ => out.push(c),
        }
    }
    out
}
