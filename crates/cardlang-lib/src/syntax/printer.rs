//! Builder-pattern printer for dumping syntax trees.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use super::SyntaxLanguage;

pub struct CstPrinter<'t, L: SyntaxLanguage> {
    root: &'t rowan::SyntaxNode<L>,
    tokens: bool,
    trivia: bool,
    spans: bool,
}

impl<'t, L: SyntaxLanguage> CstPrinter<'t, L> {
    pub fn new(root: &'t rowan::SyntaxNode<L>) -> Self {
        Self {
            root,
            tokens: true,
            trivia: false,
            spans: false,
        }
    }

    /// Print tokens below their nodes. When off, only the node outline is printed.
    pub fn with_tokens(mut self, value: bool) -> Self {
        self.tokens = value;
        self
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(
        &self,
        node: &rowan::SyntaxNode<L>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());
        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if !self.tokens || (!self.trivia && L::is_trivia(t.kind())) {
                        continue;
                    }
                    let child_prefix = "  ".repeat(indent + 1);
                    let child_span = self.span_str(t.text_range());
                    writeln!(
                        w,
                        "{}{:?}{} {:?}",
                        child_prefix,
                        t.kind(),
                        child_span,
                        t.text()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}
