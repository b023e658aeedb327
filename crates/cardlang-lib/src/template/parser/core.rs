//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder};

use crate::syntax::ParseOptions;
use crate::template::cst::SyntaxKind;
use crate::template::lexer::{Token, token_text};

/// Templates have no trivia: every token, spaces included, belongs to its node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) depth: u32,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    recursion_limit: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            depth: 0,
            debug_fuel: std::cell::Cell::new(256),
            recursion_limit: ParseOptions::default().recursion_limit(),
        }
    }

    pub fn with_options(mut self, options: &ParseOptions) -> Self {
        self.recursion_limit = options.recursion_limit();
        self
    }

    pub fn parse(mut self) -> GreenNode {
        self.parse_document();
        self.builder.finish()
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    /// Kind of the token `lookahead` positions ahead; `Error` past the end.
    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn nth_text(&self, lookahead: usize) -> Option<&'src str> {
        self.tokens
            .get(self.pos + lookahead)
            .map(|t| token_text(self.source, t))
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    /// Wraps everything built since `checkpoint` in an `Error` node.
    pub(super) fn wrap_error(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::Error);
        self.finish_node();
    }

    pub(super) fn bump(&mut self) {
        let kind = self.current();
        self.bump_remap(kind);
    }

    /// Consumes the current token, storing it in the tree as `kind`.
    pub(super) fn bump_remap(&mut self, kind: SyntaxKind) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Consumes everything left, as one `Error` node.
    pub(super) fn bump_rest_as_error(&mut self) {
        if self.eof() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        while !self.eof() {
            self.bump();
        }
        self.finish_node();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }
}
