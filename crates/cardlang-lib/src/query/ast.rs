//! Typed AST wrappers over query CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; malformed input shows up as [`ErrorNode`].

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Program, Program);
ast_node!(SimpleString, SimpleString);
ast_node!(QuotedString, QuotedString);
ast_node!(Not, Not);
ast_node!(Or, Or);
ast_node!(Group, ParenthesizedExpression);
ast_node!(Tag, Tag);
ast_node!(Deck, Deck);
ast_node!(Template, Template);
ast_node!(ErrorNode, Error);

/// One sibling in a program or group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Simple(SimpleString),
    Quoted(QuotedString),
    Not(Not),
    /// Operands are the neighbouring terms, not children.
    Or(Or),
    Group(Group),
    Tag(Tag),
    Deck(Deck),
    Template(Template),
    Error(ErrorNode),
}

impl Term {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SimpleString => SimpleString::cast(node).map(Term::Simple),
            SyntaxKind::QuotedString => QuotedString::cast(node).map(Term::Quoted),
            SyntaxKind::Not => Not::cast(node).map(Term::Not),
            SyntaxKind::Or => Or::cast(node).map(Term::Or),
            SyntaxKind::ParenthesizedExpression => Group::cast(node).map(Term::Group),
            SyntaxKind::Tag => Tag::cast(node).map(Term::Tag),
            SyntaxKind::Deck => Deck::cast(node).map(Term::Deck),
            SyntaxKind::Template => Template::cast(node).map(Term::Template),
            SyntaxKind::Error => ErrorNode::cast(node).map(Term::Error),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Term::Simple(n) => n.as_cst(),
            Term::Quoted(n) => n.as_cst(),
            Term::Not(n) => n.as_cst(),
            Term::Or(n) => n.as_cst(),
            Term::Group(n) => n.as_cst(),
            Term::Tag(n) => n.as_cst(),
            Term::Deck(n) => n.as_cst(),
            Term::Template(n) => n.as_cst(),
            Term::Error(n) => n.as_cst(),
        }
    }
}

/// Value of a `tag:`/`deck:`/`template:` term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Simple(SimpleString),
    Quoted(QuotedString),
}

impl Value {
    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SimpleString => SimpleString::cast(node).map(Value::Simple),
            SyntaxKind::QuotedString => QuotedString::cast(node).map(Value::Quoted),
            _ => None,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Value::Simple(n) => n.value(),
            Value::Quoted(n) => n.value(),
        }
    }
}

impl TryFrom<SyntaxNode> for Program {
    type Error = crate::Error;

    fn try_from(node: SyntaxNode) -> crate::Result<Self> {
        let found = node.kind();
        Self::cast(node).ok_or_else(|| crate::Error::UnexpectedRoot {
            expected: "Program",
            found: format!("{found:?}"),
        })
    }
}

impl Program {
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.0.children().filter_map(Term::cast)
    }
}

impl SimpleString {
    pub fn word(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Word)
    }

    pub fn value(&self) -> String {
        self.word().map(|t| t.text().to_string()).unwrap_or_default()
    }
}

impl QuotedString {
    /// Raw content between the quotes, escapes still in place.
    pub fn content(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::StrVal)
    }

    pub fn is_terminated(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::DoubleQuote)
            .count()
            == 2
    }

    /// Content with `\"` and `\\` unescaped. Other backslashes are kept.
    pub fn value(&self) -> String {
        self.content()
            .map(|t| unescape(t.text()))
            .unwrap_or_default()
    }
}

impl Not {
    pub fn operand(&self) -> Option<Term> {
        self.0.children().find_map(Term::cast)
    }
}

impl Group {
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.0.children().filter_map(Term::cast)
    }
}

impl Or {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwOr)
    }
}

impl Tag {
    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

impl Deck {
    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

impl Template {
    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('"' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
