//! Typed AST wrappers over template CST nodes.

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

ast_node!(Document, Document);
ast_node!(Text, Text);
ast_node!(Element, Element);
ast_node!(OpenTag, OpenTag);
ast_node!(SelfClosingTag, SelfClosingTag);
ast_node!(CloseTag, CloseTag);
ast_node!(TagName, TagName);
ast_node!(Transformer, Transformer);
ast_node!(ErrorNode, Error);

/// A child of the document or of an element body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    Text(Text),
    Element(Element),
    Error(ErrorNode),
}

impl Content {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Text => Text::cast(node).map(Content::Text),
            SyntaxKind::Element => Element::cast(node).map(Content::Element),
            SyntaxKind::Error => ErrorNode::cast(node).map(Content::Error),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Content::Text(n) => n.as_cst(),
            Content::Element(n) => n.as_cst(),
            Content::Error(n) => n.as_cst(),
        }
    }
}

/// The tag that opens an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Open(OpenTag),
    SelfClosing(SelfClosingTag),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// `{{#Field}}`: body shown when the field is non-empty
    If,
    /// `{{^Field}}`: body shown when the field is empty
    Unless,
}

impl TryFrom<SyntaxNode> for Document {
    type Error = crate::Error;

    fn try_from(node: SyntaxNode) -> crate::Result<Self> {
        let found = node.kind();
        Self::cast(node).ok_or_else(|| crate::Error::UnexpectedRoot {
            expected: "Document",
            found: format!("{found:?}"),
        })
    }
}

impl Document {
    pub fn contents(&self) -> impl Iterator<Item = Content> + '_ {
        self.0.children().filter_map(Content::cast)
    }
}

impl Text {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

impl Element {
    pub fn tag(&self) -> Option<Tag> {
        self.0.children().find_map(|node| match node.kind() {
            SyntaxKind::OpenTag => OpenTag::cast(node).map(Tag::Open),
            SyntaxKind::SelfClosingTag => SelfClosingTag::cast(node).map(Tag::SelfClosing),
            _ => None,
        })
    }

    /// Body of a block element. Mismatched close tags show up here as errors.
    pub fn contents(&self) -> impl Iterator<Item = Content> + '_ {
        self.0.children().filter_map(Content::cast)
    }

    /// The matching close tag, if the block was closed.
    pub fn close_tag(&self) -> Option<CloseTag> {
        self.0.children().find_map(CloseTag::cast)
    }
}

impl OpenTag {
    pub fn condition(&self) -> Option<Condition> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find_map(|t| match t.kind() {
                SyntaxKind::If => Some(Condition::If),
                SyntaxKind::Unless => Some(Condition::Unless),
                _ => None,
            })
    }

    pub fn transformers(&self) -> impl Iterator<Item = Transformer> + '_ {
        self.0.children().filter_map(Transformer::cast)
    }

    pub fn name(&self) -> Option<TagName> {
        self.0.children().find_map(TagName::cast)
    }
}

impl SelfClosingTag {
    /// Transformers in source order. They apply right to left.
    pub fn transformers(&self) -> impl Iterator<Item = Transformer> + '_ {
        self.0.children().filter_map(Transformer::cast)
    }

    pub fn name(&self) -> Option<TagName> {
        self.0.children().find_map(TagName::cast)
    }
}

impl CloseTag {
    pub fn name(&self) -> Option<TagName> {
        self.0.children().find_map(TagName::cast)
    }
}

impl TagName {
    pub fn token(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    /// Name with surrounding spaces removed.
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }
}

impl Transformer {
    pub fn token(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    pub fn name(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }
}

fn name_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == SyntaxKind::Name)
}
