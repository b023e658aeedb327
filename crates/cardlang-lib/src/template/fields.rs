//! Render inputs: a note's fields and the card being rendered.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the field that renders the question side on the answer side.
pub const FRONT_SIDE: &str = "FrontSide";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub value: String,
    /// Raw values are inserted without HTML escaping.
    #[serde(default)]
    pub raw: bool,
}

impl FieldValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            raw: false,
        }
    }

    pub fn new_raw(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            raw: true,
        }
    }

    /// Whitespace-only values count as empty.
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Field name to value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    values: IndexMap<String, FieldValue>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), FieldValue::new(value));
    }

    pub fn insert_raw(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), FieldValue::new_raw(value));
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut fields = Fields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Question,
    Answer,
}

/// Which card face is rendered, and what surrounds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    pub side: Side,
    /// 1-based cloze number of the card.
    pub ordinal: u32,
    /// Rendered question side, shown by `{{FrontSide}}`.
    pub front_side: Option<String>,
    pub css: Option<String>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            side: Side::Question,
            ordinal: 1,
            front_side: None,
            css: None,
        }
    }
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_ordinal(mut self, ordinal: u32) -> Self {
        self.ordinal = ordinal;
        self
    }

    pub fn with_front_side(mut self, html: impl Into<String>) -> Self {
        self.front_side = Some(html.into());
        self
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }
}
