use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::error::ConvertError;

/// Insertion-ordered attribute mapping with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key`, replacing the value in place if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn write_to(&self, out: &mut String) {
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A childless node. Without a tag it renders as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    value: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

impl Leaf {
    /// Untagged text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// An empty tag is treated as no tag.
    pub fn tagged(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_attributes(tag, value, Attributes::new())
    }

    pub fn with_attributes(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        let tag: String = tag.into();
        Self {
            tag: (!tag.is_empty()).then_some(tag),
            value: value.into(),
            attributes,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_to(&self, out: &mut String) {
        let Some(tag) = &self.tag else {
            out.push_str(&self.value);
            return;
        };
        open_tag(out, tag, &self.attributes);
        out.push_str(&self.value);
        close_tag(out, tag);
    }
}

/// A tagged node exclusively owning an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parent {
    tag: String,
    children: Vec<OutputNode>,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

impl Parent {
    /// Fails with [`ConvertError::Structure`] when `tag` is blank.
    pub fn new(tag: impl Into<String>, children: Vec<OutputNode>) -> Result<Self, ConvertError> {
        Self::with_attributes(tag, children, Attributes::new())
    }

    pub fn with_attributes(
        tag: impl Into<String>,
        children: Vec<OutputNode>,
        attributes: Attributes,
    ) -> Result<Self, ConvertError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ConvertError::Structure(
                "parent node requires a tag".to_string(),
            ));
        }
        Ok(Self {
            tag,
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[OutputNode] {
        &self.children
    }

    pub fn into_children(self) -> Vec<OutputNode> {
        self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_to(&self, out: &mut String) {
        open_tag(out, &self.tag, &self.attributes);
        for child in &self.children {
            child.write_to(out);
        }
        close_tag(out, &self.tag);
    }
}

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputNode {
    Leaf(Leaf),
    Parent(Parent),
}

impl OutputNode {
    pub fn text(value: impl Into<String>) -> Self {
        OutputNode::Leaf(Leaf::text(value))
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        OutputNode::Leaf(Leaf::tagged(tag, value))
    }

    pub fn parent(
        tag: impl Into<String>,
        children: Vec<OutputNode>,
    ) -> Result<Self, ConvertError> {
        Parent::new(tag, children).map(OutputNode::Parent)
    }

    /// Tag of either variant; `None` only for untagged leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            OutputNode::Leaf(leaf) => leaf.tag(),
            OutputNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Children of a parent; leaves have none.
    pub fn children(&self) -> &[OutputNode] {
        match self {
            OutputNode::Leaf(_) => &[],
            OutputNode::Parent(parent) => parent.children(),
        }
    }

    /// Renders the tree as nested markup text.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            OutputNode::Leaf(leaf) => leaf.write_to(out),
            OutputNode::Parent(parent) => parent.write_to(out),
        }
    }
}

impl fmt::Display for OutputNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_to(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
