//! Element tree domain models.

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::constants::{NODE_CHILDREN_KEY, NODE_PROPS_KEY, NODE_TYPE_KEY, TEXT_PROP_KEY};
use crate::errors::{Error, Result};
use crate::json::JsonObject;

/// Name of an element kind, interpreted by the renderer.
///
/// The vocabulary is open: any non-empty string is a valid tag, so new
/// widget kinds need no change here. The associated constants cover the
/// tags the report layer emits itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    pub const DIV: Tag = Tag(Cow::Borrowed("div"));
    pub const H1: Tag = Tag(Cow::Borrowed("h1"));
    pub const TABLE: Tag = Tag(Cow::Borrowed("table"));
    pub const THEAD: Tag = Tag(Cow::Borrowed("thead"));
    pub const TR: Tag = Tag(Cow::Borrowed("tr"));
    pub const TH: Tag = Tag(Cow::Borrowed("th"));
    pub const TD: Tag = Tag(Cow::Borrowed("td"));
    pub const TEXT: Tag = Tag(Cow::Borrowed("text"));
    /// Data-table widget driven by [`crate::table::TableBuilder`] props.
    pub const DATA_TABLE: Tag = Tag(Cow::Borrowed("Table"));

    /// Creates a tag, rejecting the empty string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyTag);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of UI structure: a tag, its props and its ordered children.
///
/// Elements are built bottom-up and never modified once they are part of
/// a tree. A node owns its children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Tag,
    props: JsonObject,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag, children: Vec<Element>, props: JsonObject) -> Self {
        Self {
            tag,
            props,
            children,
        }
    }

    /// Replaces the props of a freshly built element.
    pub fn with_props(mut self, props: JsonObject) -> Self {
        self.props = props;
        self
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn props(&self) -> &JsonObject {
        &self.props
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Payload of a text leaf, `None` for every other element.
    pub fn text_content(&self) -> Option<&str> {
        if self.tag != Tag::TEXT {
            return None;
        }
        self.props.get(TEXT_PROP_KEY).and_then(Value::as_str)
    }
}

/// Builds an element from its parts.
pub fn make_node(tag: Tag, children: Vec<Element>, props: JsonObject) -> Element {
    Element::new(tag, children, props)
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(NODE_TYPE_KEY, self.tag.as_str())?;
        map.serialize_entry(NODE_PROPS_KEY, &self.props)?;
        map.serialize_entry(NODE_CHILDREN_KEY, &self.children)?;
        map.end()
    }
}
