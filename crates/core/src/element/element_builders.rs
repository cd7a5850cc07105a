//! Shorthand constructors for the tags the reports emit.
//!
//! These are plain wrappers over [`make_node`]; props can be attached with
//! [`Element::with_props`].

use serde_json::Value;

use super::element_model::{make_node, Element, Tag};
use crate::constants::TEXT_PROP_KEY;
use crate::json::{self, JsonObject};

pub fn div(children: Vec<Element>) -> Element {
    make_node(Tag::DIV, children, JsonObject::new())
}

pub fn h1(children: Vec<Element>) -> Element {
    make_node(Tag::H1, children, JsonObject::new())
}

pub fn table(children: Vec<Element>) -> Element {
    make_node(Tag::TABLE, children, JsonObject::new())
}

pub fn thead(children: Vec<Element>) -> Element {
    make_node(Tag::THEAD, children, JsonObject::new())
}

pub fn tr(children: Vec<Element>) -> Element {
    make_node(Tag::TR, children, JsonObject::new())
}

pub fn th(children: Vec<Element>) -> Element {
    make_node(Tag::TH, children, JsonObject::new())
}

pub fn td(children: Vec<Element>) -> Element {
    make_node(Tag::TD, children, JsonObject::new())
}

/// Text leaf. The payload lives in the `text` prop and the node has no children.
pub fn text(content: impl Into<String>) -> Element {
    let mut props = JsonObject::new();
    props.insert(TEXT_PROP_KEY.to_string(), Value::String(content.into()));
    make_node(Tag::TEXT, Vec::new(), props)
}

/// Data-table widget node carrying materialized table props.
pub fn data_table(props: JsonObject) -> Element {
    make_node(Tag::DATA_TABLE, Vec::new(), props)
}

/// Builds a props map from key/value pairs, keeping their order.
pub fn props<I, K, V>(entries: I) -> JsonObject
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    json::object(entries)
}
