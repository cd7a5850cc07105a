//! Element tree → wire JSON.
//!
//! Every node becomes `{"type": tag, "props": {...}, "children": [...]}` with
//! the keys in exactly that order. Children keep their order and a childless
//! node still carries an empty array.

use serde_json::Value;

use super::element_model::Element;
use crate::constants::{NODE_CHILDREN_KEY, NODE_PROPS_KEY, NODE_TYPE_KEY};
use crate::json::{self, JsonObject};

/// Converts a tree into its wire value.
pub fn serialize(node: &Element) -> Value {
    let mut out = JsonObject::new();
    out.insert(
        NODE_TYPE_KEY.to_string(),
        Value::String(node.tag().as_str().to_string()),
    );
    out.insert(
        NODE_PROPS_KEY.to_string(),
        Value::Object(node.props().clone()),
    );
    out.insert(
        NODE_CHILDREN_KEY.to_string(),
        Value::Array(node.children().iter().map(serialize).collect()),
    );
    Value::Object(out)
}

/// Compact JSON text of a tree.
pub fn to_json_string(node: &Element) -> String {
    json::to_canonical_string(&serialize(node))
}
