//! Element module - the generic UI tree and its wire serialization.

mod element_builders;
mod element_model;
mod serializer;


pub use element_builders::{data_table, div, h1, props, table, td, text, th, thead, tr};
pub use element_model::{make_node, Element, Tag};
pub use serializer::{serialize, to_json_string};
