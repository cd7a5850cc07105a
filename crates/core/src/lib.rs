//! Reportkit Core - element tree, data-table builder and number formatting.
//!
//! Reports describe their UI as a tree of [`element::Element`] nodes and
//! hand the serialized tree to a remote frontend. The data-table widget is
//! configured through [`table::TableBuilder`], whose materialized props are
//! embedded in a table node. Everything here is a pure, synchronous value
//! build: no I/O and no shared state.

pub mod aggregation;
pub mod constants;
pub mod element;
pub mod errors;
pub mod json;
pub mod table;
pub mod utils;

pub use element::{serialize, Element, Tag};
pub use table::{ColumnDefinition, SortDirection, TableBuilder, TableRow};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
