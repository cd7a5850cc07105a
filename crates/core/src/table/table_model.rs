//! Data-table domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_TOTAL_TITLE;
use crate::json::JsonObject;

// =============================================================================
// Columns
// =============================================================================

/// A column of a data table.
///
/// `order` is optional: explicitly ordered columns come first, ascending,
/// and the remaining columns follow in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl ColumnDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            order: None,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Wire form: `{"key", "label", "order"?}`.
    pub fn to_json(&self) -> Value {
        let mut out = JsonObject::new();
        out.insert("key".to_string(), Value::String(self.key.clone()));
        out.insert("label".to_string(), Value::String(self.label.clone()));
        if let Some(order) = self.order {
            out.insert("order".to_string(), Value::from(order));
        }
        Value::Object(out)
    }
}

impl<K: Into<String>, L: Into<String>> From<(K, L)> for ColumnDefinition {
    fn from((key, label): (K, L)) -> Self {
        Self::new(key, label)
    }
}

/// Returns the columns in display order.
///
/// Stable sort on `(has no order, order)`, so ties and unordered columns
/// keep their declaration order.
pub fn order_columns(columns: &[ColumnDefinition]) -> Vec<&ColumnDefinition> {
    let mut ordered: Vec<&ColumnDefinition> = columns.iter().collect();
    ordered.sort_by_key(|column| (column.order.is_none(), column.order));
    ordered
}

// =============================================================================
// Rows
// =============================================================================

/// One data row: column key → already formatted value.
///
/// A row may leave columns out; the renderer shows those as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow {
    cells: BTreeMap<String, String>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell, replacing any earlier value for the same key.
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TableRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

// =============================================================================
// Sorting
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Initial sort applied by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn to_json(&self) -> Value {
        let mut out = JsonObject::new();
        out.insert("column".to_string(), Value::String(self.column.clone()));
        out.insert(
            "direction".to_string(),
            Value::String(self.direction.as_str().to_string()),
        );
        Value::Object(out)
    }
}

// =============================================================================
// Table Config
// =============================================================================

/// Table-level settings of a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    pub show_refresh_button: bool,
    pub show_bookmarks_button: bool,
    pub show_export_button: bool,
    pub total_enabled: bool,
    pub total_title: String,
}

impl TableConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_column: None,
            sort: None,
            show_refresh_button: false,
            show_bookmarks_button: false,
            show_export_button: false,
            total_enabled: false,
            total_title: DEFAULT_TOTAL_TITLE.to_string(),
        }
    }
}

// =============================================================================
// Builder State
// =============================================================================

/// Lifecycle of a [`super::TableBuilder`]. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BuilderState {
    #[default]
    Empty,
    Configuring,
    Populated,
    Materialized,
}
