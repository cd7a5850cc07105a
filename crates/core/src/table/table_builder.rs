//! Stateful assembler for data-table props.

use std::collections::HashSet;

use log::{debug, warn};
use serde_json::Value;

use super::table_model::{
    order_columns, BuilderState, ColumnDefinition, SortDirection, SortSpec, TableConfig, TableRow,
};
use crate::errors::{Result, TableError};
use crate::json::JsonObject;

/// Accumulates columns, rows, total rows and table settings, then freezes
/// them into the props object of a data-table element.
///
/// The builder moves through [`BuilderState`] forward only. The first
/// [`materialize`](Self::materialize) call caches its output; later calls
/// return the cached object, and any mutation after it fails with
/// [`TableError::ReuseAfterMaterialize`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    config: TableConfig,
    columns: Vec<ColumnDefinition>,
    column_keys: HashSet<String>,
    rows: Vec<TableRow>,
    total_data: Vec<JsonObject>,
    state: BuilderState,
    materialized: Option<JsonObject>,
}

impl TableBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: TableConfig::new(name),
            columns: Vec::new(),
            column_keys: HashSet::new(),
            rows: Vec::new(),
            total_data: Vec::new(),
            state: BuilderState::Empty,
            materialized: None,
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Columns in display order.
    pub fn ordered_columns(&self) -> Vec<&ColumnDefinition> {
        order_columns(&self.columns)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn total_data(&self) -> &[JsonObject] {
        &self.total_data
    }

    pub fn has_column(&self, key: &str) -> bool {
        self.column_keys.contains(key)
    }

    // ==================== Configuration ====================

    pub fn set_id_column(&mut self, key: impl Into<String>) -> Result<&mut Self> {
        let key = key.into();
        self.configure(|config| config.id_column = Some(key))
    }

    pub fn set_sort(
        &mut self,
        column: impl Into<String>,
        direction: SortDirection,
    ) -> Result<&mut Self> {
        let column = column.into();
        self.configure(|config| config.sort = Some(SortSpec { column, direction }))
    }

    pub fn enable_refresh_button(&mut self, enabled: bool) -> Result<&mut Self> {
        self.configure(|config| config.show_refresh_button = enabled)
    }

    pub fn enable_bookmarks_button(&mut self, enabled: bool) -> Result<&mut Self> {
        self.configure(|config| config.show_bookmarks_button = enabled)
    }

    pub fn enable_export_button(&mut self, enabled: bool) -> Result<&mut Self> {
        self.configure(|config| config.show_export_button = enabled)
    }

    pub fn enable_total(&mut self, enabled: bool) -> Result<&mut Self> {
        self.configure(|config| config.total_enabled = enabled)
    }

    pub fn set_total_title(&mut self, title: impl Into<String>) -> Result<&mut Self> {
        let title = title.into();
        self.configure(|config| config.total_title = title)
    }

    // ==================== Content ====================

    pub fn add_column(&mut self, column: impl Into<ColumnDefinition>) -> Result<&mut Self> {
        self.ensure_open()?;
        let column = column.into();
        if !self.column_keys.insert(column.key.clone()) {
            return Err(TableError::DuplicateColumnKey(column.key).into());
        }
        self.columns.push(column);
        self.advance(BuilderState::Configuring);
        Ok(self)
    }

    /// Appends a data row. Every key of the row must be a declared column.
    pub fn add_row(&mut self, row: TableRow) -> Result<&mut Self> {
        self.ensure_open()?;
        if let Some(unknown) = row.keys().find(|key| !self.column_keys.contains(*key)) {
            return Err(
                TableError::unknown_column(unknown, format!("row {}", self.rows.len())).into(),
            );
        }
        self.rows.push(row);
        self.advance(BuilderState::Populated);
        Ok(self)
    }

    /// Replaces the total rows wholesale.
    pub fn set_total_data(&mut self, rows: Vec<JsonObject>) -> Result<&mut Self> {
        self.ensure_open()?;
        for key in rows.iter().flat_map(|row| row.keys()) {
            if !self.column_keys.contains(key) {
                warn!(
                    "Total data of table '{}' names undeclared column '{}'",
                    self.config.name, key
                );
            }
        }
        self.total_data = rows;
        self.advance(BuilderState::Populated);
        Ok(self)
    }

    // ==================== Materialization ====================

    /// Freezes the accumulated state into the table's props object.
    ///
    /// Key order: `name`, `idColumn`?, `orderBy`?, `showRefreshButton`,
    /// `showBookmarksButton`, `showExportButton`, `columns`, `data`,
    /// `totalEnabled`, then `totalTitle` and `totalData` when totals are on.
    pub fn materialize(&mut self) -> Result<JsonObject> {
        if let Some(props) = &self.materialized {
            return Ok(props.clone());
        }

        if let Some(id_column) = &self.config.id_column {
            if !self.has_column(id_column) {
                return Err(TableError::unknown_column(id_column.as_str(), "id column").into());
            }
        }
        if let Some(sort) = &self.config.sort {
            if !self.has_column(&sort.column) {
                return Err(TableError::unknown_column(sort.column.as_str(), "sort column").into());
            }
        }

        let columns = self.ordered_columns();
        let mut props = JsonObject::new();
        props.insert("name".to_string(), Value::String(self.config.name.clone()));
        if let Some(id_column) = &self.config.id_column {
            props.insert("idColumn".to_string(), Value::String(id_column.clone()));
        }
        if let Some(sort) = &self.config.sort {
            props.insert("orderBy".to_string(), sort.to_json());
        }
        props.insert(
            "showRefreshButton".to_string(),
            Value::Bool(self.config.show_refresh_button),
        );
        props.insert(
            "showBookmarksButton".to_string(),
            Value::Bool(self.config.show_bookmarks_button),
        );
        props.insert(
            "showExportButton".to_string(),
            Value::Bool(self.config.show_export_button),
        );
        props.insert(
            "columns".to_string(),
            Value::Array(columns.iter().map(|column| column.to_json()).collect()),
        );
        props.insert(
            "data".to_string(),
            Value::Array(
                self.rows
                    .iter()
                    .map(|row| row_to_json(row, &columns))
                    .collect(),
            ),
        );
        props.insert(
            "totalEnabled".to_string(),
            Value::Bool(self.config.total_enabled),
        );
        if self.config.total_enabled {
            props.insert(
                "totalTitle".to_string(),
                Value::String(self.config.total_title.clone()),
            );
            props.insert(
                "totalData".to_string(),
                Value::Array(self.total_data.iter().cloned().map(Value::Object).collect()),
            );
        }

        debug!(
            "Materialized table '{}': {} columns, {} rows, {} total rows",
            self.config.name,
            columns.len(),
            self.rows.len(),
            self.total_data.len()
        );

        self.state = BuilderState::Materialized;
        self.materialized = Some(props.clone());
        Ok(props)
    }

    fn configure(&mut self, apply: impl FnOnce(&mut TableConfig)) -> Result<&mut Self> {
        self.ensure_open()?;
        apply(&mut self.config);
        self.advance(BuilderState::Configuring);
        Ok(self)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state == BuilderState::Materialized {
            return Err(TableError::ReuseAfterMaterialize(self.config.name.clone()).into());
        }
        Ok(())
    }

    fn advance(&mut self, next: BuilderState) {
        if next > self.state {
            self.state = next;
        }
    }
}

/// Row cells in display-column order; absent cells are left out.
fn row_to_json(row: &TableRow, columns: &[&ColumnDefinition]) -> Value {
    let cells: JsonObject = columns
        .iter()
        .filter_map(|column| {
            row.get(&column.key)
                .map(|value| (column.key.clone(), Value::String(value.to_string())))
        })
        .collect();
    Value::Object(cells)
}
