//! Table module - column/row models, the data-table builder and the static
//! table renderer.

mod static_table;
mod table_builder;
mod table_model;


pub use static_table::{static_table, STATIC_TABLE_CLASS};
pub use table_builder::TableBuilder;
pub use table_model::{
    order_columns, BuilderState, ColumnDefinition, SortDirection, SortSpec, TableConfig, TableRow,
};
