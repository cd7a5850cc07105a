//! Plain `table` rendering of columns and rows.
//!
//! Used when the frontend should draw an ordinary HTML-like table instead
//! of the data-table widget: no sorting, no export, totals are just extra
//! rows at the bottom.

use super::table_model::{order_columns, ColumnDefinition, TableRow};
use crate::element::{props, table, td, text, th, thead, tr, Element};

pub const STATIC_TABLE_CLASS: &str = "data-table";

/// Builds `table[thead[tr[th..]], tr[td..].., total tr..]`.
pub fn static_table(
    columns: &[ColumnDefinition],
    rows: &[TableRow],
    total_rows: &[TableRow],
) -> Element {
    let columns = order_columns(columns);

    let header = thead(vec![tr(columns
        .iter()
        .map(|column| th(vec![text(column.label.as_str())]))
        .collect())]);

    let mut children = Vec::with_capacity(1 + rows.len() + total_rows.len());
    children.push(header);
    children.extend(
        rows.iter()
            .chain(total_rows.iter())
            .map(|row| body_row(row, &columns)),
    );

    table(children).with_props(props([("className", STATIC_TABLE_CLASS)]))
}

fn body_row(row: &TableRow, columns: &[&ColumnDefinition]) -> Element {
    tr(columns
        .iter()
        .map(|column| td(vec![text(row.get(&column.key).unwrap_or_default())]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{serialize, Tag};

    #[test]
    fn test_static_table_layout() {
        let columns = vec![
            ColumnDefinition::new("login", "Login"),
            ColumnDefinition::new("balance", "Balance"),
        ];
        let rows = vec![TableRow::new().cell("login", "5").cell("balance", "10.00")];
        let totals = vec![TableRow::new().cell("login", "TOTAL").cell("balance", "10.00")];

        let node = static_table(&columns, &rows, &totals);
        assert_eq!(node.tag(), &Tag::TABLE);
        assert_eq!(node.props().get("className").unwrap(), "data-table");
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.children()[0].tag(), &Tag::THEAD);

        let value = serialize(&node);
        let header_cells = &value["children"][0]["children"][0]["children"];
        assert_eq!(header_cells[0]["children"][0]["props"]["text"], "Login");
        assert_eq!(header_cells[1]["children"][0]["props"]["text"], "Balance");

        let total_cells = &value["children"][2]["children"];
        assert_eq!(total_cells[0]["children"][0]["props"]["text"], "TOTAL");
    }

    #[test]
    fn test_static_table_fills_missing_cells_with_empty_text() {
        let columns = vec![
            ColumnDefinition::new("a", "A"),
            ColumnDefinition::new("b", "B"),
        ];
        let rows = vec![TableRow::new().cell("b", "x")];

        let node = static_table(&columns, &rows, &[]);
        let cells = node.children()[1].children();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].children()[0].text_content(), Some(""));
        assert_eq!(cells[1].children()[0].text_content(), Some("x"));
    }

    #[test]
    fn test_static_table_uses_column_order() {
        let columns = vec![
            ColumnDefinition::new("late", "Late").with_order(2),
            ColumnDefinition::new("early", "Early").with_order(1),
        ];
        let node = static_table(&columns, &[], &[]);
        let header = node.children()[0].children()[0].children();
        assert_eq!(header[0].children()[0].text_content(), Some("Early"));
        assert_eq!(header[1].children()[0].text_content(), Some("Late"));
    }
}
