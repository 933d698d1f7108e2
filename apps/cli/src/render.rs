//! Table and JSON rendering for command output.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::error::ApiError;
use crate::session::{LowStockView, ProductView};

/// Shown instead of an empty low-stock table.
pub const NO_LOW_STOCK_MESSAGE: &str = "No low-stock items found!";

fn base_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.iter().map(Cell::new).collect::<Vec<_>>());
    table
}

/// ID / Name / Quantity / Price.
pub fn products_table(products: &[ProductView]) -> Table {
    let mut table = base_table(&["ID", "Name", "Quantity", "Price"]);
    for p in products {
        table.add_row(vec![
            Cell::new(p.id).set_alignment(CellAlignment::Right),
            Cell::new(&p.name),
            Cell::new(p.quantity).set_alignment(CellAlignment::Right),
            Cell::new(&p.price).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// ID / Name / Quantity.
pub fn low_stock_table(items: &[LowStockView]) -> Table {
    let mut table = base_table(&["ID", "Name", "Quantity"]);
    for item in items {
        table.add_row(vec![
            Cell::new(item.id).set_alignment(CellAlignment::Right),
            Cell::new(&item.name),
            Cell::new(item.quantity).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Product list as printed by `list`.
pub fn products(products: &[ProductView]) -> String {
    if products.is_empty() {
        return "No products yet.".to_string();
    }
    products_table(products).to_string()
}

/// Low-stock report as printed by `low-stock`.
pub fn low_stock(items: &[LowStockView]) -> String {
    if items.is_empty() {
        return NO_LOW_STOCK_MESSAGE.to_string();
    }
    low_stock_table(items).to_string()
}

/// Pretty JSON for `--json`.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProductView {
        ProductView {
            id: 1,
            name: "Widget".into(),
            quantity: 5,
            price: "2.50".into(),
        }
    }

    #[test]
    fn test_products_table_shows_every_column() {
        let out = products(&[widget()]);
        for expected in ["ID", "Name", "Quantity", "Price", "Widget", "2.50"] {
            assert!(out.contains(expected), "missing {expected} in\n{out}");
        }
    }

    #[test]
    fn test_empty_low_stock() {
        assert_eq!(low_stock(&[]), "No low-stock items found!");
    }

    #[test]
    fn test_low_stock_table() {
        let out = low_stock(&[LowStockView {
            id: 7,
            name: "Bolt".into(),
            quantity: 3,
        }]);
        assert!(out.contains("Bolt"));
        assert!(!out.contains("Price"));
    }

    #[test]
    fn test_json_keeps_price_string() {
        let out = json(&[widget()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["price"], "2.50");
        assert_eq!(value[0]["quantity"], 5);
    }
}
