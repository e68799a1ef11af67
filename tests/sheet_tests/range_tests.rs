//! A1 Addressing Tests

use inventory_bridge::sheet::{CellRef, Column, SheetRange};

#[test]
fn test_data_range() {
    assert_eq!(SheetRange::data("Main").to_a1(), "Main!A2:G");
}

#[test]
fn test_single_column_range() {
    assert_eq!(SheetRange::column("Main", Column::SerialNumber).to_a1(), "Main!E2:E");
    assert_eq!(SheetRange::column("Main", Column::SerialNumber).width(), 1);
}

#[test]
fn test_table_range() {
    let range = SheetRange::table("Main");
    assert_eq!(range.to_a1(), "Main!A:G");
    assert_eq!(range.width(), 7);
}

#[test]
fn test_bounded_range() {
    let range = SheetRange {
        last_row: Some(10),
        ..SheetRange::data("Main")
    };
    assert_eq!(range.to_a1(), "Main!A2:G10");
}

#[test]
fn test_cell_ref() {
    assert_eq!(CellRef::new("Main", Column::Status, 2).to_a1(), "Main!G2");
    assert_eq!(CellRef::new("Main", Column::LastInspection, 15).to_string(), "Main!F15");
}

#[test]
fn test_tab_names_are_quoted_when_needed() {
    assert_eq!(SheetRange::data("Radio Inventory").to_a1(), "'Radio Inventory'!A2:G");
    assert_eq!(CellRef::new("Bob's", Column::Name, 3).to_a1(), "'Bob''s'!A3");
    assert_eq!(CellRef::new("2024", Column::Name, 3).to_a1(), "'2024'!A3");
    assert_eq!(CellRef::new("Main_2", Column::Name, 3).to_a1(), "Main_2!A3");
}
