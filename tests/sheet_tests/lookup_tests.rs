//! Key Lookup Tests
//!
//! Tests verify:
//! - Exact, case-sensitive matching
//! - First match wins on duplicates
//! - Offsets translate to absolute rows (offset + 2)
//! - One read per lookup, no writes

use std::sync::Arc;

use inventory_bridge::sheet::{position, Column, KeyLookup, RowNumber};
use inventory_bridge::storage::MemoryStore;

fn rows(values: &[&[&str]]) -> Vec<Vec<String>> {
    values
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

// =============================================================================
// Pure Scan Tests
// =============================================================================

#[test]
fn test_position_finds_exact_match() {
    let data = rows(&[&["SN001"], &["SN002"], &["SN003"]]);
    assert_eq!(position(&data, 0, "SN002"), Some(1));
}

#[test]
fn test_position_is_case_sensitive_and_untrimmed() {
    let data = rows(&[&["SN001"], &["sn002"], &["SN003 "]]);
    assert_eq!(position(&data, 0, "SN002"), None);
    assert_eq!(position(&data, 0, "SN003"), None);
}

#[test]
fn test_position_first_match_wins() {
    let data = rows(&[&["Radio", "a"], &["Radio", "b"]]);
    assert_eq!(position(&data, 0, "Radio"), Some(0));
}

#[test]
fn test_position_skips_short_rows() {
    let data = rows(&[&[], &["Radio1"], &["Radio2", "desc", "UHF", "M", "SN9"]]);
    assert_eq!(position(&data, 4, "SN9"), Some(2));
    assert_eq!(position(&data, 0, "Radio1"), Some(1));
}

#[test]
fn test_position_empty_range() {
    let data: Vec<Vec<String>> = Vec::new();
    assert_eq!(position(&data, 0, "anything"), None);
}

#[test]
fn test_row_number_from_offset() {
    assert_eq!(RowNumber::from_offset(0).get(), 2);
    assert_eq!(RowNumber::from_offset(9).get(), 11);
    assert_eq!(RowNumber::from_offset(9).offset(), 9);
}

// =============================================================================
// Store-backed Lookup Tests
// =============================================================================

#[tokio::test]
async fn test_find_resolves_absolute_row() {
    let store = Arc::new(MemoryStore::with_data(
        "Main",
        &[
            ["Radio1", "d", "UHF", "M1", "SN001", "01/01/2024", "In Service"],
            ["Radio2", "d", "VHF", "M2", "SN002", "01/01/2024", "Broken"],
        ],
    ));
    let lookup = KeyLookup::new(store.clone(), "Main");

    let row = lookup.find(Column::SerialNumber, "SN002").await.unwrap();

    assert_eq!(row, Some(RowNumber::from_offset(1)));
    assert_eq!(row.unwrap().get(), 3);
    assert_eq!(store.read_count(), 1);
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn test_find_on_empty_tab_is_none() {
    let store = Arc::new(MemoryStore::with_data::<[&str; 7], &str>("Main", &[]));
    let lookup = KeyLookup::new(store, "Main");

    assert_eq!(lookup.find(Column::SerialNumber, "SN001").await.unwrap(), None);
}

#[tokio::test]
async fn test_find_does_not_match_header_row() {
    let store = Arc::new(MemoryStore::with_data("Main", &[["Radio1", "", "", "", "SN001"]]));
    let lookup = KeyLookup::new(store, "Main");

    assert_eq!(lookup.find(Column::SerialNumber, "Serial Number").await.unwrap(), None);
}

#[tokio::test]
async fn test_find_surfaces_store_failure() {
    let store = Arc::new(MemoryStore::with_data("Main", &[["Radio1", "", "", "", "SN001"]]));
    store.set_failing(true);
    let lookup = KeyLookup::new(store, "Main");

    assert!(lookup.find(Column::SerialNumber, "SN001").await.is_err());
}
