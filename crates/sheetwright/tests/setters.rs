//! End-to-end tests for the value setters

use pretty_assertions::assert_eq;
use sheetwright::prelude::*;

fn workbook() -> Workbook {
    let mut wb = Workbook::new();
    wb.set_forward_diagnostics_to_log(false);
    wb
}

/// Test that text is interned once and shared between cells
#[test]
fn test_text_uses_shared_strings() {
    let mut wb = workbook();
    wb.range(0, 0, 0, 0, 2).unwrap().string("same");
    wb.cell(0, 1, 0).unwrap().string("same");

    assert_eq!(wb.shared_strings().len(), 1);
    let sheet = wb.worksheet(0).unwrap();
    let indices: Vec<_> = sheet
        .iter_cells()
        .map(|c| c.value().as_string_index())
        .collect();
    assert_eq!(indices, vec![Some(0); 4]);
}

/// Test that illegal XML characters are stripped with a warning
#[test]
fn test_text_strips_control_chars() {
    let mut wb = workbook();
    wb.cell(0, 0, 0).unwrap().string("a\u{0}b");
    wb.cell(0, 0, 1).unwrap().string("tab\tkept");

    assert_eq!(wb.cell_text(0, 0, 0), Some("ab"));
    assert_eq!(wb.cell_text(0, 0, 1), Some("tab\tkept"));

    let warnings: Vec<_> = wb.take_diagnostics();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].is_warning());
    assert!(warnings[0].message.contains("[\"A1\"]"));
}

/// Test the number setter contract
#[test]
fn test_number_accepts_numeric_text() {
    let mut wb = workbook();

    assert!(matches!(
        wb.cell(0, 0, 0).unwrap().number("abc"),
        Err(Error::InvalidValue { setter: "Number", .. })
    ));
    wb.cell(0, 0, 0).unwrap().number("42").unwrap();
    wb.cell(0, 0, 1).unwrap().number(42).unwrap();
    wb.cell(0, 0, 2).unwrap().number(-0.5).unwrap();

    let sheet = wb.worksheet(0).unwrap();
    let values: Vec<_> = sheet.iter_cells().map(|c| c.value().as_number()).collect();
    assert_eq!(values, [Some(42.0), Some(42.0), Some(-0.5)]);
}

/// Test that a failed setter leaves every cell untouched
#[test]
fn test_failed_setter_writes_nothing() {
    let mut wb = workbook();
    wb.range(0, 0, 0, 1, 1).unwrap().bool(true).unwrap();

    let err = wb.range(0, 0, 0, 1, 1).unwrap().number(f64::INFINITY).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Value sent to Number function of cells [\"A1\",\"B1\",\"A2\",\"B2\"] was not a number, it has type of number and value of inf"
    );

    let sheet = wb.worksheet(0).unwrap();
    assert!(sheet.iter_cells().all(|c| c.value() == &CellValue::Boolean(true)));
}

/// Test last-write-wins between value kinds
#[test]
fn test_last_write_wins() {
    let mut wb = workbook();
    wb.cell(0, 0, 0)
        .unwrap()
        .string("text")
        .number(3)
        .unwrap()
        .formula("A2+1")
        .unwrap();

    let sheet = wb.worksheet(0).unwrap();
    assert_eq!(
        sheet.cell_at(0, 0).unwrap().value(),
        &CellValue::Formula("A2+1".into())
    );
}

/// Test the boolean setter's string forms
#[test]
fn test_bool_strings() {
    let mut wb = workbook();
    wb.cell(0, 0, 0).unwrap().bool("False").unwrap();
    assert!(wb.cell(0, 0, 1).unwrap().bool("0").is_err());
    assert!(wb.cell(0, 0, 1).unwrap().bool(None::<bool>).is_err());

    let sheet = wb.worksheet(0).unwrap();
    assert_eq!(sheet.cell_at(0, 0).unwrap().value().as_bool(), Some(false));
    assert!(sheet.cell_at(0, 1).unwrap().value().is_empty());
}

/// Test that scalar setters on a merged range only write the anchor
#[test]
fn test_merged_range_writes_anchor_only() {
    let mut wb = workbook();
    wb.merged_range(0, 0, 0, 1, 1).unwrap().number(7).unwrap();
    wb.merged_range(0, 3, 0, 4, 1).unwrap().bool(true).unwrap();
    wb.merged_range(0, 6, 0, 7, 1).unwrap().formula("B5*2").unwrap();

    let sheet = wb.worksheet(0).unwrap();
    assert_eq!(sheet.cell_at(0, 0).unwrap().value().as_number(), Some(7.0));
    assert_eq!(sheet.cell_at(3, 0).unwrap().value().as_bool(), Some(true));
    assert_eq!(
        sheet.cell_at(6, 0).unwrap().value(),
        &CellValue::Formula("B5*2".into())
    );

    for anchor_row in [0, 3, 6] {
        for (row, col) in [(anchor_row, 1), (anchor_row + 1, 0), (anchor_row + 1, 1)] {
            assert!(sheet.cell_at(row, col).unwrap().value().is_empty());
        }
    }
    assert_eq!(sheet.merged_cells().len(), 3);
}
