//! Cell storage implementation
//!
//! Cells, rows and columns are materialized lazily, the first time a range
//! that touches them is resolved, and are never removed afterwards.

use std::collections::BTreeMap;

use ahash::AHashMap;

use super::{CellAddress, CellRange, CellValue};
use crate::column::Column;
use crate::row::Row;

/// A single cell: its position, its payload, and its style id
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    row: u32,
    col: u16,
    value: CellValue,
    style_index: u32,
}

impl Cell {
    /// Create an empty, unstyled cell
    pub fn new(row: u32, col: u16) -> Self {
        Self {
            row,
            col,
            value: CellValue::Empty,
            style_index: 0,
        }
    }

    /// Row index (0-based)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column index (0-based)
    pub fn col(&self) -> u16 {
        self.col
    }

    /// The cell's address
    pub fn address(&self) -> CellAddress {
        CellAddress::new(self.row, self.col)
    }

    /// The committed payload
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Style id (0 = unstyled)
    pub fn style_index(&self) -> u32 {
        self.style_index
    }

    /// Check if a style has been assigned
    pub fn is_styled(&self) -> bool {
        self.style_index != 0
    }

    /// Store a shared-string index
    pub fn string(&mut self, index: u32) {
        self.value = CellValue::SharedString(index);
    }

    /// Store a number
    pub fn number(&mut self, value: f64) {
        self.value = CellValue::Number(value);
    }

    /// Store a boolean
    pub fn boolean(&mut self, value: bool) {
        self.value = CellValue::Boolean(value);
    }

    /// Store a formula expression
    pub fn formula<S: Into<String>>(&mut self, text: S) {
        self.value = CellValue::Formula(text.into());
    }

    /// Assign a style id
    pub fn set_style(&mut self, style_index: u32) {
        self.style_index = style_index;
    }
}

/// Sparse storage for a worksheet's cells, rows, columns and merges
///
/// Structure:
/// - cells: `address → Cell`
/// - rows: `row index → Row` (ordered, for row-by-row emission)
/// - cols: `column index → Column`
#[derive(Debug, Default)]
pub struct CellStorage {
    cells: AHashMap<CellAddress, Cell>,
    rows: BTreeMap<u32, Row>,
    cols: BTreeMap<u16, Column>,
    /// Registered merged ranges, in registration order
    merged_cells: Vec<CellRange>,
    last_used_row: Option<u32>,
    last_used_col: Option<u16>,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the cell, its row and its column exist
    ///
    /// Returns `true` if the cell was created by this call.
    pub fn ensure(&mut self, addr: CellAddress) -> bool {
        if self.cells.contains_key(&addr) {
            return false;
        }
        self.cells.insert(addr, Cell::new(addr.row, addr.col));
        // A row lists each of its cells once, so only new cells are pushed
        self.rows
            .entry(addr.row)
            .or_insert_with(|| Row::new(addr.row))
            .push_ref(addr);
        self.cols
            .entry(addr.col)
            .or_insert_with(|| Column::new(addr.col));
        true
    }

    /// Raise the used-extent watermarks to cover `row`/`col`
    pub fn extend_used(&mut self, row: u32, col: u16) {
        self.last_used_row = self.last_used_row.max(Some(row));
        self.last_used_col = self.last_used_col.max(Some(col));
    }

    /// Get a cell
    pub fn get(&self, addr: &CellAddress) -> Option<&Cell> {
        self.cells.get(addr)
    }

    /// Get a mutable cell
    pub fn get_mut(&mut self, addr: &CellAddress) -> Option<&mut Cell> {
        self.cells.get_mut(addr)
    }

    /// Get a row
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get a column
    pub fn column(&self, index: u16) -> Option<&Column> {
        self.cols.get(&index)
    }

    /// Get a column, creating it if absent
    pub fn column_mut(&mut self, index: u16) -> &mut Column {
        self.cols.entry(index).or_insert_with(|| Column::new(index))
    }

    /// Iterate over rows in ascending order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// Iterate over columns in ascending order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.cols.values()
    }

    /// Highest row ever referenced
    pub fn last_used_row(&self) -> Option<u32> {
        self.last_used_row
    }

    /// Highest column ever referenced
    pub fn last_used_col(&self) -> Option<u16> {
        self.last_used_col
    }

    /// Registered merged ranges
    pub fn merged_cells(&self) -> &[CellRange] {
        &self.merged_cells
    }

    /// Append a merged range; callers check for overlap first
    pub(crate) fn push_merged(&mut self, range: CellRange) {
        self.merged_cells.push(range);
    }

    /// Number of materialized cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell has been materialized
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.rows
            .values()
            .flat_map(|row| {
                let mut refs = row.cell_refs().to_vec();
                refs.sort_unstable();
                refs
            })
            .filter_map(move |addr| self.cells.get(&addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_creates_once() {
        let mut storage = CellStorage::new();
        let addr = CellAddress::new(2, 3);

        assert!(storage.ensure(addr));
        storage.get_mut(&addr).unwrap().number(7.0);
        assert!(!storage.ensure(addr));

        assert_eq!(storage.cell_count(), 1);
        assert_eq!(storage.get(&addr).unwrap().value(), &CellValue::Number(7.0));
        assert_eq!(storage.row(2).unwrap().cell_count(), 1);
        assert!(storage.column(3).is_some());
    }

    #[test]
    fn test_full_width_row_lists_each_cell_once() {
        let mut storage = CellStorage::new();
        let row = CellRange::parse("A1:XFD1").unwrap();

        for _ in 0..2 {
            for addr in row.cells() {
                storage.ensure(addr);
            }
        }

        assert_eq!(storage.cell_count(), crate::MAX_COLS as usize);
        assert_eq!(storage.row(0).unwrap().cell_count(), crate::MAX_COLS as usize);
        assert_eq!(storage.columns().count(), crate::MAX_COLS as usize);
    }

    #[test]
    fn test_watermarks_never_decrease() {
        let mut storage = CellStorage::new();
        assert_eq!(storage.last_used_row(), None);

        storage.extend_used(10, 4);
        storage.extend_used(3, 9);

        assert_eq!(storage.last_used_row(), Some(10));
        assert_eq!(storage.last_used_col(), Some(9));
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut storage = CellStorage::new();
        for addr in ["C2", "A2", "B1"] {
            storage.ensure(CellAddress::parse(addr).unwrap());
        }

        let order: Vec<String> = storage.iter().map(|c| c.address().to_string()).collect();
        assert_eq!(order, ["B1", "A2", "C2"]);
    }

    #[test]
    fn test_last_write_wins() {
        let mut cell = Cell::new(0, 0);
        cell.string(4);
        cell.formula("A2*2");
        assert_eq!(cell.value().formula_text(), Some("A2*2"));
        assert!(!cell.is_styled());

        cell.set_style(3);
        assert_eq!(cell.style_index(), 3);
    }
}
