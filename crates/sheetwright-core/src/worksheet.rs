//! Worksheet type

use crate::cell::{Cell, CellAddress, CellRange, CellStorage};
use crate::column::Column;
use crate::error::{Error, Result};
use crate::hyperlink::HyperlinkCollection;
use crate::row::Row;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
///
/// Cells are written through a [`CellSet`](crate::CellSet) obtained from the
/// owning [`Workbook`](crate::Workbook); the worksheet itself exposes the
/// read side plus sheet-level settings.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cells, rows, columns, merges and watermarks
    cells: CellStorage,
    /// Hyperlinks attached to cells
    hyperlinks: HyperlinkCollection,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            hyperlinks: HyperlinkCollection::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(&addr))
    }

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&CellAddress::new(row, col))
    }

    /// Get a cell's style id by row/column
    ///
    /// Returns 0 if the cell does not exist or is unstyled.
    pub fn cell_style_index_at(&self, row: u32, col: u16) -> u32 {
        self.cell_at(row, col).map(Cell::style_index).unwrap_or(0)
    }

    /// Iterate over all materialized cells, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Get the number of materialized cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if no cell has been referenced yet
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // === Rows / Columns ===

    /// Get a row
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.cells.row(index)
    }

    /// Iterate over rows in ascending order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.cells.rows()
    }

    /// Get a column
    pub fn column(&self, index: u16) -> Option<&Column> {
        self.cells.column(index)
    }

    /// Iterate over columns in ascending order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.cells.columns()
    }

    /// Set column width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        self.validate_cell_position(0, col)?;
        self.cells.column_mut(col).width = Some(width);
        Ok(())
    }

    /// Set column hidden state
    pub fn set_column_hidden(&mut self, col: u16, hidden: bool) -> Result<()> {
        self.validate_cell_position(0, col)?;
        self.cells.column_mut(col).hidden = hidden;
        Ok(())
    }

    /// Highest row index ever referenced
    pub fn last_used_row(&self) -> Option<u32> {
        self.cells.last_used_row()
    }

    /// Highest column index ever referenced
    pub fn last_used_col(&self) -> Option<u16> {
        self.cells.last_used_col()
    }

    /// Bounds from A1 to the used-extent watermarks
    pub fn used_range(&self) -> Option<CellRange> {
        match (self.last_used_row(), self.last_used_col()) {
            (Some(row), Some(col)) => Some(CellRange::from_indices(0, 0, row, col)),
            _ => None,
        }
    }

    // === Merged Cells ===

    /// Registered merged ranges, in registration order
    pub fn merged_cells(&self) -> &[CellRange] {
        self.cells.merged_cells()
    }

    /// The merged range containing a cell, if any
    pub fn merged_range_at(&self, row: u32, col: u16) -> Option<&CellRange> {
        let addr = CellAddress::new(row, col);
        self.merged_cells().iter().find(|r| r.contains(&addr))
    }

    // === Hyperlinks ===

    /// Hyperlinks attached to cells of this sheet
    pub fn hyperlinks(&self) -> &HyperlinkCollection {
        &self.hyperlinks
    }

    // === Internal ===

    pub(crate) fn storage_mut(&mut self) -> &mut CellStorage {
        &mut self.cells
    }

    pub(crate) fn hyperlinks_mut(&mut self) -> &mut HyperlinkCollection {
        &mut self.hyperlinks
    }

    /// Validate cell position
    pub(crate) fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Test");
        assert_eq!(ws.name(), "Test");
        assert!(ws.is_empty());
        assert_eq!(ws.last_used_row(), None);
        assert!(ws.used_range().is_none());
    }

    #[test]
    fn test_column_settings_create_column() {
        let mut ws = Worksheet::new("Test");

        ws.set_column_width(3, 20.0).unwrap();
        ws.set_column_hidden(4, true).unwrap();

        assert_eq!(ws.column(3).unwrap().width, Some(20.0));
        assert!(ws.column(4).unwrap().hidden);
        assert_eq!(ws.column(3).unwrap().letters(), "D");
        assert!(ws.set_column_width(MAX_COLS, 1.0).is_err());
    }

    #[test]
    fn test_position_bounds() {
        let ws = Worksheet::new("Test");
        assert!(ws.validate_cell_position(MAX_ROWS - 1, MAX_COLS - 1).is_ok());
        assert!(matches!(
            ws.validate_cell_position(MAX_ROWS, 0),
            Err(Error::RowOutOfBounds(..))
        ));
        assert!(matches!(
            ws.validate_cell_position(0, MAX_COLS),
            Err(Error::ColumnOutOfBounds(..))
        ));
    }
}
