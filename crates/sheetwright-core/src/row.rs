//! Row types

use crate::cell::CellAddress;

/// A worksheet row
///
/// Created the first time any cell in it is referenced. Tracks the addresses
/// that belong to it, in first-reference order, so writers can emit cells
/// row by row.
#[derive(Debug, Clone)]
pub struct Row {
    /// Row index (0-based)
    pub index: u32,
    cell_refs: Vec<CellAddress>,
}

impl Row {
    /// Create a new empty row
    pub fn new(index: u32) -> Self {
        Self {
            index,
            cell_refs: Vec::new(),
        }
    }

    /// Record that `addr` belongs to this row
    ///
    /// Called once per cell, when storage creates it.
    pub(crate) fn push_ref(&mut self, addr: CellAddress) {
        debug_assert_eq!(addr.row, self.index);
        self.cell_refs.push(addr);
    }

    /// Addresses in this row, in first-reference order
    pub fn cell_refs(&self) -> &[CellAddress] {
        &self.cell_refs
    }

    /// Number of cells in row
    pub fn cell_count(&self) -> usize {
        self.cell_refs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refs_keep_first_reference_order() {
        let mut row = Row::new(4);
        row.push_ref(CellAddress::new(4, 2));
        row.push_ref(CellAddress::new(4, 0));

        assert_eq!(row.cell_count(), 2);
        assert_eq!(
            row.cell_refs(),
            [CellAddress::new(4, 2), CellAddress::new(4, 0)]
        );
    }
}
