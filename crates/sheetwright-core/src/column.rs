//! Column types

/// A worksheet column
///
/// Created the first time any cell in it is referenced.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column index (0-based)
    pub index: u16,
    /// Custom width (None = default)
    pub width: Option<f64>,
    /// Column is hidden
    pub hidden: bool,
}

impl Column {
    /// Create a new column with default settings
    pub fn new(index: u16) -> Self {
        Self {
            index,
            width: None,
            hidden: false,
        }
    }

    /// Column letters for display (0 = "A")
    pub fn letters(&self) -> String {
        crate::cell::CellAddress::column_to_letters(self.index)
    }
}
