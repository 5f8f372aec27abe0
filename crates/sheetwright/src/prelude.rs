//! Prelude module - common imports for sheetwright users
//!
//! ```rust
//! use sheetwright::prelude::*;
//! ```

pub use crate::{
    BorderConfig,
    BorderEdge,
    BorderLineStyle,
    CellAddress,
    CellRange,
    CellSet,
    CellValue,
    Color,
    Error,
    HorizontalAlignment,
    Result,
    Style,
    StyleConfig,
    Underline,
    VerticalAlignment,
    Workbook,
    WorkbookSettings,
    Worksheet,
};
