//! # sheetwright-core
//!
//! Core data structures for the sheetwright spreadsheet library.
//!
//! This crate provides:
//! - [`Workbook`], [`Worksheet`] - The document model, with lazily created
//!   [`Cell`]s, [`Row`]s and [`Column`]s
//! - [`CellSet`] - A handle over a resolved range of cells, with setters for
//!   text, numbers, booleans, formulas, styles and hyperlinks
//! - [`StyleConfig`] / [`StylePool`] - Mergeable cell styles, deduplicated
//!   per workbook
//! - [`Diagnostics`] - Non-fatal warnings and errors raised by setters
//!
//! ## Example
//!
//! ```rust
//! use sheetwright_core::{StyleConfig, Workbook};
//!
//! let mut workbook = Workbook::new();
//!
//! // Header spanning A1:D1, written once into the anchor cell
//! workbook
//!     .merged_range(0, 0, 0, 0, 3)?
//!     .string("Inventory")
//!     .style(StyleConfig::new().bold(true))?;
//!
//! // Row/column indices are 0-based
//! workbook.range(0, 1, 0, 3, 0)?.number(0)?;
//! workbook.cell(0, 4, 0)?.formula("SUM(A2:A4)")?;
//!
//! let sheet = workbook.worksheet(0).unwrap();
//! assert_eq!(sheet.last_used_row(), Some(4));
//! assert_eq!(sheet.last_used_col(), Some(3));
//! # Ok::<(), sheetwright_core::Error>(())
//! ```

pub mod accessor;
pub mod cell;
pub mod column;
pub mod diagnostics;
pub mod error;
pub mod hyperlink;
pub mod merge;
pub mod row;
pub mod style;
pub mod text;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use accessor::CellSet;
pub use cell::{Cell, CellAddress, CellRange, CellValue, RawValue, SharedStringTable};
pub use column::Column;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{Error, Result};
pub use hyperlink::{Hyperlink, HyperlinkCollection};
pub use merge::MergeOutcome;
pub use row::Row;
pub use workbook::{Workbook, WorkbookSettings};
pub use worksheet::Worksheet;

// Re-export the style types used at call sites
pub use style::{
    BorderConfig, BorderEdge, BorderLineStyle, Color, FillConfig, FontConfig,
    HorizontalAlignment, Style, StyleConfig, StyleInput, StylePool, Underline, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
