//! # sheetwright
//!
//! A Rust library for building spreadsheet documents in memory.
//!
//! Cells are addressed through ranges: a range request materializes every
//! cell it covers and returns a [`CellSet`] whose setters write values,
//! styles and hyperlinks.
//!
//! ## Features
//!
//! - Lazy creation of cells, rows and columns with used-extent tracking
//! - Merged ranges, rejected when they overlap an earlier merge
//! - Text, number, boolean and formula setters with input validation
//! - Mergeable cell styles from builders or JSON configs
//! - Hyperlinks with default display text and link styling
//! - Non-fatal problems reported through `log` and kept as [`Diagnostic`]s
//!
//! ## Example
//!
//! ```rust
//! use sheetwright::prelude::*;
//!
//! let mut workbook = Workbook::new();
//!
//! workbook.cell(0, 0, 0)?.string("Hello");
//! workbook.cell(0, 0, 1)?.number(42)?;
//! workbook.cell(0, 0, 2)?.bool(true)?;
//! workbook.cell(0, 0, 3)?.formula("B1*2")?;
//!
//! workbook
//!     .range(0, 0, 0, 0, 3)?
//!     .style(serde_json::json!({"border": {"bottom": {"style": "thin"}}}))?;
//!
//! assert_eq!(workbook.cell_text(0, 0, 0), Some("Hello"));
//! # Ok::<(), sheetwright::Error>(())
//! ```

pub mod prelude;

// Re-export core types
pub use sheetwright_core::{
    accessor, cell, diagnostics, hyperlink, merge, style, text,
    // Main types
    Workbook,
    WorkbookSettings,
    Worksheet,
    // Range access
    CellSet,
    MergeOutcome,
    // Cell types
    Cell,
    CellAddress,
    CellRange,
    CellValue,
    Column,
    RawValue,
    Row,
    SharedStringTable,
    // Style types
    BorderConfig,
    BorderEdge,
    BorderLineStyle,
    Color,
    FillConfig,
    FontConfig,
    HorizontalAlignment,
    Style,
    StyleConfig,
    StyleInput,
    StylePool,
    Underline,
    VerticalAlignment,
    // Hyperlinks
    Hyperlink,
    HyperlinkCollection,
    // Diagnostics
    Diagnostic,
    Diagnostics,
    // Error types
    Error,
    Result,
    // Constants
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};
