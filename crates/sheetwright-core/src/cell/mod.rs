//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A rectangle of cells (e.g., "A1:B10")
//! - [`Cell`] - A materialized cell with its value and style id
//! - [`CellValue`] / [`RawValue`] - Committed payloads and setter input

mod address;
mod storage;
mod value;

pub use address::{
    format_address_list, intersect, sort_addresses, CellAddress, CellRange, CellRangeIter,
};
pub use storage::{Cell, CellStorage};
pub use value::{CellValue, RawValue, SharedStringTable};
