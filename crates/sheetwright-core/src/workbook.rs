//! Workbook type - the main document structure

use serde::Deserialize;

use crate::accessor::CellSet;
use crate::cell::{CellRange, SharedStringTable};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Error, Result};
use crate::style::{Style, StyleConfig, StylePool};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// Workbook-wide tables shared by every sheet
///
/// Lent to a [`CellSet`] next to the worksheet it writes to.
#[derive(Debug, Default)]
pub(crate) struct Registries {
    pub(crate) strings: SharedStringTable,
    pub(crate) styles: StylePool,
    pub(crate) diagnostics: Diagnostics,
}

/// A workbook (spreadsheet document)
///
/// Owns its worksheets plus the shared-string table, the style pool and the
/// diagnostics buffer. Cells are reached through the range entry points,
/// which resolve a rectangle into a [`CellSet`]:
///
/// ```rust
/// use sheetwright_core::Workbook;
///
/// let mut wb = Workbook::new();
/// wb.cells_a1(0, "A1:C1", true)?.string("Quarterly report");
/// wb.cell(0, 1, 0)?.number(1250.5)?;
///
/// assert_eq!(wb.cell_text(0, 0, 0), Some("Quarterly report"));
/// assert_eq!(wb.worksheet(0).unwrap().merged_cells().len(), 1);
/// # Ok::<(), sheetwright_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Shared strings, styles, diagnostics
    registries: Registries,
    /// Workbook settings
    settings: WorkbookSettings,
    /// Active sheet index
    active_sheet: usize,
}

impl Workbook {
    /// Create a new workbook with one worksheet named "Sheet1"
    pub fn new() -> Self {
        let mut wb = Self::empty();
        wb.worksheets.push(Worksheet::new("Sheet1"));
        wb
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self::with_settings(WorkbookSettings::default())
    }

    /// Create an empty workbook with the given settings
    pub fn with_settings(settings: WorkbookSettings) -> Self {
        let mut registries = Registries::default();
        registries
            .diagnostics
            .set_forward_to_log(settings.forward_diagnostics_to_log);
        Self {
            worksheets: Vec::new(),
            registries,
            settings,
            active_sheet: 0,
        }
    }

    // ==================== Range access ====================

    /// Resolve a single cell
    pub fn cell(&mut self, sheet: usize, row: u32, col: u16) -> Result<CellSet<'_>> {
        self.cells(sheet, row, col, None, None, false)
    }

    /// Resolve the rectangle between two corners
    pub fn range(
        &mut self,
        sheet: usize,
        row1: u32,
        col1: u16,
        row2: u32,
        col2: u16,
    ) -> Result<CellSet<'_>> {
        self.cells(sheet, row1, col1, Some(row2), Some(col2), false)
    }

    /// Resolve a rectangle and register it as a merged range
    ///
    /// Fails with [`Error::MergedCellConflict`] if it overlaps a range
    /// merged earlier; the cells stay resolved but nothing is registered.
    pub fn merged_range(
        &mut self,
        sheet: usize,
        row1: u32,
        col1: u16,
        row2: u32,
        col2: u16,
    ) -> Result<CellSet<'_>> {
        self.cells(sheet, row1, col1, Some(row2), Some(col2), true)
    }

    /// Resolve a rectangle; a missing second corner defaults to the first
    pub fn cells(
        &mut self,
        sheet: usize,
        row1: u32,
        col1: u16,
        row2: Option<u32>,
        col2: Option<u16>,
        merged: bool,
    ) -> Result<CellSet<'_>> {
        let range = CellRange::from_indices(row1, col1, row2.unwrap_or(row1), col2.unwrap_or(col1));
        self.resolve(sheet, range, merged)
    }

    /// Resolve a range written in A1 notation ("B2:C4" or "B2")
    pub fn cells_a1(&mut self, sheet: usize, range: &str, merged: bool) -> Result<CellSet<'_>> {
        let range = CellRange::parse(range)?;
        self.resolve(sheet, range, merged)
    }

    fn resolve(&mut self, sheet: usize, range: CellRange, merged: bool) -> Result<CellSet<'_>> {
        let count = self.worksheets.len();
        let worksheet = self
            .worksheets
            .get_mut(sheet)
            .ok_or(Error::SheetOutOfBounds(sheet, count))?;
        CellSet::resolve(worksheet, &mut self.registries, range, merged)
    }

    /// Text stored in a cell, looked up in the shared-string table
    pub fn cell_text(&self, sheet: usize, row: u32, col: u16) -> Option<&str> {
        let index = self
            .worksheet(sheet)?
            .cell_at(row, col)?
            .value()
            .as_string_index()?;
        self.registries.strings.get(index)
    }

    // ==================== Registries ====================

    /// Get the shared-string table
    pub fn shared_strings(&self) -> &SharedStringTable {
        &self.registries.strings
    }

    /// Get the style pool
    pub fn styles(&self) -> &StylePool {
        &self.registries.styles
    }

    /// Register a style and return it
    pub fn create_style(&mut self, config: StyleConfig) -> Style {
        self.registries.styles.create(config)
    }

    /// Warnings and errors recorded so far
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.registries.diagnostics
    }

    /// Drain the recorded warnings and errors
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.registries.diagnostics.take()
    }

    /// Enable or disable forwarding of diagnostics to the `log` facade
    pub fn set_forward_diagnostics_to_log(&mut self, forward: bool) {
        self.settings.forward_diagnostics_to_log = forward;
        self.registries.diagnostics.set_forward_to_log(forward);
    }

    // ==================== Worksheets ====================

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name, ignoring ASCII case like Excel does
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets
            .iter()
            .find(|ws| ws.name().eq_ignore_ascii_case(name))
    }

    /// Get the index of a worksheet by name, ignoring ASCII case
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets
            .iter()
            .position(|ws| ws.name().eq_ignore_ascii_case(name))
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a worksheet named "SheetN", N being the first free number
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = (self.worksheets.len() + 1..)
            .map(|n| format!("Sheet{}", n))
            .find(|name| self.check_sheet_name(name, None).is_ok())
            .ok_or_else(|| Error::InvalidSheetName("no free sheet name".into()))?;
        self.add_worksheet_with_name(&name)
    }

    /// Add a worksheet with the given name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.check_sheet_name(name, None)?;
        self.worksheets.push(Worksheet::new(name));
        Ok(self.worksheets.len() - 1)
    }

    /// Rename a worksheet
    pub fn rename_worksheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.check_sheet_name(new_name, Some(index))?;
        self.worksheets[index].set_name(new_name);
        Ok(())
    }

    /// Get the active sheet index
    pub fn active_sheet(&self) -> usize {
        self.active_sheet
    }

    /// Set the active sheet index
    pub fn set_active_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.active_sheet = index;
        Ok(())
    }

    /// Get workbook settings
    pub fn settings(&self) -> &WorkbookSettings {
        &self.settings
    }

    /// Check a sheet name, skipping sheet `skip` in the duplicate check
    fn check_sheet_name(&self, name: &str, skip: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = name.chars().find(|c| ":\\/?*[]".contains(*c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Excel compares sheet names case-insensitively
        let taken = self
            .worksheets
            .iter()
            .enumerate()
            .any(|(i, ws)| Some(i) != skip && ws.name().eq_ignore_ascii_case(name));
        if taken {
            return Err(Error::DuplicateSheetName(name.into()));
        }
        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

/// Workbook-level settings
///
/// Deserializable from camelCase JSON; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkbookSettings {
    /// Date system: false = 1900 (Windows), true = 1904 (Mac)
    pub date_1904: bool,
    /// Calculate formulas on open
    pub calc_on_open: bool,
    /// Default theme name
    pub theme: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Emit diagnostics through the `log` facade as well as recording them
    pub forward_diagnostics_to_log: bool,
}

impl WorkbookSettings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            date_1904: false,
            calc_on_open: true,
            theme: None,
            author: None,
            forward_diagnostics_to_log: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet(0).unwrap().name(), "Sheet1");
        assert_eq!(wb.styles().len(), 1);
        assert!(wb.diagnostics().is_empty());
    }

    #[test]
    fn test_add_worksheets() {
        let mut wb = Workbook::new();

        assert_eq!(wb.add_worksheet().unwrap(), 1);
        assert_eq!(wb.worksheet(1).unwrap().name(), "Sheet2");

        assert_eq!(wb.add_worksheet_with_name("Data").unwrap(), 2);
        assert_eq!(wb.sheet_index("Data"), Some(2));
        assert!(wb.worksheet_by_name("Missing").is_none());
    }

    #[test]
    fn test_name_lookup_matches_uniqueness_rule() {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("Data").unwrap();

        assert!(wb.add_worksheet_with_name("data").is_err());
        assert_eq!(wb.sheet_index("data"), Some(1));
        assert_eq!(wb.worksheet_by_name("DATA").unwrap().name(), "Data");
    }

    #[test]
    fn test_sheet_name_rules() {
        let mut wb = Workbook::new();

        assert!(matches!(
            wb.add_worksheet_with_name("SHEET1"),
            Err(Error::DuplicateSheetName(_))
        ));
        assert!(wb.add_worksheet_with_name("").is_err());
        assert!(wb.add_worksheet_with_name("Q1/Q2").is_err());
        assert!(wb.add_worksheet_with_name("[draft]").is_err());
        assert!(wb
            .add_worksheet_with_name(&"x".repeat(MAX_SHEET_NAME_LEN + 1))
            .is_err());

        // Renaming a sheet to its own name in another case is fine
        wb.rename_worksheet(0, "SHEET1").unwrap();
        assert_eq!(wb.worksheet(0).unwrap().name(), "SHEET1");
    }

    #[test]
    fn test_unknown_sheet() {
        let mut wb = Workbook::new();
        assert!(matches!(
            wb.cell(3, 0, 0),
            Err(Error::SheetOutOfBounds(3, 1))
        ));
        assert!(wb.set_active_sheet(1).is_err());
    }

    #[test]
    fn test_merge_conflict_is_an_error() {
        let mut wb = Workbook::new();
        wb.set_forward_diagnostics_to_log(false);

        assert!(wb.merged_range(0, 0, 0, 1, 0).is_ok());
        let err = wb.merged_range(0, 1, 0, 2, 0).unwrap_err();
        match err {
            Error::MergedCellConflict {
                requested,
                conflict,
            } => {
                assert_eq!(requested, "A2:A3");
                assert_eq!(conflict, "A1:A2");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(wb.worksheet(0).unwrap().merged_cells().len(), 1);
        assert_eq!(wb.take_diagnostics().len(), 1);
        assert!(wb.diagnostics().is_empty());
    }

    #[test]
    fn test_cells_a1() {
        let mut wb = Workbook::new();
        let set = wb.cells_a1(0, "B2:C4", false).unwrap();
        assert_eq!(set.len(), 6);

        assert!(matches!(
            wb.cells_a1(0, "B2:C4:D5", false),
            Err(Error::InvalidRange(_))
        ));
    }

    #[test]
    fn test_settings_from_json() {
        let settings =
            WorkbookSettings::from_json(r#"{"date1904": true, "author": "Ops"}"#).unwrap();
        assert!(settings.date_1904);
        assert!(settings.calc_on_open);
        assert_eq!(settings.author.as_deref(), Some("Ops"));

        assert!(matches!(
            WorkbookSettings::from_json(r#"{"colour": 1}"#),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn test_with_settings_controls_forwarding() {
        let settings = WorkbookSettings {
            forward_diagnostics_to_log: false,
            ..Default::default()
        };
        let wb = Workbook::with_settings(settings.clone());
        assert_eq!(wb.settings(), &settings);
        assert_eq!(wb.sheet_count(), 0);
    }
}
