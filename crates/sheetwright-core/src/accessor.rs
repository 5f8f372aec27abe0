//! Cell range accessor
//!
//! A [`CellSet`] is the handle returned by the workbook's range entry points
//! ([`Workbook::cell`](crate::Workbook::cell),
//! [`Workbook::range`](crate::Workbook::range),
//! [`Workbook::merged_range`](crate::Workbook::merged_range), ...). Resolving
//! a range materializes every cell in it, so setters can assume each address
//! is backed by a [`Cell`].
//!
//! Value setters write every cell of an unmerged set and only the anchor
//! (top-left) cell of a merged one. The style setter always touches every
//! cell so borders and fills cover the whole merged area.
//!
//! ```rust
//! use sheetwright_core::Workbook;
//!
//! let mut wb = Workbook::new();
//! wb.range(0, 0, 0, 1, 2)?
//!     .number(42)?
//!     .style(serde_json::json!({"font": {"bold": true}}))?;
//!
//! let ws = wb.worksheet(0).unwrap();
//! assert_eq!(ws.cell("C2")?.unwrap().value().as_number(), Some(42.0));
//! # Ok::<(), sheetwright_core::Error>(())
//! ```

use log::debug;

use crate::cell::{format_address_list, Cell, CellAddress, CellRange, RawValue};
use crate::error::{Error, Result};
use crate::hyperlink::{link_style, Hyperlink};
use crate::merge::{merge_cells, MergeOutcome};
use crate::style::{Style, StyleConfig, StyleInput};
use crate::text::{illegal_chars_found, strip_xml_illegal};
use crate::workbook::Registries;
use crate::worksheet::Worksheet;

/// Handle over a resolved rectangle of cells
///
/// Borrows the worksheet and the workbook registries mutably for its whole
/// lifetime.
#[derive(Debug)]
pub struct CellSet<'a> {
    sheet: &'a mut Worksheet,
    registries: &'a mut Registries,
    refs: Vec<CellAddress>,
    merged: bool,
}

impl<'a> CellSet<'a> {
    /// Resolve `range` on `sheet`, creating missing cells, rows and columns
    pub(crate) fn resolve(
        sheet: &'a mut Worksheet,
        registries: &'a mut Registries,
        range: CellRange,
        merged: bool,
    ) -> Result<Self> {
        sheet.validate_cell_position(range.start.row, range.start.col)?;
        sheet.validate_cell_position(range.end.row, range.end.col)?;

        let storage = sheet.storage_mut();
        storage.extend_used(range.end.row, range.end.col);

        let refs: Vec<CellAddress> = range.cells().collect();
        let mut created = 0usize;
        for &addr in &refs {
            if storage.ensure(addr) {
                created += 1;
            }
        }
        debug!("resolved {} ({} cells, {} new)", range, refs.len(), created);

        if merged {
            match merge_cells(storage, &mut registries.diagnostics, &refs)? {
                MergeOutcome::Registered(_) => {}
                MergeOutcome::Rejected {
                    requested,
                    conflict,
                } => {
                    return Err(Error::MergedCellConflict {
                        requested: requested.to_string(),
                        conflict: conflict.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            sheet,
            registries,
            refs,
            merged,
        })
    }

    /// Addresses in the set, row-major
    pub fn addresses(&self) -> &[CellAddress] {
        &self.refs
    }

    /// The top-left address
    pub fn anchor(&self) -> CellAddress {
        self.refs[0]
    }

    /// Rectangle covered by the set
    pub fn range(&self) -> CellRange {
        CellRange::new(self.refs[0], self.refs[self.refs.len() - 1])
    }

    /// Check if the set was resolved as a merged range
    pub fn is_merged(&self) -> bool {
        self.merged
    }

    /// Number of cells in the set
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Always `false`: a resolved set holds at least its anchor
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Iterate over the cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        let storage = &self.sheet;
        self.refs.iter().filter_map(move |addr| storage.cell_at(addr.row, addr.col))
    }

    // === Value setters ===

    /// Store text
    ///
    /// Characters that cannot appear in XML are removed and non-text input
    /// is stored as an empty string; both record a warning instead of
    /// failing.
    pub fn string(&mut self, value: impl Into<RawValue>) -> &mut Self {
        let text = match value.into() {
            RawValue::Text(text) => text,
            other => {
                let message = format!(
                    "Value sent to String function of cells {} was not a string, it has type of {}",
                    self.address_list(),
                    other.type_name()
                );
                self.registries.diagnostics.warn(message);
                String::new()
            }
        };

        let illegal = illegal_chars_found(&text);
        if !illegal.is_empty() {
            let message = format!(
                "Invalid characters for XML {} removed from string sent to String function of cells {}",
                illegal.join(", "),
                self.address_list()
            );
            self.registries.diagnostics.warn(message);
        }

        let index = self.registries.strings.intern(strip_xml_illegal(&text));
        self.write(|cell| cell.string(index));
        self
    }

    /// Store a number
    ///
    /// Text is accepted when it parses as a finite number once trimmed.
    pub fn number(&mut self, value: impl Into<RawValue>) -> Result<&mut Self> {
        let raw = value.into();
        let number = match &raw {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|n| n.is_finite());

        let number = match number {
            Some(n) => n,
            None => {
                return Err(self.invalid_value(
                    "Number",
                    format!(
                        "was not a number, it has type of {} and value of {}",
                        raw.type_name(),
                        raw
                    ),
                ))
            }
        };

        self.write(|cell| cell.number(number));
        Ok(self)
    }

    /// Store a boolean
    ///
    /// Accepts `true`/`false` and the strings "true"/"false" in any case.
    pub fn bool(&mut self, value: impl Into<RawValue>) -> Result<&mut Self> {
        let raw = value.into();
        let flag = match &raw {
            RawValue::Bool(b) => Some(*b),
            RawValue::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
            RawValue::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        };

        let Some(flag) = flag else {
            return Err(self.invalid_value(
                "Bool",
                format!(
                    "was not a bool, it has type of {} and value of {}",
                    raw.type_name(),
                    raw
                ),
            ));
        };

        self.write(|cell| cell.boolean(flag));
        Ok(self)
    }

    /// Store a formula, as written (no leading `=` handling)
    pub fn formula(&mut self, value: impl Into<RawValue>) -> Result<&mut Self> {
        let expression = match value.into() {
            RawValue::Text(text) => text,
            other => {
                return Err(self.invalid_value(
                    "Formula",
                    format!("was not a string, it has type of {}", other.type_name()),
                ))
            }
        };

        self.write(|cell| cell.formula(expression.as_str()));
        Ok(self)
    }

    // === Style ===

    /// Apply a style to every cell in the set
    ///
    /// A cell that already carries a style receives the merge of its current
    /// config with the new one, the new settings winning.
    pub fn style(&mut self, input: impl Into<StyleInput>) -> Result<&mut Self> {
        let styles = &self.registries.styles;
        for addr in &self.refs {
            let current = self.sheet.cell_style_index_at(addr.row, addr.col);
            if styles.get(current).is_none() {
                return Err(Error::InvalidStyleIndex(current));
            }
        }

        let style = self.register(input.into())?;

        let storage = self.sheet.storage_mut();
        let styles = &mut self.registries.styles;
        for addr in &self.refs {
            let Some(cell) = storage.get_mut(addr) else {
                continue;
            };
            let applied = if cell.is_styled() {
                let merged = styles
                    .get(cell.style_index())
                    .map(|current| current.config().merge(style.config()))
                    .ok_or(Error::InvalidStyleIndex(cell.style_index()))?;
                styles.create(merged).xf_id()
            } else {
                style.xf_id()
            };
            cell.set_style(applied);
        }
        Ok(self)
    }

    fn register(&mut self, input: StyleInput) -> Result<Style> {
        let styles = &mut self.registries.styles;
        match input {
            StyleInput::Resolved(style) if styles.contains(&style) => Ok(style),
            StyleInput::Resolved(style) => Err(Error::invalid_argument(format!(
                "style {} is not registered in this workbook",
                style.xf_id()
            ))),
            StyleInput::Config(config) => Ok(styles.create(config)),
            StyleInput::Json(value) => Ok(styles.create(StyleConfig::from_json(value)?)),
        }
    }

    // === Hyperlinks ===

    /// Turn every cell into a hyperlink to `url`
    ///
    /// `display` defaults to the url. The cells get the display text and the
    /// blue underlined link style.
    pub fn link(
        &mut self,
        url: &str,
        display: Option<&str>,
        tooltip: Option<&str>,
    ) -> Result<&mut Self> {
        let display = display.unwrap_or(url);
        let links = self.sheet.hyperlinks_mut();
        for &addr in &self.refs {
            links.add(url, display, tooltip, addr);
        }

        self.string(display);
        self.style(link_style())
    }

    /// Hyperlink most recently attached to the anchor cell
    pub fn hyperlink(&self) -> Option<&Hyperlink> {
        self.sheet.hyperlinks().get(&self.anchor())
    }

    // === Internal ===

    /// Apply `f` to the cells a value setter writes: only the anchor when merged
    fn write<F: FnMut(&mut Cell)>(&mut self, mut f: F) {
        let targets = if self.merged {
            &self.refs[..1]
        } else {
            &self.refs[..]
        };
        let storage = self.sheet.storage_mut();
        for addr in targets {
            if let Some(cell) = storage.get_mut(addr) {
                f(cell);
            }
        }
    }

    fn address_list(&self) -> String {
        format_address_list(&self.refs)
    }

    fn invalid_value(&self, setter: &'static str, reason: String) -> Error {
        Error::InvalidValue {
            setter,
            cells: self.address_list(),
            reason,
        }
    }
}
