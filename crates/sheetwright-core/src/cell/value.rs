//! Cell value types

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;

/// The payload committed to a cell
///
/// Payloads are mutually exclusive; writing one replaces whatever was there.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value written yet
    #[default]
    Empty,
    /// Index into the workbook's shared-string table
    SharedString(u32),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// Formula expression, stored as given
    Formula(String),
}

impl CellValue {
    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Shared-string index, if this is a text cell
    pub fn as_string_index(&self) -> Option<u32> {
        match self {
            CellValue::SharedString(idx) => Some(*idx),
            _ => None,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the formula text if this is a formula cell
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Formula(text) => Some(text),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::SharedString(_) => "string",
            CellValue::Number(_) => "number",
            CellValue::Boolean(_) => "boolean",
            CellValue::Formula(_) => "formula",
        }
    }
}

/// Loosely-typed input accepted by the value setters
///
/// Setters validate and coerce this into a [`CellValue`]; for example the
/// number setter accepts `RawValue::Text("42")`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// No value supplied
    Missing,
    /// Textual input
    Text(String),
    /// Numeric input
    Number(f64),
    /// Boolean input
    Bool(bool),
}

impl RawValue {
    /// Get the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Missing => "missing",
            RawValue::Text(_) => "string",
            RawValue::Number(_) => "number",
            RawValue::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Missing => write!(f, "undefined"),
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&String> for RawValue {
    fn from(s: &String) -> Self {
        RawValue::Text(s.clone())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

/// Workbook-level table of deduplicated strings
///
/// Text cells store an index into this table. Interning the same text twice
/// returns the same index.
#[derive(Debug, Default)]
pub struct SharedStringTable {
    strings: Vec<Arc<str>>,
    index: AHashMap<Arc<str>, u32>,
}

impl SharedStringTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its stable index
    pub fn intern<S: AsRef<str>>(&mut self, s: S) -> u32 {
        let s = s.as_ref();
        if let Some(&idx) = self.index.get(s) {
            return idx;
        }
        let idx = self.strings.len() as u32;
        let shared: Arc<str> = Arc::from(s);
        self.strings.push(shared.clone());
        self.index.insert(shared, idx);
        idx
    }

    /// Look up a string by index
    pub fn get(&self, index: u32) -> Option<&str> {
        self.strings.get(index as usize).map(|s| s.as_ref())
    }

    /// Number of unique strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over strings in index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (i as u32, s.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_conversions() {
        assert_eq!(RawValue::from(42), RawValue::Number(42.0));
        assert_eq!(RawValue::from("x"), RawValue::Text("x".into()));
        assert_eq!(RawValue::from(true), RawValue::Bool(true));
        assert_eq!(RawValue::from(None::<f64>), RawValue::Missing);
        assert_eq!(RawValue::from(Some("y")), RawValue::Text("y".into()));
    }

    #[test]
    fn test_cell_value_accessors() {
        assert_eq!(CellValue::Number(1.5).as_number(), Some(1.5));
        assert_eq!(CellValue::Boolean(true).as_number(), None);
        assert_eq!(CellValue::SharedString(3).as_string_index(), Some(3));
        assert_eq!(
            CellValue::Formula("SUM(A1:A3)".into()).formula_text(),
            Some("SUM(A1:A3)")
        );
        assert!(CellValue::default().is_empty());
    }

    #[test]
    fn test_shared_strings_dedupe() {
        let mut table = SharedStringTable::new();

        let a = table.intern("hello");
        let b = table.intern("world");
        let c = table.intern(String::from("hello"));

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(b), Some("world"));
        assert_eq!(table.get(7), None);
    }
}
