//! Cell hyperlinks

use crate::cell::CellAddress;
use crate::style::{Color, StyleConfig, Underline};

/// A hyperlink attached to one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// 1-based id, in registration order
    pub id: u32,
    /// Cell the link is attached to
    pub cell_ref: CellAddress,
    /// Link target (URL or in-workbook location)
    pub location: String,
    /// Text shown in the cell
    pub display: String,
    /// Hover text
    pub tooltip: Option<String>,
}

impl Hyperlink {
    /// Relationship id used when the sheet is written out
    pub fn r_id(&self) -> String {
        format!("rId{}", self.id)
    }
}

/// The hyperlinks of one worksheet
#[derive(Debug, Clone, Default)]
pub struct HyperlinkCollection {
    links: Vec<Hyperlink>,
}

impl HyperlinkCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hyperlink and return it
    pub fn add(
        &mut self,
        location: &str,
        display: &str,
        tooltip: Option<&str>,
        cell_ref: CellAddress,
    ) -> &Hyperlink {
        let id = self.links.len() as u32 + 1;
        self.links.push(Hyperlink {
            id,
            cell_ref,
            location: location.to_string(),
            display: display.to_string(),
            tooltip: tooltip.map(str::to_string),
        });
        &self.links[self.links.len() - 1]
    }

    /// Most recent hyperlink registered for a cell
    pub fn get(&self, cell_ref: &CellAddress) -> Option<&Hyperlink> {
        self.links.iter().rev().find(|l| l.cell_ref == *cell_ref)
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Hyperlink> {
        self.links.iter()
    }

    /// Number of hyperlinks
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if there are no hyperlinks
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Style applied to hyperlink cells: blue, underlined
pub fn link_style() -> StyleConfig {
    StyleConfig::new()
        .font_color(Color::BLUE)
        .underline(Underline::Single)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_registration_order() {
        let mut links = HyperlinkCollection::new();
        let a1 = CellAddress::new(0, 0);

        links.add("https://a.example", "a", None, a1);
        let second = links.add("https://b.example", "b", Some("tip"), a1);
        assert_eq!(second.id, 2);
        assert_eq!(second.r_id(), "rId2");

        assert_eq!(links.len(), 2);
        assert_eq!(links.get(&a1).unwrap().location, "https://b.example");
        assert!(links.get(&CellAddress::new(5, 5)).is_none());
    }
}
