//! Border settings

use serde::{Deserialize, Serialize};

use super::{merge_field, merge_nested, Color, Merge};

/// Border settings for a cell
///
/// Edges merge independently: applying a config that only names `bottom`
/// keeps an existing `left` edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BorderConfig {
    /// Left border
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderEdge>,
    /// Right border
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderEdge>,
    /// Top border
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderEdge>,
    /// Bottom border
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderEdge>,
    /// Diagonal border
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal: Option<BorderEdge>,
    /// Diagonal border direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal_direction: Option<DiagonalDirection>,
}

impl BorderConfig {
    /// Set all four outline edges to the same style
    pub fn outline(style: BorderLineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge::new(style, color));
        Self {
            left: edge.clone(),
            right: edge.clone(),
            top: edge.clone(),
            bottom: edge,
            ..Self::default()
        }
    }
}

impl Merge for BorderConfig {
    fn merge_from(&mut self, other: &Self) {
        merge_nested(&mut self.left, &other.left);
        merge_nested(&mut self.right, &other.right);
        merge_nested(&mut self.top, &other.top);
        merge_nested(&mut self.bottom, &other.bottom);
        merge_nested(&mut self.diagonal, &other.diagonal);
        merge_field(&mut self.diagonal_direction, &other.diagonal_direction);
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BorderEdge {
    /// Line style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderLineStyle>,
    /// Line color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl BorderEdge {
    /// Create a fully specified edge
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self {
            style: Some(style),
            color: Some(color),
        }
    }

    /// Create a thin black edge
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::BLACK)
    }
}

impl Merge for BorderEdge {
    fn merge_from(&mut self, other: &Self) {
        merge_field(&mut self.style, &other.style);
        merge_field(&mut self.color, &other.color);
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
    /// Hair line (very thin)
    Hair,
    /// Medium dashed
    MediumDashed,
    /// Dash-dot
    DashDot,
    /// Medium dash-dot
    MediumDashDot,
    /// Dash-dot-dot
    DashDotDot,
    /// Medium dash-dot-dot
    MediumDashDotDot,
    /// Slant dash-dot
    SlantDashDot,
}

/// Diagonal border direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagonalDirection {
    /// No diagonal
    #[default]
    None,
    /// Diagonal from top-left to bottom-right
    Down,
    /// Diagonal from bottom-left to top-right
    Up,
    /// Both diagonals
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_merge_independently() {
        let mut base = BorderConfig::outline(BorderLineStyle::Thin, Color::BLACK);
        let over = BorderConfig {
            bottom: Some(BorderEdge {
                style: Some(BorderLineStyle::Double),
                color: None,
            }),
            ..BorderConfig::default()
        };
        base.merge_from(&over);

        assert_eq!(base.left, Some(BorderEdge::thin()));
        assert_eq!(
            base.bottom,
            Some(BorderEdge::new(BorderLineStyle::Double, Color::BLACK))
        );
    }
}
