//! Text alignment settings

use serde::{Deserialize, Serialize};

use super::{merge_field, Merge};

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlignmentConfig {
    /// Horizontal alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlignment>,
    /// Vertical alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlignment>,
    /// Wrap text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_text: Option<bool>,
    /// Shrink to fit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shrink_to_fit: Option<bool>,
    /// Indent level (0-250)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<u8>,
    /// Text rotation in degrees (-90 to 90, or 255 for vertical)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_rotation: Option<i16>,
}

impl Merge for AlignmentConfig {
    fn merge_from(&mut self, other: &Self) {
        merge_field(&mut self.horizontal, &other.horizontal);
        merge_field(&mut self.vertical, &other.vertical);
        merge_field(&mut self.wrap_text, &other.wrap_text);
        merge_field(&mut self.shrink_to_fit, &other.shrink_to_fit);
        merge_field(&mut self.indent, &other.indent);
        merge_field(&mut self.text_rotation, &other.text_rotation);
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Fill (repeat content to fill cell width)
    Fill,
    /// Justify (stretch to fit width)
    Justify,
    /// Center across selection
    CenterContinuous,
    /// Distributed (like justify, but for East Asian text)
    Distributed,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlignment {
    /// Top aligned
    Top,
    /// Center aligned
    Center,
    /// Bottom aligned (default)
    #[default]
    Bottom,
    /// Justify
    Justify,
    /// Distributed
    Distributed,
}
