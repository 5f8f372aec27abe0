//! Fill/background settings

use serde::{Deserialize, Serialize};

use super::{merge_field, Color, Merge};

/// Fill settings for a cell background
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FillConfig {
    /// Pattern type
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "patternType")]
    pub pattern: Option<PatternType>,
    /// Foreground (pattern) color; the visible color of a solid fill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg_color: Option<Color>,
    /// Background color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
}

impl FillConfig {
    /// A solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: Some(PatternType::Solid),
            fg_color: Some(color),
            bg_color: None,
        }
    }
}

impl Merge for FillConfig {
    fn merge_from(&mut self, other: &Self) {
        merge_field(&mut self.pattern, &other.pattern);
        merge_field(&mut self.fg_color, &other.fg_color);
        merge_field(&mut self.bg_color, &other.bg_color);
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// Horizontal stripe
    DarkHorizontal,
    /// Vertical stripe
    DarkVertical,
    /// Diagonal stripe (down)
    DarkDown,
    /// Diagonal stripe (up)
    DarkUp,
    /// Grid
    DarkGrid,
    /// Trellis
    DarkTrellis,
    /// Thin horizontal stripe
    LightHorizontal,
    /// Thin vertical stripe
    LightVertical,
    /// Thin diagonal stripe (down)
    LightDown,
    /// Thin diagonal stripe (up)
    LightUp,
    /// Thin grid
    LightGrid,
    /// Thin trellis
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}
