//! Cell styling types
//!
//! A style is described by a [`StyleConfig`]: a tree of optional settings
//! (font, fill, border, alignment, number format, protection). Configs are
//! registered in the workbook's [`StylePool`], which hands back a [`Style`]
//! carrying the id cells refer to.
//!
//! Applying a style to a cell that already has one does not replace it. The
//! two configs are merged, fields named by the newer config winning and
//! nested settings merged field by field, and the result is registered as a
//! style of its own:
//!
//! ```rust
//! use sheetwright_core::style::{Color, StyleConfig};
//!
//! let base = StyleConfig::new().bold(true);
//! let merged = base.merge(&StyleConfig::new().font_color(Color::RED));
//!
//! let font = merged.font.unwrap();
//! assert_eq!(font.bold, Some(true));
//! assert_eq!(font.color, Some(Color::RED));
//! ```

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod pool;

pub use alignment::{AlignmentConfig, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderConfig, BorderEdge, BorderLineStyle, DiagonalDirection};
pub use color::Color;
pub use fill::{FillConfig, PatternType};
pub use font::{FontConfig, FontVerticalAlign, Underline};
pub use pool::StylePool;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Structural merge: fields set in `other` override fields in `self`
pub trait Merge {
    /// Merge `other` over `self` in place
    fn merge_from(&mut self, other: &Self);
}

/// Override a leaf setting when the newer config names it
pub(crate) fn merge_field<T: Clone>(base: &mut Option<T>, over: &Option<T>) {
    if over.is_some() {
        base.clone_from(over);
    }
}

/// Merge a nested setting recursively, adopting it if the base has none
pub(crate) fn merge_nested<T: Merge + Clone>(base: &mut Option<T>, over: &Option<T>) {
    match (base.as_mut(), over) {
        (Some(b), Some(o)) => b.merge_from(o),
        (None, Some(o)) => *base = Some(o.clone()),
        (_, None) => {}
    }
}

/// Complete style configuration
///
/// JSON keys are camelCase; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleConfig {
    /// Font settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
    /// Fill/background settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillConfig>,
    /// Border settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderConfig>,
    /// Text alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentConfig>,
    /// Number format code (e.g., "#,##0.00")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
    /// Cell protection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection: Option<ProtectionConfig>,
}

impl StyleConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON value
    ///
    /// Fails with [`Error::InvalidArgument`] unless `value` is an object
    /// whose keys all describe style settings.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::invalid_argument(
                "Parameter sent to Style function must be an instance of a Style or a style configuration object",
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| Error::invalid_argument(format!("invalid style configuration: {}", e)))
    }

    /// Check if no setting is specified
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Return `self` with `other` merged over it
    pub fn merge(&self, other: &StyleConfig) -> StyleConfig {
        let mut merged = self.clone();
        merged.merge_from(other);
        merged
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_mut().bold = Some(bold);
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font_mut().italic = Some(italic);
        self
    }

    /// Set underline style
    pub fn underline(mut self, underline: Underline) -> Self {
        self.font_mut().underline = Some(underline);
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_mut().color = Some(color);
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_mut().size = Some(size);
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(FillConfig::solid(color));
        self
    }

    /// Set borders
    pub fn border(mut self, border: BorderConfig) -> Self {
        self.border = Some(border);
        self
    }

    /// Set number format code
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment
            .get_or_insert_with(AlignmentConfig::default)
            .horizontal = Some(align);
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment
            .get_or_insert_with(AlignmentConfig::default)
            .wrap_text = Some(wrap);
        self
    }

    /// Get a mutable reference to font settings, creating them if absent
    pub fn font_mut(&mut self) -> &mut FontConfig {
        self.font.get_or_insert_with(FontConfig::default)
    }
}

impl Merge for StyleConfig {
    fn merge_from(&mut self, other: &Self) {
        merge_nested(&mut self.font, &other.font);
        merge_nested(&mut self.fill, &other.fill);
        merge_nested(&mut self.border, &other.border);
        merge_nested(&mut self.alignment, &other.alignment);
        merge_field(&mut self.number_format, &other.number_format);
        merge_nested(&mut self.protection, &other.protection);
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProtectionConfig {
    /// Cell is locked (protected when sheet is protected)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Formula is hidden when sheet is protected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl Merge for ProtectionConfig {
    fn merge_from(&mut self, other: &Self) {
        merge_field(&mut self.locked, &other.locked);
        merge_field(&mut self.hidden, &other.hidden);
    }
}

/// A registered style: its config plus the id cells use to refer to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    xf_id: u32,
    config: StyleConfig,
}

impl Style {
    pub(crate) fn new(xf_id: u32, config: StyleConfig) -> Self {
        Self { xf_id, config }
    }

    /// Index in the workbook's cell format table (`cellXfs`)
    pub fn xf_id(&self) -> u32 {
        self.xf_id
    }

    /// The style's configuration
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Copy of the configuration, ready to be merged
    pub fn to_config(&self) -> StyleConfig {
        self.config.clone()
    }
}

/// What the style setter accepts
#[derive(Debug, Clone, PartialEq)]
pub enum StyleInput {
    /// A style already registered in this workbook
    Resolved(Style),
    /// A config that still needs registering
    Config(StyleConfig),
    /// A JSON config that still needs validating and registering
    Json(serde_json::Value),
}

impl From<Style> for StyleInput {
    fn from(style: Style) -> Self {
        StyleInput::Resolved(style)
    }
}

impl From<&Style> for StyleInput {
    fn from(style: &Style) -> Self {
        StyleInput::Resolved(style.clone())
    }
}

impl From<StyleConfig> for StyleInput {
    fn from(config: StyleConfig) -> Self {
        StyleInput::Config(config)
    }
}

impl From<serde_json::Value> for StyleInput {
    fn from(value: serde_json::Value) -> Self {
        StyleInput::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_merge_is_recursive() {
        let base: StyleConfig = serde_json::from_value(json!({
            "font": {"bold": true, "size": 10},
            "border": {"left": {"style": "thin", "color": "black"}},
            "numberFormat": "0.00"
        }))
        .unwrap();
        let over: StyleConfig = serde_json::from_value(json!({
            "font": {"color": "red", "size": 12},
            "border": {"left": {"color": "blue"}}
        }))
        .unwrap();

        let merged = base.merge(&over);
        let expected: StyleConfig = serde_json::from_value(json!({
            "font": {"bold": true, "size": 12, "color": "red"},
            "border": {"left": {"style": "thin", "color": "blue"}},
            "numberFormat": "0.00"
        }))
        .unwrap();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let config = StyleConfig::new().bold(true).fill_color(Color::YELLOW);
        assert_eq!(config.merge(&StyleConfig::new()), config);
        assert_eq!(StyleConfig::new().merge(&config), config);
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(matches!(
            StyleConfig::from_json(json!("bold")),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            StyleConfig::from_json(json!(12)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            StyleConfig::from_json(json!({"font": {"weight": 700}})),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let config = StyleConfig::from_json(json!({
            "alignment": {"wrapText": true, "horizontal": "center"},
            "fill": {"pattern": "solid", "fgColor": "#FFFF00"}
        }))
        .unwrap();

        let alignment = config.alignment.unwrap();
        assert_eq!(alignment.wrap_text, Some(true));
        assert_eq!(alignment.horizontal, Some(HorizontalAlignment::Center));
        assert_eq!(config.fill, Some(FillConfig::solid(Color::YELLOW)));
    }
}
