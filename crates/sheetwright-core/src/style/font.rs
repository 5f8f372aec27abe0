//! Font settings

use serde::{de, Deserialize, Deserializer, Serialize};

use super::{merge_field, Color, Merge};

/// Font settings
///
/// Every field is optional; `None` means "not specified by this config",
/// which lets a later config override only what it names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FontConfig {
    /// Font family name (e.g., "Calibri", "Arial")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Bold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    /// Italic
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "italics")]
    pub italic: Option<bool>,
    /// Underline style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,
    /// Strikethrough
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "strike")]
    pub strikethrough: Option<bool>,
    /// Font color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Superscript/subscript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<FontVerticalAlign>,
}

impl FontConfig {
    /// Create an empty font config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set size in points
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set family name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Merge for FontConfig {
    fn merge_from(&mut self, other: &Self) {
        merge_field(&mut self.name, &other.name);
        merge_field(&mut self.size, &other.size);
        merge_field(&mut self.bold, &other.bold);
        merge_field(&mut self.italic, &other.italic);
        merge_field(&mut self.underline, &other.underline);
        merge_field(&mut self.strikethrough, &other.strikethrough);
        merge_field(&mut self.color, &other.color);
        merge_field(&mut self.vertical_align, &other.vertical_align);
    }
}

/// Bit pattern `size` is compared and hashed by
///
/// `-0.0` folds into `0.0` and every NaN into one value, so equal keys always
/// mean equal hashes.
fn size_key(size: Option<f64>) -> Option<u64> {
    size.map(|s| {
        if s == 0.0 {
            0.0f64.to_bits()
        } else if s.is_nan() {
            f64::NAN.to_bits()
        } else {
            s.to_bits()
        }
    })
}

impl PartialEq for FontConfig {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && size_key(self.size) == size_key(other.size)
            && self.bold == other.bold
            && self.italic == other.italic
            && self.underline == other.underline
            && self.strikethrough == other.strikethrough
            && self.color == other.color
            && self.vertical_align == other.vertical_align
    }
}

impl std::hash::Hash for FontConfig {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        size_key(self.size).hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.strikethrough.hash(state);
        self.color.hash(state);
        self.vertical_align.hash(state);
    }
}

impl Eq for FontConfig {}

/// Underline style
///
/// In configs, `true` means [`Underline::Single`] and `false` means
/// [`Underline::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Underline {
    /// No underline
    #[default]
    None,
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}

impl<'de> Deserialize<'de> for Underline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Named(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(true) => Ok(Underline::Single),
            Repr::Flag(false) => Ok(Underline::None),
            Repr::Named(name) => match name.as_str() {
                "none" => Ok(Underline::None),
                "single" => Ok(Underline::Single),
                "double" => Ok(Underline::Double),
                "singleAccounting" => Ok(Underline::SingleAccounting),
                "doubleAccounting" => Ok(Underline::DoubleAccounting),
                other => Err(de::Error::custom(format!(
                    "unknown underline style '{}'",
                    other
                ))),
            },
        }
    }
}

/// Font vertical alignment (superscript/subscript)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontVerticalAlign {
    /// Normal baseline
    #[default]
    Baseline,
    /// Superscript
    Superscript,
    /// Subscript
    Subscript,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underline_accepts_flag_or_name() {
        let font: FontConfig = serde_json::from_str(r#"{"underline": true}"#).unwrap();
        assert_eq!(font.underline, Some(Underline::Single));

        let font: FontConfig = serde_json::from_str(r#"{"underline": "double"}"#).unwrap();
        assert_eq!(font.underline, Some(Underline::Double));

        assert!(serde_json::from_str::<FontConfig>(r#"{"underline": "wavy"}"#).is_err());
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut base = FontConfig::new().with_bold(true).with_size(12.0);
        base.merge_from(&FontConfig::new().with_color(Color::RED).with_size(14.0));

        assert_eq!(base.bold, Some(true));
        assert_eq!(base.size, Some(14.0));
        assert_eq!(base.color, Some(Color::RED));
    }
}
