//! Workbook style registry

use ahash::AHashMap;

use super::{Style, StyleConfig};

/// Registry of styles, deduplicated by configuration
///
/// Index 0 is always the empty default style, which doubles as the
/// "unstyled" sentinel on cells. Registering a config that is already
/// present returns the existing style.
#[derive(Debug)]
pub struct StylePool {
    styles: Vec<Style>,
    index_map: AHashMap<StyleKey, Vec<u32>>,
}

/// Key for style lookup (hash-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StyleKey(u64);

impl StyleKey {
    fn from_config(config: &StyleConfig) -> Self {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = ahash::RandomState::with_seeds(1, 2, 3, 4).build_hasher();
        config.hash(&mut hasher);
        StyleKey(hasher.finish())
    }
}

impl StylePool {
    /// Create a new pool holding only the default style
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::with_capacity(64),
            index_map: AHashMap::with_capacity(64),
        };
        pool.create(StyleConfig::default());
        pool
    }

    /// Register a config, returning the (possibly pre-existing) style
    pub fn create(&mut self, config: StyleConfig) -> Style {
        let key = StyleKey::from_config(&config);

        if let Some(candidates) = self.index_map.get(&key) {
            // Hash collisions are resolved by comparing configs
            for &idx in candidates {
                let existing = &self.styles[idx as usize];
                if *existing.config() == config {
                    return existing.clone();
                }
            }
        }

        let idx = self.styles.len() as u32;
        let style = Style::new(idx, config);
        self.styles.push(style.clone());
        self.index_map.entry(key).or_default().push(idx);
        style
    }

    /// Get a style by id
    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// Check that `style` was registered here under its id
    pub fn contains(&self, style: &Style) -> bool {
        self.get(style.xf_id()) == Some(style)
    }

    /// Get the default style (index 0)
    pub fn default_style(&self) -> &Style {
        &self.styles[0]
    }

    /// Get the number of styles, default included
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the pool holds nothing but the default
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Iterate over all styles in id order
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_default_style() {
        let pool = StylePool::new();
        assert_eq!(pool.len(), 1);
        assert!(pool.is_empty());
        assert_eq!(pool.default_style().xf_id(), 0);
        assert!(pool.default_style().config().is_empty());
    }

    #[test]
    fn test_deduplication() {
        let mut pool = StylePool::new();

        let a = pool.create(StyleConfig::new().bold(true));
        let b = pool.create(StyleConfig::new().bold(true));
        let c = pool.create(StyleConfig::new().italic(true));

        assert_eq!(a.xf_id(), b.xf_id());
        assert_ne!(a.xf_id(), c.xf_id());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_font_size_identity() {
        let mut pool = StylePool::new();

        let nan = pool.create(StyleConfig::new().font_size(f64::NAN));
        assert!(pool.contains(&nan));
        let again = pool.create(StyleConfig::new().font_size(f64::NAN));
        assert_eq!(again.xf_id(), nan.xf_id());

        let zero = pool.create(StyleConfig::new().font_size(0.0));
        let negative_zero = pool.create(StyleConfig::new().font_size(-0.0));
        assert_eq!(zero.xf_id(), negative_zero.xf_id());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_contains_checks_id_and_config() {
        let mut pool = StylePool::new();
        let style = pool.create(StyleConfig::new().fill_color(Color::RED));
        assert!(pool.contains(&style));

        let mut other = StylePool::new();
        other.create(StyleConfig::new().bold(true));
        let foreign = other.create(StyleConfig::new().italic(true));
        assert!(!pool.contains(&foreign));
    }
}
