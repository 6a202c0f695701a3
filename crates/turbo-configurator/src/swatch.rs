//! Swatch colors for option values.
//!
//! The catalog does not provide swatch colors yet, so each value id is mapped
//! to a color by a deterministic function. The cache is an explicit object
//! owned by the view layer; tests construct and clear their own.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::SwatchConfig;
use crate::ids::ValueId;

/// An HSL swatch color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwatchColor {
    /// Hue in degrees, `0..360`.
    pub hue: u16,
    /// Saturation percentage.
    pub saturation: u8,
    /// Lightness percentage.
    pub lightness: u8,
}

impl SwatchColor {
    /// CSS color value, e.g. `hsl(210, 60%, 75%)`.
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for SwatchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Derive a swatch color from a value id. Same id, same color.
pub fn hashed_swatch_color(value: &ValueId, config: &SwatchConfig) -> SwatchColor {
    // FNV-1a, stable across platforms and releases.
    let hash = value
        .as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        });

    SwatchColor {
        hue: (hash % 360) as u16,
        saturation: config.saturation,
        lightness: config.lightness,
    }
}

type ColorFn = Arc<dyn Fn(&ValueId) -> SwatchColor + Send + Sync>;

/// Memoized value-id to color lookup. Clones share the color function.
#[derive(Clone)]
pub struct SwatchColorCache {
    derive: ColorFn,
    colors: HashMap<ValueId, SwatchColor>,
}

impl SwatchColorCache {
    /// Cache backed by [`hashed_swatch_color`].
    pub fn new(config: SwatchConfig) -> Self {
        Self::with_fn(move |value| hashed_swatch_color(value, &config))
    }

    /// Cache backed by a custom color function.
    pub fn with_fn(derive: impl Fn(&ValueId) -> SwatchColor + Send + Sync + 'static) -> Self {
        Self {
            derive: Arc::new(derive),
            colors: HashMap::new(),
        }
    }

    /// Color for `value`, derived on first use.
    pub fn color_for(&mut self, value: &ValueId) -> SwatchColor {
        if let Some(color) = self.colors.get(value) {
            return *color;
        }
        let color = (self.derive)(value);
        self.colors.insert(value.clone(), color);
        color
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Drop every memoized color.
    pub fn clear(&mut self) {
        self.colors.clear();
    }
}

impl Default for SwatchColorCache {
    fn default() -> Self {
        Self::new(SwatchConfig::default())
    }
}

impl fmt::Debug for SwatchColorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwatchColorCache")
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_hashed_color_is_deterministic() {
        let config = SwatchConfig::default();
        let a = hashed_swatch_color(&ValueId::new("52"), &config);
        let b = hashed_swatch_color(&ValueId::new("52"), &config);
        assert_eq!(a, b);
        assert!(a.hue < 360);
        assert_eq!(a.saturation, 60);
        assert_eq!(a.lightness, 75);
    }

    #[test]
    fn test_css_rendering() {
        let color = SwatchColor {
            hue: 210,
            saturation: 60,
            lightness: 75,
        };
        assert_eq!(color.to_css(), "hsl(210, 60%, 75%)");
    }

    #[test]
    fn test_cache_memoizes_and_clears() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut cache = SwatchColorCache::with_fn(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            SwatchColor {
                hue: 0,
                saturation: 0,
                lightness: 0,
            }
        });

        let red = ValueId::new("red");
        cache.color_for(&red);
        cache.color_for(&red);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        cache.color_for(&red);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_default_cache_matches_hash_function() {
        let mut cache = SwatchColorCache::default();
        let value = ValueId::new("17");
        assert_eq!(
            cache.color_for(&value),
            hashed_swatch_color(&value, &SwatchConfig::default())
        );
    }
}
