//! Color palette and marker styles
//!
//! The palette is an ordered, fixed sequence of visually distinct RGB
//! colors addressed only by index. Every color index handed out by the
//! matchers goes through [`Palette::color_index`], which wraps the raw
//! depth into palette range, so identical input text always produces
//! identical colors.

use crate::error::{Error, Result};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex color (leading `#` optional, case-insensitive)
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let part = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: part(0)?,
            g: part(2)?,
            b: part(4)?,
        })
    }
}

/// Text attributes applied to a delimiter marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Rgb,
    /// Bold text
    pub bold: bool,
}

/// Built-in palette: 20 saturated colors chosen to stay readable against
/// both light and dark backgrounds.
const DEFAULT_COLORS: [Rgb; 20] = [
    Rgb::new(255, 69, 0),    // red orange
    Rgb::new(50, 205, 50),   // lime green
    Rgb::new(30, 144, 255),  // dodger blue
    Rgb::new(255, 20, 147),  // deep pink
    Rgb::new(255, 215, 0),   // gold
    Rgb::new(138, 43, 226),  // blue violet
    Rgb::new(255, 140, 0),   // dark orange
    Rgb::new(0, 255, 255),   // cyan
    Rgb::new(255, 105, 180), // hot pink
    Rgb::new(124, 252, 0),   // lawn green
    Rgb::new(255, 0, 255),   // magenta
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(127, 255, 212), // aquamarine
    Rgb::new(255, 99, 71),   // tomato
    Rgb::new(154, 205, 50),  // yellow green
    Rgb::new(255, 20, 147),  // deep pink
    Rgb::new(0, 191, 255),   // deep sky blue
    Rgb::new(255, 69, 0),    // red orange
    Rgb::new(148, 0, 211),   // dark violet
    Rgb::new(255, 255, 0),   // yellow
];

/// Ordered, immutable color palette
///
/// Constructed once and shared read-only with the matchers and the
/// renderer. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from an explicit color list
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color assignment policy: wrap a raw depth or offset into palette
    /// range. Every color index in the crate is produced here.
    pub fn color_index(&self, raw: usize) -> usize {
        raw % self.colors.len()
    }

    /// Look up a color, wrapping the index
    pub fn color(&self, index: usize) -> Rgb {
        self.colors[self.color_index(index)]
    }

    /// Full color list, for external renderers that build their own
    /// style tables
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Style applied to a marker with this color index
    pub fn style_for(&self, index: usize) -> Style {
        Style {
            fg: self.color(index),
            bold: true,
        }
    }

    /// Stable registry key for a wrapped color index, for hosts that
    /// address styles by name rather than by value
    pub fn attribute_key(&self, index: usize) -> String {
        format!("RAINBOW_DELIM_{}", self.color_index(index))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_size() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 20);
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_color_index_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.color_index(0), 0);
        assert_eq!(palette.color_index(19), 19);
        assert_eq!(palette.color_index(20), 0);
        assert_eq!(palette.color_index(45), 5);
        assert_eq!(palette.color(20), palette.color(0));
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(Palette::new(Vec::new()), Err(Error::EmptyPalette)));
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new(vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color(3), Rgb::new(4, 5, 6));
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#FF4500").unwrap(), Rgb::new(255, 69, 0));
        assert_eq!(Rgb::from_hex("ff4500").unwrap(), Rgb::new(255, 69, 0));
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("#1234567").is_err());
    }

    #[test]
    fn test_style_for_is_bold() {
        let palette = Palette::default();
        let style = palette.style_for(2);
        assert!(style.bold);
        assert_eq!(style.fg, palette.color(2));
    }

    #[test]
    fn test_attribute_key_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.attribute_key(3), "RAINBOW_DELIM_3");
        assert_eq!(palette.attribute_key(23), "RAINBOW_DELIM_3");
    }
}
