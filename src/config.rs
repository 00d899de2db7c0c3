//! Configuration file support
//!
//! Loads settings from `~/.rainbow-delim.toml` (or
//! `%USERPROFILE%\.rainbow-delim.toml` on Windows).
//!
//! Example:
//! ```toml
//! # rainbow-delim configuration
//! brackets = true
//! quotes = true
//!
//! [palette]
//! colors = ["#FF4500", "#32CD32", "#1E90FF"]
//! ```
//!
//! A missing file means defaults; a malformed file is an error rather
//! than a silent fallback, so a typo cannot quietly disable a custom
//! palette.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::palette::{Palette, Rgb};

/// Matcher and palette settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether the bracket matcher runs
    pub brackets: bool,
    /// Whether the quote matcher runs
    pub quotes: bool,
    /// Palette used for color assignment
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brackets: true,
            quotes: true,
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".rainbow-delim.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".rainbow-delim.toml"))
        }
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut config = Self::default();

        if let Some(value) = table.get("brackets").and_then(|v| v.as_bool()) {
            config.brackets = value;
        }
        if let Some(value) = table.get("quotes").and_then(|v| v.as_bool()) {
            config.quotes = value;
        }

        if let Some(colors) = table
            .get("palette")
            .and_then(|v| v.as_table())
            .and_then(|t| t.get("colors"))
            .and_then(|v| v.as_array())
        {
            let mut parsed = Vec::with_capacity(colors.len());
            for value in colors {
                let hex = value
                    .as_str()
                    .ok_or_else(|| Error::InvalidColor(value.to_string()))?;
                parsed.push(Rgb::from_hex(hex)?);
            }
            config.palette = Palette::new(parsed)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.brackets);
        assert!(config.quotes);
        assert_eq!(config.palette.len(), 20);
    }

    #[test]
    fn test_empty_toml_is_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.brackets);
        assert!(config.quotes);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_toggles() {
        let config = Config::from_toml("brackets = false\nquotes = false\n").unwrap();
        assert!(!config.brackets);
        assert!(!config.quotes);
    }

    #[test]
    fn test_custom_palette() {
        let config = Config::from_toml(
            "[palette]\ncolors = [\"#FF4500\", \"#32CD32\"]\n",
        )
        .unwrap();
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.palette.color(0), Rgb::new(255, 69, 0));
        assert_eq!(config.palette.color(1), Rgb::new(50, 205, 50));
    }

    #[test]
    fn test_invalid_color_is_error() {
        let result = Config::from_toml("[palette]\ncolors = [\"not-a-color\"]\n");
        assert!(matches!(result, Err(Error::InvalidColor(_))));
        let result = Config::from_toml("[palette]\ncolors = [42]\n");
        assert!(matches!(result, Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_empty_color_list_is_error() {
        let result = Config::from_toml("[palette]\ncolors = []\n");
        assert!(matches!(result, Err(Error::EmptyPalette)));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(matches!(
            Config::from_toml("brackets = [unclosed"),
            Err(Error::Config(_))
        ));
    }
}
