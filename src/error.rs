//! Error types for rainbow-delim
//!
//! The scan itself never fails; malformed input degrades to "no pair
//! emitted". Errors only arise from the ambient surfaces: reading and
//! parsing the configuration file and building a custom palette.

use thiserror::Error;

/// Result type alias for rainbow-delim operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from configuration and palette construction
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("palette must contain at least one color")]
    EmptyPalette,
}
