//! rainbow-delim - depth-aware coloring for matching delimiters
//!
//! Scans a document for matching bracket pairs (`()`, `{}`, `[]`) and
//! quote pairs (`'`, `"`, backtick, including triple-quote markers) and
//! assigns each pair a palette color index based on its nesting depth.
//! Comments are excluded from matching entirely; string interiors are
//! excluded from bracket matching.
//!
//! The scan is a bounded, pure computation over an immutable snapshot of
//! the text. It allocates all of its working state per invocation, so it
//! can be run from any thread. Applying the colors to rendered text is
//! left to the caller; see [`render::marker_spans`] for the expected
//! contract.
//!
//! ```
//! use rainbow_delim::{find_matching_delimiters, Palette};
//!
//! let palette = Palette::default();
//! let pairs = find_matching_delimiters("(hello)", &palette);
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].open, 0);
//! assert_eq!(pairs[0].close, 6);
//! ```

pub mod config;
pub mod error;
pub mod palette;
pub mod render;
pub mod scan;

pub use config::Config;
pub use error::{Error, Result};
pub use palette::{Palette, Rgb, Style};
pub use render::Span;
pub use scan::{find_matching_delimiters, DelimiterPair, TextRange};
