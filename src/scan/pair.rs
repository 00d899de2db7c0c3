//! The matched-pair record returned to the renderer

/// One matched open/close delimiter or quote pair
///
/// Offsets are 0-based character indices into the scanned text. For
/// brackets, `open` and `close` each address a single character and
/// `delimiter` is the opening bracket. For quotes, `open` is the first
/// character of the opening marker, `close` is the last character of the
/// closing marker, and `delimiter` is the quote character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterPair {
    /// Offset of the opening delimiter (first marker character for quotes)
    pub open: usize,
    /// Offset of the closing delimiter (last marker character for quotes)
    pub close: usize,
    /// Opening bracket character, or the quote character
    pub delimiter: char,
    /// Palette index, already wrapped into palette range
    pub color_index: usize,
    /// True for quote pairs
    pub is_quote: bool,
    /// Marker length: 1, or 3 for triple quotes (1 for brackets)
    pub quote_length: usize,
}

impl DelimiterPair {
    /// Create a bracket pair
    pub fn bracket(open: usize, close: usize, delimiter: char, color_index: usize) -> Self {
        Self {
            open,
            close,
            delimiter,
            color_index,
            is_quote: false,
            quote_length: 1,
        }
    }

    /// Create a quote pair
    pub fn quote(
        open: usize,
        close: usize,
        quote_char: char,
        color_index: usize,
        quote_length: usize,
    ) -> Self {
        Self {
            open,
            close,
            delimiter: quote_char,
            color_index,
            is_quote: true,
            quote_length,
        }
    }
}
