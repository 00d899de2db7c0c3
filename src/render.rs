//! Marker spans for renderers
//!
//! Converts the matched-pair list into the spans a renderer is expected
//! to color: the single character at each end of a bracket pair, and the
//! full marker (1 or 3 characters) at each end of a quote pair. String
//! interiors are never styled.

use crate::palette::{Palette, Style};
use crate::scan::DelimiterPair;

/// A styled span of characters (char offsets, half-open)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First styled offset (inclusive)
    pub start: usize,
    /// First offset past the span (exclusive)
    pub end: usize,
    /// Style to apply
    pub style: Style,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Check if this span covers a character offset
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Length of the span in characters
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Expand pairs into the marker spans to be colored, sorted by start
/// offset.
///
/// Each pair yields two spans: for brackets one character at `open` and
/// one at `close`; for quotes `quote_length` characters at each end.
pub fn marker_spans(pairs: &[DelimiterPair], palette: &Palette) -> Vec<Span> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);

    for pair in pairs {
        let style = palette.style_for(pair.color_index);
        if pair.is_quote {
            spans.push(Span::new(pair.open, pair.open + pair.quote_length, style));
            spans.push(Span::new(pair.close + 1 - pair.quote_length, pair.close + 1, style));
        } else {
            spans.push(Span::new(pair.open, pair.open + 1, style));
            spans.push(Span::new(pair.close, pair.close + 1, style));
        }
    }

    spans.sort_by_key(|s| s.start);
    spans
}
