//! Quote pair matching
//!
//! Pairs up string-literal markers for `'`, `"` and backtick, including
//! triple-quote markers. Each quote character is processed in its own
//! pass with its own depth counter; depth only advances when a non-empty
//! string closes, so consecutive empty strings share a color.
//!
//! Only comment ranges are skipped here. String interiors must stay
//! visible to this matcher, since the quotes themselves are what it
//! pairs up.

use std::collections::HashMap;

use crate::palette::Palette;

use super::pair::DelimiterPair;
use super::range::{in_any, TextRange};
use super::strings::{find_closing_quote, is_empty_string_at, quote_length_at, QUOTE_CHARS};

/// Quote colors start this far into the palette so they differ from
/// bracket colors at shallow depths.
const QUOTE_COLOR_OFFSET: usize = 10;

/// Match quote pairs for every quote character, skipping positions inside
/// `comments`.
///
/// Emitted offsets span the full markers: `open` is the first character
/// of the opening marker and `close` the last character of the closing
/// marker. Unterminated openers emit nothing and do not advance depth.
pub fn find_quote_pairs(
    text: &[char],
    comments: &[TextRange],
    palette: &Palette,
) -> Vec<DelimiterPair> {
    let mut pairs = Vec::new();
    for &quote in &QUOTE_CHARS {
        quote_pass(text, quote, comments, palette, &mut pairs);
    }
    pairs
}

/// One full pass for a single quote character
fn quote_pass(
    text: &[char],
    quote: char,
    comments: &[TextRange],
    palette: &Palette,
    pairs: &mut Vec<DelimiterPair>,
) {
    // Per-pass color memo; the counter is local to this quote character
    let mut depth_colors: HashMap<(char, usize, usize), usize> = HashMap::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < text.len() {
        if in_any(i, comments) {
            i += 1;
            continue;
        }

        if text[i] == quote {
            let quote_length = quote_length_at(text, i, quote);
            let color_index = *depth_colors
                .entry((quote, quote_length, depth))
                .or_insert_with(|| palette.color_index(depth + QUOTE_COLOR_OFFSET));

            if is_empty_string_at(text, i, quote, quote_length) {
                // Both markers, nothing between them; depth stays put
                pairs.push(DelimiterPair::quote(
                    i,
                    i + quote_length * 2 - 1,
                    quote,
                    color_index,
                    quote_length,
                ));
                i += quote_length * 2;
                continue;
            }

            if let Some(close) =
                find_closing_quote(text, i + quote_length, quote, quote_length, comments)
            {
                pairs.push(DelimiterPair::quote(
                    i,
                    close + quote_length - 1,
                    quote,
                    color_index,
                    quote_length,
                ));
                i = close + quote_length;
                depth += 1;
                continue;
            }
        }

        i += 1;
    }
}
