//! Delimiter and quote scanning
//!
//! The scan pipeline over one document snapshot:
//! 1. the comment scanner finds `//`, `#` and `/* */` ranges;
//! 2. the string scanner finds string interiors;
//! 3. the bracket matcher runs, skipping comments and string interiors;
//! 4. the quote matcher runs, skipping comments only.
//!
//! All working state (stacks, color memos, range lists) is allocated per
//! invocation, so scans on different documents can run concurrently.

mod brackets;
mod comments;
mod pair;
mod quotes;
mod range;
mod strings;

pub use brackets::{
    find_bracket_pairs, is_closing_delimiter, is_delimiter, is_opening_delimiter,
};
pub use comments::find_comment_ranges;
pub use pair::DelimiterPair;
pub use quotes::find_quote_pairs;
pub use range::TextRange;
pub use strings::{find_string_ranges, QUOTE_CHARS};

use crate::config::Config;
use crate::palette::Palette;

/// Find every matched bracket and quote pair in `text`.
///
/// Offsets in the result are 0-based character indices. Bracket pairs
/// come first (in close order), then quote pairs grouped per quote
/// character. The result for identical text is identical, color indices
/// included.
pub fn find_matching_delimiters(text: &str, palette: &Palette) -> Vec<DelimiterPair> {
    scan(text, palette, true, true)
}

/// Like [`find_matching_delimiters`], honoring the config's matcher
/// toggles and palette.
pub fn scan_with_config(text: &str, config: &Config) -> Vec<DelimiterPair> {
    scan(text, &config.palette, config.brackets, config.quotes)
}

fn scan(text: &str, palette: &Palette, brackets: bool, quotes: bool) -> Vec<DelimiterPair> {
    let chars: Vec<char> = text.chars().collect();
    let comment_ranges = find_comment_ranges(&chars);
    let mut pairs = Vec::new();

    if brackets {
        // Brackets inside string contents are not candidates
        let mut skip = comment_ranges.clone();
        skip.extend(find_string_ranges(&chars));
        pairs.extend(find_bracket_pairs(&chars, &skip, palette));
    }

    if quotes {
        pairs.extend(find_quote_pairs(&chars, &comment_ranges, palette));
    }

    pairs
}
