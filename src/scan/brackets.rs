//! Bracket pair matching
//!
//! Stack-based matching for `()`, `{}` and `[]`. Each bracket family has
//! its own stack, so the families nest independently. The color index of
//! a pair is decided when the opener is pushed, keyed by the family's
//! nesting depth at that point, which gives every pair opened at the same
//! depth the same color within one scan.

use std::collections::HashMap;

use crate::palette::Palette;

use super::pair::DelimiterPair;
use super::range::{in_any, TextRange};

/// Opening/closing character per bracket family
const BRACKET_PAIRS: [(char, char); 3] = [('(', ')'), ('{', '}'), ('[', ']')];

/// True if `ch` is a bracket character of any family
pub fn is_delimiter(ch: char) -> bool {
    is_opening_delimiter(ch) || is_closing_delimiter(ch)
}

/// True if `ch` opens a bracket family
pub fn is_opening_delimiter(ch: char) -> bool {
    BRACKET_PAIRS.iter().any(|&(open, _)| ch == open)
}

/// True if `ch` closes a bracket family
pub fn is_closing_delimiter(ch: char) -> bool {
    BRACKET_PAIRS.iter().any(|&(_, close)| ch == close)
}

/// An opener waiting for its close
struct OpenDelimiter {
    position: usize,
    color_index: usize,
}

/// Match bracket pairs, skipping positions inside `skip` ranges
/// (comments and string interiors).
///
/// Pairs are emitted in close order. An unmatched closer is ignored;
/// openers still unmatched at end of text are dropped.
pub fn find_bracket_pairs(
    text: &[char],
    skip: &[TextRange],
    palette: &Palette,
) -> Vec<DelimiterPair> {
    let mut pairs = Vec::new();
    let mut stacks: [Vec<OpenDelimiter>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    // First color assigned at a given depth sticks for the whole scan
    let mut depth_colors: HashMap<(char, usize), usize> = HashMap::new();

    for (i, &ch) in text.iter().enumerate() {
        if in_any(i, skip) {
            continue;
        }

        for (family, &(open, close)) in BRACKET_PAIRS.iter().enumerate() {
            if ch == open {
                let depth = stacks[family].len();
                let color_index = *depth_colors
                    .entry((open, depth))
                    .or_insert_with(|| palette.color_index(depth));
                stacks[family].push(OpenDelimiter {
                    position: i,
                    color_index,
                });
            } else if ch == close {
                if let Some(info) = stacks[family].pop() {
                    pairs.push(DelimiterPair::bracket(info.position, i, open, info.color_index));
                }
            }
        }
    }

    pairs
}
