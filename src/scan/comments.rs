//! Comment detection
//!
//! Finds single-line (`//`, `#`) and block (`/* */`) comment ranges so
//! the matchers can skip them. The scan is deliberately not quote-aware:
//! a `//` inside a string literal still starts a comment range. That is
//! part of the heuristic, language-agnostic design, not something to
//! special-case.

use super::range::TextRange;

/// Find all comment ranges in the text, in document order.
///
/// Recognized comments are jumped over in one step, so a `//` inside a
/// block comment never produces a second, overlapping range. An
/// unterminated `/*` records no range at all; scanning resumes at the
/// next character and the rest of the text is treated as ordinary text.
pub fn find_comment_ranges(text: &[char]) -> Vec<TextRange> {
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < text.len() {
        if i + 1 < text.len() && text[i] == '/' && text[i + 1] == '/' {
            let end = line_end(text, i);
            ranges.push(TextRange::new(i, end));
            i = end;
        } else if text[i] == '#' {
            let end = line_end(text, i);
            ranges.push(TextRange::new(i, end));
            i = end;
        } else if i + 1 < text.len() && text[i] == '/' && text[i + 1] == '*' {
            match block_end(text, i + 2) {
                Some(star) => {
                    ranges.push(TextRange::new(i, star + 2));
                    i = star + 2;
                }
                None => i += 1,
            }
        } else {
            i += 1;
        }
    }

    ranges
}

/// Offset of the newline ending the line at `from`, or end of text
fn line_end(text: &[char], from: usize) -> usize {
    text[from..]
        .iter()
        .position(|&c| c == '\n')
        .map_or(text.len(), |n| from + n)
}

/// Offset of the `*` of the first `*/` at or after `from`
fn block_end(text: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < text.len() {
        if text[i] == '*' && text[i + 1] == '/' {
            return Some(i);
        }
        i += 1;
    }
    None
}
