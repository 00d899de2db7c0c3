//! String literal detection
//!
//! Locates string interiors so the bracket matcher can ignore brackets
//! that appear inside string contents. Each quote character gets its own
//! full pass over the text; passes are independent of one another.
//!
//! Quote markers are one character, or three when the next two characters
//! repeat the quote (`'''`, `"""`, triple backtick). Single-character
//! markers honor a backslash escape on the closing quote; triple markers
//! close only on three consecutive quotes.

use super::range::{in_any, TextRange};

/// Quote characters recognized as string delimiters
pub const QUOTE_CHARS: [char; 3] = ['\'', '"', '`'];

/// Find the interiors of all string literals, one pass per quote
/// character.
///
/// The recorded ranges cover only the text between the markers, never the
/// markers themselves. Empty strings record nothing. An unterminated
/// opening quote records nothing either; the pass simply continues at the
/// next character.
pub fn find_string_ranges(text: &[char]) -> Vec<TextRange> {
    let mut ranges = Vec::new();

    for &quote in &QUOTE_CHARS {
        let mut i = 0;
        while i < text.len() {
            if text[i] == quote {
                let quote_length = quote_length_at(text, i, quote);
                if is_empty_string_at(text, i, quote, quote_length) {
                    // No interior to record
                    i += quote_length * 2;
                    continue;
                }
                if let Some(close) =
                    find_closing_quote(text, i + quote_length, quote, quote_length, &[])
                {
                    ranges.push(TextRange::new(i + quote_length, close));
                    i = close + quote_length;
                    continue;
                }
            }
            i += 1;
        }
    }

    ranges
}

/// Length of the quote marker starting at `pos`: 3 for a triple quote,
/// otherwise 1. The caller guarantees `text[pos]` is `quote`.
pub(crate) fn quote_length_at(text: &[char], pos: usize, quote: char) -> usize {
    if pos + 2 < text.len() && text[pos + 1] == quote && text[pos + 2] == quote {
        3
    } else {
        1
    }
}

/// Check for an empty string: the closing marker immediately follows the
/// opening one (`""`, or six consecutive quotes for triples).
pub(crate) fn is_empty_string_at(
    text: &[char],
    pos: usize,
    quote: char,
    quote_length: usize,
) -> bool {
    if pos + quote_length * 2 > text.len() {
        return false;
    }
    match quote_length {
        1 => text[pos + 1] == quote,
        3 => (1..6).all(|k| text[pos + k] == quote),
        _ => false,
    }
}

/// Find the closing quote marker at or after `start`.
///
/// Returns the offset of the first character of the closing marker.
/// Positions inside `skip` ranges are passed over during the search.
/// Single-character closers preceded by a backslash are skipped; triple
/// closers need three consecutive quote characters.
pub(crate) fn find_closing_quote(
    text: &[char],
    start: usize,
    quote: char,
    quote_length: usize,
    skip: &[TextRange],
) -> Option<usize> {
    let mut i = start;
    while i + quote_length <= text.len() {
        if !in_any(i, skip) && text[i] == quote {
            if quote_length == 1 {
                if i > 0 && text[i - 1] == '\\' {
                    i += 1;
                    continue;
                }
                return Some(i);
            }
            if text[i + 1] == quote && text[i + 2] == quote {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<TextRange> {
        let chars: Vec<char> = text.chars().collect();
        find_string_ranges(&chars)
    }

    #[test]
    fn test_simple_interior() {
        // "abc" -> interior covers abc only
        let ranges = scan("\"abc\"");
        assert_eq!(ranges, vec![TextRange::new(1, 4)]);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        // "a\"b" closes at the final quote
        let ranges = scan(r#""a\"b""#);
        assert_eq!(ranges, vec![TextRange::new(1, 5)]);
    }

    #[test]
    fn test_triple_quote_interior() {
        let ranges = scan("'''hello'''");
        assert_eq!(ranges, vec![TextRange::new(3, 8)]);
    }

    #[test]
    fn test_empty_string_records_nothing() {
        assert!(scan("\"\"").is_empty());
        assert!(scan("''''''").is_empty());
    }

    #[test]
    fn test_unterminated_records_nothing() {
        assert!(scan("\"abc").is_empty());
        assert!(scan("'''abc").is_empty());
    }

    #[test]
    fn test_independent_passes_per_quote_char() {
        // One interior per quote character
        let ranges = scan("'a' \"b\" `c`");
        assert_eq!(ranges.len(), 3);
        assert!(ranges.contains(&TextRange::new(1, 2)));
        assert!(ranges.contains(&TextRange::new(5, 6)));
        assert!(ranges.contains(&TextRange::new(9, 10)));
    }

    #[test]
    fn test_consecutive_strings() {
        // "a""b" -> two interiors
        let ranges = scan("\"a\"\"b\"");
        assert_eq!(ranges, vec![TextRange::new(1, 2), TextRange::new(4, 5)]);
    }

    #[test]
    fn test_quote_length_at() {
        let chars: Vec<char> = "'''".chars().collect();
        assert_eq!(quote_length_at(&chars, 0, '\''), 3);
        let chars: Vec<char> = "''x".chars().collect();
        assert_eq!(quote_length_at(&chars, 0, '\''), 1);
        let chars: Vec<char> = "'".chars().collect();
        assert_eq!(quote_length_at(&chars, 0, '\''), 1);
    }

    #[test]
    fn test_find_closing_skips_ranges() {
        let chars: Vec<char> = "x\"y\"".chars().collect();
        let skip = [TextRange::new(1, 2)];
        assert_eq!(find_closing_quote(&chars, 0, '"', 1, &skip), Some(3));
        assert_eq!(find_closing_quote(&chars, 0, '"', 1, &[]), Some(1));
    }
}
