//! Text ranges used to mark regions the matchers must skip

/// Half-open interval of character offsets into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    /// First offset inside the range (inclusive)
    pub start: usize,
    /// First offset past the range (exclusive)
    pub end: usize,
}

impl TextRange {
    /// Create a range; `start` must not exceed `end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Check if the range covers an offset
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Length of the range in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the range is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Check if any of the ranges covers an offset
pub(crate) fn in_any(pos: usize, ranges: &[TextRange]) -> bool {
    ranges.iter().any(|r| r.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_half_open() {
        let range = TextRange::new(2, 5);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn test_empty_range() {
        let range = TextRange::new(3, 3);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(!range.contains(3));
    }

    #[test]
    fn test_in_any() {
        let ranges = [TextRange::new(0, 2), TextRange::new(5, 7)];
        assert!(in_any(1, &ranges));
        assert!(!in_any(3, &ranges));
        assert!(in_any(6, &ranges));
        assert!(!in_any(6, &[]));
    }
}
