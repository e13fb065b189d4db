//! Source spans for patterns and diagnostics.
//!
//! All offsets are **character** (not byte) indices into the pattern text.

use std::fmt;

/// A half-open `[start, end)` character range into a pattern string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    /// An empty span at `pos`.
    pub fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `chars` by this span, clamping to the slice length.
    pub fn slice<'a>(&self, chars: &'a [char]) -> &'a [char] {
        let end = self.end.min(chars.len());
        let start = self.start.min(end);
        &chars[start..end]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_empty() {
        assert_eq!(Span::new(2, 5).len(), 3);
        assert!(Span::point(4).is_empty());
        assert!(!Span::new(0, 1).is_empty());
    }

    #[test]
    fn test_slice_clamps() {
        let chars: Vec<char> = "abc".chars().collect();
        assert_eq!(Span::new(1, 3).slice(&chars), &['b', 'c']);
        assert_eq!(Span::new(2, 10).slice(&chars), &['c']);
        assert!(Span::new(7, 9).slice(&chars).is_empty());
    }
}
