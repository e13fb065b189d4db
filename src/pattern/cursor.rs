//! Scanner cursor threaded through every parser function.

use crate::error::{Construct, SyntaxError, SyntaxErrorKind};
use crate::span::Span;

/// A scan position over one pattern string.
///
/// The pattern text and its span are fixed; only `pos` moves.
pub struct Cursor<'a> {
    chars: &'a [char],
    pattern: Span,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pattern: Span::new(0, chars.len()),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.pattern.end);
    }

    pub fn advance(&mut self, n: usize) {
        self.set_pos(self.pos + n);
    }

    /// End offset of the whole pattern.
    pub fn end(&self) -> usize {
        self.pattern.end
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.pattern.end
    }

    pub fn peek(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos < self.pattern.end {
            self.chars.get(pos).copied()
        } else {
            None
        }
    }

    /// Everything from the current position to the end of the pattern.
    pub fn rest(&self) -> &'a [char] {
        Span::new(self.pos, self.pattern.end).slice(self.chars)
    }

    pub fn starts_with(&self, s: &str) -> bool {
        let rest = self.rest();
        s.chars().count() <= rest.len() && s.chars().zip(rest).all(|(a, &b)| a == b)
    }

    pub fn text(&self, span: Span) -> String {
        span.slice(self.chars).iter().collect()
    }

    /// Move past whitespace, returning the new position. Stops at the end of
    /// the pattern if nothing else remains.
    pub fn skip_space(&mut self) -> usize {
        let skip = self
            .rest()
            .iter()
            .position(|c| !c.is_whitespace())
            .unwrap_or(self.rest().len());
        self.advance(skip);
        self.pos
    }

    /// Move past whitespace and return the position and character that
    /// start `what`, failing if the pattern is exhausted.
    pub fn require(&mut self, what: Construct) -> Result<(usize, char), SyntaxError> {
        let from = self.pos;
        let pos = self.skip_space();
        match self.peek() {
            Some(c) => Ok((pos, c)),
            None => Err(self.error(
                SyntaxErrorKind::EmptyField { expected: what },
                Span::new(from, self.end()),
            )),
        }
    }

    /// Like [`require`](Self::require), but the construct must open with `open`.
    pub fn require_open(&mut self, open: char, what: Construct) -> Result<usize, SyntaxError> {
        let (pos, found) = self.require(what)?;
        if found != open {
            return Err(self.error(
                SyntaxErrorKind::UnexpectedOpening {
                    expected: what,
                    found,
                },
                self.span_at(pos),
            ));
        }
        Ok(pos)
    }

    /// One-character span at `pos`, empty at the end of the pattern.
    pub fn span_at(&self, pos: usize) -> Span {
        Span::new(pos, (pos + 1).min(self.end()).max(pos))
    }

    pub fn error(&self, kind: SyntaxErrorKind, span: Span) -> SyntaxError {
        SyntaxError::new(self.text(self.pattern), self.pattern, span, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_skip_space() {
        let text = chars("   abc");
        let mut cur = Cursor::new(&text);
        assert_eq!(cur.skip_space(), 3);
        assert_eq!(cur.peek(), Some('a'));
    }

    #[test]
    fn test_skip_space_to_end() {
        let text = chars(" \t ");
        let mut cur = Cursor::new(&text);
        assert_eq!(cur.skip_space(), 3);
        assert!(cur.at_end());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn test_require_empty_names_construct() {
        let text = chars("[1,   ");
        let mut cur = Cursor::new(&text);
        cur.set_pos(3);
        let err = cur.require(Construct::Value).unwrap_err();
        assert!(matches!(
            err.kind(),
            SyntaxErrorKind::EmptyField {
                expected: Construct::Value
            }
        ));
        assert_eq!(err.span(), Span::new(3, 6));
    }

    #[test]
    fn test_require_returns_first_char() {
        let text = chars("  {x");
        let mut cur = Cursor::new(&text);
        assert_eq!(cur.require(Construct::Object).unwrap(), (2, '{'));
        assert_eq!(cur.require_open('{', Construct::Object).unwrap(), 2);
        let err = cur.require_open('[', Construct::Array).unwrap_err();
        assert_eq!(err.span(), Span::new(2, 3));
    }

    #[test]
    fn test_starts_with() {
        let text = chars("x...");
        let mut cur = Cursor::new(&text);
        assert!(!cur.starts_with("..."));
        cur.advance(1);
        assert!(cur.starts_with("..."));
        cur.advance(2);
        assert!(!cur.starts_with("..."));
    }

    #[test]
    fn test_span_at_end_is_empty() {
        let text = chars("ab");
        let cur = Cursor::new(&text);
        assert_eq!(cur.span_at(1), Span::new(1, 2));
        assert!(cur.span_at(2).is_empty());
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        let text = chars("é  x");
        let mut cur = Cursor::new(&text);
        cur.advance(1);
        assert_eq!(cur.skip_space(), 3);
        assert_eq!(cur.text(Span::new(0, 1)), "é");
    }
}
