//! Terminator tests: where a scanned value stops.

/// A set of characters that ends an unquoted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
    /// Any whitespace character.
    #[default]
    Whitespace,
    /// Exactly one character.
    Char(char),
    /// Any of the listed characters, optionally also any whitespace.
    Class {
        chars: &'static [char],
        whitespace: bool,
    },
}

/// Sequence elements end at whitespace, `,` or `]`.
pub const ELEMENT: Terminator = Terminator::Class {
    chars: &[',', ']'],
    whitespace: true,
};

/// Object values end at `,` or `}`. Whitespace is allowed inside the span
/// and trimmed afterwards.
pub const FIELD_VALUE: Terminator = Terminator::Class {
    chars: &[',', '}'],
    whitespace: false,
};

/// Bare object keys end at whitespace, `:` or `}`.
pub const KEY: Terminator = Terminator::Class {
    chars: &[':', '}'],
    whitespace: true,
};

impl Terminator {
    /// Test whether `ch` ends the current token.
    pub fn matches(&self, ch: char) -> bool {
        match *self {
            Terminator::Whitespace => ch.is_whitespace(),
            Terminator::Char(c) => c == ch,
            Terminator::Class { chars, whitespace } => {
                (whitespace && ch.is_whitespace()) || chars.contains(&ch)
            }
        }
    }

    /// Offset of the first terminator in `chars`, if any.
    pub fn find(&self, chars: &[char]) -> Option<usize> {
        chars.iter().position(|&c| self.matches(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_matches_space_tab_newline() {
        let t = Terminator::default();
        assert!(t.matches(' '));
        assert!(t.matches('\t'));
        assert!(t.matches('\n'));
        assert!(!t.matches(','));
    }

    #[test]
    fn element_class() {
        assert!(ELEMENT.matches(','));
        assert!(ELEMENT.matches(']'));
        assert!(ELEMENT.matches(' '));
        assert!(!ELEMENT.matches('}'));
    }

    #[test]
    fn field_value_class_ignores_whitespace() {
        assert!(FIELD_VALUE.matches('}'));
        assert!(!FIELD_VALUE.matches(' '));
    }

    #[test]
    fn find_first_terminator() {
        let chars: Vec<char> = "abc:d}".chars().collect();
        assert_eq!(KEY.find(&chars), Some(3));
        assert_eq!(Terminator::Char('x').find(&chars), None);
    }
}
