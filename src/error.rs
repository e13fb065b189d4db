//! Error types for compiling and matching patterns.

use std::fmt;

use thiserror::Error;

use crate::diagnostic;
use crate::span::Span;

/// The construct a parser was expecting when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Key,
    Value,
    String,
    Array,
    Object,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "an object key"),
            Self::Value => write!(f, "a valid literal"),
            Self::String => write!(f, "a string"),
            Self::Array => write!(f, "an array"),
            Self::Object => write!(f, "an object"),
        }
    }
}

/// What went wrong while parsing a pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxErrorKind {
    #[error("expected {expected}, given empty field")]
    EmptyField { expected: Construct },

    #[error("expected {expected}, but it starts with '{found}'")]
    UnexpectedOpening { expected: Construct, found: char },

    #[error("string must end with {}", quote_name(.quote))]
    UnterminatedString { quote: char },

    #[error("object key must end with ':'")]
    UnterminatedKey,

    #[error("object expected ':' after a key")]
    ExpectedColon,

    #[error("expected a value after ':'")]
    MissingValue,

    #[error("expected an element before ','")]
    MissingElement,

    #[error("array element must end with ',' or ']'")]
    UnterminatedElement,

    #[error("object value must end with ',' or '}}'")]
    UnterminatedField,

    #[error("rest element must be last element")]
    RestNotLast,

    #[error("unexpected token")]
    TrailingContent,

    #[error("expected a valid literal, given '{text}'")]
    InvalidLiteral { text: String },
}

fn quote_name(quote: &char) -> &'static str {
    if *quote == '\'' {
        "single quote"
    } else {
        "double quotes"
    }
}

/// A failed parse, with enough context to point at the offending text.
///
/// `Display` renders the annotated diagnostic; use the accessors to build a
/// different rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    source: String,
    pattern: Span,
    span: Span,
    kind: SyntaxErrorKind,
    help: Option<String>,
}

impl SyntaxError {
    pub fn new(source: String, pattern: Span, span: Span, kind: SyntaxErrorKind) -> Self {
        Self {
            source,
            pattern,
            span,
            kind,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The full pattern text.
    pub fn source_text(&self) -> &str {
        &self.source
    }

    /// Span of the whole pattern.
    pub fn pattern_span(&self) -> Span {
        self.pattern
    }

    /// Span of the offending text.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&diagnostic::render(self, false))
    }
}

impl std::error::Error for SyntaxError {}

/// Errors raised by compiling, matching or dispatching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("{0}")]
    Syntax(#[from] SyntaxError),

    /// The value has a kind no pattern can describe.
    #[error("type {kind} is not supported")]
    UnsupportedValue { kind: &'static str },

    /// A pattern table entry's handler is not callable.
    #[error("expected a function for pattern {pattern:?}, given {kind}")]
    NotCallable { pattern: String, kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SyntaxErrorKind::UnterminatedString { quote: '\'' }.to_string(),
            "string must end with single quote"
        );
        assert_eq!(
            SyntaxErrorKind::UnterminatedString { quote: '"' }.to_string(),
            "string must end with double quotes"
        );
        assert_eq!(
            SyntaxErrorKind::EmptyField {
                expected: Construct::Array
            }
            .to_string(),
            "expected an array, given empty field"
        );
        assert_eq!(
            SyntaxErrorKind::UnterminatedField.to_string(),
            "object value must end with ',' or '}'"
        );
    }

    #[test]
    fn test_payload_accessors() {
        let err = SyntaxError::new(
            "[1 2]".to_string(),
            Span::new(0, 5),
            Span::new(3, 4),
            SyntaxErrorKind::UnterminatedElement,
        )
        .with_help("separate elements with ','");
        assert_eq!(err.source_text(), "[1 2]");
        assert_eq!(err.pattern_span(), Span::new(0, 5));
        assert_eq!(err.span(), Span::new(3, 4));
        assert_eq!(err.message(), "array element must end with ',' or ']'");
        assert_eq!(err.help(), Some("separate elements with ','"));
    }

    #[test]
    fn test_match_error_wraps_syntax() {
        let err = SyntaxError::new(
            "x".to_string(),
            Span::new(0, 1),
            Span::new(0, 1),
            SyntaxErrorKind::InvalidLiteral { text: "x".into() },
        );
        let wrapped = MatchError::from(err.clone());
        assert_eq!(wrapped, MatchError::Syntax(err));
    }
}
