//! Compile pattern text into a reusable [`Pattern`] predicate.

use std::fmt;

use tracing::debug;

use crate::error::{MatchError, SyntaxError, SyntaxErrorKind};
use crate::pattern::cursor::Cursor;
use crate::pattern::terminator::Terminator;
use crate::pattern::{Node, matcher, parse_value};
use crate::span::Span;
use crate::value::Value;

const SINGLE_EXPRESSION_HELP: &str = "pattern only supports a single expression";

/// A compiled pattern.
///
/// Immutable once built; share it freely, including across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    source: String,
    /// `None` for an empty pattern, which matches everything.
    root: Option<Node>,
}

/// Compile `source` into a [`Pattern`].
///
/// An empty or all-whitespace pattern matches every value. Anything else
/// must be exactly one expression.
pub fn compile(source: &str) -> Result<Pattern, SyntaxError> {
    let chars: Vec<char> = source.chars().collect();
    let mut cur = Cursor::new(&chars);

    cur.skip_space();
    if cur.at_end() {
        debug!(pattern = source, "compiled always-match pattern");
        return Ok(Pattern {
            source: source.to_string(),
            root: None,
        });
    }

    let root = parse_value(&mut cur, Terminator::Whitespace)?;
    let trailing = cur.skip_space();
    if !cur.at_end() {
        return Err(cur
            .error(
                SyntaxErrorKind::TrailingContent,
                Span::new(trailing, cur.end()),
            )
            .with_help(SINGLE_EXPRESSION_HELP));
    }

    debug!(pattern = source, kind = root.kind_name(), "compiled pattern");
    Ok(Pattern {
        source: source.to_string(),
        root: Some(root),
    })
}

impl Pattern {
    /// Test `value` against this pattern.
    ///
    /// Returns `Ok(false)` on a mismatch; errors only for values no pattern
    /// can describe.
    pub fn is_match(&self, value: &Value) -> Result<bool, MatchError> {
        match &self.root {
            None => Ok(true),
            Some(node) => matcher::matches(node, value),
        }
    }

    /// Turn the pattern into a standalone predicate closure.
    pub fn into_predicate(self) -> impl Fn(&Value) -> Result<bool, MatchError> + Send + Sync {
        move |value| self.is_match(value)
    }

    /// The parsed tree, or `None` for the always-match pattern.
    pub fn ast(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(node) => write!(f, "{node}"),
            None => write!(f, "<any>"),
        }
    }
}
