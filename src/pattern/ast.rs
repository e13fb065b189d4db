//! AST types for value patterns.

use std::fmt;

use itertools::Itertools;

use crate::span::Span;

/// One parsed pattern node with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// `[a, b, ...]`; `has_rest` is set when `...` closed the sequence.
    Array { elements: Vec<Node>, has_rest: bool },
    /// `{k: v, ...}`; pairs are kept in source order.
    Object { pairs: Vec<Pair>, has_rest: bool },
    Number(f64),
    String(String),
    Boolean(bool),
    Missing,
    Null,
    /// `...`; matches anything.
    Rest,
}

/// One `key: value` field of an object pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    /// Always a `NodeKind::String` node.
    pub key: Node,
    pub value: Node,
}

impl Pair {
    pub fn key_name(&self) -> &str {
        match &self.key.kind {
            NodeKind::String(s) => s,
            _ => "",
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self.kind, NodeKind::Rest)
    }

    /// True for the one-character string node produced when a value position
    /// opens directly on its own terminator `c`.
    ///
    /// Quoted strings always span at least their two quotes, so a span of
    /// length one can only come from an unquoted character.
    pub fn is_bare_char(&self, c: char) -> bool {
        match &self.kind {
            NodeKind::String(s) => self.span.len() == 1 && s.len() == c.len_utf8() && s.starts_with(c),
            _ => false,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Array { .. } => "array",
            NodeKind::Object { .. } => "object",
            NodeKind::Number(_) => "number",
            NodeKind::String(_) => "string",
            NodeKind::Boolean(_) => "boolean",
            NodeKind::Missing => "missing",
            NodeKind::Null => "null",
            NodeKind::Rest => "rest",
        }
    }
}

/// Prints the node back as pattern text in normalized form.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Array { elements, has_rest } => {
                let rest = has_rest.then_some("...");
                write!(
                    f,
                    "[{}]",
                    elements
                        .iter()
                        .map(|e| e.to_string())
                        .chain(rest.map(String::from))
                        .join(", ")
                )
            }
            NodeKind::Object { pairs, has_rest } => {
                let rest = has_rest.then_some("...");
                write!(
                    f,
                    "{{{}}}",
                    pairs
                        .iter()
                        .map(|p| format!("{}: {}", p.key, p.value))
                        .chain(rest.map(String::from))
                        .join(", ")
                )
            }
            NodeKind::Number(n) => write_number(f, *n),
            NodeKind::String(s) => write_quoted(f, s),
            NodeKind::Boolean(b) => write!(f, "{b}"),
            NodeKind::Missing => write!(f, "missing"),
            NodeKind::Null => write!(f, "null"),
            NodeKind::Rest => write!(f, "..."),
        }
    }
}

/// `f64` prints infinities as `inf`, which is not a literal.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_infinite() {
        let sign = if n < 0.0 { "-" } else { "" };
        write!(f, "{sign}Infinity")
    } else {
        write!(f, "{n}")
    }
}

/// Strings have no escapes, so pick whichever quote the content lacks.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if s.contains('"') {
        write!(f, "'{s}'")
    } else {
        write!(f, "\"{s}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: NodeKind) -> Node {
        Node::new(kind, Span::default())
    }

    #[test]
    fn test_display_nested() {
        let inner = node(NodeKind::Array {
            elements: vec![node(NodeKind::Number(1.0)), node(NodeKind::Number(2.5))],
            has_rest: true,
        });
        let obj = node(NodeKind::Object {
            pairs: vec![Pair {
                key: node(NodeKind::String("items".into())),
                value: inner,
            }],
            has_rest: false,
        });
        assert_eq!(obj.to_string(), r#"{"items": [1, 2.5, ...]}"#);
    }

    #[test]
    fn test_display_quotes() {
        assert_eq!(node(NodeKind::String("a'b".into())).to_string(), "\"a'b\"");
        assert_eq!(node(NodeKind::String("a\"b".into())).to_string(), "'a\"b'");
    }

    #[test]
    fn test_is_bare_char() {
        let bare = Node::new(NodeKind::String("]".into()), Span::new(3, 4));
        let quoted = Node::new(NodeKind::String("]".into()), Span::new(3, 6));
        assert!(bare.is_bare_char(']'));
        assert!(!bare.is_bare_char(','));
        assert!(!quoted.is_bare_char(']'));
    }
}
