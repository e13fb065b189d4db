//! Recursive descent parser for value patterns.
//!
//! Every function takes the shared [`Cursor`], skips leading whitespace, and
//! leaves the cursor just past what it consumed. Sequences and mappings are
//! driven by small explicit state machines.

use phf::{Map, phf_map};

use crate::error::{Construct, SyntaxError, SyntaxErrorKind};
use crate::span::Span;

use super::ast::*;
use super::cursor::Cursor;
use super::terminator::{self, Terminator};

/// The rest marker.
const REST: &str = "...";

#[derive(Debug, Clone, Copy)]
enum Keyword {
    True,
    False,
    Null,
    Missing,
}

/// Reserved literal words.
const KEYWORDS: Map<&'static str, Keyword> = phf_map! {
    "true" => Keyword::True,
    "false" => Keyword::False,
    "null" => Keyword::Null,
    "missing" => Keyword::Missing,
};

impl From<Keyword> for NodeKind {
    fn from(kw: Keyword) -> Self {
        match kw {
            Keyword::True => NodeKind::Boolean(true),
            Keyword::False => NodeKind::Boolean(false),
            Keyword::Null => NodeKind::Null,
            Keyword::Missing => NodeKind::Missing,
        }
    }
}

/// Parse one value, stopping unquoted tokens at `term`.
///
/// A value position that opens directly on its own terminator yields that
/// character as a one-character string node. Sequences rely on this to see
/// their closing `]`.
pub fn parse_value(cur: &mut Cursor, term: Terminator) -> Result<Node, SyntaxError> {
    let (start, ch) = cur.require(Construct::Value)?;
    if term.matches(ch) {
        cur.advance(1);
        return Ok(Node::new(
            NodeKind::String(ch.to_string()),
            Span::new(start, start + 1),
        ));
    }

    match ch {
        '"' | '\'' => parse_string(cur),
        '[' => parse_array(cur),
        '{' => parse_object(cur),
        '.' if cur.starts_with(REST) => Ok(parse_rest(cur, start)),
        _ => parse_literal(cur, term),
    }
}

fn parse_rest(cur: &mut Cursor, start: usize) -> Node {
    cur.set_pos(start + REST.len());
    Node::new(NodeKind::Rest, Span::new(start, start + REST.len()))
}

/// Parse a keyword or number running up to `term` (or the pattern end).
pub fn parse_literal(cur: &mut Cursor, term: Terminator) -> Result<Node, SyntaxError> {
    let (start, _) = cur.require(Construct::Value)?;
    let end = term.find(cur.rest()).map_or(cur.end(), |i| start + i);
    cur.set_pos(end);

    // Field values may run up to `}` with whitespace before it.
    let raw = cur.text(Span::new(start, end));
    let text = raw.trim_end();
    let span = Span::new(start, start + text.chars().count());

    if text.is_empty() {
        return Err(cur.error(
            SyntaxErrorKind::EmptyField {
                expected: Construct::Value,
            },
            cur.span_at(start),
        ));
    }
    if let Some(&kw) = KEYWORDS.get(text) {
        return Ok(Node::new(kw.into(), span));
    }
    match parse_number(text) {
        Some(n) => Ok(Node::new(NodeKind::Number(n), span)),
        None => Err(cur.error(
            SyntaxErrorKind::InvalidLiteral {
                text: text.to_string(),
            },
            span,
        )),
    }
}

/// Parse a numeric literal: decimal with optional sign, fraction and
/// exponent; `Infinity`; or unsigned `0x`/`0o`/`0b` integers.
fn parse_number(text: &str) -> Option<f64> {
    let (sign, body) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if body.starts_with(['+', '-']) {
        return None;
    }
    if body == "Infinity" {
        return Some(sign * f64::INFINITY);
    }
    if body.len() == text.len()
        && let Some(n) = parse_radix_integer(body)
    {
        return Some(n);
    }
    // Keeps out `inf`, `nan` and friends, which `f64::from_str` accepts.
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    body.parse::<f64>().ok().map(|n| sign * n)
}

fn parse_radix_integer(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2) {
        Some("0x" | "0X") => (16, &text[2..]),
        Some("0o" | "0O") => (8, &text[2..]),
        Some("0b" | "0B") => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Parse a `'...'` or `"..."` string. There are no escapes: the literal ends
/// at the next matching quote.
pub fn parse_string(cur: &mut Cursor) -> Result<Node, SyntaxError> {
    let (start, quote) = cur.require(Construct::String)?;
    if quote != '"' && quote != '\'' {
        return Err(cur.error(
            SyntaxErrorKind::UnexpectedOpening {
                expected: Construct::String,
                found: quote,
            },
            cur.span_at(start),
        ));
    }
    cur.advance(1);
    let Some(len) = cur.rest().iter().position(|&c| c == quote) else {
        return Err(cur.error(
            SyntaxErrorKind::UnterminatedString { quote },
            Span::new(start, cur.end()),
        ));
    };
    let close = start + 1 + len;
    cur.set_pos(close + 1);
    Ok(Node::new(
        NodeKind::String(cur.text(Span::new(start + 1, close))),
        Span::new(start, close + 1),
    ))
}

#[derive(Debug, Clone, Copy)]
enum ArrayState {
    Element,
    Next,
    End,
}

/// Parse `[a, b, ...]`.
pub fn parse_array(cur: &mut Cursor) -> Result<Node, SyntaxError> {
    let start = cur.require_open('[', Construct::Array)?;
    cur.set_pos(start + 1);

    let mut elements: Vec<Node> = Vec::new();
    let mut rest: Option<Span> = None;
    let mut state = ArrayState::Element;
    loop {
        state = match state {
            ArrayState::Element => {
                let before = cur.pos();
                let node = parse_value(cur, terminator::ELEMENT)?;
                if node.is_bare_char(']') {
                    ArrayState::End
                } else if node.is_bare_char(',') {
                    return Err(cur.error(
                        SyntaxErrorKind::MissingElement,
                        Span::new(before, node.span.end),
                    ));
                } else if node.is_rest() {
                    rest = Some(node.span);
                    ArrayState::Next
                } else {
                    elements.push(node);
                    ArrayState::Next
                }
            }
            ArrayState::Next => {
                let pos = cur.skip_space();
                match cur.peek() {
                    Some(']') => {
                        cur.advance(1);
                        ArrayState::End
                    }
                    Some(',') => {
                        if let Some(r) = rest {
                            return Err(
                                cur.error(SyntaxErrorKind::RestNotLast, Span::new(r.start, pos + 1))
                            );
                        }
                        cur.advance(1);
                        ArrayState::Element
                    }
                    _ => {
                        return Err(
                            cur.error(SyntaxErrorKind::UnterminatedElement, cur.span_at(pos))
                        );
                    }
                }
            }
            ArrayState::End => break,
        };
    }

    Ok(Node::new(
        NodeKind::Array {
            elements,
            has_rest: rest.is_some(),
        },
        Span::new(start, cur.pos()),
    ))
}

#[derive(Debug)]
enum ObjectState {
    Key,
    Colon(Node),
    Value(Node),
    Comma,
    End,
}

/// Parse `{k: v, 'k': v, ...}`.
pub fn parse_object(cur: &mut Cursor) -> Result<Node, SyntaxError> {
    let start = cur.require_open('{', Construct::Object)?;
    cur.set_pos(start + 1);

    let mut pairs: Vec<Pair> = Vec::new();
    let mut rest: Option<Span> = None;
    let mut state = ObjectState::Key;
    loop {
        state = match state {
            ObjectState::Key => {
                let (_, ch) = cur.require(Construct::Key)?;
                if ch == '}' {
                    cur.advance(1);
                    ObjectState::End
                } else {
                    let key = parse_key(cur)?;
                    if key.is_rest() {
                        rest = Some(key.span);
                        ObjectState::Comma
                    } else {
                        ObjectState::Colon(key)
                    }
                }
            }
            ObjectState::Colon(key) => {
                let pos = cur.skip_space();
                if cur.peek() != Some(':') {
                    return Err(cur.error(SyntaxErrorKind::ExpectedColon, cur.span_at(pos)));
                }
                cur.advance(1);
                ObjectState::Value(key)
            }
            ObjectState::Value(key) => {
                let after_colon = cur.pos();
                let value = parse_value(cur, terminator::FIELD_VALUE)?;
                if value.is_bare_char('}') {
                    return Err(cur.error(
                        SyntaxErrorKind::MissingValue,
                        Span::new(after_colon, value.span.end),
                    ));
                }
                pairs.push(Pair { key, value });
                ObjectState::Comma
            }
            ObjectState::Comma => {
                let pos = cur.skip_space();
                match cur.peek() {
                    Some('}') => {
                        cur.advance(1);
                        ObjectState::End
                    }
                    Some(',') => {
                        if let Some(r) = rest {
                            return Err(
                                cur.error(SyntaxErrorKind::RestNotLast, Span::new(r.start, pos + 1))
                            );
                        }
                        cur.advance(1);
                        ObjectState::Key
                    }
                    _ => {
                        return Err(cur.error(SyntaxErrorKind::UnterminatedField, cur.span_at(pos)));
                    }
                }
            }
            ObjectState::End => break,
        };
    }

    Ok(Node::new(
        NodeKind::Object {
            pairs,
            has_rest: rest.is_some(),
        },
        Span::new(start, cur.pos()),
    ))
}

/// Parse an object key: a quoted string, the rest marker, or a bare word
/// running up to whitespace, `:` or `}`. A bare word may be empty, as in
/// `{: 1}`, which keys the field by `""`.
fn parse_key(cur: &mut Cursor) -> Result<Node, SyntaxError> {
    let (start, ch) = cur.require(Construct::Key)?;
    match ch {
        '"' | '\'' => return parse_string(cur),
        '.' if cur.starts_with(REST) => return Ok(parse_rest(cur, start)),
        _ => {}
    }
    match terminator::KEY.find(cur.rest()) {
        None => Err(cur.error(
            SyntaxErrorKind::UnterminatedKey,
            Span::new(start, cur.end()),
        )),
        Some(len) => {
            let span = Span::new(start, start + len);
            cur.set_pos(span.end);
            Ok(Node::new(NodeKind::String(cur.text(span)), span))
        }
    }
}
