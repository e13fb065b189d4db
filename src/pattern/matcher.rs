//! Structural matcher: test a [`Value`] against a parsed [`Node`].

use std::cmp::Ordering;

use crate::error::MatchError;
use crate::value::{Map, Value};

use super::ast::*;

/// Test whether `value` has the shape described by `node`.
///
/// Fails only for values no pattern can describe (functions); a shape
/// mismatch is `Ok(false)`.
pub fn matches(node: &Node, value: &Value) -> Result<bool, MatchError> {
    if node.is_rest() {
        return Ok(true);
    }
    let matched = match (value, &node.kind) {
        (Value::Function(_), _) => {
            return Err(MatchError::UnsupportedValue {
                kind: value.kind_name(),
            });
        }
        (Value::Bool(b), NodeKind::Boolean(p)) => b == p,
        (Value::Number(n), NodeKind::Number(p)) => n == p,
        (Value::String(s), NodeKind::String(p)) => s == p,
        (Value::Missing, NodeKind::Missing) => true,
        (Value::Null, NodeKind::Null) => true,
        (Value::Array(items), NodeKind::Array { elements, has_rest }) => {
            return match_array(elements, *has_rest, items);
        }
        (Value::Object(map), NodeKind::Object { pairs, has_rest }) => {
            return match_object(pairs, *has_rest, map);
        }
        _ => false,
    };
    Ok(matched)
}

/// A value may have more entries than the pattern declares only if the
/// pattern ends with `...`.
fn size_fits(actual: usize, declared: usize, has_rest: bool) -> bool {
    match actual.cmp(&declared) {
        Ordering::Less => false,
        Ordering::Equal => true,
        Ordering::Greater => has_rest,
    }
}

fn match_array(elements: &[Node], has_rest: bool, items: &[Value]) -> Result<bool, MatchError> {
    if !size_fits(items.len(), elements.len(), has_rest) {
        return Ok(false);
    }
    for (pattern, item) in elements.iter().zip(items) {
        if !matches(pattern, item)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn match_object(pairs: &[Pair], has_rest: bool, map: &Map) -> Result<bool, MatchError> {
    if !size_fits(map.len(), pairs.len(), has_rest) {
        return Ok(false);
    }
    for pair in pairs {
        let Some(field) = map.get(pair.key_name()) else {
            return Ok(false);
        };
        if !matches(&pair.value, field)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::cursor::Cursor;
    use crate::pattern::parser::parse_value;
    use crate::pattern::terminator::Terminator;

    fn node(s: &str) -> Node {
        let chars: Vec<char> = s.chars().collect();
        let mut cur = Cursor::new(&chars);
        parse_value(&mut cur, Terminator::Whitespace).expect("parse should succeed")
    }

    fn is_match(pattern: &str, value: &Value) -> bool {
        matches(&node(pattern), value).expect("match should not fail")
    }

    fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
        Value::Object(entries.into_iter().collect())
    }

    fn arr(items: Vec<Value>) -> Value {
        Value::Array(items)
    }

    // --- Scalars ---

    #[test]
    fn test_boolean() {
        assert!(is_match("true", &Value::Bool(true)));
        assert!(!is_match("true", &Value::Bool(false)));
        assert!(!is_match("true", &Value::from("true")));
    }

    #[test]
    fn test_number_is_exact() {
        assert!(is_match("1.5", &Value::Number(1.5)));
        assert!(!is_match("1.5", &Value::Number(1.5000001)));
        assert!(!is_match("1", &Value::from("1")));
        assert!(is_match("-0", &Value::Number(0.0)));
    }

    #[test]
    fn test_string() {
        assert!(is_match("'abc'", &Value::from("abc")));
        assert!(!is_match("'abc'", &Value::from("ABC")));
    }

    #[test]
    fn test_null_and_missing_are_distinct() {
        assert!(is_match("null", &Value::Null));
        assert!(!is_match("null", &Value::Missing));
        assert!(is_match("missing", &Value::Missing));
        assert!(!is_match("missing", &Value::Null));
        assert!(!is_match("{}", &Value::Null));
        assert!(!is_match("null", &obj([])));
    }

    #[test]
    fn test_rest_is_wildcard() {
        let f = Value::function(|v| v.clone());
        assert!(is_match("...", &Value::Null));
        assert!(is_match("...", &arr(vec![Value::from(1)])));
        assert!(is_match("...", &f));
    }

    // --- Arrays ---

    #[test]
    fn test_array_exact_length() {
        assert!(is_match("[1, 2]", &arr(vec![Value::from(1), Value::from(2)])));
        assert!(!is_match(
            "[1, 2]",
            &arr(vec![Value::from(1), Value::from(2), Value::from(3)])
        ));
        assert!(!is_match("[1, 2]", &arr(vec![Value::from(1)])));
    }

    #[test]
    fn test_array_rest_allows_trailing() {
        let pattern = "[1, 2, ...]";
        assert!(is_match(pattern, &arr(vec![Value::from(1), Value::from(2)])));
        assert!(is_match(
            pattern,
            &arr(vec![Value::from(1), Value::from(2), Value::from("x")])
        ));
        assert!(!is_match(
            pattern,
            &arr(vec![Value::from(2), Value::from(1), Value::from(3)])
        ));
    }

    #[test]
    fn test_array_does_not_match_object() {
        assert!(!is_match("[]", &obj([])));
        assert!(!is_match("{}", &arr(vec![])));
    }

    // --- Objects ---

    #[test]
    fn test_object_exact_keys() {
        let value = obj([("x", Value::from(1)), ("y", Value::from(2))]);
        assert!(is_match("{ 'x': 1, 'y': 2 }", &value));
        assert!(is_match("{ y: 2, x: 1 }", &value));
        assert!(!is_match("{ 'x': 1 }", &value));
    }

    #[test]
    fn test_object_rest_allows_extra_keys() {
        let value = obj([
            ("x", Value::from(1)),
            ("y", Value::from(2)),
            ("z", Value::from(3)),
        ]);
        assert!(is_match("{ 'x': 1, 'y': 2, ... }", &value));
        assert!(!is_match("{ 'x': 1, 'y': 2 }", &value));
    }

    #[test]
    fn test_object_missing_key() {
        let value = obj([("x", Value::from(1)), ("w", Value::from(2))]);
        assert!(!is_match("{ x: 1, y: 2 }", &value));
    }

    #[test]
    fn test_object_fewer_keys_than_pattern() {
        assert!(!is_match("{ x: 1, y: 2, ... }", &obj([("x", Value::from(1))])));
    }

    #[test]
    fn test_nested() {
        let pattern = "{ 'items': [1, 2, ...] }";
        let items = |v: Vec<i32>| obj([("items", arr(v.into_iter().map(Value::from).collect()))]);
        assert!(is_match(pattern, &items(vec![1, 2, 3])));
        assert!(!is_match(pattern, &items(vec![1, 3])));
        assert!(!is_match(pattern, &items(vec![1])));
    }

    #[test]
    fn test_missing_value_in_object() {
        let value = obj([("a", Value::Missing)]);
        assert!(is_match("{a: missing}", &value));
        assert!(!is_match("{a: null}", &value));
    }

    // --- Unsupported kinds ---

    #[test]
    fn test_function_value_is_an_error() {
        let f = Value::function(|v| v.clone());
        assert_eq!(
            matches(&node("1"), &f),
            Err(MatchError::UnsupportedValue { kind: "function" })
        );
    }

    #[test]
    fn test_nested_function_value_is_an_error() {
        let value = obj([("f", Value::function(|v| v.clone()))]);
        assert!(matches(&node("{f: 1}"), &value).is_err());
        assert_eq!(matches(&node("{f: ...}"), &value), Ok(true));
        assert_eq!(matches(&node("{...}"), &value), Ok(true));
    }
}
