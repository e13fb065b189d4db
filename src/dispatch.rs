//! First-match dispatch over an ordered table of patterns.

use tracing::{debug, trace};

use crate::compiler::compile;
use crate::error::MatchError;
use crate::value::{Callable, Value};

/// Pattern text to handler, tried in insertion order.
///
/// Handlers are plain [`Value`]s so a table can be assembled from dynamic
/// data; every handler must be a [`Value::Function`] by the time the table
/// is used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternTable {
    arms: Vec<(String, Value)>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arm. Re-using a pattern replaces its handler in place.
    pub fn insert(&mut self, pattern: impl Into<String>, handler: Value) {
        let pattern = pattern.into();
        match self.arms.iter_mut().find(|(p, _)| *p == pattern) {
            Some((_, slot)) => *slot = handler,
            None => self.arms.push((pattern, handler)),
        }
    }

    /// Builder form of [`insert`](Self::insert) taking a closure.
    pub fn arm<F>(mut self, pattern: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.insert(pattern, Value::function(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.arms.iter().map(|(p, h)| (p.as_str(), h))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for PatternTable {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut table = PatternTable::new();
        for (pattern, handler) in iter {
            table.insert(pattern, handler);
        }
        table
    }
}

/// Run the handler of the first pattern in `table` that matches `value`.
///
/// Every handler is checked for callability before any pattern is
/// compiled. Returns `Ok(None)` when no pattern matches. Patterns are
/// compiled on each call; cache [`Pattern`](crate::Pattern)s yourself to
/// reuse them.
pub fn match_value(value: &Value, table: &PatternTable) -> Result<Option<Value>, MatchError> {
    let arms = table
        .iter()
        .map(|(pattern, handler)| {
            handler
                .as_callable()
                .map(|f| (pattern, f))
                .ok_or_else(|| MatchError::NotCallable {
                    pattern: pattern.to_string(),
                    kind: handler.kind_name(),
                })
        })
        .collect::<Result<Vec<(&str, &Callable)>, _>>()?;

    for (source, handler) in arms {
        let pattern = compile(source)?;
        trace!(pattern = source, "trying arm");
        if pattern.is_match(value)? {
            debug!(pattern = source, "arm matched");
            return Ok(Some(handler.call(value)));
        }
    }
    debug!(arms = table.len(), "no arm matched");
    Ok(None)
}
