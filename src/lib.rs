//! A small pattern language for describing the shape of dynamic values.
//!
//! Patterns are compiled once and then tested against [`Value`]s. See
//! [`pattern`] for the syntax.
//!
//! # Example
//!
//! ```rust
//! use valpat::{PatternTable, Value, compile, match_value};
//!
//! let pattern = compile("{ 'items': [1, 2, ...] }").unwrap();
//!
//! let value: Value = serde_json::json!({ "items": [1, 2, 3] }).into();
//! assert_eq!(pattern.is_match(&value), Ok(true));
//!
//! let value: Value = serde_json::json!({ "items": [1, 3] }).into();
//! assert_eq!(pattern.is_match(&value), Ok(false));
//!
//! // First matching arm wins.
//! let table = PatternTable::new()
//!     .arm("[...]", |_| Value::from("array"))
//!     .arm("", |_| Value::from("anything else"));
//! assert_eq!(
//!     match_value(&Value::Null, &table),
//!     Ok(Some(Value::from("anything else")))
//! );
//! ```

pub mod compiler;
pub mod diagnostic;
pub mod dispatch;
pub mod error;
pub mod pattern;
mod span;
mod value;

pub use compiler::{Pattern, compile};
pub use dispatch::{PatternTable, match_value};
pub use error::{Construct, MatchError, SyntaxError, SyntaxErrorKind};
pub use span::Span;
pub use value::{Callable, Map, Value};
