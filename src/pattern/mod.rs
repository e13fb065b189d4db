//! Value pattern engine.
//!
//! A pattern is a single expression describing the shape of a [`Value`].
//!
//! # Pattern syntax
//!
//! | Pattern            | Matches                                          |
//! |--------------------|--------------------------------------------------|
//! | `true` / `false`   | That boolean                                     |
//! | `null`             | The null value only                              |
//! | `missing`          | The missing value only                           |
//! | `42`, `-1.5e3`     | That exact number (`0x`, `0o`, `0b`, `Infinity`) |
//! | `"text"`, `'text'` | That exact string (no escapes)                   |
//! | `[a, b]`           | An array of exactly two elements matching a, b   |
//! | `[a, b, ...]`      | An array of two or more elements                 |
//! | `{k: a, 'x y': b}` | An object with exactly these keys                |
//! | `{k: a, ...}`      | An object with at least these keys               |
//! | `...`              | Anything                                         |
//! | *(empty)*          | Anything                                         |
//!
//! `...` may only appear as the last element of an array or object.
//!
//! [`Value`]: crate::Value

pub mod ast;
pub mod cursor;
pub mod matcher;
pub mod parser;
pub mod terminator;


pub use ast::{Node, NodeKind, Pair};
pub use matcher::matches;
pub use parser::parse_value;
