//! Emptiness and nil classification
//!
//! Both classifiers are total: any value, including `Value::Nil`, gets a
//! definite answer. `is_nil` checks only the outermost reference state;
//! `is_empty` recurses through references, which is the behavioral
//! difference between the two on a non-nil reference to an empty value.

use deepcheck_value::{Sequence, Value};

use crate::equality::equal;

/// Whether a value is considered empty
///
/// Nil is empty; collection shapes are empty when they hold no elements
/// (a nil collection holds none); a reference is empty when it is nil or
/// its referent is empty; every other shape is empty when it deep-equals
/// the zero value of its exact type.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Nil => true,
        Value::Bytes(b) => b.as_ref().map_or(true, |b| b.is_empty()),
        Value::Sequence(Sequence::Array(items)) => items.is_empty(),
        Value::Sequence(Sequence::List(items)) => items.as_ref().map_or(true, |i| i.is_empty()),
        Value::Map(entries) => entries.as_ref().map_or(true, |e| e.is_empty()),
        Value::Channel(ch) => ch.as_ref().map_or(true, |c| c.buffered == 0),
        Value::Reference(inner) => inner.as_ref().map_or(true, |v| is_empty(v)),
        _ => equal(value, &value.zero_like()),
    }
}

/// Whether a value is a nil-able shape holding no referent
///
/// Only the outermost reference state is inspected; shapes with no nil
/// concept (booleans, numbers, text, composites, arrays) are never nil.
pub fn is_nil(value: &Value) -> bool {
    match value {
        Value::Nil => true,
        Value::Bytes(b) => b.is_none(),
        Value::Sequence(Sequence::List(items)) => items.is_none(),
        Value::Sequence(Sequence::Array(_)) => false,
        Value::Map(entries) => entries.is_none(),
        Value::Reference(inner) => inner.is_none(),
        Value::Callable(f) => f.is_none(),
        Value::Channel(ch) => ch.is_none(),
        Value::Bool(_) | Value::Number(_) | Value::Text(_) | Value::Composite(_) => false,
    }
}
