//! Structural and value-level equality
//!
//! `equal` is the base comparison every other engine operation builds on:
//! strict deep equality with no coercion, plus the byte-sequence fast path.
//! `equal_values` layers type conversion on top, widening numerics before
//! comparing so a narrowing overflow can never produce a false positive.

use deepcheck_value::{Composite, Sequence, Text, Value};
use tracing::trace;

/// Deep structural equality between two values
///
/// Nil only equals nil: a typed nil such as a nil reference is not the
/// untyped `Value::Nil`. If `expected` is a byte sequence, `actual` must be
/// one too; two nil byte sequences are equal, but a nil and a non-nil
/// (even empty) byte sequence are not. Everything else is shape-for-shape,
/// field-for-field equality with type identity included.
pub fn equal(expected: &Value, actual: &Value) -> bool {
    if matches!(expected, Value::Nil) || matches!(actual, Value::Nil) {
        return matches!(expected, Value::Nil) && matches!(actual, Value::Nil);
    }

    if let Value::Bytes(exp) = expected {
        let Value::Bytes(act) = actual else {
            trace!(actual = %actual.shape(), "byte-sequence compared against non-byte shape");
            return false;
        };
        return match (exp, act) {
            (None, None) => true,
            (Some(e), Some(a)) => e == a,
            _ => false,
        };
    }

    deep_equal(expected, actual)
}

fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Text(x), Value::Text(y)) => x.type_name == y.type_name && x.value == y.value,
        (Value::Bytes(x), Value::Bytes(y)) => x == y,
        (Value::Sequence(Sequence::Array(x)), Value::Sequence(Sequence::Array(y))) => {
            x.len() == y.len() && x.iter().zip(y).all(|(e, a)| deep_equal(e, a))
        }
        (Value::Sequence(Sequence::List(x)), Value::Sequence(Sequence::List(y))) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => x.len() == y.len() && x.iter().zip(y).all(|(e, a)| deep_equal(e, a)),
            _ => false,
        },
        (Value::Map(x), Value::Map(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => {
                x.len() == y.len()
                    && x.iter().all(|(k, v)| y.get(k).is_some_and(|w| deep_equal(v, w)))
            }
            _ => false,
        },
        (Value::Reference(x), Value::Reference(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => deep_equal(x, y),
            _ => false,
        },
        (Value::Composite(x), Value::Composite(y)) => {
            x.type_name == y.type_name
                && x.fields.len() == y.fields.len()
                && x.fields.iter().zip(&y.fields).all(|(f, g)| {
                    f.name == g.name && f.exported == g.exported && deep_equal(&f.value, &g.value)
                })
        }
        // two callables are deeply equal only when both are nil
        (Value::Callable(x), Value::Callable(y)) => x.is_none() && y.is_none(),
        (Value::Channel(x), Value::Channel(y)) => match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => x.id == y.id,
            _ => false,
        },
        _ => false,
    }
}

/// Equality across differing representations of the same value
///
/// Accepts anything `equal` accepts, then falls back to conversion: a
/// value is converted into the other operand's type and compared. When
/// both operands are numeric the smaller representation is always widened
/// into the larger one first (ties convert `actual` into `expected`'s
/// kind); converting the other way can truncate and fabricate equality.
pub fn equal_values(expected: &Value, actual: &Value) -> bool {
    if equal(expected, actual) {
        return true;
    }
    if matches!(expected, Value::Nil) || matches!(actual, Value::Nil) {
        return false;
    }
    if !convertible(expected, actual) {
        return false;
    }

    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => {
            if e.size() >= a.size() {
                a.convert_to(e) == *e
            } else {
                e.convert_to(a) == *a
            }
        }
        // a byte sequence converts to text byte-for-byte, and text cannot
        // represent arbitrary bytes, so this pair is compared in byte
        // space; a nil byte sequence converts to empty text
        (Value::Bytes(b), Value::Text(u)) => {
            b.as_deref().unwrap_or(&[]) == u.value.as_bytes()
        }
        _ => equal(&convert(expected, actual), actual),
    }
}

/// Whether `expected`'s type converts to `actual`'s type
///
/// Numerics interconvert except across the complex boundary; text
/// converts to text of any name and to/from byte sequences; composites
/// convert when their field structure matches. Everything else does not
/// convert (identity conversions are pointless here since `equal` has
/// already rejected the pair).
fn convertible(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => e.convertible_to(a),
        (Value::Text(_), Value::Text(_)) => true,
        (Value::Text(_), Value::Bytes(_)) | (Value::Bytes(_), Value::Text(_)) => true,
        (Value::Composite(e), Value::Composite(a)) => same_field_structure(e, a),
        _ => false,
    }
}

/// Two composite types interconvert when their fields line up exactly
fn same_field_structure(a: &Composite, b: &Composite) -> bool {
    a.fields.len() == b.fields.len()
        && a.fields.iter().zip(&b.fields).all(|(f, g)| {
            f.name == g.name && f.exported == g.exported && f.value.shape() == g.value.shape()
        })
}

/// Convert a non-numeric `expected` into `actual`'s type
///
/// The bytes-to-text direction is not handled here: `equal_values`
/// compares that pair in byte space directly.
fn convert(expected: &Value, actual: &Value) -> Value {
    match (expected, actual) {
        (Value::Text(t), Value::Text(u)) => Value::Text(Text {
            value: t.value.clone(),
            type_name: u.type_name.clone(),
        }),
        (Value::Text(t), Value::Bytes(_)) => Value::Bytes(Some(t.value.clone().into_bytes())),
        (Value::Composite(c), Value::Composite(target)) => Value::Composite(Composite {
            type_name: target.type_name.clone(),
            fields: c.fields.clone(),
        }),
        _ => expected.clone(),
    }
}
