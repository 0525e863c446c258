//! Exported-field deep copies
//!
//! Walks a value and rebuilds it with only exported composite fields
//! populated. The input is never mutated; every shape is preserved,
//! including sequence lengths and map key sets.

use deepcheck_value::{Composite, Field, Sequence, Value};

use crate::classify::is_nil;

/// Produce a shape-preserving deep copy retaining only exported fields
///
/// Composite fields that are non-exported or nil stay at their zero value
/// in the copy. Sequences keep their length, with nil elements left
/// zeroed at the same index. Map keys are never filtered; only the values
/// are copied. Nil inputs and shapes without a field-visibility concept
/// come back unchanged.
pub fn copy_exported(value: &Value) -> Value {
    if is_nil(value) {
        return value.clone();
    }

    match value {
        Value::Composite(c) => {
            let fields = c
                .fields
                .iter()
                .map(|f| {
                    let copied = if f.exported && !is_nil(&f.value) {
                        copy_exported(&f.value)
                    } else {
                        f.value.zero_like()
                    };
                    Field {
                        name: f.name.clone(),
                        exported: f.exported,
                        value: copied,
                    }
                })
                .collect();
            Value::Composite(Composite {
                type_name: c.type_name.clone(),
                fields,
            })
        }
        Value::Reference(Some(inner)) => Value::Reference(Some(Box::new(copy_exported(inner)))),
        Value::Sequence(Sequence::Array(items)) => {
            Value::Sequence(Sequence::Array(copy_elements(items)))
        }
        Value::Sequence(Sequence::List(Some(items))) => {
            Value::Sequence(Sequence::List(Some(copy_elements(items))))
        }
        Value::Map(Some(entries)) => Value::Map(Some(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), copy_exported(v)))
                .collect(),
        )),
        _ => value.clone(),
    }
}

/// Copy sequence elements index-aligned, leaving nil elements zeroed
fn copy_elements(items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .map(|e| {
            if is_nil(e) {
                e.zero_like()
            } else {
                copy_exported(e)
            }
        })
        .collect()
}
