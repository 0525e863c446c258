//! Multiset difference over ordered sequences
//!
//! Order is ignored and every duplicate instance counts separately: two
//! copies of an element in one list consume two matching elements of the
//! other. O(|A|*|B|) pairwise scan, which is fine for test fixtures.

use deepcheck_value::{Sequence, Shape, Value};
use thiserror::Error;
use tracing::debug;

use crate::equality::equal;

/// Error for sequence-only operations handed a non-sequence value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("value has unsupported shape {shape}, expecting an array or list")]
    NotAList { shape: Shape },
}

/// Elements present in only one of two lists, in original order
#[derive(Debug, Clone, Default)]
pub struct ListDiff {
    pub extra_a: Vec<Value>,
    pub extra_b: Vec<Value>,
}

impl ListDiff {
    /// True when the two lists matched as multisets
    pub fn is_match(&self) -> bool {
        self.extra_a.is_empty() && self.extra_b.is_empty()
    }
}

/// Whether a value has sequence shape (array or list, nil or not)
pub fn is_list(value: &Value) -> bool {
    matches!(value, Value::Sequence(_))
}

/// Multiset difference between two sequences
///
/// Each element of `list_a` consumes the first not-yet-consumed element of
/// `list_b` it equals; unconsumed elements on either side are reported as
/// extra. Callers normally validate with `is_list` first and turn a
/// non-sequence argument into their own failure report.
pub fn diff_lists(list_a: &Value, list_b: &Value) -> Result<ListDiff, ShapeError> {
    let a = sequence_elements(list_a)?;
    let b = sequence_elements(list_b)?;

    let mut consumed = vec![false; b.len()];
    let mut extra_a = Vec::new();
    for element in a {
        let mut found = false;
        for (j, candidate) in b.iter().enumerate() {
            if consumed[j] {
                continue;
            }
            if equal(candidate, element) {
                consumed[j] = true;
                found = true;
                break;
            }
        }
        if !found {
            extra_a.push(element.clone());
        }
    }

    let extra_b: Vec<Value> = b
        .iter()
        .zip(&consumed)
        .filter(|(_, used)| !**used)
        .map(|(v, _)| v.clone())
        .collect();

    debug!(
        extra_a = extra_a.len(),
        extra_b = extra_b.len(),
        "list diff complete"
    );
    Ok(ListDiff { extra_a, extra_b })
}

/// View a sequence-shaped value as a slice of elements; nil lists are empty
fn sequence_elements(value: &Value) -> Result<&[Value], ShapeError> {
    match value {
        Value::Sequence(Sequence::Array(items)) => Ok(items),
        Value::Sequence(Sequence::List(Some(items))) => Ok(items),
        Value::Sequence(Sequence::List(None)) => Ok(&[]),
        other => Err(ShapeError::NotAList {
            shape: other.shape(),
        }),
    }
}
