//! Structural comparison engine for test assertions
//!
//! Given values produced by a test and the expected fixtures, this crate
//! decides equality, emptiness, nil-ness, numeric-aware equality,
//! exported-field-only copies, and multiset list differences. Every
//! operation is a pure, total function over `deepcheck_value::Value`; the
//! assertion layer consuming these results owns message formatting and
//! failure signaling.

mod classify;
mod copy;
mod diff;
mod equality;

pub use classify::{is_empty, is_nil};
pub use copy::copy_exported;
pub use diff::{diff_lists, is_list, ListDiff, ShapeError};
pub use equality::{equal, equal_values};
