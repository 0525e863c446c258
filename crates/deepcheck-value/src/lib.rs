//! Runtime value model for the deepcheck comparison engine
//!
//! This crate provides the closed, tagged value model the engine inspects:
//! `Value` and its `Shape`, kind-tagged numbers, named composites with
//! visibility-tagged fields, and the nil-able reference-backed shapes.

mod number;
mod value;

pub use number::{ComplexKind, FloatKind, IntKind, Number, UintKind};
pub use value::{Channel, Composite, Field, Sequence, Shape, Text, Value};
