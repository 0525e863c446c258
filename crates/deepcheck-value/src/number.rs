//! Numeric values with explicit representation kinds
//!
//! Every number carries the kind it was produced with (width and family),
//! so cross-representation comparison can widen deterministically instead
//! of guessing. Conversion follows the usual machine rules: integer
//! conversions wrap, float-to-int truncates toward zero, complex converts
//! only within the complex family.

use serde::{Deserialize, Serialize};

/// Signed integer representation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
}

/// Unsigned integer representation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UintKind {
    U8,
    U16,
    U32,
    U64,
}

/// Floating-point representation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatKind {
    F32,
    F64,
}

/// Complex representation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexKind {
    C64,
    C128,
}

impl IntKind {
    /// Size of the representation in bytes
    pub fn size(&self) -> usize {
        match self {
            IntKind::I8 => 1,
            IntKind::I16 => 2,
            IntKind::I32 => 4,
            IntKind::I64 => 8,
        }
    }
}

impl UintKind {
    /// Size of the representation in bytes
    pub fn size(&self) -> usize {
        match self {
            UintKind::U8 => 1,
            UintKind::U16 => 2,
            UintKind::U32 => 4,
            UintKind::U64 => 8,
        }
    }
}

impl FloatKind {
    /// Size of the representation in bytes
    pub fn size(&self) -> usize {
        match self {
            FloatKind::F32 => 4,
            FloatKind::F64 => 8,
        }
    }
}

impl ComplexKind {
    /// Size of the representation in bytes (both components)
    pub fn size(&self) -> usize {
        match self {
            ComplexKind::C64 => 8,
            ComplexKind::C128 => 16,
        }
    }
}

/// A numeric value tagged with its representation kind
///
/// Two numbers are structurally equal only when both the kind and the value
/// match; `Number::convert_to` is how the comparison engine crosses kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Signed integer, stored widened to i64
    Int(i64, IntKind),
    /// Unsigned integer, stored widened to u64
    Uint(u64, UintKind),
    /// Floating point, stored widened to f64
    Float(f64, FloatKind),
    /// Complex number (re, im), stored widened to f64 components
    Complex(f64, f64, ComplexKind),
}

impl Number {
    /// Size in bytes of this number's representation kind
    pub fn size(&self) -> usize {
        match self {
            Number::Int(_, k) => k.size(),
            Number::Uint(_, k) => k.size(),
            Number::Float(_, k) => k.size(),
            Number::Complex(_, _, k) => k.size(),
        }
    }

    /// The zero value of this number's exact kind
    pub fn zero_like(&self) -> Number {
        match self {
            Number::Int(_, k) => Number::Int(0, *k),
            Number::Uint(_, k) => Number::Uint(0, *k),
            Number::Float(_, k) => Number::Float(0.0, *k),
            Number::Complex(_, _, k) => Number::Complex(0.0, 0.0, *k),
        }
    }

    /// True if both numbers are in the complex family, or neither is
    ///
    /// Complex converts only to complex; every other numeric pair
    /// interconverts.
    pub fn convertible_to(&self, target: &Number) -> bool {
        matches!(self, Number::Complex(..)) == matches!(target, Number::Complex(..))
    }

    /// Convert this number into the representation kind of `target`
    ///
    /// Integer conversions wrap on overflow, exactly like a machine-level
    /// narrowing cast; this is what makes the widen-before-compare rule in
    /// the comparison engine a correctness requirement rather than a
    /// preference.
    pub fn convert_to(&self, target: &Number) -> Number {
        match target {
            Number::Int(_, k) => Number::Int(self.cast_int(*k), *k),
            Number::Uint(_, k) => Number::Uint(self.cast_uint(*k), *k),
            Number::Float(_, k) => Number::Float(self.cast_float(*k), *k),
            Number::Complex(_, _, k) => {
                let (re, im) = self.cast_complex(*k);
                Number::Complex(re, im, *k)
            }
        }
    }

    fn cast_int(&self, kind: IntKind) -> i64 {
        let wide = match self {
            Number::Int(v, _) => *v,
            Number::Uint(v, _) => *v as i64,
            Number::Float(v, _) => *v as i64,
            Number::Complex(re, _, _) => *re as i64,
        };
        match kind {
            IntKind::I8 => wide as i8 as i64,
            IntKind::I16 => wide as i16 as i64,
            IntKind::I32 => wide as i32 as i64,
            IntKind::I64 => wide,
        }
    }

    fn cast_uint(&self, kind: UintKind) -> u64 {
        let wide = match self {
            Number::Int(v, _) => *v as u64,
            Number::Uint(v, _) => *v,
            Number::Float(v, _) => *v as u64,
            Number::Complex(re, _, _) => *re as u64,
        };
        match kind {
            UintKind::U8 => wide as u8 as u64,
            UintKind::U16 => wide as u16 as u64,
            UintKind::U32 => wide as u32 as u64,
            UintKind::U64 => wide,
        }
    }

    fn cast_float(&self, kind: FloatKind) -> f64 {
        let wide = match self {
            Number::Int(v, _) => *v as f64,
            Number::Uint(v, _) => *v as f64,
            Number::Float(v, _) => *v,
            Number::Complex(re, _, _) => *re,
        };
        match kind {
            FloatKind::F32 => wide as f32 as f64,
            FloatKind::F64 => wide,
        }
    }

    fn cast_complex(&self, kind: ComplexKind) -> (f64, f64) {
        let (re, im) = match self {
            Number::Int(v, _) => (*v as f64, 0.0),
            Number::Uint(v, _) => (*v as f64, 0.0),
            Number::Float(v, _) => (*v, 0.0),
            Number::Complex(re, im, _) => (*re, *im),
        };
        match kind {
            ComplexKind::C64 => (re as f32 as f64, im as f32 as f64),
            ComplexKind::C128 => (re, im),
        }
    }
}

impl From<i8> for Number {
    fn from(v: i8) -> Self {
        Number::Int(v as i64, IntKind::I8)
    }
}

impl From<i16> for Number {
    fn from(v: i16) -> Self {
        Number::Int(v as i64, IntKind::I16)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v as i64, IntKind::I32)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v, IntKind::I64)
    }
}

impl From<u8> for Number {
    fn from(v: u8) -> Self {
        Number::Uint(v as u64, UintKind::U8)
    }
}

impl From<u16> for Number {
    fn from(v: u16) -> Self {
        Number::Uint(v as u64, UintKind::U16)
    }
}

impl From<u32> for Number {
    fn from(v: u32) -> Self {
        Number::Uint(v as u64, UintKind::U32)
    }
}

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        Number::Uint(v, UintKind::U64)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(v as f64, FloatKind::F32)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v, FloatKind::F64)
    }
}
