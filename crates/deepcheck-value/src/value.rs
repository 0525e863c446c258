//! The tagged runtime value model
//!
//! `Value` is a closed union over every shape the comparison engine knows
//! how to inspect. Reference-backed shapes (lists, maps, byte slices,
//! references, callables, channels) carry an `Option` so "holds no
//! referent" is representable independently of the untyped `Value::Nil`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Number;

/// The runtime category of a value
///
/// Comparison and copy behavior is selected by shape; the set is closed, so
/// every engine algorithm can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Nil,
    Bool,
    Number,
    Text,
    Bytes,
    Sequence,
    Map,
    Reference,
    Composite,
    Callable,
    Channel,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Nil => "nil",
            Shape::Bool => "bool",
            Shape::Number => "number",
            Shape::Text => "text",
            Shape::Bytes => "bytes",
            Shape::Sequence => "sequence",
            Shape::Map => "map",
            Shape::Reference => "reference",
            Shape::Composite => "composite",
            Shape::Callable => "callable",
            Shape::Channel => "channel",
        };
        write!(f, "{}", name)
    }
}

/// A text value, optionally tagged as a named string-derived type
///
/// A named text is a distinct type from the plain string it converts to:
/// structural equality requires matching tags, value-level equality does
/// not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub type_name: Option<String>,
}

/// An ordered sequence, either fixed (array) or reference-backed (list)
///
/// Only lists have a nil state; an array always exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Sequence {
    Array(Vec<Value>),
    List(Option<Vec<Value>>),
}

/// One field of a composite: name, visibility, current value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub exported: bool,
    pub value: Value,
}

/// A struct-like value: a named type with ordered, visibility-tagged fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Composite {
    pub type_name: String,
    pub fields: Vec<Field>,
}

impl Composite {
    /// Start a composite of the given type name with no fields
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append an exported field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            exported: true,
            value: value.into(),
        });
        self
    }

    /// Append a non-exported field
    pub fn with_private_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            exported: false,
            value: value.into(),
        });
        self
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A channel handle: identity plus how many elements are buffered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
    pub buffered: usize,
}

/// Any runtime datum the engine can inspect
///
/// Equality over `Value` is owned by the comparison engine (`equal` in
/// deepcheck-compare), which carries rules that a derived `PartialEq`
/// cannot express, such as two non-nil callables never being equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// The untyped absent value; distinct from any typed nil such as
    /// `Reference(None)`
    Nil,
    Bool(bool),
    Number(Number),
    Text(Text),
    /// Raw byte sequence; `None` is the nil slice, which is not the same
    /// value as `Some(vec![])`
    Bytes(Option<Vec<u8>>),
    Sequence(Sequence),
    /// Insertion-ordered associative structure with text keys
    Map(Option<IndexMap<String, Value>>),
    Reference(Option<Box<Value>>),
    Composite(Composite),
    /// Function handle named for diagnostics only; identity is not modeled
    Callable(Option<String>),
    Channel(Option<Channel>),
}

impl Value {
    /// The shape of this value
    pub fn shape(&self) -> Shape {
        match self {
            Value::Nil => Shape::Nil,
            Value::Bool(_) => Shape::Bool,
            Value::Number(_) => Shape::Number,
            Value::Text(_) => Shape::Text,
            Value::Bytes(_) => Shape::Bytes,
            Value::Sequence(_) => Shape::Sequence,
            Value::Map(_) => Shape::Map,
            Value::Reference(_) => Shape::Reference,
            Value::Composite(_) => Shape::Composite,
            Value::Callable(_) => Shape::Callable,
            Value::Channel(_) => Shape::Channel,
        }
    }

    /// The zero-initialized value of this value's exact type
    ///
    /// Reference-backed shapes zero to their nil state; arrays keep their
    /// length with every element zeroed; composites keep their full field
    /// skeleton, visibility flags included.
    pub fn zero_like(&self) -> Value {
        match self {
            Value::Nil => Value::Nil,
            Value::Bool(_) => Value::Bool(false),
            Value::Number(n) => Value::Number(n.zero_like()),
            Value::Text(t) => Value::Text(Text {
                value: String::new(),
                type_name: t.type_name.clone(),
            }),
            Value::Bytes(_) => Value::Bytes(None),
            Value::Sequence(Sequence::Array(items)) => {
                Value::Sequence(Sequence::Array(items.iter().map(Value::zero_like).collect()))
            }
            Value::Sequence(Sequence::List(_)) => Value::Sequence(Sequence::List(None)),
            Value::Map(_) => Value::Map(None),
            Value::Reference(_) => Value::Reference(None),
            Value::Composite(c) => Value::Composite(Composite {
                type_name: c.type_name.clone(),
                fields: c
                    .fields
                    .iter()
                    .map(|f| Field {
                        name: f.name.clone(),
                        exported: f.exported,
                        value: f.value.zero_like(),
                    })
                    .collect(),
            }),
            Value::Callable(_) => Value::Callable(None),
            Value::Channel(_) => Value::Channel(None),
        }
    }

    /// A plain text value
    pub fn text(s: impl Into<String>) -> Value {
        Value::Text(Text {
            value: s.into(),
            type_name: None,
        })
    }

    /// A text value of a named string-derived type
    pub fn named_text(type_name: impl Into<String>, s: impl Into<String>) -> Value {
        Value::Text(Text {
            value: s.into(),
            type_name: Some(type_name.into()),
        })
    }

    /// A non-nil byte sequence
    pub fn bytes(b: impl Into<Vec<u8>>) -> Value {
        Value::Bytes(Some(b.into()))
    }

    /// The nil byte sequence
    pub fn nil_bytes() -> Value {
        Value::Bytes(None)
    }

    /// A fixed-length array
    pub fn array(items: Vec<Value>) -> Value {
        Value::Sequence(Sequence::Array(items))
    }

    /// A non-nil ordered list
    pub fn list(items: Vec<Value>) -> Value {
        Value::Sequence(Sequence::List(Some(items)))
    }

    /// The nil list
    pub fn nil_list() -> Value {
        Value::Sequence(Sequence::List(None))
    }

    /// A non-nil map built from key/value pairs, preserving insertion order
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Value {
        Value::Map(Some(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// The nil map
    pub fn nil_map() -> Value {
        Value::Map(None)
    }

    /// A reference pointing at the given value
    pub fn reference(v: Value) -> Value {
        Value::Reference(Some(Box::new(v)))
    }

    /// A reference pointing at nothing
    pub fn nil_reference() -> Value {
        Value::Reference(None)
    }

    /// A non-nil callable with a diagnostic name
    pub fn callable(name: impl Into<String>) -> Value {
        Value::Callable(Some(name.into()))
    }

    /// The nil callable
    pub fn nil_callable() -> Value {
        Value::Callable(None)
    }

    /// A non-nil channel handle
    pub fn channel(id: u64, buffered: usize) -> Value {
        Value::Channel(Some(Channel { id, buffered }))
    }

    /// The nil channel
    pub fn nil_channel() -> Value {
        Value::Channel(None)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::text(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::text(v)
    }
}

impl From<Composite> for Value {
    fn from(v: Composite) -> Self {
        Value::Composite(v)
    }
}

macro_rules! value_from_numeric {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Number(Number::from(v))
                }
            }
        )*
    };
}

value_from_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_display() {
        assert_eq!(Value::Nil.shape().to_string(), "nil");
        assert_eq!(Value::from(1i32).shape().to_string(), "number");
        assert_eq!(Value::nil_list().shape().to_string(), "sequence");
        assert_eq!(Value::nil_channel().shape().to_string(), "channel");
    }

    #[test]
    fn test_zero_like_array_keeps_length() {
        let arr = Value::array(vec![Value::from(1i32), Value::from(2i32)]);
        let Value::Sequence(Sequence::Array(items)) = arr.zero_like() else {
            panic!("expected array shape");
        };
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_zero_like_composite_keeps_skeleton() {
        let c = Composite::new("Account")
            .with_field("Balance", 10i64)
            .with_private_field("secret", "x");
        let Value::Composite(zero) = Value::from(c).zero_like() else {
            panic!("expected composite shape");
        };
        assert_eq!(zero.type_name, "Account");
        assert_eq!(zero.fields.len(), 2);
        assert!(zero.fields[0].exported);
        assert!(!zero.fields[1].exported);
    }

    #[test]
    fn test_zero_like_reference_backed_shapes_are_nil() {
        assert!(matches!(
            Value::list(vec![Value::from(1i32)]).zero_like(),
            Value::Sequence(Sequence::List(None))
        ));
        assert!(matches!(Value::map([("a", Value::Nil)]).zero_like(), Value::Map(None)));
        assert!(matches!(Value::reference(Value::Nil).zero_like(), Value::Reference(None)));
        assert!(matches!(Value::bytes(vec![1u8]).zero_like(), Value::Bytes(None)));
    }

    #[test]
    fn test_composite_field_lookup() {
        let c = Composite::new("Point").with_field("X", 1i32).with_field("Y", 2i32);
        assert!(c.field("X").is_some());
        assert!(c.field("Z").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Value::map([
            ("name", Value::text("kitchen")),
            ("ids", Value::list(vec![Value::from(1u8), Value::from(2u8)])),
            ("raw", Value::bytes(vec![0u8, 1, 2])),
        ]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        // spot-check the structure survived
        let Value::Map(Some(entries)) = back else {
            panic!("expected map shape");
        };
        assert_eq!(entries.len(), 3);
        assert!(matches!(entries.get("raw"), Some(Value::Bytes(Some(b))) if b.len() == 3));
    }
}
