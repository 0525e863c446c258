//! Cross-operation properties of the comparison engine
//!
//! Unit tests in each module pin the individual contracts; these tests
//! exercise the properties that span operations: reflexivity and symmetry
//! of equality, widening determinism, copier idempotence, and the
//! nil/empty distinction.

use deepcheck_compare::{copy_exported, diff_lists, equal, equal_values, is_empty, is_nil};
use deepcheck_value::{Composite, Value};

/// A spread of values covering every shape, except bytes (whose equality
/// carries its own asymmetric rule) and non-nil callables (which are never
/// equal, not even to themselves)
fn sample_values() -> Vec<Value> {
    vec![
        Value::Nil,
        Value::from(true),
        Value::from(-3i16),
        Value::from(42u64),
        Value::from(1.5f32),
        Value::text("kitchen"),
        Value::named_text("EntityId", "light.kitchen"),
        Value::array(vec![Value::from(1i32), Value::from(2i32)]),
        Value::list(vec![Value::text("a")]),
        Value::nil_list(),
        Value::map([("state", Value::text("on"))]),
        Value::nil_map(),
        Value::reference(Value::from(7i32)),
        Value::nil_reference(),
        Composite::new("State")
            .with_field("EntityId", "light.kitchen")
            .with_field("State", "on")
            .with_private_field("hash", 123i64)
            .into(),
        Value::nil_callable(),
        Value::channel(1, 0),
        Value::nil_channel(),
    ]
}

#[test]
fn test_equal_is_reflexive_and_symmetric() {
    let values = sample_values();
    for v in &values {
        assert!(equal(v, v), "value not equal to itself: {:?}", v);
    }
    for x in &values {
        for y in &values {
            assert_eq!(equal(x, y), equal(y, x), "asymmetry between {:?} and {:?}", x, y);
        }
    }
}

#[test]
fn test_distinct_samples_are_unequal() {
    let values = sample_values();
    for (i, x) in values.iter().enumerate() {
        for (j, y) in values.iter().enumerate() {
            if i != j {
                assert!(!equal(x, y), "distinct fixtures compare equal: {:?} vs {:?}", x, y);
            }
        }
    }
}

#[test]
fn test_equal_values_widening_is_direction_independent() {
    let pairs = [
        (Value::from(5i8), Value::from(5i64)),
        (Value::from(5u8), Value::from(5i64)),
        (Value::from(200u8), Value::from(200i32)),
        (Value::from(7i32), Value::from(7.0f64)),
        (Value::from(-1i8), Value::from(255u8)),
    ];
    for (a, b) in &pairs {
        assert!(equal_values(a, b), "expected match: {:?} vs {:?}", a, b);
        assert!(equal_values(b, a), "expected match: {:?} vs {:?}", b, a);
    }
}

#[test]
fn test_equal_values_rejects_overflowed_conversions() {
    // 300i16 wraps to 44 as i8; neither direction may call these equal
    assert!(!equal_values(&Value::from(300i16), &Value::from(44i8)));
    assert!(!equal_values(&Value::from(44i8), &Value::from(300i16)));
    // 256 truncates to 0 as u8
    assert!(!equal_values(&Value::from(256i32), &Value::from(0u8)));
    assert!(!equal_values(&Value::from(0u8), &Value::from(256i32)));
}

#[test]
fn test_copy_exported_is_idempotent_across_shapes() {
    let nested: Value = Composite::new("Zone")
        .with_field("Name", "upstairs")
        .with_field(
            "Lights",
            Value::list(vec![Composite::new("Light")
                .with_field("EntityId", "light.landing")
                .with_private_field("driver_handle", Value::callable("driver"))
                .into()]),
        )
        .with_private_field("revision", 9i64)
        .into();
    for v in sample_values().into_iter().chain([nested]) {
        let once = copy_exported(&v);
        let twice = copy_exported(&once);
        assert!(equal(&once, &twice), "copy not idempotent for {:?}", v);
    }
}

#[test]
fn test_copy_exported_strips_only_visibility() {
    let original: Value = Composite::new("Account")
        .with_field("A", 1i64)
        .with_private_field("b", 2i64)
        .into();
    let Value::Composite(copied) = copy_exported(&original) else {
        panic!("expected composite shape");
    };
    assert!(equal(&copied.field("A").unwrap().value, &Value::from(1i64)));
    assert!(equal(&copied.field("b").unwrap().value, &Value::from(0i64)));
}

#[test]
fn test_nil_and_empty_diverge_on_references() {
    // a non-nil reference to an empty referent: empty but not nil
    let r = Value::reference(Value::text(""));
    assert!(is_empty(&r));
    assert!(!is_nil(&r));

    // a non-nil reference to a composite holding a nil field: is_nil
    // inspects only the outer reference, is_empty recurses
    let holder = Value::reference(
        Composite::new("Holder")
            .with_field("Items", Value::nil_list())
            .into(),
    );
    assert!(!is_nil(&holder));
    assert!(is_empty(&holder));
}

#[test]
fn test_diff_lists_agrees_with_equal_on_matching_lists() {
    let a = Value::list(vec![
        Value::text("one"),
        Value::from(2i32),
        Value::bytes(vec![3u8]),
    ]);
    let diff = diff_lists(&a, &a).expect("sequence fixtures");
    assert!(diff.is_match());
}

#[test]
fn test_serde_round_trip_preserves_equality() {
    for v in sample_values() {
        let json = serde_json::to_string(&v).expect("serialize");
        let back: Value = serde_json::from_str(&json).expect("deserialize");
        assert!(equal(&v, &back), "round trip changed {:?}", v);
    }
}
