//! The three-tier comparison protocol across adapter kinds.

use synth_testhelpers::test;
use synth_value::{Adaptable, Adapter, Capability, Value};

fn sample() -> Vec<Value<'static>> {
    vec![
        Value::from(0u8),
        Value::from(-3i64),
        Value::from(2.5f32),
        Value::from(7.0f64),
        Value::from(true),
        Value::from('q'),
        Value::from("apple"),
        Value::from(String::from("10")),
        Value::NONE,
        Value::from(std::sync::Arc::<[i32]>::from(vec![1, 2])),
    ]
}

#[test]
fn equal_is_reflexive_for_every_kind() {
    for value in sample() {
        assert!(value.equal(&value), "{value:?} is not equal to itself");
        assert!(!value.less(&value), "{value:?} is less than itself");
    }
}

#[test]
fn equal_is_symmetric() {
    let values = sample();
    for a in &values {
        for b in &values {
            assert_eq!(a.equal(b), b.equal(a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn less_never_holds_both_ways() {
    let values = sample();
    for a in &values {
        for b in &values {
            assert!(!(a.less(b) && b.less(a)), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn integer_and_float_meet_in_the_numeric_class() {
    let three = Value::from(3i32);
    let three_float = Value::from(3.0f64);
    assert_ne!(three.type_identity(), three_float.type_identity());
    assert_eq!(three.capability(), Capability::Numeric);
    assert!(three.equal(&three_float));
    assert!(three_float.equal(&three));
    assert!(!three.less(&three_float));
    assert!(!three_float.less(&three));
}

#[test]
fn unsigned_and_signed_order_numerically() {
    assert!(Value::from(-1i8).less(&Value::from(0u64)));
    assert!(!Value::from(u64::MAX).less(&Value::from(-1i32)));
}

#[test]
fn unrelated_kinds_are_never_equal() {
    assert!(!Value::from(1i32).equal(&Value::from("1")));
    assert!(!Value::from(true).equal(&Value::from(1u8)));
    assert!(!Value::from('a').equal(&Value::from("a")));
    assert!(!Value::NONE.equal(&Value::from("")));
}

#[test]
fn unrelated_kinds_order_by_rendering() {
    // "100" < "20" as text
    assert!(Value::from(100i32).less(&Value::from("20")));
    assert!(!Value::from("20").less(&Value::from(100i32)));
    // "false" < "true"
    assert!(Value::from(false).less(&Value::from("true")));
    assert!(Value::NONE.less(&Value::from('a')));
}

#[test]
fn scalar_kinds_compare_natively() {
    assert!(Value::from(false).less(&Value::from(true)));
    assert!(Value::from('a').less(&Value::from('b')));
    assert!(Value::from("Zebra").less(&Value::from("apple")));
    assert!(Value::from("same").equal(&Value::from(String::from("same"))));
    let owned = String::from("same");
    assert!(Value::of(&owned).equal(&Value::of("same")));
}

#[test]
fn options_adapt_through_their_contents() {
    let present = Some(4u32);
    let missing: Option<u32> = None;
    assert!(present.adapt().equal(&Value::from(4.0f32)));
    assert!(missing.adapt().is_none());
    assert!(missing.adapt().equal(&Value::NONE));
}

#[test]
fn partial_ord_follows_the_protocol() {
    let one = Value::from(1u8);
    let two = Value::from(2.0f64);
    assert!(one < two);
    assert!(two > one);
    assert!(Value::from(2i16) == two);
    assert!(Value::from(f64::NAN).partial_cmp(&Value::from(f32::NAN)).is_none());
}
