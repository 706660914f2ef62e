//! Sequence adapters: construction, iteration and element-wise comparison.

use std::sync::Arc;
use std::thread;

use synth_testhelpers::test;
use synth_value::{Adaptable, Adapter, Array, FixedArray, Ownership, SharedArray, Value};

static_assertions::assert_impl_all!(Value<'static>: Send, Sync);
static_assertions::assert_impl_all!(SharedArray<i32>: Send, Sync);

#[test]
fn fixed_array_length_drives_truthiness_and_number() {
    let empty: [u8; 0] = [];
    let empty = FixedArray::new(&empty).into_value();
    assert!(!empty.to_boolean());
    assert_eq!(empty.to_number(), 0.0);
    assert_eq!(empty.iterate().count(), 0);

    let three = [40i32, 50, 60];
    let three = FixedArray::new(&three).into_value();
    assert!(three.to_boolean());
    assert_eq!(three.to_number(), 3.0);
    let elements: Vec<f64> = three.iterate().map(|v| v.to_number()).collect();
    assert_eq!(elements, vec![40.0, 50.0, 60.0]);
}

#[test]
fn different_lengths_are_not_equal() {
    let long = [1, 2, 3];
    let short = [1, 2];
    let long = Value::from(&long);
    let short = Value::from(&short);
    assert!(!long.equal(&short));
    assert!(!short.equal(&long));
}

#[test]
fn prefix_orders_first() {
    let long = vec![1, 2, 3];
    let short = vec![1, 2];
    let long = long.adapt();
    let short = short.adapt();
    assert!(short.less(&long));
    assert!(!long.less(&short));
}

#[test]
fn first_mismatch_decides_order() {
    let a = [1, 9, 9];
    let b = [2, 0];
    assert!(Value::from(&a).less(&Value::from(&b)));
    assert!(!Value::from(&b).less(&Value::from(&a)));
}

#[test]
fn sequences_of_different_kinds_compare_element_wise() {
    let ints = [1i32, 2, 3];
    let floats = vec![1.0f64, 2.0, 3.0];
    let fixed = Value::from(&ints);
    let shared = SharedArray::new(Arc::<[f64]>::from(floats)).into_value();
    assert_ne!(fixed.type_identity(), shared.type_identity());
    assert!(fixed.equal(&shared));
    assert!(shared.equal(&fixed));
}

#[test]
fn variable_length_uses_runtime_length() {
    let buffer = [5u16, 6, 7, 8];
    let head = Array::with_length(&buffer, 2).into_value();
    assert_eq!(head.to_number(), 2.0);
    assert!(head.equal(&Value::from(&[5u16, 6])));
    let none = Array::with_length(&buffer, 0).into_value();
    assert!(!none.to_boolean());
}

#[test]
fn shared_buffer_outlives_its_creator() {
    let creator: Arc<[i32]> = Arc::from(vec![1, 2, 3]);
    let value = SharedArray::new(Arc::clone(&creator)).into_value();
    let copy = value.clone();
    drop(creator);
    drop(value);

    assert_eq!(
        copy.as_sequence().map(|s| s.ownership()),
        Some(Ownership::Shared)
    );
    assert!(copy.to_boolean());
    assert_eq!(copy.render(), "1,2,3");
}

#[test]
fn shared_values_are_static() {
    fn detach(buffer: &Arc<[u8]>) -> Value<'static> {
        SharedArray::new(Arc::clone(buffer)).into_value()
    }

    let value = {
        let buffer: Arc<[u8]> = Arc::from(&b"ab"[..]);
        detach(&buffer)
    };
    assert_eq!(value.render(), "97,98");
}

#[test]
fn iteration_is_restartable() {
    let words = vec!["b", "a", "c"];
    let value = words.adapt();
    let first: Vec<String> = value.iterate().map(|v| v.render()).collect();
    let second: Vec<String> = (&value).into_iter().map(|v| v.render()).collect();
    assert_eq!(first, ["b", "a", "c"]);
    assert_eq!(first, second);
}

#[test]
fn nested_sequences_compare_recursively() {
    let left = vec![vec![1, 2], vec![3]];
    let right = vec![vec![1, 2], vec![4]];
    assert!(left.adapt().less(&right.adapt()));
    assert!(!left.adapt().equal(&right.adapt()));
    assert!(left.adapt().equal(&left.adapt()));
}

#[test]
fn shared_buffer_is_usable_across_threads() {
    let buffer: Arc<[i32]> = Arc::from(vec![4, 5, 6]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                let value = Value::from(buffer);
                let copy = value.clone();
                drop(value);
                copy.render()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "4,5,6");
    }
    assert_eq!(Arc::strong_count(&buffer), 1);
}

#[test]
fn borrowed_values_are_shared_read_only() {
    let buffer = [1u8, 2, 3];
    let value = Value::from(&buffer);
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(value.render(), "1,2,3");
                assert!(value.equal(&Value::from(&[1.0f64, 2.0, 3.0])));
            });
        }
    });
}
