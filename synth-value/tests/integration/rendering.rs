//! Text renderings, including sink options.

use std::sync::Arc;

use synth_testhelpers::test;
use synth_value::{Adaptable, Adapter, Sink, SinkOptions, Value};

fn render_with(value: &Value<'_>, options: SinkOptions) -> String {
    let mut out = String::new();
    value
        .to_text(&mut Sink::with_options(&mut out, options))
        .unwrap();
    out
}

#[test]
fn numbers_render_naturally() {
    insta::assert_snapshot!(Value::from(42u32), @"42");
    insta::assert_snapshot!(Value::from(-17i16), @"-17");
    insta::assert_snapshot!(Value::from(3.0f64), @"3");
    insta::assert_snapshot!(Value::from(0.125f32), @"0.125");
}

#[test]
fn hex_mode_truncates_floats() {
    let hex = SinkOptions::hex();
    assert_eq!(render_with(&Value::from(255.9f64), hex), "ff");
    assert_eq!(render_with(&Value::from(48879u32), hex), "beef");
    assert_eq!(render_with(&Value::from(-2i32), hex), "fffffffe");
    insta::assert_snapshot!(format!("{:x}", Value::from(4096i64)), @"1000");
}

#[test]
fn precision_applies_to_fractions() {
    let options = SinkOptions::default().with_precision(3);
    assert_eq!(render_with(&Value::from(2.0f64 / 3.0), options), "0.667");
    assert_eq!(render_with(&Value::from(8.0f32), options), "8");
    insta::assert_snapshot!(format!("{:.1}", Value::from(9.87f64)), @"9.9");
}

#[test]
fn scalars_render_verbatim() {
    insta::assert_snapshot!(Value::from(true), @"true");
    insta::assert_snapshot!(Value::from('λ'), @"λ");
    insta::assert_snapshot!(Value::from("a b  c"), @"a b  c");
    assert_eq!(Value::NONE.render(), "");
}

#[test]
fn sequences_join_with_commas() {
    let flat = [1.5f64, 2.0, -3.25];
    insta::assert_snapshot!(Value::from(&flat), @"1.5,2,-3.25");

    let nested = vec![vec![1, 2], vec![], vec![3]];
    insta::assert_snapshot!(nested.adapt(), @"1,2,,3");

    let shared: Arc<[&str]> = Arc::from(vec!["x", "y"]);
    insta::assert_snapshot!(shared.adapt(), @"x,y");
}

#[test]
fn debug_shows_structure() {
    let words = ["one", "two"];
    insta::assert_debug_snapshot!(Value::from(&words), @r#"
    [
        Text(
            "one",
        ),
        Text(
            "two",
        ),
    ]
    "#);
}
