//! The conversion trait bundle seen from engine code.

use synth_testhelpers::{IPanic, test};
use synth_value::{ConversionError, DefaultTraits, Text, ValueTraits};

type Narrow = DefaultTraits<u8>;
type Wide = DefaultTraits<u16>;

#[test]
fn number_to_text() {
    assert_eq!(Narrow::to_text(&42), Ok(b"42".to_vec()));
    assert_eq!(DefaultTraits::<char>::to_text(&-7i64), Ok(vec!['-', '7']));
}

#[test]
fn text_to_number() -> Result<(), IPanic> {
    let parsed = Narrow::to_number("2.75")?;
    assert_eq!(parsed, 2.75);
    assert_eq!(Wide::to_number(&12u8)?, 12.0);
    Ok(())
}

#[test]
#[allow(clippy::approx_constant)]
fn text_with_fraction_to_number() -> Result<(), IPanic> {
    assert_eq!(Narrow::to_number("3.14")?, 3.14);
    assert_eq!(DefaultTraits::<char>::to_number("3.14")?, 3.14);
    Ok(())
}

#[test]
fn extraction_stops_at_the_first_invalid_character() -> Result<(), IPanic> {
    assert_eq!(Narrow::to_number("3.5cups")?, 3.5);
    let truncated: i32 = Narrow::to(&2.5f64)?;
    assert_eq!(truncated, 2);
    assert!(Narrow::to::<f64, str>("cups").is_err());
    Ok(())
}

#[test]
fn round_trip_through_text() -> Result<(), IPanic> {
    let value: u32 = Narrow::to(&1.0e3f64)?;
    assert_eq!(value, 1000);
    let flag: bool = Narrow::to("true and more")?;
    assert!(flag);
    Ok(())
}

#[test]
fn failed_conversion_names_both_types() {
    let err: ConversionError = Narrow::to::<i32, str>("forty-two").unwrap_err();
    assert!(err.source_type.is::<str>());
    assert!(err.destination_type.is::<i32>());
    insta::assert_snapshot!(err, @"could not convert value of type `str` to `i32`");
}

#[test]
fn text_that_does_not_fit_the_width_fails() {
    let err = Narrow::to_text(&'Ω').unwrap_err();
    assert!(err.source_type.is::<char>());
    assert!(err.destination_type.is::<Text<u8>>());
    assert_eq!(Wide::to_text(&'Ω'), Ok(vec![0x03a9]));
}

#[test]
fn literal_at_wide_width() {
    let expected: Text<u16> = "{{ name }}".encode_utf16().collect();
    assert_eq!(Wide::literal("{{ name }}"), expected);
    assert_eq!(DefaultTraits::<u32>::literal("%}"), vec![0x25, 0x7d]);
}

#[test]
fn width_conversion_is_mechanical() {
    let wide: Text<u16> = vec![0x41, 0x3a9];
    // the high byte is dropped, not transcoded
    assert_eq!(Wide::narrow(&wide), vec![0x41, 0xa9]);
    assert_eq!(Wide::widen(&[0xff]), vec![0x00ff]);
    assert_eq!(
        DefaultTraits::<char>::transcode::<u8, u16>(&wide),
        vec![0x41, 0xa9]
    );
}
