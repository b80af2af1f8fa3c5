//! Property tests for decimal text encoding

use std::cmp::Ordering;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use shameless_bignum::{BigIntError, BigInteger};

use crate::generators::{Big, Decimal};

/// Numeric order of two canonical decimal strings, worked out on the text
fn text_order(a: &str, b: &str) -> Ordering {
    let magnitude_order = |x: &str, y: &str| x.len().cmp(&y.len()).then_with(|| x.cmp(y));
    match (a.strip_prefix('-'), b.strip_prefix('-')) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => magnitude_order(a, b),
        (Some(x), Some(y)) => magnitude_order(y, x),
    }
}

/// Canonical text survives a parse/format round trip unchanged
#[quickcheck]
fn prop_canonical_round_trip(text: Decimal) -> bool {
    let Decimal(text) = text;
    text.parse::<BigInteger>()
        .is_ok_and(|value| value.to_string() == text)
}

#[quickcheck]
fn prop_native_formatting(a: i64, b: i128) -> bool {
    BigInteger::from(a).to_string() == a.to_string()
        && BigInteger::from(b).to_string() == b.to_string()
}

/// Extra leading zeros never change the parsed value
#[quickcheck]
fn prop_leading_zeros_ignored(text: Decimal, zeros: u8) -> bool {
    let Decimal(text) = text;
    let padding = "0".repeat(usize::from(zeros % 24));
    let padded = match text.strip_prefix('-') {
        Some(digits) => format!("-{padding}{digits}"),
        None => format!("{padding}{text}"),
    };
    padded.parse::<BigInteger>() == text.parse::<BigInteger>()
}

/// Any non-digit character spliced into the digits is rejected
#[quickcheck]
fn prop_non_digit_rejected(text: Decimal, position: usize, inserted: char) -> TestResult {
    let Decimal(mut text) = text;
    let position = position % (text.len() + 1);
    if inserted.is_ascii_digit() || (inserted == '-' && position == 0) {
        return TestResult::discard();
    }
    text.insert(position, inserted);

    TestResult::from_bool(matches!(
        text.parse::<BigInteger>(),
        Err(BigIntError::InvalidFormat(_))
    ))
}

/// Ordering of values agrees with numeric order of their text
#[quickcheck]
fn prop_ordering_matches_text(a: Decimal, b: Decimal) -> bool {
    let (Decimal(a), Decimal(b)) = (a, b);
    let (Ok(x), Ok(y)) = (a.parse::<BigInteger>(), b.parse::<BigInteger>()) else {
        return false;
    };
    x.cmp(&y) == text_order(&a, &b)
}

#[quickcheck]
fn prop_serde_json_round_trip(value: Big) -> bool {
    let Big(value) = value;
    let Ok(json) = serde_json::to_string(&value) else {
        return false;
    };
    json == format!("\"{value}\"")
        && serde_json::from_str::<BigInteger>(&json).is_ok_and(|back| back == value)
}

#[quickcheck]
fn prop_digit_count_matches_text(value: Big) -> bool {
    let Big(value) = value;
    value.digit_count() == value.to_string().trim_start_matches('-').len()
}
