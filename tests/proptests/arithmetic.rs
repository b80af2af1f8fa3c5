//! Property tests for arithmetic laws and agreement with native integers

use std::cmp::Ordering;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use shameless_bignum::{BigIntError, BigInteger};

use crate::generators::Big;

fn native(value: i128) -> BigInteger {
    BigInteger::from(value)
}

/// Addition, subtraction and multiplication agree with i128 on i64 operands
#[quickcheck]
fn prop_matches_native_ring_operations(a: i64, b: i64) -> bool {
    let (x, y) = (BigInteger::from(a), BigInteger::from(b));
    let (a, b) = (i128::from(a), i128::from(b));

    &x + &y == native(a + b) && &x - &y == native(a - b) && &x * &y == native(a * b)
}

/// Truncating quotient and remainder agree with i128 `/` and `%`
#[quickcheck]
fn prop_matches_native_division(a: i64, b: i64) -> TestResult {
    if b == 0 {
        return TestResult::discard();
    }
    let (x, y) = (BigInteger::from(a), BigInteger::from(b));
    let (a, b) = (i128::from(a), i128::from(b));

    TestResult::from_bool(x.div_rem(&y) == Ok((native(a / b), native(a % b))))
}

/// Ordering agrees with i64 ordering
#[quickcheck]
fn prop_matches_native_ordering(a: i64, b: i64) -> bool {
    BigInteger::from(a).cmp(&BigInteger::from(b)) == a.cmp(&b)
}

#[quickcheck]
fn prop_identities(a: Big) -> bool {
    let Big(a) = a;
    &a + &BigInteger::zero() == a
        && &a * &BigInteger::one() == a
        && (&a - &a).is_zero()
        && (&a + &(-&a)).is_zero()
        && !(&a - &a).is_negative()
}

#[quickcheck]
fn prop_addition_commutes(a: Big, b: Big) -> bool {
    let (Big(a), Big(b)) = (a, b);
    &a + &b == &b + &a
}

#[quickcheck]
fn prop_multiplication_commutes(a: Big, b: Big) -> bool {
    let (Big(a), Big(b)) = (a, b);
    &a * &b == &b * &a
}

#[quickcheck]
fn prop_addition_associates(a: Big, b: Big, c: Big) -> bool {
    let (Big(a), Big(b), Big(c)) = (a, b, c);
    &(&a + &b) + &c == &a + &(&b + &c)
}

#[quickcheck]
fn prop_multiplication_associates(a: Big, b: Big, c: Big) -> bool {
    let (Big(a), Big(b), Big(c)) = (a, b, c);
    &(&a * &b) * &c == &a * &(&b * &c)
}

#[quickcheck]
fn prop_multiplication_distributes(a: Big, b: Big, c: Big) -> bool {
    let (Big(a), Big(b), Big(c)) = (a, b, c);
    &a * &(&b + &c) == &(&a * &b) + &(&a * &c)
}

/// Subtraction is addition of the negation, for every sign combination
#[quickcheck]
fn prop_subtraction_adds_negation(a: Big, b: Big) -> bool {
    let (Big(a), Big(b)) = (a, b);
    &a - &b == &a + &(-&b) && &(&a - &b) + &b == a
}

/// Dividing an exact multiple gives the factor back
#[quickcheck]
fn prop_exact_division(a: Big, b: Big) -> TestResult {
    let (Big(a), Big(b)) = (a, b);
    if b.is_zero() {
        return TestResult::discard();
    }
    let product = &a * &b;
    let Ok(quotient) = product.checked_div(&b) else {
        return TestResult::failed();
    };
    TestResult::from_bool(quotient == a && &quotient * &b == product)
}

/// Quotient and remainder rebuild the dividend, with `|r| < |b|` and `r`
/// taking the dividend's sign
#[quickcheck]
fn prop_div_rem_reconstructs(a: Big, b: Big) -> TestResult {
    let (Big(a), Big(b)) = (a, b);
    if b.is_zero() {
        return TestResult::discard();
    }
    let Ok((q, r)) = a.div_rem(&b) else {
        return TestResult::failed();
    };

    let rebuilt = &(&q * &b) + &r == a;
    let bounded = r.abs() < b.abs();
    let signed = r.is_zero() || r.is_negative() == a.is_negative();
    let quotient_sign = q.is_zero() || q.is_negative() == (a.is_negative() != b.is_negative());
    TestResult::from_bool(rebuilt && bounded && signed && quotient_sign)
}

#[quickcheck]
fn prop_division_by_zero_fails(a: Big) -> bool {
    let Big(a) = a;
    a.div_rem(&BigInteger::zero()) == Err(BigIntError::DivisionByZero)
}

/// `a < b` exactly when `a - b` is negative
#[quickcheck]
fn prop_ordering_follows_difference(a: Big, b: Big) -> bool {
    let (Big(a), Big(b)) = (a, b);
    let difference = &a - &b;
    let expected = if difference.is_zero() {
        Ordering::Equal
    } else if difference.is_negative() {
        Ordering::Less
    } else {
        Ordering::Greater
    };
    a.cmp(&b) == expected && (a == b) == (expected == Ordering::Equal)
}
