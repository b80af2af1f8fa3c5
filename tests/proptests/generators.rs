//! Arbitrary operand generators shared by the property tests

use quickcheck::{Arbitrary, Gen};
use shameless_bignum::BigInteger;

/// Longest magnitude generated, in decimal digits
const MAX_DIGITS: usize = 60;

/// Canonical decimal text: no superfluous leading zeros, never `-0`
#[derive(Clone, Debug)]
pub struct Decimal(pub String);

impl Arbitrary for Decimal {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % MAX_DIGITS + 1;

        let mut digits = String::with_capacity(len + 1);
        let first = if len == 1 {
            u8::arbitrary(g) % 10
        } else {
            u8::arbitrary(g) % 9 + 1
        };
        digits.push(char::from(b'0' + first));
        for _ in 1..len {
            digits.push(char::from(b'0' + u8::arbitrary(g) % 10));
        }

        if digits != "0" && bool::arbitrary(g) {
            digits.insert(0, '-');
        }
        Decimal(digits)
    }
}

/// A signed operand spanning anything from one limb to several
#[derive(Clone, Debug)]
pub struct Big(pub BigInteger);

impl Arbitrary for Big {
    fn arbitrary(g: &mut Gen) -> Self {
        // Mix in native values so small and limb-boundary cases show up often
        if u8::arbitrary(g) % 4 == 0 {
            return Big(BigInteger::from(i64::arbitrary(g)));
        }
        let Decimal(text) = Decimal::arbitrary(g);
        Big(text.parse().expect("generated text is canonical decimal"))
    }
}
