//! Addition, subtraction and multiplication operators for `BigInteger`

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Sub};

use super::BigInteger;
use super::magnitude::{self, Limb};

/// Adds two signed magnitudes
///
/// Mixed signs are resolved by comparing magnitudes up front and subtracting
/// the smaller from the larger, so no path ever re-dispatches through
/// negation.
fn add_signed(lhs_negative: bool, lhs: &[Limb], rhs_negative: bool, rhs: &[Limb]) -> BigInteger {
    if lhs_negative == rhs_negative {
        return BigInteger::from_parts(lhs_negative, magnitude::add(lhs, rhs));
    }

    match magnitude::compare(lhs, rhs) {
        Ordering::Equal => BigInteger::zero(),
        Ordering::Greater => BigInteger::from_parts(lhs_negative, magnitude::sub(lhs, rhs)),
        Ordering::Less => BigInteger::from_parts(rhs_negative, magnitude::sub(rhs, lhs)),
    }
}

impl Add<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> BigInteger {
        add_signed(self.is_negative(), self.limbs(), rhs.is_negative(), rhs.limbs())
    }
}

impl Sub<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> BigInteger {
        // Flipping the sign of zero is harmless: from_parts canonicalizes
        add_signed(self.is_negative(), self.limbs(), !rhs.is_negative(), rhs.limbs())
    }
}

impl Mul<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> BigInteger {
        BigInteger::from_parts(
            self.is_negative() != rhs.is_negative(),
            magnitude::mul(self.limbs(), rhs.limbs()),
        )
    }
}

/// Forwards the owned/borrowed operand combinations to the `&a op &b` impl
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_binop!(impl Mul, mul);

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, value| &acc + &value)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, value| &acc + value)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, value| &acc * &value)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, value| &acc * value)
    }
}
