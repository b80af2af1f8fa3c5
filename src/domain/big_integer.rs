//! `BigInteger` value type and its canonical form

use zeroize::Zeroize;

use super::magnitude::{self, BASE, LIMB_DIGITS, Limb};

/// Arbitrary-precision signed integer
///
/// Stored as a sign flag plus base-10^9 limbs, least significant first.
/// Every value is kept in canonical form: at least one limb, no redundant
/// most-significant zero limbs, and zero is never negative. Because of that,
/// derived equality and hashing compare values, not representations.
///
/// Values are immutable: arithmetic produces new values and never touches
/// its operands, so a `BigInteger` can be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use shameless_bignum::BigInteger;
///
/// let a: BigInteger = "999999999".parse().unwrap();
/// let b = BigInteger::from(1);
///
/// assert_eq!((&a + &b).to_string(), "1000000000");
/// assert_eq!((a - b).limbs(), &[999_999_998]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    negative: bool,
    magnitude: Vec<Limb>,
}

impl BigInteger {
    /// Radix of a single limb (10^9)
    pub const BASE: Limb = BASE;

    /// Decimal digits packed into one full limb
    pub const LIMB_DIGITS: usize = LIMB_DIGITS;

    /// Builds a value from a sign and raw limbs, restoring canonical form
    ///
    /// Limbs must already be in `[0, BASE)`.
    pub(crate) fn from_parts(negative: bool, mut magnitude: Vec<Limb>) -> Self {
        debug_assert!(magnitude.iter().all(|&limb| limb < BASE));
        magnitude::trim(&mut magnitude);
        let negative = negative && !magnitude::is_zero(&magnitude);
        Self {
            negative,
            magnitude,
        }
    }

    /// Builds a value from a sign and an unsigned native magnitude
    pub(crate) fn from_u128_parts(negative: bool, mut value: u128) -> Self {
        let base = u128::from(BASE);
        let mut limbs = Vec::with_capacity(5);
        loop {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "value % BASE is below 10^9 and fits in a limb"
            )]
            limbs.push((value % base) as Limb);
            value /= base;
            if value == 0 {
                break;
            }
        }
        Self::from_parts(negative, limbs)
    }

    /// Canonical zero
    #[must_use]
    pub fn zero() -> Self {
        Self {
            negative: false,
            magnitude: vec![0],
        }
    }

    #[must_use]
    pub fn one() -> Self {
        Self {
            negative: false,
            magnitude: vec![1],
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(&self.magnitude)
    }

    /// True iff the value is strictly below zero
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns -1, 0 or 1 according to the sign of the value
    #[must_use]
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self::from_parts(self.negative, vec![1])
        }
    }

    /// Absolute value
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Magnitude limbs, least significant first, each in `[0, 10^9)`
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.magnitude
    }

    /// Number of decimal digits in the magnitude (zero has one digit)
    ///
    /// ```rust
    /// use shameless_bignum::BigInteger;
    ///
    /// assert_eq!(BigInteger::zero().digit_count(), 1);
    /// assert_eq!(BigInteger::from(-1_000_000_000_i64).digit_count(), 10);
    /// ```
    #[must_use]
    pub fn digit_count(&self) -> usize {
        let Some((top, rest)) = self.magnitude.split_last() else {
            return 1;
        };
        let top_digits = top.checked_ilog10().map_or(1, |log| log as usize + 1);
        rest.len() * LIMB_DIGITS + top_digits
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        let negative = !self.negative;
        Self::from_parts(negative, self.magnitude)
    }
}

impl std::ops::Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger::from_parts(!self.negative, self.magnitude.clone())
    }
}

/// Wipes the limbs and leaves the value as canonical zero
impl Zeroize for BigInteger {
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
        self.magnitude.push(0);
        self.negative = false;
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_u128_parts(value < 0, i128::from(value).unsigned_abs())
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_u128_parts(false, u128::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128);
impl_from_unsigned!(u8, u16, u32, u64, u128);

impl From<isize> for BigInteger {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::from(value as i64)
    }
}

impl From<usize> for BigInteger {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}
