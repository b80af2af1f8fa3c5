//! Truncating division for `BigInteger`

use super::BigInteger;
use super::magnitude::{self, BASE, Limb};
use crate::error::BigIntError;

/// Divides magnitudes, choosing the cheapest path that applies
fn div_rem_magnitude(dividend: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    match (dividend, divisor) {
        // Everything fits in a native u64
        (&[low], &[d]) | (&[low, _], &[d]) => {
            let high = dividend.get(1).copied().unwrap_or(0);
            let wide = u64::from(high) * u64::from(BASE) + u64::from(low);
            let d = u64::from(d);
            tracing::trace!(path = "native", "dividing");
            let quotient = BigInteger::from(wide / d);
            let remainder = BigInteger::from(wide % d);
            (quotient.limbs().to_vec(), remainder.limbs().to_vec())
        }
        (_, &[d]) => {
            tracing::trace!(path = "short", "dividing");
            let (quotient, remainder) = magnitude::div_rem_limb(dividend, d);
            (quotient, vec![remainder])
        }
        _ if magnitude::compare(dividend, divisor).is_lt() => {
            tracing::trace!(path = "trivial", "dividing");
            (vec![0], dividend.to_vec())
        }
        _ => {
            tracing::trace!(path = "long", "dividing");
            magnitude::div_rem(dividend, divisor)
        }
    }
}

impl BigInteger {
    /// Divides with truncation toward zero, returning quotient and remainder
    ///
    /// The quotient is negative when exactly one operand is negative; the
    /// remainder takes the sign of the dividend, so `self == q * rhs + r`
    /// and `|r| < |rhs|`.
    ///
    /// # Errors
    /// Returns [`BigIntError::DivisionByZero`] if `rhs` is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shameless_bignum::BigInteger;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let (q, r) = BigInteger::from(-7).div_rem(&BigInteger::from(2))?;
    /// assert_eq!(q, BigInteger::from(-3));
    /// assert_eq!(r, BigInteger::from(-1));
    ///
    /// assert!(BigInteger::from(7).div_rem(&BigInteger::zero()).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }

        let _span = tracing::trace_span!(
            "div_rem",
            dividend_limbs = self.limbs().len(),
            divisor_limbs = rhs.limbs().len()
        )
        .entered();

        let (quotient, remainder) = div_rem_magnitude(self.limbs(), rhs.limbs());
        Ok((
            BigInteger::from_parts(self.is_negative() != rhs.is_negative(), quotient),
            BigInteger::from_parts(self.is_negative(), remainder),
        ))
    }

    /// Quotient of a truncating division
    ///
    /// # Errors
    /// Returns [`BigIntError::DivisionByZero`] if `rhs` is zero
    pub fn checked_div(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntError> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Remainder of a truncating division, carrying the sign of `self`
    ///
    /// # Errors
    /// Returns [`BigIntError::DivisionByZero`] if `rhs` is zero
    pub fn checked_rem(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntError> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }
}
