//! Decimal text encoding for `BigInteger`
//!
//! Text form is an optional leading `-` followed by one or more ASCII digits.
//! Parsing reads the digits right to left in chunks of nine, one chunk per
//! limb; formatting writes the most significant limb unpadded and every
//! following limb zero-padded to nine digits, so `parse(x.to_string()) == x`.
//!
//! # Examples
//!
//! ```rust
//! use shameless_bignum::{BigInteger, BigIntError, FormatIssue};
//!
//! let value: BigInteger = "-000123456789012".parse().unwrap();
//! assert_eq!(value.to_string(), "-123456789012");
//! assert_eq!(value.limbs(), &[456_789_012, 123]);
//!
//! assert_eq!(
//!     "-".parse::<BigInteger>(),
//!     Err(BigIntError::InvalidFormat(FormatIssue::MissingDigits))
//! );
//! ```
//!
//! With serde, values travel as decimal strings:
//!
//! ```rust
//! use shameless_bignum::BigInteger;
//!
//! let value = BigInteger::from(-1_000_000_000_000_i64);
//! let json = serde_json::to_string(&value).unwrap();
//! assert_eq!(json, "\"-1000000000000\"");
//! assert_eq!(serde_json::from_str::<BigInteger>(&json).unwrap(), value);
//! ```

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{BigInteger, Limb};
use crate::error::{BigIntError, FormatIssue};

/// Parses decimal text into a canonical `BigInteger`
///
/// Leading zeros are accepted and dropped; `-0` parses to unsigned zero.
///
/// # Errors
/// Returns [`BigIntError::InvalidFormat`] if the input is empty, is a lone
/// `-`, or contains anything other than ASCII digits after the sign
pub fn parse_decimal(text: &str) -> Result<BigInteger, BigIntError> {
    if text.is_empty() {
        return Err(BigIntError::InvalidFormat(FormatIssue::Empty));
    }

    let (negative, digits, offset) = match text.strip_prefix('-') {
        Some(rest) => (true, rest, 1),
        None => (false, text, 0),
    };

    if digits.is_empty() {
        return Err(BigIntError::InvalidFormat(FormatIssue::MissingDigits));
    }

    if let Some((position, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(BigIntError::InvalidFormat(FormatIssue::InvalidDigit {
            position: position + offset,
            found,
        }));
    }

    let limbs: Vec<Limb> = digits
        .as_bytes()
        .rchunks(BigInteger::LIMB_DIGITS)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0, |limb, &digit| limb * 10 + Limb::from(digit - b'0'))
        })
        .collect();

    Ok(BigInteger::from_parts(negative, limbs))
}

impl FromStr for BigInteger {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = BigIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_decimal(value)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.digit_count());
        let mut limbs = self.limbs().iter().rev();
        if let Some(top) = limbs.next() {
            write!(digits, "{top}")?;
        }
        for limb in limbs {
            write!(digits, "{limb:0width$}", width = BigInteger::LIMB_DIGITS)?;
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntegerVisitor;

impl Visitor<'_> for BigIntegerVisitor {
    type Value = BigInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a decimal integer string or an integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInteger, E> {
        Ok(BigInteger::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInteger, E> {
        Ok(BigInteger::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInteger, E> {
        Ok(BigInteger::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInteger, E> {
        Ok(BigInteger::from(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        parse_decimal(value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for BigInteger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntegerVisitor)
    }
}
