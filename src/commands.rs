//! Text-in, text-out operations over decimal integers
//!
//! These are the entry points the WASM bindings call: operands arrive as
//! decimal strings and results leave as canonical decimal strings. Parsed
//! operands live in `Zeroizing` so share values do not linger in memory.

use std::cmp::Ordering;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::BigInteger;

/// Binary operation understood by [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    /// Truncating quotient
    Divide,
    /// Remainder of truncating division (sign of the dividend)
    Remainder,
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Self::Add),
            "-" | "sub" => Ok(Self::Subtract),
            "*" | "mul" => Ok(Self::Multiply),
            "/" | "div" => Ok(Self::Divide),
            "%" | "rem" => Ok(Self::Remainder),
            other => Err(anyhow!("Unknown operation '{other}'")),
        }
    }
}

/// Canonical description of a single value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSummary {
    /// Canonical decimal text
    pub canonical: String,
    pub negative: bool,
    /// Number of base-10^9 limbs in the magnitude
    pub limb_count: usize,
    /// Number of decimal digits in the magnitude
    pub digit_count: usize,
}

fn parse_operand(text: &str, name: &str) -> Result<Zeroizing<BigInteger>> {
    text.trim()
        .parse::<BigInteger>()
        .map(Zeroizing::new)
        .with_context(|| format!("Failed to parse {name} operand"))
}

/// Applies `op` to two decimal operands and returns the canonical result
///
/// Surrounding whitespace on the operands is ignored.
///
/// # Errors
/// Returns an error if either operand is not a decimal integer, or if a
/// division or remainder has a zero divisor
///
/// # Examples
///
/// ```rust
/// use shameless_bignum::commands::{evaluate, Operation};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let product = evaluate(Operation::Multiply, "123456789", "987654321")?;
/// assert_eq!(product, "121932631112635269");
///
/// let quotient = evaluate("/".parse()?, "-7", "2")?;
/// assert_eq!(quotient, "-3");
///
/// assert!(evaluate(Operation::Divide, "1", "0").is_err());
/// # Ok(())
/// # }
/// ```
pub fn evaluate(op: Operation, lhs: &str, rhs: &str) -> Result<String> {
    tracing::debug!(?op, "evaluating");

    let lhs = parse_operand(lhs, "left")?;
    let rhs = parse_operand(rhs, "right")?;

    let result = Zeroizing::new(match op {
        Operation::Add => &*lhs + &*rhs,
        Operation::Subtract => &*lhs - &*rhs,
        Operation::Multiply => &*lhs * &*rhs,
        Operation::Divide => lhs.checked_div(&rhs).context("Division failed")?,
        Operation::Remainder => lhs.checked_rem(&rhs).context("Remainder failed")?,
    });

    Ok(result.to_string())
}

/// Compares two decimal operands numerically
///
/// # Errors
/// Returns an error if either operand is not a decimal integer
pub fn compare(lhs: &str, rhs: &str) -> Result<Ordering> {
    let lhs = parse_operand(lhs, "left")?;
    let rhs = parse_operand(rhs, "right")?;
    Ok((*lhs).cmp(&*rhs))
}

fn parse_all(values: &[String]) -> Result<Vec<Zeroizing<BigInteger>>> {
    if values.is_empty() {
        bail!("No operands provided");
    }

    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            value
                .trim()
                .parse::<BigInteger>()
                .map(Zeroizing::new)
                .with_context(|| format!("Failed to parse operand #{}", idx + 1))
        })
        .collect()
}

/// Adds a list of decimal operands
///
/// # Errors
/// Returns an error if the list is empty or any operand is malformed
pub fn sum(values: &[String]) -> Result<String> {
    tracing::debug!(operands = values.len(), "summing");
    let operands = parse_all(values)?;
    let total = Zeroizing::new(operands.iter().map(|value| &**value).sum::<BigInteger>());
    Ok(total.to_string())
}

/// Multiplies a list of decimal operands
///
/// # Errors
/// Returns an error if the list is empty or any operand is malformed
pub fn product(values: &[String]) -> Result<String> {
    tracing::debug!(operands = values.len(), "multiplying");
    let operands = parse_all(values)?;
    let total = Zeroizing::new(
        operands
            .iter()
            .map(|value| &**value)
            .product::<BigInteger>(),
    );
    Ok(total.to_string())
}

/// Parses a value and reports its canonical form and size
///
/// # Errors
/// Returns an error if the value is not a decimal integer
pub fn describe(value: &str) -> Result<ValueSummary> {
    let value = parse_operand(value, "input")?;
    Ok(ValueSummary {
        canonical: value.to_string(),
        negative: value.is_negative(),
        limb_count: value.limbs().len(),
        digit_count: value.digit_count(),
    })
}
