//! Error kinds reported by `BigInteger` construction and division

use std::fmt;

/// Why a piece of decimal text was rejected
///
/// The offending input is deliberately not stored: operands are frequently
/// secrets or shares, so only the position and character are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// The input was the empty string
    Empty,
    /// A `-` sign with no digits after it
    MissingDigits,
    /// A character other than an ASCII digit (byte offset into the input)
    InvalidDigit { position: usize, found: char },
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("input is empty"),
            Self::MissingDigits => f.write_str("sign is not followed by any digits"),
            Self::InvalidDigit { position, found } => {
                write!(f, "unexpected character {found:?} at position {position}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid decimal integer: {0}")]
    InvalidFormat(FormatIssue),
}
