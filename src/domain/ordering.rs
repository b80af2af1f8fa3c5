//! Numeric ordering for `BigInteger`

use std::cmp::Ordering;

use super::BigInteger;
use super::magnitude;

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => magnitude::compare(self.limbs(), other.limbs()),
            // Larger magnitude is the smaller negative number
            (true, true) => magnitude::compare(other.limbs(), self.limbs()),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
