//! Arbitrary-precision integer arithmetic
//!
//! This module contains the [`BigInteger`] value type and the limb-level
//! kernels behind it:
//! - `big_integer` - the value type, construction and canonical form
//! - `magnitude` - unsigned base-10^9 kernels (add, sub, mul, long division)
//! - `arith` - `+`, `-`, `*` operators with direct sign resolution
//! - `division` - truncating `div_rem`, `checked_div`, `checked_rem`
//! - `ordering` - numeric `Ord`

mod arith;
mod big_integer;
mod division;
mod magnitude;
mod ordering;

pub use big_integer::BigInteger;
pub use magnitude::Limb;
