//! Arbitrary-precision signed integers for shameless secret sharing
//!
//! Share arithmetic needs integers far wider than any native type. This crate
//! provides [`BigInteger`]: exact `+`, `-`, `*`, truncating division,
//! comparison and round-trip decimal text, plus a text-level facade in
//! [`commands`] used by the WASM bindings.

pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use codec::parse_decimal;
pub use domain::{BigInteger, Limb};
pub use error::{BigIntError, FormatIssue};
