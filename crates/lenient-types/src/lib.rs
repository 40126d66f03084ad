//! Dynamic value representation
//!
//! This crate defines the [`Value`] enum used as input by every predicate and
//! coercion in the `lenient` crate:
//! - Absent, boolean, 32/64-bit integer, decimal, double, date-time, UUID and text variants
//! - The canonical textual form of each variant
//! - Conversions from Rust primitives and from `serde_json::Value`

pub mod value;

pub use value::*;
