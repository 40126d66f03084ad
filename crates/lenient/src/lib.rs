//! Lenient type predicates and coercions
//!
//! This crate answers two questions for a loosely-typed [`Value`] coming from
//! form input, query parameters or dynamic configuration:
//!
//! - **Predicates**: can this value be interpreted as type T? (`is_integer`,
//!   `is_date_time`, `is_guid`, ...)
//! - **Coercions**: the best T interpretation of this value, or a
//!   caller-supplied default when there is none (`get_integer`,
//!   `get_date_time`, `get_guid`, ...)
//!
//! Every function is pure. Coercions never fail: malformed input yields the
//! default, so callers that need a failure signal should use the `to_*`
//! functions or choose a default that cannot collide with valid data.
//!
//! # Example
//!
//! ```
//! use lenient::{Value, get_boolean, get_integer, is_guid};
//!
//! assert_eq!(get_integer(&Value::from("42"), 0), 42);
//! assert_eq!(get_integer(&Value::from("forty-two"), 0), 0);
//! assert!(get_boolean(&Value::from("TRUE"), false));
//! assert!(!is_guid(&Value::from("a5c4c4cb67f8407d8fa7f59372e5b820")));
//! ```
//!
//! # Textual form
//!
//! Values that do not already hold the target type are converted through
//! their canonical textual form (see [`Value::textual_form`]). This keeps
//! the numeric boundaries strict: a `Double` holding `f64::MAX` prints to
//! more digits than a decimal can hold, so it is a double but not a decimal.

pub mod coercion;
pub mod error;
pub mod parse;
pub mod predicates;

pub use coercion::*;
pub use error::{ConversionError, ConversionResult};
pub use lenient_types::*;
pub use predicates::*;
