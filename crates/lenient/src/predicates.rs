//! Type predicates
//!
//! Each predicate answers whether a [`Value`] can be interpreted as a type,
//! without keeping the converted result. Absent values satisfy none of them.

use crate::coercion::{to_date_time, to_decimal, to_double, to_guid, to_integer, to_long};
use crate::parse::string_boolean_predicate;
use lenient_types::Value;
use rust_decimal::Decimal;

/// Check if a value is absent
pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// Boolean literal, or text reading `true`/`1`/`false`/`0` in any case.
///
/// Numbers other than 0 and 1 are not booleans here, even though
/// [`get_boolean`](crate::get_boolean) reads them as true.
pub fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Boolean(_) => true,
        _ => string_boolean_predicate(&value.textual_form()),
    }
}

/// Textual form fits a signed 32-bit integer
pub fn is_integer(value: &Value) -> bool {
    to_integer(value).is_ok()
}

/// Textual form fits a signed 64-bit integer
pub fn is_long(value: &Value) -> bool {
    to_long(value).is_ok()
}

/// Textual form fits the 96-bit decimal range.
///
/// `f64::MIN` and `f64::MAX` are outside that range and evaluate false.
pub fn is_decimal(value: &Value) -> bool {
    to_decimal(value).is_ok()
}

/// Textual form parses as a 64-bit float
pub fn is_double(value: &Value) -> bool {
    to_double(value).is_ok()
}

/// Date-time literal, or text accepted by the date-time parser
pub fn is_date_time(value: &Value) -> bool {
    to_date_time(value).is_ok()
}

/// UUID literal, or 36-character hyphenated UUID text
pub fn is_guid(value: &Value) -> bool {
    match value {
        Value::Guid(_) => true,
        _ => to_guid(value).is_ok(),
    }
}

/// Non-negative number, read as a double first and as a decimal second
pub fn is_positive_number(value: &Value) -> bool {
    if value.is_null() {
        return false;
    }

    to_double(value).is_ok_and(|d| d >= 0.0)
        || to_decimal(value).is_ok_and(|d| d >= Decimal::ZERO)
}

/// `min <= value <= max`, inclusive on both ends.
///
/// Works for `i32`, `f64`, `Decimal` or any other ordered type. When
/// `min > max` no value is in range.
pub fn is_in_range<T: PartialOrd>(min: T, max: T, value: T) -> bool {
    min <= value && value <= max
}
