//! Fallible parse primitives
//!
//! Each primitive takes the textual form of a value and returns a
//! [`ConversionResult`]. Numbers follow invariant-culture rules: surrounding
//! whitespace is ignored and `,` group separators are accepted in the
//! integral part of decimals and doubles.

use crate::error::{ConversionError, ConversionResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lenient_types::Value;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;
use uuid::Uuid;

/// Length of the canonical hyphenated UUID form
pub const GUID_TEXT_LENGTH: usize = 36;

/// ISO 8601 date-time layouts without an offset
const ISO_DATE_TIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Slashed and 12-hour clock date-time layouts; numeric dates are read day-first
const LOCAL_DATE_TIME_PATTERNS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %I:%M:%S %p",
    "%Y/%m/%d %I:%M %p",
    "%d/%m/%Y %I:%M:%S %p",
    "%d/%m/%Y %I:%M %p",
];

/// Date-only layouts, resolved to midnight
const DATE_PATTERNS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

/// Parse a signed 32-bit integer
pub fn parse_integer(text: &str) -> ConversionResult<i32> {
    parse_integral(text, "Integer")
}

/// Parse a signed 64-bit integer
pub fn parse_long(text: &str) -> ConversionResult<i64> {
    parse_integral(text, "Long")
}

fn parse_integral<T>(text: &str, target: &'static str) -> ConversionResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let trimmed = text.trim();
    trimmed.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ConversionError::out_of_range(target, trimmed)
        }
        _ => ConversionError::invalid(target, trimmed),
    })
}

/// Parse a fixed-point decimal.
///
/// Exponent notation is rejected, so the text of an `f64` extreme only
/// parses when its digits fit the 96-bit mantissa.
pub fn parse_decimal(text: &str) -> ConversionResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains(['e', 'E']) {
        return Err(ConversionError::invalid("Decimal", trimmed));
    }

    let normalized = strip_group_separators(trimmed);
    Decimal::from_str(&normalized).map_err(|_| {
        if is_plain_number(&normalized) {
            ConversionError::out_of_range("Decimal", trimmed)
        } else {
            ConversionError::invalid("Decimal", trimmed)
        }
    })
}

/// Parse a 64-bit float, including exponent notation, `inf` and `NaN`
pub fn parse_double(text: &str) -> ConversionResult<f64> {
    let trimmed = text.trim();
    strip_group_separators(trimmed)
        .parse::<f64>()
        .map_err(|_| ConversionError::invalid("Double", trimmed))
}

/// Remove `,` group separators from the integral part of a number.
///
/// Text with a separator in the fractional part, or without a digit before
/// the first separator, is returned untouched so that it fails to parse.
fn strip_group_separators(text: &str) -> Cow<'_, str> {
    let (integral, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text, None),
    };

    let unsigned = integral.trim_start_matches(['+', '-']);
    if !integral.contains(',')
        || !unsigned.starts_with(|c: char| c.is_ascii_digit())
        || fraction.is_some_and(|f| f.contains(','))
    {
        return Cow::Borrowed(text);
    }

    let mut out: String = integral.chars().filter(|c| *c != ',').collect();
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    Cow::Owned(out)
}

/// Sign, digits and at most one decimal point
fn is_plain_number(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty()
        && digits.chars().filter(|c| *c == '.').count() <= 1
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().any(|c| c.is_ascii_digit())
}

/// Parse a date-time.
///
/// RFC 3339 text with an offset is converted to UTC. Otherwise the ISO
/// layouts are tried first, then slashed, 12-hour clock and named-month
/// layouts. Numeric dates with the year last are read day-first, and
/// impossible calendar dates such as month 13 are rejected.
pub fn parse_date_time(text: &str) -> ConversionResult<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::invalid("DateTime", trimmed));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_utc());
    }

    if let Some(dt) = ISO_DATE_TIME_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
    {
        return Ok(dt);
    }

    LOCAL_DATE_TIME_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
        .or_else(|| {
            DATE_PATTERNS.iter().find_map(|pattern| {
                NaiveDate::parse_from_str(trimmed, pattern)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
        })
        .ok_or_else(|| ConversionError::invalid("DateTime", trimmed))
}

/// Parse a UUID in its canonical hyphenated form.
///
/// The length check runs first, so compact (32 digit), braced and URN forms
/// are rejected even though the UUID parser would accept them.
pub fn parse_guid(text: &str) -> ConversionResult<Uuid> {
    if text.chars().count() != GUID_TEXT_LENGTH {
        return Err(ConversionError::invalid("Guid", text));
    }
    Uuid::try_parse(text).map_err(|_| ConversionError::invalid("Guid", text))
}

/// Parse `true`/`1`/`false`/`0`, case-insensitive
pub fn parse_boolean_text(text: &str) -> ConversionResult<bool> {
    match text.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConversionError::invalid("Boolean", text)),
    }
}

/// Generic boolean conversion of a value.
///
/// Numbers are true when non-zero, text must read `true` or `false`
/// (case-insensitive, surrounding whitespace ignored). Date-times, UUIDs and
/// foreign values have no boolean interpretation.
pub fn parse_generic_boolean(value: &Value) -> ConversionResult<bool> {
    match value {
        Value::Null => Err(ConversionError::null("Boolean")),
        Value::Boolean(b) => Ok(*b),
        Value::Integer(i) => Ok(*i != 0),
        Value::Long(l) => Ok(*l != 0),
        Value::Decimal(d) => Ok(!d.is_zero()),
        Value::Double(d) => Ok(*d != 0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(ConversionError::invalid("Boolean", trimmed))
            }
        }
        Value::DateTime(_) | Value::Guid(_) | Value::Other(_) => {
            Err(ConversionError::unsupported(value.type_name(), "Boolean"))
        }
    }
}

/// True iff the text is one of `true`, `1`, `false`, `0` (case-insensitive)
pub(crate) fn string_boolean_predicate(text: &str) -> bool {
    !text.is_empty() && parse_boolean_text(text).is_ok()
}
