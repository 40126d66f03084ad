//! Lenient coercions
//!
//! The `to_*` functions convert a [`Value`] into a concrete type and report
//! why they could not. The `get_*` functions wrap them and substitute the
//! caller's default on any failure, so they never fail.
//!
//! Values that already hold the target type are returned as-is. Everything
//! else goes through its textual form, which is what makes a `Double` holding
//! `f64::MAX` a valid double but not a valid decimal.

use crate::error::{ConversionError, ConversionResult};
use crate::parse::{
    parse_boolean_text, parse_date_time, parse_decimal, parse_double, parse_generic_boolean,
    parse_guid, parse_integer, parse_long,
};
use chrono::NaiveDateTime;
use lenient_types::Value;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Convert to Integer
pub fn to_integer(value: &Value) -> ConversionResult<i32> {
    match value {
        Value::Null => Err(ConversionError::null("Integer")),
        Value::Integer(i) => Ok(*i),
        _ => parse_integer(&value.textual_form()),
    }
}

/// Convert to Long
pub fn to_long(value: &Value) -> ConversionResult<i64> {
    match value {
        Value::Null => Err(ConversionError::null("Long")),
        Value::Long(l) => Ok(*l),
        _ => parse_long(&value.textual_form()),
    }
}

/// Convert to Decimal
pub fn to_decimal(value: &Value) -> ConversionResult<Decimal> {
    match value {
        Value::Null => Err(ConversionError::null("Decimal")),
        Value::Decimal(d) => Ok(*d),
        _ => parse_decimal(&value.textual_form()),
    }
}

/// Convert to Double
pub fn to_double(value: &Value) -> ConversionResult<f64> {
    match value {
        Value::Null => Err(ConversionError::null("Double")),
        Value::Double(d) => Ok(*d),
        _ => parse_double(&value.textual_form()),
    }
}

/// Convert to DateTime
pub fn to_date_time(value: &Value) -> ConversionResult<NaiveDateTime> {
    match value {
        Value::Null => Err(ConversionError::null("DateTime")),
        Value::DateTime(dt) => Ok(*dt),
        _ => parse_date_time(&value.textual_form()),
    }
}

/// Convert to Guid.
///
/// The textual form is always re-parsed; for a `Guid` value it is the
/// canonical hyphenated text, so the result is the same UUID.
pub fn to_guid(value: &Value) -> ConversionResult<Uuid> {
    match value {
        Value::Null => Err(ConversionError::null("Guid")),
        _ => parse_guid(&value.textual_form()),
    }
}

/// Convert to Boolean.
///
/// Boolean values are returned as-is and `true`/`1`/`false`/`0` text is
/// read case-insensitively. Anything else goes through the generic boolean
/// conversion, where non-zero numbers are true.
pub fn to_boolean(value: &Value) -> ConversionResult<bool> {
    match value {
        Value::Null => Err(ConversionError::null("Boolean")),
        Value::Boolean(b) => Ok(*b),
        _ => parse_boolean_text(&value.textual_form()).or_else(|_| parse_generic_boolean(value)),
    }
}

fn or_default<T>(result: ConversionResult<T>, value: &Value, default: T) -> T {
    result.unwrap_or_else(|err| {
        log::trace!(
            "{} value falls back to default {}: {}",
            value.type_name(),
            err.target(),
            err
        );
        default
    })
}

/// Boolean interpretation of `value`, or `default`
pub fn get_boolean(value: &Value, default: bool) -> bool {
    or_default(to_boolean(value), value, default)
}

/// Date-time interpretation of `value`, or `default`
pub fn get_date_time(value: &Value, default: NaiveDateTime) -> NaiveDateTime {
    let result = to_date_time(value);
    if let (Ok(dt), Value::String(text) | Value::Other(text)) = (&result, value) {
        log::debug!("Read '{}' as date-time {}", text, dt);
    }
    or_default(result, value, default)
}

/// Decimal interpretation of `value`, or `default`
pub fn get_decimal(value: &Value, default: Decimal) -> Decimal {
    or_default(to_decimal(value), value, default)
}

/// Double interpretation of `value`, or `default`
pub fn get_double(value: &Value, default: f64) -> f64 {
    or_default(to_double(value), value, default)
}

/// UUID interpretation of `value`, or `default`
pub fn get_guid(value: &Value, default: Uuid) -> Uuid {
    or_default(to_guid(value), value, default)
}

/// 32-bit integer interpretation of `value`, or `default`
pub fn get_integer(value: &Value, default: i32) -> i32 {
    or_default(to_integer(value), value, default)
}

/// 64-bit integer interpretation of `value`, or `default`
pub fn get_long(value: &Value, default: i64) -> i64 {
    or_default(to_long(value), value, default)
}

/// Textual form of `value`, or `default` when it is absent
pub fn get_string(value: &Value, default: &str) -> String {
    match value {
        Value::Null => default.to_owned(),
        _ => value.textual_form().into_owned(),
    }
}

/// Textual form of `value` substituted into `format`.
///
/// Every index-0 placeholder in the template is replaced: `{0}`, `{0,N}`
/// (right-aligned in N columns), `{0,-N}` (left-aligned) and `{0:fmt}`,
/// whose format string is ignored. `{{`/`}}` produce literal braces and
/// placeholders for other indices are kept verbatim. Without a template
/// this is [`get_string`].
pub fn get_string_formatted(value: &Value, default: &str, format: Option<&str>) -> String {
    match format {
        None | Some("") => get_string(value, default),
        Some(_) if value.is_null() => default.to_owned(),
        Some(template) => substitute_placeholder(template, &value.textual_form()),
    }
}

fn substitute_placeholder(template: &str, argument: &str) -> String {
    let mut out = String::with_capacity(template.len() + argument.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let consumed = if tail.starts_with("{{") {
            out.push('{');
            2
        } else if tail.starts_with("}}") {
            out.push('}');
            2
        } else if let Some(close) = tail.strip_prefix('{').and_then(|t| t.find('}')) {
            let item = &tail[..close + 2];
            match parse_alignment(&item[1..item.len() - 1]) {
                Some(width) => push_aligned(&mut out, argument, width),
                None => out.push_str(item),
            }
            item.len()
        } else {
            // Stray brace
            out.push_str(&tail[..1]);
            1
        };
        rest = &tail[consumed..];
    }

    out.push_str(rest);
    out
}

/// Widest alignment a format item may request
const MAX_ALIGNMENT: u32 = 1_000_000;

/// Alignment of an `index[,alignment][:format]` item, `None` unless the
/// index is 0 and the alignment is an integer below [`MAX_ALIGNMENT`]
fn parse_alignment(item: &str) -> Option<i32> {
    let spec = item.split_once(':').map_or(item, |(spec, _format)| spec);
    let (index, alignment) = match spec.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (spec, None),
    };

    if index.trim() != "0" {
        return None;
    }
    match alignment {
        Some(alignment) => alignment
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|width| width.unsigned_abs() < MAX_ALIGNMENT),
        None => Some(0),
    }
}

/// Positive widths pad on the left, negative widths on the right
fn push_aligned(out: &mut String, argument: &str, width: i32) {
    let padding = (width.unsigned_abs() as usize).saturating_sub(argument.chars().count());
    if width < 0 {
        out.push_str(argument);
        out.extend(std::iter::repeat_n(' ', padding));
    } else {
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(argument);
    }
}
