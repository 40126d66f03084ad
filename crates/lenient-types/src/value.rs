//! Value types - runtime representation of loosely-typed input
//!
//! Values arrive from untyped sources (form fields, query strings, JSON
//! configuration). The [`Value`] enum keeps whatever type the source supplied
//! and exposes a canonical textual form that the parsers fall back to.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use uuid::Uuid;

/// Format used for the textual form of date-time values.
///
/// `%.f` prints nothing for whole seconds, so the output stays parseable by
/// the `YYYY-MM-DD HH:MM:SS` patterns.
pub const DATE_TIME_TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A value of unknown origin type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// Absent value (null / undefined)
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 96-bit fixed-point decimal
    Decimal(Decimal),
    /// 64-bit floating point
    Double(f64),
    /// Date and time without an offset
    DateTime(NaiveDateTime),
    /// UUID
    Guid(Uuid),
    /// Text
    String(String),
    /// Any other value, carried as its textual form
    Other(String),
}

impl Value {
    /// Check if this value is absent
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Long(_) => "Long",
            Self::Decimal(_) => "Decimal",
            Self::Double(_) => "Double",
            Self::DateTime(_) => "DateTime",
            Self::Guid(_) => "Guid",
            Self::String(_) => "String",
            Self::Other(_) => "Other",
        }
    }

    /// Try to get as Boolean.
    ///
    /// The `as_*` accessors match the exact variant and never parse text.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as DateTime
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Try to get as Guid
    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            Self::Guid(g) => Some(*g),
            _ => None,
        }
    }

    /// Try to get as String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The canonical, locale-invariant textual form of this value.
    ///
    /// `Null` renders as the empty string. Text variants are borrowed.
    pub fn textual_form(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Boolean(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Integer(i) => Cow::Owned(i.to_string()),
            Self::Long(l) => Cow::Owned(l.to_string()),
            Self::Decimal(d) => Cow::Owned(d.to_string()),
            Self::Double(d) => Cow::Owned(d.to_string()),
            Self::DateTime(dt) => Cow::Owned(dt.format(DATE_TIME_TEXT_FORMAT).to_string()),
            Self::Guid(g) => Cow::Owned(g.hyphenated().to_string()),
            Self::String(s) | Self::Other(s) => Cow::Borrowed(s),
        }
    }

    /// Create a null value
    pub fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create an integer value
    pub fn integer(value: i32) -> Self {
        Self::Integer(value)
    }

    /// Create a long value
    pub fn long(value: i64) -> Self {
        Self::Long(value)
    }

    /// Create a decimal value
    pub fn decimal(value: Decimal) -> Self {
        Self::Decimal(value)
    }

    /// Create a double value
    pub fn double(value: f64) -> Self {
        Self::Double(value)
    }

    /// Create a date-time value
    pub fn date_time(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }

    /// Create a guid value
    pub fn guid(value: Uuid) -> Self {
        Self::Guid(value)
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Wrap a foreign value through its `Display` output
    pub fn other(value: impl fmt::Display) -> Self {
        Self::Other(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.textual_form())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Guid(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i32::try_from(i).map_or(Self::Long(i), Self::Integer)
                } else if let Some(u) = n.as_u64() {
                    Self::Decimal(Decimal::from(u))
                } else {
                    n.as_f64()
                        .map_or_else(|| Self::Other(n.to_string()), Self::Double)
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Self::Other(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_textual_form_numbers() {
        assert_eq!(Value::Integer(i32::MIN).textual_form(), "-2147483648");
        assert_eq!(Value::Long(i64::MAX).textual_form(), "9223372036854775807");
        assert_eq!(
            Value::Decimal(Decimal::MIN).textual_form(),
            "-79228162514264337593543950335"
        );
        assert_eq!(Value::Double(3.1415926535).textual_form(), "3.1415926535");
    }

    #[test]
    fn test_textual_form_double_round_trips() {
        let text = Value::Double(f64::MIN).to_string();
        assert!(!text.contains('e'));
        assert_eq!(text.parse::<f64>().unwrap(), f64::MIN);
    }

    #[test]
    fn test_textual_form_date_time() {
        let dt = NaiveDate::from_ymd_opt(2023, 10, 17)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(Value::DateTime(dt).textual_form(), "2023-10-17 10:00:00");

        let with_millis = NaiveDate::from_ymd_opt(2023, 10, 17)
            .unwrap()
            .and_hms_milli_opt(10, 0, 0, 250)
            .unwrap();
        assert_eq!(
            Value::DateTime(with_millis).textual_form(),
            "2023-10-17 10:00:00.250"
        );
    }

    #[test]
    fn test_textual_form_guid_is_hyphenated() {
        let g = Uuid::from_str("A5C4C4CB67F8407D8FA7F59372E5B820").unwrap();
        assert_eq!(
            Value::Guid(g).textual_form(),
            "a5c4c4cb-67f8-407d-8fa7-f59372e5b820"
        );
    }

    #[test]
    fn test_null_and_text() {
        assert!(Value::null().is_null());
        assert!(!Value::string("").is_null());
        assert_eq!(Value::Null.textual_form(), "");
        assert_eq!(Value::from("test").as_str(), Some("test"));
        assert_eq!(Value::other(42u8), Value::Other("42".to_string()));
    }

    #[test]
    fn test_accessors_match_exact_variant_only() {
        let g = Uuid::from_u128(0xa5c4c4cb_67f8_407d_8fa7_f59372e5b820);
        let dt = NaiveDate::from_ymd_opt(2023, 10, 17)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        assert_eq!(Value::boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::string("true").as_boolean(), None);
        assert_eq!(Value::integer(1).as_boolean(), None);

        assert_eq!(Value::guid(g).as_guid(), Some(g));
        assert_eq!(
            Value::string("a5c4c4cb-67f8-407d-8fa7-f59372e5b820").as_guid(),
            None
        );

        assert_eq!(Value::date_time(dt).as_date_time(), Some(dt));
        assert_eq!(Value::string("2023-10-17 10:00:00").as_date_time(), None);

        assert_eq!(Value::other("text").as_str(), None);
        assert_eq!(Value::null().as_str(), None);
    }

    #[test]
    fn test_constructors_match_from() {
        let g = Uuid::nil();
        let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(Value::boolean(false), Value::from(false));
        assert_eq!(Value::integer(-3), Value::from(-3i32));
        assert_eq!(Value::long(1 << 40), Value::from(1i64 << 40));
        assert_eq!(Value::decimal(Decimal::ONE), Value::from(Decimal::ONE));
        assert_eq!(Value::double(0.5), Value::from(0.5f64));
        assert_eq!(Value::date_time(dt), Value::from(dt));
        assert_eq!(Value::guid(g), Value::from(g));
        assert_eq!(Value::string("x"), Value::from("x"));
        assert_eq!(Value::null(), Value::default());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Long(7));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::Boolean(true));
        assert_eq!(Value::from(json!(42)), Value::Integer(42));
        assert_eq!(Value::from(json!(i64::MIN)), Value::Long(i64::MIN));
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Decimal(Decimal::from(u64::MAX))
        );
        assert_eq!(Value::from(json!(1.5)), Value::Double(1.5));
        assert_eq!(Value::from(json!("abc")), Value::string("abc"));
        assert_eq!(Value::from(json!([1, 2])), Value::Other("[1,2]".to_string()));
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(Value::Integer(5)).unwrap();
        assert_eq!(json, json!({"type": "Integer", "value": 5}));
        let back: Value = serde_json::from_value(json).unwrap();
        assert_eq!(back, Value::Integer(5));
    }
}
