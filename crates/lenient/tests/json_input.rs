//! Coercing fields of untyped JSON configuration

use chrono::{NaiveDate, NaiveDateTime};
use lenient::{
    Value, get_boolean, get_date_time, get_double, get_guid, get_integer, get_long, get_string,
    is_decimal, is_guid, is_positive_number,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

fn field(config: &serde_json::Value, name: &str) -> Value {
    Value::from(config.get(name).cloned())
}

#[test]
fn test_config_fields() {
    let config = json!({
        "port": "8080",
        "retries": 3,
        "timeout": 2.5,
        "verbose": "TRUE",
        "enabled": 1,
        "tenant": "a5c4c4cb-67f8-407d-8fa7-f59372e5b820",
        "since": "16/05/2023",
        "big": 18446744073709551615u64,
        "tags": ["a", "b"],
    });

    assert_eq!(get_integer(&field(&config, "port"), 80), 8080);
    assert_eq!(get_integer(&field(&config, "retries"), 0), 3);
    assert_eq!(get_double(&field(&config, "timeout"), 0.0), 2.5);
    assert!(get_boolean(&field(&config, "verbose"), false));
    assert!(get_boolean(&field(&config, "enabled"), false));
    assert!(is_guid(&field(&config, "tenant")));
    assert_eq!(
        get_guid(&field(&config, "tenant"), Uuid::nil()),
        Uuid::from_u128(0xa5c4c4cb_67f8_407d_8fa7_f59372e5b820)
    );
    assert_eq!(
        get_date_time(&field(&config, "since"), NaiveDateTime::MIN),
        NaiveDate::from_ymd_opt(2023, 5, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    );
    assert!(is_decimal(&field(&config, "big")));
    assert_eq!(get_long(&field(&config, "big"), -1), -1);
    assert_eq!(get_string(&field(&config, "tags"), ""), r#"["a","b"]"#);
}

#[test]
fn test_missing_field_is_null() {
    let config = json!({ "name": "lenient" });

    let missing = field(&config, "port");
    assert_eq!(missing, Value::Null);
    assert_eq!(get_integer(&missing, 8080), 8080);
    assert_eq!(get_string(&missing, "fallback"), "fallback");
    assert!(!is_positive_number(&missing));
}

#[test]
fn test_explicit_json_null() {
    let config = json!({ "port": null });
    assert_eq!(get_integer(&field(&config, "port"), 80), 80);
}
