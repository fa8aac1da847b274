//! Typed lookups over loosely-structured JSON configuration

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Fetch `key` from a JSON object, falling back to `default` when the key
/// is missing or the value does not convert to `T`.
pub fn get<T: DeserializeOwned>(config: &Value, key: &str, default: T) -> T {
    config
        .get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or(default)
}

/// Like [`get`], but the resolved value must satisfy `validator`.
pub fn get_checked<T, F>(config: &Value, key: &str, default: T, validator: F) -> Result<T>
where
    T: DeserializeOwned + std::fmt::Debug,
    F: Fn(&T) -> bool,
{
    let value = get(config, key, default);
    if validator(&value) {
        Ok(value)
    } else {
        Err(Error::ConfigInvalid {
            key: key.to_string(),
            value: format!("{value:?}"),
        })
    }
}

/// Recursively lowercase every object key.
pub fn lower_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), lower_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lower_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn get_returns_value_when_present() {
        let config = json!({"port": 8080, "host": "localhost"});
        assert_eq!(get(&config, "port", 0_u16), 8080);
        assert_eq!(get(&config, "host", String::new()), "localhost");
    }

    #[test]
    fn get_falls_back_when_missing_or_mistyped() {
        let config = json!({"port": "not-a-number"});
        assert_eq!(get(&config, "port", 9000_u16), 9000);
        assert_eq!(get(&config, "absent", 42), 42);
    }

    #[test]
    fn get_checked_accepts_valid_values() {
        let config = json!({"retries": 3});
        let retries = get_checked(&config, "retries", 1_u32, |r| *r > 0).unwrap();
        assert_eq!(retries, 3);
    }

    #[test]
    fn get_checked_rejects_invalid_values() {
        let config = json!({"retries": 0});
        let err = get_checked(&config, "retries", 1_u32, |r| *r > 0).unwrap_err();
        assert!(err.to_string().contains("retries"));
    }

    #[test]
    fn lower_keys_recurses_into_objects_and_arrays() {
        let input = json!({
            "Outer": {"Inner": 1},
            "List": [{"Key": true}],
            "plain": "Value"
        });
        let expected = json!({
            "outer": {"inner": 1},
            "list": [{"key": true}],
            "plain": "Value"
        });
        assert_eq!(lower_keys(input), expected);
    }
}
