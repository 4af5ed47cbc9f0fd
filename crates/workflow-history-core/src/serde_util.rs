//! Serde helpers for protobuf-flavoured JSON.

use serde::{Deserialize, Deserializer};

/// Int64 values arrive as JSON strings, but some gateways send numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Deserializes a JSON string or number into its string form. `null`
/// becomes the empty string.
///
/// # Errors
///
/// Returns the deserializer's error for any other JSON type.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<StringOrNumber>::deserialize(deserializer)? {
            Some(StringOrNumber::String(s)) => s,
            Some(StringOrNumber::Number(n)) => n.to_string(),
            None => String::new(),
        },
    )
}

/// Deserializes a protobuf int64 (string or number) into an `i64`. `null`
/// and missing values decode as zero.
///
/// # Errors
///
/// Returns a custom error when the string form is not an integer.
pub fn int64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = string_or_number(deserializer)?;
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Counted {
        #[serde(default, deserialize_with = "super::int64")]
        count: i64,
    }

    #[test]
    fn test_int64_accepts_string_and_number() {
        let from_string: Counted = serde_json::from_str(r#"{"count":"17"}"#).unwrap();
        let from_number: Counted = serde_json::from_str(r#"{"count":17}"#).unwrap();

        assert_eq!(from_string.count, 17);
        assert_eq!(from_number.count, 17);
    }

    #[test]
    fn test_int64_defaults_missing_and_null_to_zero() {
        let missing: Counted = serde_json::from_str("{}").unwrap();
        let null: Counted = serde_json::from_str(r#"{"count":null}"#).unwrap();

        assert_eq!(missing.count, 0);
        assert_eq!(null.count, 0);
    }

    #[test]
    fn test_int64_rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Counted>(r#"{"count":"many"}"#).is_err());
    }
}
