//! Tolerant deserializers for API fields that switch between scalar kinds.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field that some API revisions emit as a JSON string and
/// others as a number (timestamps, numeric ids).
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string_or_number")]
        ts: Option<String>,
    }

    #[test]
    fn test_accepts_both_scalar_kinds() {
        let from_string: Probe = serde_json::from_str(r#"{"ts": "1481494782"}"#).unwrap();
        assert_eq!(from_string.ts.as_deref(), Some("1481494782"));

        let from_number: Probe = serde_json::from_str(r#"{"ts": 1481494782}"#).unwrap();
        assert_eq!(from_number.ts.as_deref(), Some("1481494782"));

        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert!(absent.ts.is_none());
    }
}
