use serde_json::Value;

use crate::adapters::cipher::caesar::MAX_SHIFT;
use crate::core::errors::{CipherSphereError, Result};

/// Key material exactly as the caller supplied it.
///
/// Which shape is acceptable depends on the chosen method; that check
/// happens when a strategy is built, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CipherKey {
    #[default]
    None,
    Integer(i64),
    Text(String),
}

impl CipherKey {
    /// Interpret a command-line `--key` value.
    ///
    /// Anything that parses as an integer becomes `Integer`, any other
    /// string becomes `Text`.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => CipherKey::None,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) => CipherKey::Integer(n),
                Err(_) => CipherKey::Text(raw.to_string()),
            },
        }
    }

    /// Interpret the `key` field of a JSON request.
    ///
    /// Only integers, strings and `null` are keys; anything else (floats,
    /// booleans, arrays, objects) is rejected as an invalid key.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(CipherKey::None),
            Value::String(s) => Ok(CipherKey::Text(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(shift) => Ok(CipherKey::Integer(shift)),
                None if n.is_u64() => Err(CipherSphereError::invalid_key(format!(
                    "Shift value must be between 0 and {MAX_SHIFT} (got {n})"
                ))),
                None => Err(CipherSphereError::invalid_key(format!(
                    "Shift value must be an integer, got {n}"
                ))),
            },
            other => Err(CipherSphereError::invalid_key(format!(
                "Key must be an integer or a string, got {}",
                json_type_name(other)
            ))),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, CipherKey::None)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arg_integer_becomes_integer_key() {
        assert_eq!(CipherKey::from_arg(Some("3")), CipherKey::Integer(3));
        assert_eq!(CipherKey::from_arg(Some("-1")), CipherKey::Integer(-1));
        assert_eq!(CipherKey::from_arg(Some(" 26 ")), CipherKey::Integer(26));
    }

    #[test]
    fn arg_word_becomes_text_key() {
        assert_eq!(
            CipherKey::from_arg(Some("LEMON")),
            CipherKey::Text("LEMON".into())
        );
        assert_eq!(CipherKey::from_arg(Some("3.5")), CipherKey::Text("3.5".into()));
    }

    #[test]
    fn missing_arg_is_none() {
        assert!(CipherKey::from_arg(None).is_none());
    }

    #[test]
    fn json_keys() {
        assert_eq!(CipherKey::from_json(&json!(null)).unwrap(), CipherKey::None);
        assert_eq!(CipherKey::from_json(&json!(7)).unwrap(), CipherKey::Integer(7));
        assert_eq!(
            CipherKey::from_json(&json!("key")).unwrap(),
            CipherKey::Text("key".into())
        );
    }

    #[test]
    fn json_non_integer_number_is_invalid_key() {
        let err = CipherKey::from_json(&json!(3.5)).unwrap_err();
        assert!(matches!(err, CipherSphereError::InvalidKey { .. }));
    }

    #[test]
    fn json_integer_beyond_i64_is_out_of_range() {
        let err = CipherKey::from_json(&json!(18446744073709551615u64)).unwrap_err();
        assert!(matches!(err, CipherSphereError::InvalidKey { .. }));
        assert!(err.to_string().contains("between 0 and 25"));
        assert!(!err.to_string().contains("must be an integer"));
    }

    #[test]
    fn json_other_types_are_invalid_keys() {
        for value in [json!(true), json!([1, 2]), json!({"k": 1})] {
            let err = CipherKey::from_json(&value).unwrap_err();
            assert!(matches!(err, CipherSphereError::InvalidKey { .. }));
        }
    }
}
