//! Structural kind classification of JSON values

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The coarse JSON type of a value.
///
/// Two values are compatible for synchronization when their kinds match;
/// their contents are never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
        }
    }

    /// Only objects are walked; every other kind is an opaque leaf.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_not_object() {
        assert_eq!(Kind::of(&Value::Null), Kind::Null);
        assert_ne!(Kind::of(&Value::Null), Kind::Object);
    }

    #[test]
    fn test_array_is_not_object() {
        assert_eq!(Kind::of(&json!([1, 2])), Kind::Array);
        assert_eq!(Kind::of(&json!({})), Kind::Object);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(Kind::of(&json!(true)), Kind::Boolean);
        assert_eq!(Kind::of(&json!(1.5)), Kind::Number);
        assert_eq!(Kind::of(&json!(-3)), Kind::Number);
        assert_eq!(Kind::of(&json!("x")), Kind::String);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Kind::Number.to_string(), "Number");
        assert_eq!(format!("{}", Kind::Object), "Object");
    }
}
