//! Document — the key/value map properties live in.

use hashbrown::HashMap;

/// A raw decoded value, exactly as it came off the wire.
pub type RawValue = serde_json::Value;

/// A map of document keys (bare or alias-qualified) to raw values.
pub type Document = serde_json::Map<String, RawValue>;

/// Namespace URI → alias in effect for the current document.
pub type AliasMap = HashMap<String, String>;

/// Namespace URI → alias a serialized value needs declared in `@context`.
pub type ContextMap = HashMap<String, String>;

/// Short name of a raw value's JSON shape, for error messages.
pub fn shape_name(raw: &RawValue) -> &'static str {
    match raw {
        RawValue::Null => "null",
        RawValue::Bool(_) => "boolean",
        RawValue::Number(_) => "number",
        RawValue::String(_) => "string",
        RawValue::Array(_) => "array",
        RawValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_name() {
        assert_eq!(shape_name(&json!(null)), "null");
        assert_eq!(shape_name(&json!(1.5)), "number");
        assert_eq!(shape_name(&json!("x")), "string");
        assert_eq!(shape_name(&json!([1])), "array");
        assert_eq!(shape_name(&json!({})), "object");
    }
}
