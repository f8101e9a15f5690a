//! String-valued codecs.

use std::collections::BTreeMap;

use crate::model::{RawValue, shape_name};
use crate::{Error, Result};
use super::{ScalarCodec, ScalarValue, foreign_less};

/// `xsd:string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl ScalarCodec for StringCodec {
    fn name(&self) -> &'static str { "string" }

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue> {
        match raw {
            RawValue::String(s) => Ok(ScalarValue::String(s.clone())),
            other => Err(Error::UnexpectedShape { expected: "string", got: shape_name(other) }),
        }
    }

    fn encode(&self, value: &ScalarValue) -> Result<RawValue> {
        match value {
            ScalarValue::String(s) => Ok(RawValue::String(s.clone())),
            other => Err(Error::ScalarKindMismatch { codec: self.name(), got: other.type_name() }),
        }
    }

    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool {
        match (a, b) {
            (ScalarValue::String(x), ScalarValue::String(y)) => x < y,
            _ => foreign_less(a, b),
        }
    }
}

/// BCP 47 language tag, carried as a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcp47Codec;

impl ScalarCodec for Bcp47Codec {
    fn name(&self) -> &'static str { "bcp47" }

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue> {
        match raw {
            RawValue::String(s) => Ok(ScalarValue::Bcp47(s.clone())),
            other => Err(Error::UnexpectedShape { expected: "string", got: shape_name(other) }),
        }
    }

    fn encode(&self, value: &ScalarValue) -> Result<RawValue> {
        match value {
            ScalarValue::Bcp47(s) => Ok(RawValue::String(s.clone())),
            other => Err(Error::ScalarKindMismatch { codec: self.name(), got: other.type_name() }),
        }
    }

    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool {
        match (a, b) {
            (ScalarValue::Bcp47(x), ScalarValue::Bcp47(y)) => x < y,
            _ => foreign_less(a, b),
        }
    }
}

/// `rdf:langString` as a language map: `{"en": "Hello", "fr": "Bonjour"}`.
///
/// Every member must be a string; anything else is rejected whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct LangStringCodec;

impl ScalarCodec for LangStringCodec {
    fn name(&self) -> &'static str { "langString" }

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue> {
        let RawValue::Object(map) = raw else {
            return Err(Error::UnexpectedShape { expected: "object", got: shape_name(raw) });
        };
        let mut out = BTreeMap::new();
        for (lang, text) in map {
            let RawValue::String(text) = text else {
                return Err(Error::InvalidLiteral {
                    kind: "langString",
                    message: format!("value for {lang:?} is a {}", shape_name(text)),
                });
            };
            out.insert(lang.clone(), text.clone());
        }
        Ok(ScalarValue::LangString(out))
    }

    fn encode(&self, value: &ScalarValue) -> Result<RawValue> {
        match value {
            ScalarValue::LangString(m) => Ok(RawValue::Object(
                m.iter().map(|(k, v)| (k.clone(), RawValue::String(v.clone()))).collect(),
            )),
            other => Err(Error::ScalarKindMismatch { codec: self.name(), got: other.type_name() }),
        }
    }

    /// Lexicographic over the (language, text) pairs in language order.
    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool {
        match (a, b) {
            (ScalarValue::LangString(x), ScalarValue::LangString(y)) => x < y,
            _ => foreign_less(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string() {
        assert_eq!(StringCodec.decode(&json!("hi")).unwrap(), ScalarValue::String("hi".into()));
        assert!(StringCodec.decode(&json!(1)).is_err());
        assert_eq!(StringCodec.encode(&"hi".into()).unwrap(), json!("hi"));
        assert!(StringCodec.less(&"a".into(), &"b".into()));
    }

    #[test]
    fn test_bcp47_distinct_from_string() {
        let v = Bcp47Codec.decode(&json!("en-US")).unwrap();
        assert_eq!(v, ScalarValue::Bcp47("en-US".into()));
        assert!(StringCodec.encode(&v).is_err());
        assert_eq!(Bcp47Codec.encode(&v).unwrap(), json!("en-US"));
    }

    #[test]
    fn test_lang_string() {
        let raw = json!({"en": "Hello", "fr": "Bonjour"});
        let v = LangStringCodec.decode(&raw).unwrap();
        assert_eq!(LangStringCodec.encode(&v).unwrap(), raw);
        assert!(LangStringCodec.decode(&json!({"en": 1})).is_err());
        assert!(LangStringCodec.decode(&json!("Hello")).is_err());
    }

    #[test]
    fn test_lang_string_order() {
        let a = LangStringCodec.decode(&json!({"en": "A"})).unwrap();
        let b = LangStringCodec.decode(&json!({"en": "B"})).unwrap();
        let c = LangStringCodec.decode(&json!({"de": "Z"})).unwrap();
        assert!(LangStringCodec.less(&a, &b));
        assert!(LangStringCodec.less(&c, &a));
    }
}
