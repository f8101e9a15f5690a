//! # Scalar Codecs
//!
//! One codec per primitive kind. A codec decodes a single raw value into a
//! [`ScalarValue`], encodes it back to its canonical wire form, and supplies
//! the ordering used when normalizing multi-valued properties.
//!
//! Each property definition fixes exactly one codec. Decoded scalars remember
//! which codec produced them so encoding and comparison never have to guess.

mod numeric;
mod temporal;
mod text;

pub use numeric::{BooleanCodec, FloatCodec, NonNegativeIntegerCodec};
pub use temporal::{DateTimeCodec, DurationCodec, XsdDuration};
pub use text::{Bcp47Codec, LangStringCodec, StringCodec};

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::RawValue;
use crate::Result;

// ============================================================================
// ScalarValue
// ============================================================================

/// A decoded primitive value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ScalarValue {
    Float(f64),
    NonNegativeInteger(u64),
    Boolean(bool),
    String(String),
    Bcp47(String),
    /// Language tag → text.
    LangString(BTreeMap<String, String>),
    DateTime(DateTime<Utc>),
    Duration(XsdDuration),
}

impl ScalarValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Float(_) => "float",
            ScalarValue::NonNegativeInteger(_) => "nonNegativeInteger",
            ScalarValue::Boolean(_) => "boolean",
            ScalarValue::String(_) => "string",
            ScalarValue::Bcp47(_) => "bcp47",
            ScalarValue::LangString(_) => "langString",
            ScalarValue::DateTime(_) => "dateTime",
            ScalarValue::Duration(_) => "duration",
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ScalarValue::Float(f) => Some(*f),
            ScalarValue::NonNegativeInteger(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) | ScalarValue::Bcp47(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for ScalarValue { fn from(v: f64) -> Self { ScalarValue::Float(v) } }
impl From<u64> for ScalarValue { fn from(v: u64) -> Self { ScalarValue::NonNegativeInteger(v) } }
impl From<bool> for ScalarValue { fn from(v: bool) -> Self { ScalarValue::Boolean(v) } }
impl From<String> for ScalarValue { fn from(v: String) -> Self { ScalarValue::String(v) } }
impl From<&str> for ScalarValue { fn from(v: &str) -> Self { ScalarValue::String(v.to_owned()) } }
impl From<DateTime<Utc>> for ScalarValue { fn from(v: DateTime<Utc>) -> Self { ScalarValue::DateTime(v) } }
impl From<XsdDuration> for ScalarValue { fn from(v: XsdDuration) -> Self { ScalarValue::Duration(v) } }

// ============================================================================
// ScalarCodec
// ============================================================================

/// Decoder, encoder and ordering for one primitive kind.
///
/// `decode` must return `Err` (never panic) for raw values of the wrong
/// shape; the property decoder treats that as "this branch does not match".
pub trait ScalarCodec: fmt::Debug + Send + Sync {
    /// Kind name, e.g. `"float"`. Doubles as the tag on decoded scalars.
    fn name(&self) -> &'static str;

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue>;

    /// Fails only when handed a value of another kind.
    fn encode(&self, value: &ScalarValue) -> Result<RawValue>;

    /// Strict weak ordering over values of this codec's kind.
    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool;
}

/// Ordering fallback for values a codec does not own.
pub(crate) fn foreign_less(a: &ScalarValue, b: &ScalarValue) -> bool {
    a.type_name() < b.type_name()
}

// ============================================================================
// Scalar
// ============================================================================

/// A scalar value tagged with the codec that produced it.
#[derive(Clone)]
pub struct Scalar {
    codec: &'static dyn ScalarCodec,
    value: ScalarValue,
}

impl Scalar {
    pub fn new(codec: &'static dyn ScalarCodec, value: impl Into<ScalarValue>) -> Self {
        Self { codec, value: value.into() }
    }

    pub fn decode(codec: &'static dyn ScalarCodec, raw: &RawValue) -> Result<Self> {
        let value = codec.decode(raw)?;
        Ok(Self { codec, value })
    }

    pub fn float(v: f64) -> Self { Self::new(&FloatCodec, v) }
    pub fn non_negative_integer(v: u64) -> Self { Self::new(&NonNegativeIntegerCodec, v) }
    pub fn boolean(v: bool) -> Self { Self::new(&BooleanCodec, v) }
    pub fn string(v: impl Into<String>) -> Self { Self::new(&StringCodec, v.into()) }

    pub fn codec(&self) -> &'static dyn ScalarCodec { self.codec }
    pub fn value(&self) -> &ScalarValue { &self.value }
    pub fn into_value(self) -> ScalarValue { self.value }

    pub fn encode(&self) -> Result<RawValue> {
        self.codec.encode(&self.value)
    }

    /// Codec ordering for scalars of the same kind; codec name otherwise.
    pub fn less(&self, other: &Scalar) -> bool {
        let (mine, theirs) = (self.codec.name(), other.codec.name());
        if mine == theirs {
            self.codec.less(&self.value, &other.value)
        } else {
            mine < theirs
        }
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("codec", &self.codec.name())
            .field("value", &self.value)
            .finish()
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.codec.name() == other.codec.name() && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_tagged_with_codec() {
        let s = Scalar::decode(&FloatCodec, &json!(3.14)).unwrap();
        assert_eq!(s.codec().name(), "float");
        assert_eq!(s.value(), &ScalarValue::Float(3.14));
        assert_eq!(s.encode().unwrap(), json!(3.14));
    }

    #[test]
    fn test_scalar_less_same_codec() {
        assert!(Scalar::float(1.0).less(&Scalar::float(2.0)));
        assert!(!Scalar::float(2.0).less(&Scalar::float(1.0)));
        assert!(!Scalar::float(2.0).less(&Scalar::float(2.0)));
    }

    #[test]
    fn test_scalar_less_across_codecs_orders_by_name() {
        // "boolean" < "float"
        assert!(Scalar::boolean(true).less(&Scalar::float(0.0)));
        assert!(!Scalar::float(0.0).less(&Scalar::boolean(true)));
    }

    #[test]
    fn test_scalar_debug_shows_codec_name() {
        let dbg = format!("{:?}", Scalar::string("hi"));
        assert!(dbg.contains("\"string\""));
    }
}
