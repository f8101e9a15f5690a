//! Numeric and boolean codecs.

use crate::model::{RawValue, shape_name};
use crate::{Error, Result};
use super::{ScalarCodec, ScalarValue, foreign_less};

/// Largest integer an f64 represents exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// xsd:float
// ============================================================================

/// `xsd:float`. Accepts JSON numbers, and numeric strings such as `"42"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatCodec;

impl ScalarCodec for FloatCodec {
    fn name(&self) -> &'static str { "float" }

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue> {
        let v = match raw {
            RawValue::Number(n) => n.as_f64(),
            RawValue::String(s) => s.trim().parse::<f64>().ok(),
            other => {
                return Err(Error::UnexpectedShape { expected: "number", got: shape_name(other) });
            }
        };
        match v {
            Some(f) if f.is_finite() => Ok(ScalarValue::Float(f)),
            _ => Err(Error::InvalidLiteral {
                kind: "float",
                message: format!("{raw} is not a finite number"),
            }),
        }
    }

    fn encode(&self, value: &ScalarValue) -> Result<RawValue> {
        let ScalarValue::Float(f) = value else {
            return Err(Error::ScalarKindMismatch { codec: self.name(), got: value.type_name() });
        };
        // Integral values go out as JSON integers, the way most encoders print them.
        if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INT {
            return Ok(RawValue::from(*f as i64));
        }
        serde_json::Number::from_f64(*f)
            .map(RawValue::Number)
            .ok_or_else(|| Error::InvalidLiteral {
                kind: "float",
                message: format!("{f} has no JSON representation"),
            })
    }

    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool {
        match (a, b) {
            // IEEE total order, so NaN set by hand still sorts consistently.
            (ScalarValue::Float(x), ScalarValue::Float(y)) => x.total_cmp(y).is_lt(),
            _ => foreign_less(a, b),
        }
    }
}

// ============================================================================
// xsd:nonNegativeInteger
// ============================================================================

/// `xsd:nonNegativeInteger`. Accepts integral JSON numbers ≥ 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeIntegerCodec;

impl ScalarCodec for NonNegativeIntegerCodec {
    fn name(&self) -> &'static str { "nonNegativeInteger" }

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue> {
        let RawValue::Number(n) = raw else {
            return Err(Error::UnexpectedShape { expected: "number", got: shape_name(raw) });
        };
        if let Some(u) = n.as_u64() {
            return Ok(ScalarValue::NonNegativeInteger(u));
        }
        match n.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= MAX_EXACT_INT => {
                Ok(ScalarValue::NonNegativeInteger(f as u64))
            }
            _ => Err(Error::InvalidLiteral {
                kind: "nonNegativeInteger",
                message: format!("{n} is not a non-negative integer"),
            }),
        }
    }

    fn encode(&self, value: &ScalarValue) -> Result<RawValue> {
        match value {
            ScalarValue::NonNegativeInteger(n) => Ok(RawValue::from(*n)),
            other => Err(Error::ScalarKindMismatch { codec: self.name(), got: other.type_name() }),
        }
    }

    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool {
        match (a, b) {
            (ScalarValue::NonNegativeInteger(x), ScalarValue::NonNegativeInteger(y)) => x < y,
            _ => foreign_less(a, b),
        }
    }
}

// ============================================================================
// xsd:boolean
// ============================================================================

/// `xsd:boolean`. Accepts JSON booleans and the numbers `0` and `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanCodec;

impl ScalarCodec for BooleanCodec {
    fn name(&self) -> &'static str { "boolean" }

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue> {
        match raw {
            RawValue::Bool(b) => Ok(ScalarValue::Boolean(*b)),
            RawValue::Number(n) => match n.as_f64() {
                Some(f) if f == 0.0 => Ok(ScalarValue::Boolean(false)),
                Some(f) if f == 1.0 => Ok(ScalarValue::Boolean(true)),
                _ => Err(Error::InvalidLiteral {
                    kind: "boolean",
                    message: format!("{n} is neither 0 nor 1"),
                }),
            },
            other => Err(Error::UnexpectedShape { expected: "boolean", got: shape_name(other) }),
        }
    }

    fn encode(&self, value: &ScalarValue) -> Result<RawValue> {
        match value {
            ScalarValue::Boolean(b) => Ok(RawValue::Bool(*b)),
            other => Err(Error::ScalarKindMismatch { codec: self.name(), got: other.type_name() }),
        }
    }

    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool {
        match (a, b) {
            // false < true
            (ScalarValue::Boolean(x), ScalarValue::Boolean(y)) => !x & y,
            _ => foreign_less(a, b),
        }
    }
}
