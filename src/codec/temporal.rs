//! Date-time and duration codecs.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{RawValue, shape_name};
use crate::{Error, Result};
use super::{ScalarCodec, ScalarValue, foreign_less};

// ============================================================================
// xsd:dateTime
// ============================================================================

/// `xsd:dateTime`. RFC 3339, with the seconds field optional on input.
///
/// Encodes as RFC 3339 in UTC (`2019-03-01T10:00:00Z`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeCodec;

impl DateTimeCodec {
    fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        // Minute precision: `2019-03-01T10:00Z` or `2019-03-01T10:00+02:00`.
        if let Some(naive) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
            return NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M")
                .ok()
                .map(|n| n.and_utc());
        }
        DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z")
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl ScalarCodec for DateTimeCodec {
    fn name(&self) -> &'static str { "dateTime" }

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue> {
        let RawValue::String(s) = raw else {
            return Err(Error::UnexpectedShape { expected: "string", got: shape_name(raw) });
        };
        Self::parse(s).map(ScalarValue::DateTime).ok_or_else(|| Error::InvalidLiteral {
            kind: "dateTime",
            message: format!("{s:?} is not an RFC 3339 date-time"),
        })
    }

    fn encode(&self, value: &ScalarValue) -> Result<RawValue> {
        match value {
            ScalarValue::DateTime(dt) => {
                Ok(RawValue::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
            }
            other => Err(Error::ScalarKindMismatch { codec: self.name(), got: other.type_name() }),
        }
    }

    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool {
        match (a, b) {
            (ScalarValue::DateTime(x), ScalarValue::DateTime(y)) => x < y,
            _ => foreign_less(a, b),
        }
    }
}

// ============================================================================
// xsd:duration
// ============================================================================

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;
/// xsd:duration cannot express calendar months; 30 days stands in.
const NANOS_PER_MONTH: i128 = 30 * NANOS_PER_DAY;
/// 365 days, leap years ignored.
const NANOS_PER_YEAR: i128 = 365 * NANOS_PER_DAY;

/// A fixed-length `xsd:duration`, e.g. `P1DT2H` or `-PT30.5S`.
///
/// Years and months are folded into days on input, so `P1Y` and `P365D`
/// are the same value and encode identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct XsdDuration {
    /// Signed length in nanoseconds.
    nanos: i128,
}

impl XsdDuration {
    pub const ZERO: XsdDuration = XsdDuration { nanos: 0 };

    pub fn from_nanos(nanos: i128) -> Self { Self { nanos } }
    pub fn from_seconds(seconds: i64) -> Self { Self { nanos: seconds as i128 * NANOS_PER_SECOND } }
    pub fn as_nanos(&self) -> i128 { self.nanos }

    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        let secs = i64::try_from(self.nanos.div_euclid(NANOS_PER_SECOND)).ok()?;
        let nanos = self.nanos.rem_euclid(NANOS_PER_SECOND) as u32;
        TimeDelta::new(secs, nanos)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |message: &str| Error::InvalidLiteral {
            kind: "duration",
            message: format!("{input:?}: {message}"),
        };
        let (negative, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let rest = rest.strip_prefix('P').ok_or_else(|| invalid("missing 'P'"))?;
        let (date, time) = match rest.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };
        if time == Some("") {
            return Err(invalid("empty time part"));
        }
        if date.is_empty() && time.is_none() {
            return Err(invalid("no fields"));
        }

        let mut nanos = parse_fields(date, &[('Y', NANOS_PER_YEAR), ('M', NANOS_PER_MONTH), ('D', NANOS_PER_DAY)])
            .map_err(|m| invalid(m))?;
        if let Some(time) = time {
            let time_nanos = parse_fields(time, &[('H', NANOS_PER_HOUR), ('M', NANOS_PER_MINUTE), ('S', NANOS_PER_SECOND)])
                .map_err(|m| invalid(m))?;
            nanos = nanos.checked_add(time_nanos).ok_or_else(|| invalid(OUT_OF_RANGE))?;
        }
        if negative {
            nanos = nanos.checked_neg().ok_or_else(|| invalid(OUT_OF_RANGE))?;
        }
        Ok(Self { nanos })
    }
}

const OUT_OF_RANGE: &str = "duration out of range";

/// Sums `<number><designator>` fields, designators in the given order.
/// Only a trailing seconds field may carry a fraction.
fn parse_fields(part: &str, units: &[(char, i128)]) -> std::result::Result<i128, &'static str> {
    let mut total = 0i128;
    let mut next_unit = 0;
    let mut rest = part;
    while !rest.is_empty() {
        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or("number without designator")?;
        let (number, tail) = rest.split_at(end);
        let designator = tail.chars().next().ok_or("number without designator")?;
        rest = &tail[designator.len_utf8()..];

        let offset = units[next_unit..]
            .iter()
            .position(|(d, _)| *d == designator)
            .ok_or("unexpected or out-of-order designator")?;
        let (_, scale) = units[next_unit + offset];
        next_unit += offset + 1;

        if number.is_empty() {
            return Err("designator without number");
        }
        let field = match number.split_once('.') {
            None => number
                .parse::<i128>()
                .map_err(|_| "bad integer")?
                .checked_mul(scale)
                .ok_or(OUT_OF_RANGE)?,
            Some((whole, frac)) => {
                if designator != 'S' || !rest.is_empty() || frac.is_empty() || whole.is_empty() {
                    return Err("fraction only allowed on seconds");
                }
                let whole = whole.parse::<i128>().map_err(|_| "bad integer")?;
                let digits = &frac[..frac.len().min(9)];
                let frac_nanos = digits.parse::<i128>().map_err(|_| "bad fraction")?
                    * 10i128.pow(9 - digits.len() as u32);
                whole
                    .checked_mul(scale)
                    .and_then(|n| n.checked_add(frac_nanos))
                    .ok_or(OUT_OF_RANGE)?
            }
        };
        total = total.checked_add(field).ok_or(OUT_OF_RANGE)?;
    }
    Ok(total)
}

impl fmt::Display for XsdDuration {
    /// Canonical form: largest units first, zero fields omitted, `PT0S` for zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos == 0 {
            return f.write_str("PT0S");
        }
        if self.nanos < 0 {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        let mut left = self.nanos.unsigned_abs();
        for (unit, scale) in [('Y', NANOS_PER_YEAR), ('M', NANOS_PER_MONTH), ('D', NANOS_PER_DAY)] {
            let scale = scale as u128;
            let n = left / scale;
            if n > 0 {
                write!(f, "{n}{unit}")?;
                left -= n * scale;
            }
        }
        if left == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        for (unit, scale) in [('H', NANOS_PER_HOUR), ('M', NANOS_PER_MINUTE)] {
            let scale = scale as u128;
            let n = left / scale;
            if n > 0 {
                write!(f, "{n}{unit}")?;
                left -= n * scale;
            }
        }
        if left > 0 {
            let secs = left / NANOS_PER_SECOND as u128;
            let frac = left % NANOS_PER_SECOND as u128;
            if frac == 0 {
                write!(f, "{secs}S")?;
            } else {
                let digits = format!("{frac:09}");
                write!(f, "{secs}.{}S", digits.trim_end_matches('0'))?;
            }
        }
        Ok(())
    }
}

impl FromStr for XsdDuration {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl From<TimeDelta> for XsdDuration {
    fn from(d: TimeDelta) -> Self {
        Self { nanos: d.num_seconds() as i128 * NANOS_PER_SECOND + d.subsec_nanos() as i128 }
    }
}

/// `xsd:duration`, e.g. `"PT2H30M"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationCodec;

impl ScalarCodec for DurationCodec {
    fn name(&self) -> &'static str { "duration" }

    fn decode(&self, raw: &RawValue) -> Result<ScalarValue> {
        match raw {
            RawValue::String(s) => XsdDuration::parse(s).map(ScalarValue::Duration),
            other => Err(Error::UnexpectedShape { expected: "string", got: shape_name(other) }),
        }
    }

    fn encode(&self, value: &ScalarValue) -> Result<RawValue> {
        match value {
            ScalarValue::Duration(d) => Ok(RawValue::String(d.to_string())),
            other => Err(Error::ScalarKindMismatch { codec: self.name(), got: other.type_name() }),
        }
    }

    fn less(&self, a: &ScalarValue, b: &ScalarValue) -> bool {
        match (a, b) {
            (ScalarValue::Duration(x), ScalarValue::Duration(y)) => x < y,
            _ => foreign_less(a, b),
        }
    }
}
