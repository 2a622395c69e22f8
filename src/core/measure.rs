//! Measure - a numeric length that remembers whether it was an integer or a float

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

use crate::core::error::{CircleError, Result};
use crate::yaml::value_kind;

/// A length value as given by the caller
///
/// Integer input stays integer through doubling, so a radius of `2` has a
/// diameter of `4` rather than `4.0`. Halving always produces a float.
#[derive(Debug, Clone, Copy)]
pub enum Measure {
    Int(i64),
    Float(f64),
}

impl Measure {
    /// The value as a float, for arithmetic
    pub fn as_f64(self) -> f64 {
        match self {
            Measure::Int(i) => i as f64,
            Measure::Float(x) => x,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Measure::Int(_))
    }

    pub fn is_float(self) -> bool {
        matches!(self, Measure::Float(_))
    }

    /// Strictly greater than zero (NaN is not)
    pub fn is_positive(self) -> bool {
        match self {
            Measure::Int(i) => i > 0,
            Measure::Float(x) => x > 0.0,
        }
    }

    /// Twice the value, keeping integer kind unless it overflows
    pub fn doubled(self) -> Measure {
        match self {
            Measure::Int(i) => i
                .checked_mul(2)
                .map(Measure::Int)
                .unwrap_or(Measure::Float(i as f64 * 2.0)),
            Measure::Float(x) => Measure::Float(x * 2.0),
        }
    }

    /// Half the value, always a float
    pub fn halved(self) -> Measure {
        Measure::Float(self.as_f64() / 2.0)
    }
}

impl PartialEq for Measure {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Measure::Int(a), Measure::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Measure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Measure::Int(a), Measure::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Int(i) => write!(f, "{}", i),
            Measure::Float(x) => write!(f, "{}", x),
        }
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Measure::Int(i) => serializer.serialize_i64(*i),
            Measure::Float(x) => serializer.serialize_f64(*x),
        }
    }
}

impl From<i32> for Measure {
    fn from(value: i32) -> Self {
        Measure::Int(value.into())
    }
}

impl From<i64> for Measure {
    fn from(value: i64) -> Self {
        Measure::Int(value)
    }
}

impl From<u32> for Measure {
    fn from(value: u32) -> Self {
        Measure::Int(value.into())
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Float(value)
    }
}

/// Untyped input: anything but a YAML number is the wrong type
impl TryFrom<&serde_yml::Value> for Measure {
    type Error = CircleError;

    fn try_from(value: &serde_yml::Value) -> Result<Self> {
        if let serde_yml::Value::Number(n) = value {
            if let Some(i) = n.as_i64() {
                return Ok(Measure::Int(i));
            }
            return Ok(Measure::Float(n.as_f64()));
        }
        Err(CircleError::InvalidType(format!(
            "expected an integer or a float, found {}",
            value_kind(value)
        )))
    }
}

/// Anything that can be read as a [`Measure`], failing with a [`CircleError`]
///
/// Covers the plain numeric types (which cannot fail) and untyped YAML values.
pub trait IntoMeasure {
    fn into_measure(self) -> Result<Measure>;
}

impl<T> IntoMeasure for T
where
    T: TryInto<Measure>,
    CircleError: From<T::Error>,
{
    fn into_measure(self) -> Result<Measure> {
        self.try_into().map_err(CircleError::from)
    }
}
