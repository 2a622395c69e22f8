//! Tyre entity - a circle described by a `WWW/HHRDD` size label

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::core::circle::{Circle, Disc, FromDiameter};
use crate::core::error::{CircleError, Result};
use crate::core::measure::IntoMeasure;
use crate::yaml::value_kind;

/// Length of a tyre label, e.g. `235/19R19`
pub const LABEL_LEN: usize = 9;

const WIDTH: Range<usize> = 0..3;
const ASPECT_RATIO: Range<usize> = 4..6;
const RIM_DIAMETER: Range<usize> = 7..9;
const SLASH_AT: usize = 3;
const R_AT: usize = 6;

/// A parsed tyre size label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TyreLabel {
    /// Tread width in millimeters
    pub width: u32,

    /// Sidewall height as a percentage of the width
    pub aspect_ratio: u32,

    /// Rim diameter the tyre fits, in inches
    pub rim_diameter: u32,
}

impl FromStr for TyreLabel {
    type Err = CircleError;

    fn from_str(label: &str) -> Result<Self> {
        let reject = |reason: String| {
            warn!(target: "circles::tyre", label, %reason, "tyre label rejected");
            CircleError::format(label, reason)
        };

        if !label.is_ascii() {
            return Err(reject("label must be ASCII".to_string()));
        }
        if label.len() != LABEL_LEN {
            return Err(reject(format!(
                "expected {} characters, found {}",
                LABEL_LEN,
                label.len()
            )));
        }

        let bytes = label.as_bytes();
        if bytes[SLASH_AT] != b'/' {
            return Err(reject(format!("expected '/' at position {}", SLASH_AT)));
        }
        if bytes[R_AT] != b'R' {
            return Err(reject(format!("expected 'R' at position {}", R_AT)));
        }

        let segment = |range: Range<usize>, name: &str| {
            parse_digits(&bytes[range.clone()]).ok_or_else(|| {
                reject(format!(
                    "{} at positions {}-{} must be numeric",
                    name,
                    range.start,
                    range.end - 1
                ))
            })
        };

        Ok(TyreLabel {
            width: segment(WIDTH, "width")?,
            aspect_ratio: segment(ASPECT_RATIO, "aspect ratio")?,
            rim_diameter: segment(RIM_DIAMETER, "rim diameter")?,
        })
    }
}

fn parse_digits(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

impl TryFrom<&str> for TyreLabel {
    type Error = CircleError;

    fn try_from(label: &str) -> Result<Self> {
        label.parse()
    }
}

/// Untyped input: only a string can be a label
impl TryFrom<&serde_yml::Value> for TyreLabel {
    type Error = CircleError;

    fn try_from(value: &serde_yml::Value) -> Result<Self> {
        match value {
            serde_yml::Value::String(s) => s.parse(),
            other => {
                let found = value_kind(other);
                warn!(target: "circles::tyre", found, "tyre label must be a string");
                Err(CircleError::format(
                    format!("{:?}", other),
                    format!("label must be a string, found {}", found),
                ))
            }
        }
    }
}

impl fmt::Display for TyreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}/{:02}R{:02}",
            self.width, self.aspect_ratio, self.rim_diameter
        )
    }
}

impl Serialize for TyreLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Tyre entity - radius in millimeters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tyre {
    #[serde(rename = "radius")]
    disc: Disc,

    label: TyreLabel,
}

impl Tyre {
    pub fn new<L>(radius: impl IntoMeasure, label: L) -> Result<Self>
    where
        L: TryInto<TyreLabel>,
        CircleError: From<L::Error>,
    {
        let disc = Disc::new(radius)?;
        let label = label.try_into()?;
        Ok(Self::with_disc(disc, label))
    }

    /// Build from a diameter and a label, checking the diameter first
    pub fn from_diameter_and_label<L>(diameter: impl IntoMeasure, label: L) -> Result<Self>
    where
        L: TryInto<TyreLabel>,
        CircleError: From<L::Error>,
    {
        let disc = Disc::from_diameter(diameter)?;
        let label = label.try_into()?;
        Ok(Self::with_disc(disc, label))
    }

    fn with_disc(disc: Disc, label: TyreLabel) -> Self {
        debug!(target: "circles::tyre", radius = %disc.radius(), %label, "tyre created");
        Self { disc, label }
    }

    pub fn label(&self) -> TyreLabel {
        self.label
    }

    /// Tread width in millimeters
    pub fn width(&self) -> u32 {
        self.label.width
    }

    pub fn aspect_ratio(&self) -> u32 {
        self.label.aspect_ratio
    }

    /// Rim diameter (inches) this tyre requires
    pub fn necessary_rim_diameter(&self) -> u32 {
        self.label.rim_diameter
    }
}

impl Circle for Tyre {
    fn disc(&self) -> &Disc {
        &self.disc
    }

    fn disc_mut(&mut self) -> &mut Disc {
        &mut self.disc
    }
}

impl FromDiameter for Tyre {
    type Args = String;

    fn from_diameter(diameter: impl IntoMeasure, label: String) -> Result<Self> {
        Self::from_diameter_and_label(diameter, label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measure::Measure;

    fn assert_bad_label(label: &str) {
        assert!(
            matches!(
                label.parse::<TyreLabel>(),
                Err(CircleError::InvalidFormat { .. })
            ),
            "{:?} should be rejected",
            label
        );
    }

    #[test]
    fn test_tyre_creation() {
        let tyre = Tyre::new(130, "123/21R21").unwrap();
        assert_eq!(tyre.radius(), Measure::Int(130));
        assert_eq!(tyre.width(), 123);
        assert_eq!(tyre.aspect_ratio(), 21);
        assert_eq!(tyre.necessary_rim_diameter(), 21);
    }

    #[test]
    fn test_label_rejections() {
        assert_bad_label("123?21R21");
        assert_bad_label("123/21T21");
        assert_bad_label("AAA/BBRCC");
        assert_bad_label("123/21R2");
        assert_bad_label("123/21R211");
        assert_bad_label("");
        assert_bad_label("１２３/21R21");
        assert_bad_label("12 /21R21");
    }

    #[test]
    fn test_non_string_label() {
        let number: serde_yml::Value = serde_yml::from_str("123").unwrap();
        assert!(matches!(
            Tyre::new(130, &number),
            Err(CircleError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_label_display() {
        let label: TyreLabel = "065/05R09".parse().unwrap();
        assert_eq!(label.width, 65);
        assert_eq!(label.to_string(), "065/05R09");
    }

    #[test]
    fn test_from_diameter() {
        let tyre = Tyre::from_diameter(2, "235/19R19".to_string()).unwrap();
        assert_eq!(tyre.diameter(), Measure::Int(2));
        assert_eq!(tyre.necessary_rim_diameter(), 19);

        let parsed: TyreLabel = "235/19R19".parse().unwrap();
        let tyre = Tyre::from_diameter_and_label(1600, parsed).unwrap();
        assert_eq!(tyre.radius(), Measure::Float(800.0));
    }

    #[test]
    fn test_from_diameter_checks_diameter_then_label() {
        assert!(matches!(
            Tyre::from_diameter(260, "123?21R21".to_string()),
            Err(CircleError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Tyre::from_diameter(0, "123?21R21".to_string()),
            Err(CircleError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_bad_radius_checked_before_label() {
        assert!(matches!(
            Tyre::new(0, "not a label"),
            Err(CircleError::InvalidValue(_))
        ));
    }
}
