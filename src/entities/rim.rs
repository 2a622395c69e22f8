//! Rim entity - a circle measured in millimeters with a derived inch size
//!
//! A rim can be used on its own or as part of a [`Wheel`](super::Wheel).

use serde::Serialize;
use tracing::debug;

use crate::core::circle::{validate_input, Circle, Disc, FromDiameter};
use crate::core::error::Result;
use crate::core::measure::IntoMeasure;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Rim entity - radius in millimeters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rim {
    #[serde(rename = "radius")]
    disc: Disc,

    /// Diameter in inches, fixed at construction
    inches: f64,
}

impl Rim {
    pub fn new(radius: impl IntoMeasure) -> Result<Self> {
        Self::with_disc(Disc::new(radius)?)
    }

    fn with_disc(disc: Disc) -> Result<Self> {
        let inches = Self::mm_to_inches(disc.diameter())?;
        debug!(target: "circles::rim", radius = %disc.radius(), inches, "rim created");
        Ok(Self { disc, inches })
    }

    /// Diameter in inches, rounded to two decimals when the rim was built
    pub fn inches(&self) -> f64 {
        self.inches
    }

    /// Convert millimeters to inches, rounded to two decimals
    ///
    /// The value goes through the same validation as a radius.
    pub fn mm_to_inches(mm: impl IntoMeasure) -> Result<f64> {
        let mm = validate_input(mm)?;
        Ok(round_to_hundredths(mm.as_f64() / MM_PER_INCH))
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

impl Circle for Rim {
    fn disc(&self) -> &Disc {
        &self.disc
    }

    fn disc_mut(&mut self) -> &mut Disc {
        &mut self.disc
    }
}

impl FromDiameter for Rim {
    type Args = ();

    fn from_diameter(diameter: impl IntoMeasure, _: ()) -> Result<Self> {
        Self::with_disc(Disc::from_diameter(diameter)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CircleError;
    use crate::core::measure::Measure;

    #[test]
    fn test_rim_creation() {
        let rim = Rim::new(12).unwrap();
        assert_eq!(rim.radius(), Measure::Int(12));
        assert_eq!(rim.inches(), 0.94);
    }

    #[test]
    fn test_mm_to_inches() {
        assert_eq!(Rim::mm_to_inches(2345).unwrap(), 92.32);
        assert_eq!(Rim::mm_to_inches(482.6).unwrap(), 19.0);
    }

    #[test]
    fn test_mm_to_inches_rejects_bad_input() {
        let text: serde_yml::Value = serde_yml::from_str("'2345'").unwrap();
        assert!(matches!(
            Rim::mm_to_inches(&text),
            Err(CircleError::InvalidType(_))
        ));
        assert!(matches!(
            Rim::mm_to_inches(0),
            Err(CircleError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_inches_are_stale_after_diameter_change() {
        let mut rim = Rim::new(241.3).unwrap();
        rim.change_diameter(100).unwrap();
        assert_eq!(rim.diameter(), Measure::Int(100));
        assert_eq!(rim.inches(), 19.0);
    }

    #[test]
    fn test_from_diameter() {
        let rim = Rim::from_diameter(232, ()).unwrap();
        assert_eq!(rim.diameter(), Measure::Int(232));
        assert_eq!(rim.inches(), 9.13);
    }
}
