//! Circle trait - common interface for all circular shapes

use serde::Serialize;
use std::f64::consts::PI;
use tracing::warn;

use crate::core::error::{CircleError, Result};
use crate::core::measure::{IntoMeasure, Measure};

/// Check that a value is usable as a length
///
/// The type half of the rule (integer or float) is enforced by
/// [`IntoMeasure`]; this checks the value is strictly positive.
pub fn validate(value: Measure) -> Result<Measure> {
    if value.is_positive() {
        Ok(value)
    } else {
        warn!(target: "circles::circle", %value, "value must be greater than zero");
        Err(CircleError::InvalidValue(format!(
            "must be greater than zero, got {}",
            value
        )))
    }
}

/// Read and validate a length from any supported input
pub fn validate_input(value: impl IntoMeasure) -> Result<Measure> {
    validate(value.into_measure()?)
}

/// The radius every circular shape carries
///
/// The field is private: a radius can only be set through [`Disc::new`] or
/// [`Disc::change_diameter`], both of which validate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Disc {
    radius: Measure,
}

impl Disc {
    pub fn new(radius: impl IntoMeasure) -> Result<Self> {
        Ok(Self {
            radius: validate_input(radius)?,
        })
    }

    /// Build from a diameter (radius = diameter / 2)
    pub fn from_diameter(diameter: impl IntoMeasure) -> Result<Self> {
        Self::new(diameter.into_measure()?.halved())
    }

    pub fn radius(&self) -> Measure {
        self.radius
    }

    pub fn diameter(&self) -> Measure {
        self.radius.doubled()
    }

    pub fn area(&self) -> f64 {
        PI * self.radius.as_f64().powi(2)
    }

    /// Replace the radius with half of `new_diameter`
    ///
    /// On error the radius is left unchanged.
    pub fn change_diameter(&mut self, new_diameter: impl IntoMeasure) -> Result<()> {
        let diameter = validate_input(new_diameter)?;
        self.radius = diameter.halved();
        Ok(())
    }
}

/// Common trait for all circular shapes
pub trait Circle {
    /// The shape's radius holder
    fn disc(&self) -> &Disc;

    fn disc_mut(&mut self) -> &mut Disc;

    /// Radius, in the numeric kind it was given
    fn radius(&self) -> Measure {
        self.disc().radius()
    }

    fn diameter(&self) -> Measure {
        self.disc().diameter()
    }

    fn area(&self) -> f64 {
        self.disc().area()
    }

    /// Change the diameter, re-validating it
    ///
    /// Fields a shape derived from its radius at construction (pizza size,
    /// rim inches) are not recomputed.
    fn change_diameter(&mut self, new_diameter: impl IntoMeasure) -> Result<()>
    where
        Self: Sized,
    {
        self.disc_mut().change_diameter(new_diameter)
    }
}

/// Construction from a diameter plus whatever else the shape needs
pub trait FromDiameter: Sized {
    /// Extra constructor arguments besides the diameter
    type Args;

    fn from_diameter(diameter: impl IntoMeasure, args: Self::Args) -> Result<Self>;
}
