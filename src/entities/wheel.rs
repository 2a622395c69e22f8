//! Wheel entity - a tyre mounted on a rim
//!
//! A wheel only exists while its two components are compatible: the rim
//! diameter the tyre requires must match the rim's size in inches. The check
//! runs at construction and again whenever a component is replaced.

use serde::Serialize;
use std::mem;
use tracing::{debug, warn};

use crate::core::circle::{Circle, Disc, FromDiameter};
use crate::core::error::{CircleError, Result};
use crate::core::measure::IntoMeasure;
use crate::entities::{Rim, Tyre};

/// Wheel entity - takes its radius from the tyre
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wheel {
    #[serde(rename = "radius")]
    disc: Disc,

    tyre: Tyre,

    rim: Rim,
}

/// Rim size as the tyre label states it (nearest whole inch, ties to even)
fn whole_inches(rim: &Rim) -> f64 {
    rim.inches().round_ties_even()
}

impl Wheel {
    /// Mount `tyre` on `rim`
    ///
    /// Either argument may be a [`Shape`](super::Shape); anything other than
    /// a tyre and a rim respectively is an [`CircleError::InvalidType`].
    pub fn new<T, R>(tyre: T, rim: R) -> Result<Self>
    where
        T: TryInto<Tyre>,
        R: TryInto<Rim>,
        CircleError: From<T::Error> + From<R::Error>,
    {
        let tyre = tyre.try_into()?;
        let rim = rim.try_into()?;
        let wheel = Self {
            disc: *tyre.disc(),
            tyre,
            rim,
        };

        if !wheel.verify_rim_size() {
            warn!(
                target: "circles::wheel",
                required = wheel.tyre.necessary_rim_diameter(),
                rim_inches = wheel.rim.inches(),
                "tyre does not fit rim"
            );
            return Err(CircleError::InvalidValue(format!(
                "tyre {} requires a {}\" rim, rim measures {}\"",
                wheel.tyre.label(),
                wheel.tyre.necessary_rim_diameter(),
                wheel.rim.inches()
            )));
        }

        debug!(target: "circles::wheel", radius = %wheel.radius(), label = %wheel.tyre.label(), "wheel assembled");
        Ok(wheel)
    }

    pub fn tyre(&self) -> &Tyre {
        &self.tyre
    }

    pub fn rim(&self) -> &Rim {
        &self.rim
    }

    /// Whether the tyre's required rim diameter matches the rounded rim size
    pub fn verify_rim_size(&self) -> bool {
        f64::from(self.tyre.necessary_rim_diameter()) == whole_inches(&self.rim)
    }

    /// Swap in a new tyre, returning the old one
    ///
    /// The new tyre must require the current rim's size, rounded to whole
    /// inches. The wheel's radius is not changed.
    pub fn change_tyre<T>(&mut self, tyre: T) -> Result<Tyre>
    where
        T: TryInto<Tyre>,
        CircleError: From<T::Error>,
    {
        let tyre = tyre.try_into()?;
        let rim_inches = whole_inches(&self.rim);
        if f64::from(tyre.necessary_rim_diameter()) != rim_inches {
            warn!(
                target: "circles::wheel",
                required = tyre.necessary_rim_diameter(),
                rim_inches,
                "replacement tyre does not fit rim"
            );
            return Err(CircleError::InvalidValue(format!(
                "tyre {} requires a {}\" rim, mounted rim is {}\"",
                tyre.label(),
                tyre.necessary_rim_diameter(),
                rim_inches
            )));
        }

        debug!(target: "circles::wheel", label = %tyre.label(), "tyre changed");
        Ok(mem::replace(&mut self.tyre, tyre))
    }

    /// Swap in a new rim, returning the old one
    ///
    /// Unlike [`Wheel::change_tyre`], the rim's inch size must equal the
    /// tyre's required diameter exactly, without rounding.
    pub fn change_rim<R>(&mut self, rim: R) -> Result<Rim>
    where
        R: TryInto<Rim>,
        CircleError: From<R::Error>,
    {
        let rim = rim.try_into()?;
        let required = self.tyre.necessary_rim_diameter();
        if rim.inches() != f64::from(required) {
            warn!(
                target: "circles::wheel",
                required,
                rim_inches = rim.inches(),
                "replacement rim does not fit tyre"
            );
            return Err(CircleError::InvalidValue(format!(
                "tyre {} requires a {}\" rim, replacement rim is {}\"",
                self.tyre.label(),
                required,
                rim.inches()
            )));
        }

        debug!(target: "circles::wheel", rim_inches = rim.inches(), "rim changed");
        Ok(mem::replace(&mut self.rim, rim))
    }
}

impl Circle for Wheel {
    fn disc(&self) -> &Disc {
        &self.disc
    }

    fn disc_mut(&mut self) -> &mut Disc {
        &mut self.disc
    }
}

/// The diameter plays no part: the wheel is sized by its tyre
impl FromDiameter for Wheel {
    type Args = (Tyre, Rim);

    fn from_diameter(_diameter: impl IntoMeasure, (tyre, rim): (Tyre, Rim)) -> Result<Self> {
        Self::new(tyre, rim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measure::Measure;
    use crate::entities::{Pizza, Shape};

    fn wheel() -> Wheel {
        Wheel::new(Tyre::new(800, "235/19R19").unwrap(), Rim::new(241.3).unwrap()).unwrap()
    }

    #[test]
    fn test_wheel_takes_tyre_radius() {
        let wheel = wheel();
        assert_eq!(wheel.radius(), Measure::Int(800));
        assert_eq!(wheel.diameter(), Measure::Int(1600));
        assert!(wheel.verify_rim_size());
    }

    #[test]
    fn test_incompatible_components() {
        let result = Wheel::new(Tyre::new(800, "235/19R10").unwrap(), Rim::new(241.3).unwrap());
        assert!(matches!(result, Err(CircleError::InvalidValue(_))));
    }

    #[test]
    fn test_wrong_component_kinds() {
        let tyre = Tyre::new(800, "235/19R19").unwrap();
        let rim = Rim::new(241.3).unwrap();
        let pizza = Pizza::new(2, Vec::<String>::new()).unwrap();

        assert!(matches!(
            Wheel::new(tyre.clone(), Shape::from(pizza)),
            Err(CircleError::InvalidType(_))
        ));
        assert!(matches!(
            Wheel::new(Shape::from(rim), Shape::from(tyre)),
            Err(CircleError::InvalidType(_))
        ));
    }

    #[test]
    fn test_change_tyre() {
        let mut wheel = wheel();
        let other = Tyre::new(800, "250/19R19").unwrap();
        let old = wheel.change_tyre(other.clone()).unwrap();
        assert_eq!(old.width(), 235);
        assert_eq!(wheel.tyre(), &other);
    }

    #[test]
    fn test_change_tyre_rejections_keep_state() {
        let mut wheel = wheel();
        let before = wheel.clone();

        let misfit = Tyre::new(800, "250/19R10").unwrap();
        assert!(matches!(
            wheel.change_tyre(misfit),
            Err(CircleError::InvalidValue(_))
        ));
        assert!(matches!(
            wheel.change_tyre(Shape::from(Rim::new(241.3).unwrap())),
            Err(CircleError::InvalidType(_))
        ));
        assert_eq!(wheel, before);
    }

    #[test]
    fn test_change_rim() {
        let mut wheel = wheel();
        let other = Rim::from_diameter(482.6, ()).unwrap();
        wheel.change_rim(other.clone()).unwrap();
        assert_eq!(wheel.rim(), &other);

        assert!(matches!(
            wheel.change_rim(Rim::new(300).unwrap()),
            Err(CircleError::InvalidValue(_))
        ));
        assert!(matches!(
            wheel.change_rim(Shape::from(Tyre::new(800, "250/19R19").unwrap())),
            Err(CircleError::InvalidType(_))
        ));
        assert_eq!(wheel.rim(), &other);
    }

    #[test]
    fn test_change_rim_compares_without_rounding() {
        // 19.02" rounds to 19, good enough for a tyre swap but not a rim swap
        let mut wheel = Wheel::new(
            Tyre::new(800, "235/19R19").unwrap(),
            Rim::new(241.6).unwrap(),
        )
        .unwrap();
        assert_eq!(wheel.rim().inches(), 19.02);
        assert!(wheel.change_tyre(Tyre::new(800, "250/19R19").unwrap()).is_ok());
        assert!(matches!(
            wheel.change_rim(Rim::new(241.6).unwrap()),
            Err(CircleError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_half_inch_rim_rounds_to_even() {
        let rim = Rim::from_diameter(469.9, ()).unwrap();
        assert_eq!(rim.inches(), 18.5);
        let wheel = Wheel::new(Tyre::new(700, "225/40R18").unwrap(), rim.clone()).unwrap();
        assert!(wheel.verify_rim_size());
        assert!(matches!(
            Wheel::new(Tyre::new(700, "225/40R19").unwrap(), rim),
            Err(CircleError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_from_diameter_ignores_diameter() {
        let tyre = Tyre::new(800, "235/19R19").unwrap();
        let rim = Rim::new(241.3).unwrap();
        let wheel = Wheel::from_diameter(-5, (tyre, rim)).unwrap();
        assert_eq!(wheel.diameter(), Measure::Int(1600));
    }

    #[test]
    fn test_change_diameter() {
        let mut wheel = wheel();
        wheel.change_diameter(8).unwrap();
        assert_eq!(wheel.diameter(), Measure::Int(8));
        assert_eq!(wheel.tyre().radius(), Measure::Int(800));
    }
}
