//! Entity type definitions
//!
//! circles supports the following shapes:
//!
//! - [`Pizza`] - ingredients and a size category derived from the radius
//! - [`Rim`] - millimeter radius with a derived inch size
//! - [`Tyre`] - radius plus a parsed `WWW/HHRDD` size label
//! - [`Wheel`] - a tyre mounted on a compatible rim
//!
//! [`Shape`] holds any one of them.

pub mod pizza;
pub mod rim;
pub mod tyre;
pub mod wheel;

pub use pizza::{Pizza, PizzaSize};
pub use rim::Rim;
pub use tyre::{Tyre, TyreLabel};
pub use wheel::Wheel;

use serde::Serialize;

use crate::core::circle::{Circle, Disc};
use crate::core::error::CircleError;

/// Any circular shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Pizza(Pizza),
    Rim(Rim),
    Tyre(Tyre),
    Wheel(Wheel),
}

impl Shape {
    /// The shape kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Pizza(_) => "pizza",
            Shape::Rim(_) => "rim",
            Shape::Tyre(_) => "tyre",
            Shape::Wheel(_) => "wheel",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (radius {})", self.kind(), self.radius())
    }
}

impl Circle for Shape {
    fn disc(&self) -> &Disc {
        match self {
            Shape::Pizza(p) => p.disc(),
            Shape::Rim(r) => r.disc(),
            Shape::Tyre(t) => t.disc(),
            Shape::Wheel(w) => w.disc(),
        }
    }

    fn disc_mut(&mut self) -> &mut Disc {
        match self {
            Shape::Pizza(p) => p.disc_mut(),
            Shape::Rim(r) => r.disc_mut(),
            Shape::Tyre(t) => t.disc_mut(),
            Shape::Wheel(w) => w.disc_mut(),
        }
    }
}

impl From<Pizza> for Shape {
    fn from(pizza: Pizza) -> Self {
        Shape::Pizza(pizza)
    }
}

impl From<Rim> for Shape {
    fn from(rim: Rim) -> Self {
        Shape::Rim(rim)
    }
}

impl From<Tyre> for Shape {
    fn from(tyre: Tyre) -> Self {
        Shape::Tyre(tyre)
    }
}

impl From<Wheel> for Shape {
    fn from(wheel: Wheel) -> Self {
        Shape::Wheel(wheel)
    }
}

fn wrong_kind(expected: &str, found: &Shape) -> CircleError {
    tracing::warn!(target: "circles::shape", expected, found = found.kind(), "wrong shape kind");
    CircleError::InvalidType(format!("expected a {}, found a {}", expected, found.kind()))
}

impl TryFrom<Shape> for Tyre {
    type Error = CircleError;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Tyre(tyre) => Ok(tyre),
            other => Err(wrong_kind("tyre", &other)),
        }
    }
}

impl TryFrom<Shape> for Rim {
    type Error = CircleError;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        match shape {
            Shape::Rim(rim) => Ok(rim),
            other => Err(wrong_kind("rim", &other)),
        }
    }
}
