//! circles: circular physical objects
//!
//! Pizzas, rims, tyres and wheels modeled as circles with validated radii,
//! derived measurements and the tyre/rim compatibility rule for wheels.

pub mod catalog;
pub mod core;
pub mod entities;
pub mod yaml;

pub use crate::catalog::{Catalog, CatalogError};
pub use crate::core::{Circle, CircleError, Disc, FromDiameter, IntoMeasure, Measure, Result};
pub use crate::entities::{Pizza, PizzaSize, Rim, Shape, Tyre, TyreLabel, Wheel};
