//! Core module - the measure type, the circle contract and errors

pub mod circle;
pub mod error;
pub mod measure;

pub use circle::{validate, validate_input, Circle, Disc, FromDiameter};
pub use error::{CircleError, Result};
pub use measure::{IntoMeasure, Measure};
