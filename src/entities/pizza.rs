//! Pizza entity - a circle with ingredients and a size category

use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, warn};

use crate::core::circle::{Circle, Disc, FromDiameter};
use crate::core::error::{CircleError, Result};
use crate::core::measure::{IntoMeasure, Measure};
use crate::yaml::value_kind;

/// Largest radius (inclusive) of a small pizza, in centimeters
pub const SMALL_MAX_RADIUS: f64 = 20.0;

/// Largest radius (inclusive) of a medium pizza, in centimeters
pub const MEDIUM_MAX_RADIUS: f64 = 40.0;

/// Header printed before the ingredient list
pub const INGREDIENTS_HEADER: &str = "The pizza contains the following ingredients:";

/// Pizza size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
}

impl PizzaSize {
    /// Categorize a (positive) radius
    pub fn from_radius(radius: Measure) -> Self {
        let r = radius.as_f64();
        if r <= SMALL_MAX_RADIUS {
            PizzaSize::Small
        } else if r <= MEDIUM_MAX_RADIUS {
            PizzaSize::Medium
        } else {
            PizzaSize::Large
        }
    }
}

impl std::fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PizzaSize::Small => write!(f, "small"),
            PizzaSize::Medium => write!(f, "medium"),
            PizzaSize::Large => write!(f, "large"),
        }
    }
}

/// Pizza entity - radius in centimeters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pizza {
    #[serde(rename = "radius")]
    disc: Disc,

    /// Ingredients in the order they were given
    pub ingredients: Vec<String>,

    /// Size category, fixed at construction
    size: PizzaSize,
}

impl Pizza {
    pub fn new<I, S>(radius: impl IntoMeasure, ingredients: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::with_disc(Disc::new(radius)?, ingredients))
    }

    /// Build a pizza from a diameter with no ingredients
    pub fn from_diameter_plain(diameter: impl IntoMeasure) -> Result<Self> {
        Self::from_diameter(diameter, Vec::new())
    }

    fn with_disc<I, S>(disc: Disc, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let size = PizzaSize::from_radius(disc.radius());
        let ingredients: Vec<String> = ingredients.into_iter().map(Into::into).collect();
        debug!(
            target: "circles::pizza",
            radius = %disc.radius(),
            %size,
            ingredients = ingredients.len(),
            "pizza created"
        );
        Self {
            disc,
            ingredients,
            size,
        }
    }

    /// Size category computed from the radius at construction
    pub fn size(&self) -> PizzaSize {
        self.size
    }

    /// Write the ingredient list, one per line, after a fixed header
    pub fn write_ingredients<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", INGREDIENTS_HEADER)?;
        for ingredient in &self.ingredients {
            writeln!(out, "{}", ingredient)?;
        }
        Ok(())
    }

    /// Print the ingredient list to stdout
    pub fn print_ingredients(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_ingredients(&mut lock)
    }
}

impl Circle for Pizza {
    fn disc(&self) -> &Disc {
        &self.disc
    }

    fn disc_mut(&mut self) -> &mut Disc {
        &mut self.disc
    }
}

impl FromDiameter for Pizza {
    type Args = Vec<String>;

    fn from_diameter(diameter: impl IntoMeasure, ingredients: Vec<String>) -> Result<Self> {
        Ok(Self::with_disc(Disc::from_diameter(diameter)?, ingredients))
    }
}

/// Read an ingredient list from untyped input
///
/// The value must be a sequence; its scalar items (null included) are taken
/// as opaque identifiers.
pub fn ingredients_from_yaml(value: &serde_yml::Value) -> Result<Vec<String>> {
    let serde_yml::Value::Sequence(items) = value else {
        warn!(target: "circles::pizza", found = value_kind(value), "ingredients value must be a list");
        return Err(CircleError::InvalidType(format!(
            "ingredients must be a list, found {}",
            value_kind(value)
        )));
    };

    items
        .iter()
        .map(|item| match item {
            serde_yml::Value::String(s) => Ok(s.clone()),
            serde_yml::Value::Number(n) => Ok(n.to_string()),
            serde_yml::Value::Bool(b) => Ok(b.to_string()),
            serde_yml::Value::Null => Ok("null".to_string()),
            other => Err(CircleError::InvalidType(format!(
                "ingredient must be a scalar, found {}",
                value_kind(other)
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_creation() {
        let pizza = Pizza::new(20, ["cheese", "sauce", "peperoni"]).unwrap();
        assert_eq!(pizza.radius(), Measure::Int(20));
        assert_eq!(pizza.ingredients, vec!["cheese", "sauce", "peperoni"]);
        assert_eq!(pizza.size(), PizzaSize::Small);
    }

    #[test]
    fn test_size_boundaries() {
        let cases: [(Measure, PizzaSize); 6] = [
            (5.0.into(), PizzaSize::Small),
            (20.into(), PizzaSize::Small),
            (21.into(), PizzaSize::Medium),
            (40.into(), PizzaSize::Medium),
            (40.1.into(), PizzaSize::Large),
            (600.into(), PizzaSize::Large),
        ];
        for (radius, expected) in cases {
            let pizza = Pizza::new(radius, Vec::<String>::new()).unwrap();
            assert_eq!(pizza.size(), expected, "radius {}", radius);
        }
    }

    #[test]
    fn test_size_is_stale_after_diameter_change() {
        let mut pizza = Pizza::new(10, Vec::<String>::new()).unwrap();
        pizza.change_diameter(200).unwrap();
        assert_eq!(pizza.radius(), Measure::Int(100));
        assert_eq!(pizza.size(), PizzaSize::Small);
    }

    #[test]
    fn test_write_ingredients() {
        let pizza = Pizza::new(20, ["cheese", "sauce", "peperoni"]).unwrap();
        let mut out = Vec::new();
        pizza.write_ingredients(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The pizza contains the following ingredients:\ncheese\nsauce\npeperoni\n"
        );
    }

    #[test]
    fn test_from_diameter() {
        let pizza = Pizza::from_diameter(22.0, vec!["basil".to_string()]).unwrap();
        assert_eq!(pizza.diameter(), Measure::Float(22.0));
        assert_eq!(pizza.size(), PizzaSize::Small);

        let plain = Pizza::from_diameter_plain(90).unwrap();
        assert!(plain.ingredients.is_empty());
        assert_eq!(plain.size(), PizzaSize::Large);
    }

    #[test]
    fn test_ingredients_must_be_a_list() {
        let text: serde_yml::Value = serde_yml::from_str("banana").unwrap();
        assert!(matches!(
            ingredients_from_yaml(&text),
            Err(CircleError::InvalidType(_))
        ));

        let list: serde_yml::Value = serde_yml::from_str("[cheese, 7]").unwrap();
        assert_eq!(ingredients_from_yaml(&list).unwrap(), vec!["cheese", "7"]);
    }

    #[test]
    fn test_null_ingredient_is_kept() {
        let list: serde_yml::Value = serde_yml::from_str("[cheese, ~, basil]").unwrap();
        assert_eq!(
            ingredients_from_yaml(&list).unwrap(),
            vec!["cheese", "null", "basil"]
        );

        let nested: serde_yml::Value = serde_yml::from_str("[[cheese]]").unwrap();
        assert!(matches!(
            ingredients_from_yaml(&nested),
            Err(CircleError::InvalidType(_))
        ));
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(
            Pizza::new(-2, Vec::<String>::new()),
            Err(CircleError::InvalidValue(_))
        ));
        let text: serde_yml::Value = serde_yml::from_str("'2'").unwrap();
        assert!(matches!(
            Pizza::new(&text, Vec::<String>::new()),
            Err(CircleError::InvalidType(_))
        ));
    }
}
