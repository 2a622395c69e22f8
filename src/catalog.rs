//! Shape catalog - named shapes described in a YAML document
//!
//! ```yaml
//! pizzas:
//!   margherita: { radius: 16, ingredients: [tomato, mozzarella, basil] }
//! rims:
//!   nineteen: { diameter: 482.6 }
//! tyres:
//!   summer: { radius: 800, label: 235/19R19 }
//! wheels:
//!   front: { tyre: summer, rim: nineteen }
//! ```
//!
//! Shape fields are read as untyped YAML so that a value of the wrong kind
//! is reported the same way the shape constructors report it.

use miette::Diagnostic;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::circle::{Disc, FromDiameter};
use crate::core::error::CircleError;
use crate::entities::pizza::ingredients_from_yaml;
use crate::entities::{Pizza, Rim, Shape, Tyre, Wheel};
use crate::yaml::YamlSyntaxError;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("failed to read catalog {path:?}")]
    #[diagnostic(code(circles::catalog::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{section} entry '{name}' is invalid")]
    #[diagnostic(code(circles::catalog::entry))]
    Entry {
        section: &'static str,
        name: String,
        #[source]
        #[diagnostic_source]
        source: CircleError,
    },

    #[error("wheel '{wheel}' references unknown {component} '{reference}'")]
    #[diagnostic(
        code(circles::catalog::unknown_reference),
        help("wheels can only use tyres and rims defined in the same catalog")
    )]
    UnknownReference {
        wheel: String,
        component: &'static str,
        reference: String,
    },
}

impl CatalogError {
    /// The shape validation error behind an entry failure, if any
    pub fn circle_error(&self) -> Option<&CircleError> {
        match self {
            CatalogError::Entry { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCatalog {
    pizzas: BTreeMap<String, RawPizza>,
    rims: BTreeMap<String, RawRim>,
    tyres: BTreeMap<String, RawTyre>,
    wheels: BTreeMap<String, RawWheel>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPizza {
    radius: Option<serde_yml::Value>,
    diameter: Option<serde_yml::Value>,
    ingredients: Option<serde_yml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRim {
    radius: Option<serde_yml::Value>,
    diameter: Option<serde_yml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTyre {
    radius: Option<serde_yml::Value>,
    diameter: Option<serde_yml::Value>,
    label: Option<serde_yml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWheel {
    tyre: String,
    rim: String,
}

/// How an entry gave its size
enum Size<'a> {
    Radius(&'a serde_yml::Value),
    Diameter(&'a serde_yml::Value),
}

impl<'a> Size<'a> {
    fn pick(
        radius: Option<&'a serde_yml::Value>,
        diameter: Option<&'a serde_yml::Value>,
    ) -> Result<Self, CircleError> {
        match (radius, diameter) {
            (Some(r), None) => Ok(Size::Radius(r)),
            (None, Some(d)) => Ok(Size::Diameter(d)),
            (Some(_), Some(_)) => Err(CircleError::InvalidValue(
                "give either a radius or a diameter, not both".to_string(),
            )),
            (None, None) => Err(CircleError::InvalidValue(
                "a radius or a diameter is required".to_string(),
            )),
        }
    }

    fn disc(&self) -> Result<Disc, CircleError> {
        match self {
            Size::Radius(r) => Disc::new(*r),
            Size::Diameter(d) => Disc::from_diameter(*d),
        }
    }
}

impl RawPizza {
    fn build(&self) -> Result<Pizza, CircleError> {
        let size = Size::pick(self.radius.as_ref(), self.diameter.as_ref())?;
        // radius is checked before ingredients, as in the constructor
        size.disc()?;
        let ingredients = match &self.ingredients {
            Some(value) => ingredients_from_yaml(value)?,
            None => Vec::new(),
        };
        match size {
            Size::Radius(r) => Pizza::new(r, ingredients),
            Size::Diameter(d) => Pizza::from_diameter(d, ingredients),
        }
    }
}

impl RawRim {
    fn build(&self) -> Result<Rim, CircleError> {
        match Size::pick(self.radius.as_ref(), self.diameter.as_ref())? {
            Size::Radius(r) => Rim::new(r),
            Size::Diameter(d) => Rim::from_diameter(d, ()),
        }
    }
}

impl RawTyre {
    fn build(&self) -> Result<Tyre, CircleError> {
        let size = Size::pick(self.radius.as_ref(), self.diameter.as_ref())?;
        let Some(label) = &self.label else {
            size.disc()?;
            return Err(CircleError::format("", "a tyre label is required"));
        };
        match size {
            Size::Radius(r) => Tyre::new(r, label),
            Size::Diameter(d) => Tyre::from_diameter_and_label(d, label),
        }
    }
}

fn entry_error<'a>(
    section: &'static str,
    name: &'a str,
) -> impl FnOnce(CircleError) -> CatalogError + 'a {
    move |source| {
        warn!(target: "circles::catalog", section, name, error = %source, "catalog entry rejected");
        CatalogError::Entry {
            section,
            name: name.to_string(),
            source,
        }
    }
}

/// A validated set of named shapes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pizzas: BTreeMap<String, Pizza>,
    rims: BTreeMap<String, Rim>,
    tyres: BTreeMap<String, Tyre>,
    wheels: BTreeMap<String, Wheel>,
}

impl Catalog {
    /// Load a catalog from a YAML file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source, &path.display().to_string())
    }

    /// Parse and validate a catalog; `filename` labels diagnostics
    pub fn from_yaml_str(source: &str, filename: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_yml::from_str(source)
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, filename))?;

        let mut catalog = Catalog::default();

        for (name, entry) in &raw.pizzas {
            let pizza = entry.build().map_err(entry_error("pizza", name))?;
            catalog.pizzas.insert(name.clone(), pizza);
        }
        for (name, entry) in &raw.rims {
            let rim = entry.build().map_err(entry_error("rim", name))?;
            catalog.rims.insert(name.clone(), rim);
        }
        for (name, entry) in &raw.tyres {
            let tyre = entry.build().map_err(entry_error("tyre", name))?;
            catalog.tyres.insert(name.clone(), tyre);
        }
        for (name, entry) in &raw.wheels {
            let wheel = catalog.assemble(name, entry)?;
            catalog.wheels.insert(name.clone(), wheel);
        }

        debug!(
            target: "circles::catalog",
            filename,
            pizzas = catalog.pizzas.len(),
            rims = catalog.rims.len(),
            tyres = catalog.tyres.len(),
            wheels = catalog.wheels.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn assemble(&self, name: &str, entry: &RawWheel) -> Result<Wheel, CatalogError> {
        let unknown = |component: &'static str, reference: &str| CatalogError::UnknownReference {
            wheel: name.to_string(),
            component,
            reference: reference.to_string(),
        };
        let tyre = self
            .tyres
            .get(&entry.tyre)
            .ok_or_else(|| unknown("tyre", &entry.tyre))?;
        let rim = self
            .rims
            .get(&entry.rim)
            .ok_or_else(|| unknown("rim", &entry.rim))?;
        Wheel::new(tyre.clone(), rim.clone()).map_err(entry_error("wheel", name))
    }

    pub fn pizza(&self, name: &str) -> Option<&Pizza> {
        self.pizzas.get(name)
    }

    pub fn rim(&self, name: &str) -> Option<&Rim> {
        self.rims.get(name)
    }

    pub fn tyre(&self, name: &str) -> Option<&Tyre> {
        self.tyres.get(name)
    }

    pub fn wheel(&self, name: &str) -> Option<&Wheel> {
        self.wheels.get(name)
    }

    /// Total number of shapes
    pub fn len(&self) -> usize {
        self.pizzas.len() + self.rims.len() + self.tyres.len() + self.wheels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All shapes: pizzas, rims, tyres, then wheels, each by name
    pub fn shapes(&self) -> impl Iterator<Item = (&str, Shape)> + '_ {
        let pizzas = self.pizzas.iter().map(|(n, p)| (n.as_str(), Shape::from(p.clone())));
        let rims = self.rims.iter().map(|(n, r)| (n.as_str(), Shape::from(r.clone())));
        let tyres = self.tyres.iter().map(|(n, t)| (n.as_str(), Shape::from(t.clone())));
        let wheels = self.wheels.iter().map(|(n, w)| (n.as_str(), Shape::from(w.clone())));
        pizzas.chain(rims).chain(tyres).chain(wheels)
    }
}
