//! Car model presets.
//!
//! The built-in presets live in `assets/car_models.json` and are parsed once
//! on first use; a catalog can also be read from any JSON document with the
//! same layout.

mod model;

pub use model::{CarModel, BODY_DEGREE, DEFAULT_TIRE_RADIUS};

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};

const BUILTIN_JSON: &str = include_str!("../../assets/car_models.json");

/// An immutable, ordered collection of car presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    models: Vec<CarModel>,
}

impl Catalog {
    /// Returns the built-in catalog, parsing it on first use.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` if the embedded presets fail to parse.
    pub fn builtin() -> Result<&'static Catalog> {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        if let Some(catalog) = BUILTIN.get() {
            return Ok(catalog);
        }
        let parsed = Self::from_json(BUILTIN_JSON)?;
        info!(models = parsed.models.len(), "loaded built-in car catalog");
        Ok(BUILTIN.get_or_init(|| parsed))
    }

    /// Parses a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` if the document does not match the
    /// catalog layout.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json).map_err(CatalogError::Malformed)?;
        debug!(models = catalog.models.len(), "parsed car catalog");
        Ok(catalog)
    }

    /// Looks up a model by name or alias, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownModel` if nothing matches.
    pub fn get(&self, name: &str) -> Result<&CarModel> {
        self.models
            .iter()
            .find(|m| m.matches(name))
            .ok_or_else(|| CatalogError::UnknownModel(name.to_owned()).into())
    }

    /// Returns the model names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name.as_str())
    }

    /// Returns all models in catalog order.
    #[must_use]
    pub fn models(&self) -> &[CarModel] {
        &self.models
    }
}
