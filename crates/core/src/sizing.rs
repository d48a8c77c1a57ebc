//! Sizing results
//!
//! After a sizing run, autosized fields are filled from a table of
//! component sizes. The model only needs the lookup; [`ComponentSizes`] is
//! an in-memory table that can be loaded from TOML:
//!
//! ```toml
//! [[component_size]]
//! comp_type = "Boiler:HotWater"
//! comp_name = "MAIN BOILER"
//! description = "Design Size Nominal Capacity"
//! units = "W"
//! value = 12000.0
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Source of autosized values
pub trait SizingResults: Send + Sync {
    /// Value for the component of `comp_type` named `comp_name`
    ///
    /// `comp_name` arrives upper-cased.
    fn autosized_value(
        &self,
        comp_type: &str,
        comp_name: &str,
        description: &str,
        units: &str,
    ) -> Option<f64>;
}

#[derive(Debug, Error)]
pub enum SizingError {
    #[error("Failed to parse sizing results: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read sizing results: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ComponentSizeRow {
    comp_type: String,
    comp_name: String,
    description: String,
    units: String,
    value: f64,
}

#[derive(Debug, Default, Deserialize)]
struct ComponentSizeFile {
    #[serde(default)]
    component_size: Vec<ComponentSizeRow>,
}

type SizeKey = (String, String, String, String);

/// Component sizes keyed by type, name, description and units
///
/// Type and name match ignoring case.
#[derive(Debug, Clone, Default)]
pub struct ComponentSizes {
    values: HashMap<SizeKey, f64>,
}

fn size_key(comp_type: &str, comp_name: &str, description: &str, units: &str) -> SizeKey {
    (
        comp_type.trim().to_uppercase(),
        comp_name.trim().to_uppercase(),
        description.trim().to_string(),
        units.trim().to_string(),
    )
}

impl ComponentSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Record a value, replacing any earlier one for the same key
    pub fn insert(
        &mut self,
        comp_type: &str,
        comp_name: &str,
        description: &str,
        units: &str,
        value: f64,
    ) {
        self.values
            .insert(size_key(comp_type, comp_name, description, units), value);
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SizingError> {
        let file: ComponentSizeFile = toml::from_str(text)?;
        let mut sizes = Self::new();
        for row in file.component_size {
            sizes.insert(
                &row.comp_type,
                &row.comp_name,
                &row.description,
                &row.units,
                row.value,
            );
        }
        debug!("Loaded {} component size(s)", sizes.len());
        Ok(sizes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SizingError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}

impl SizingResults for ComponentSizes {
    fn autosized_value(
        &self,
        comp_type: &str,
        comp_name: &str,
        description: &str,
        units: &str,
    ) -> Option<f64> {
        self.values
            .get(&size_key(comp_type, comp_name, description, units))
            .copied()
    }
}
