//! osmodel Core - model objects over keyed field stores
//!
//! This crate holds the generic Model-Object protocol: every object is a
//! [`FieldStore`] of typed slots addressed by schema field index, owned by a
//! [`Model`] and viewed through typed wrappers generated by
//! `#[derive(ModelObject)]`.
//!
//! # Layers
//!
//! - [`schema`] - field index lookup over the `osmodel-idd` tables
//! - [`idf`] - field store, text layout, validity reports
//! - [`model`] - the model container, `ModelObject`, uniqueness and
//!   parent/child rules, autosizing
//! - [`objects`] - concrete wrapper types
//! - [`sizing`] - sizing results consumed by autosized fields
//! - [`compat`] - deprecated accessor names
//! - [`config`] - TOML configuration
//!
//! # Example
//!
//! ```ignore
//! use osmodel_core::{Model, objects::{ConvergenceLimits, SimulationControl}};
//!
//! let model = Model::new();
//! let limits = model.unique_model_object::<ConvergenceLimits>();
//! assert_eq!(limits.minimum_system_timestep(), Some(1));
//! assert_eq!(
//!     limits.parent().map(|p| p.handle()),
//!     Some(model.unique_model_object::<SimulationControl>().handle())
//! );
//! ```

// Allow the crate to refer to itself as `osmodel_core` for proc macro compatibility
extern crate self as osmodel_core;

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod compat;
pub mod config;
pub mod handle;
pub mod idf;
pub mod model;
pub mod objects;
pub mod schema;
pub mod sizing;

// Re-export schema types
pub use osmodel_idd::{IddField, IddFieldType, IddObject, IddObjectType};

pub use config::{ConfigError, ConfigResult, CoreConfig};
pub use handle::Handle;
pub use idf::{FieldSlot, FieldStore, IdfError, SizingValue, StrictnessLevel, ValidityReport};
pub use model::{
    Autosize, FieldValue, Model, ModelError, ModelObject, ModelObjectCast, ModelObjectType,
    PointerTarget, UniqueModelObject,
};
pub use schema::{SchemaError, SchemaField};
pub use sizing::{ComponentSizes, SizingResults};

// The derive shares its name with the `ModelObject` type
pub use osmodel_macros::ModelObject;

/// Install a `tracing` subscriber for the process
///
/// `RUST_LOG` takes precedence; otherwise the level comes from `config`.
/// Returns `false` if a global subscriber was already set.
pub fn init_logging(config: &CoreConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();
    if installed {
        debug!("osmodel logging at {}", config.log_level());
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_once() {
        let config = CoreConfig::default();
        // the first call may lose to another test
        init_logging(&config);
        assert!(!init_logging(&config));
    }
}
