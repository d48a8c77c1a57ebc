//! Field index resolution over the static schema tables
//!
//! Lookups are by schema name, ignoring ASCII case. Results are cached so
//! repeated resolution of the same (type, field) pair is a map hit.

use std::sync::LazyLock;

use dashmap::DashMap;
use osmodel_idd::{IddField, IddObject, IddObjectType};
use tracing::{debug, trace};

/// Error type for schema operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("Field not found: {object}.{field}")]
    FieldNotFound { object: String, field: String },

    #[error("Field index {index} out of range for {object}")]
    IndexOutOfRange { object: String, index: usize },
}

/// Global index cache: (type, upper-cased field name) -> index
static INDEX_CACHE: LazyLock<DashMap<(IddObjectType, String), usize>> =
    LazyLock::new(DashMap::new);

/// Descriptor for an object type
pub fn idd_object(object_type: IddObjectType) -> &'static IddObject {
    osmodel_idd::idd_object(object_type)
}

/// Descriptor for a schema name such as `OS:Timestep`
pub fn idd_object_by_name(name: &str) -> Result<&'static IddObject, SchemaError> {
    osmodel_idd::idd_object_by_name(name)
        .ok_or_else(|| SchemaError::UnknownObjectType(name.trim().to_string()))
}

/// Get the index of a named field
///
/// This function is cached - subsequent calls with the same type/field
/// will return the cached value without scanning the table.
pub fn field_index(object_type: IddObjectType, field_name: &str) -> Result<usize, SchemaError> {
    let cache_key = (object_type, field_name.to_ascii_uppercase());
    if let Some(entry) = INDEX_CACHE.get(&cache_key) {
        trace!("Cache hit for {}.{}: index={}", object_type, field_name, *entry);
        return Ok(*entry);
    }

    let object = idd_object(object_type);
    let index = object
        .field_index(field_name)
        .ok_or_else(|| SchemaError::FieldNotFound {
            object: object.name.to_string(),
            field: field_name.to_string(),
        })?;

    debug!("Resolved {}.{}: index={}", object.name, field_name, index);

    INDEX_CACHE.insert(cache_key, index);
    Ok(index)
}

/// Descriptor of the field at `index`
pub fn field(object_type: IddObjectType, index: usize) -> Result<&'static IddField, SchemaError> {
    let object = idd_object(object_type);
    object.field(index).ok_or_else(|| SchemaError::IndexOutOfRange {
        object: object.name.to_string(),
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_lookup() {
        assert_eq!(
            field_index(IddObjectType::OsConvergenceLimits, "Minimum System Timestep"),
            Ok(1)
        );
        assert_eq!(
            field_index(IddObjectType::OsConvergenceLimits, "maximum plant iterations"),
            Ok(4)
        );
    }

    #[test]
    fn test_cached_lookup_matches() {
        let first = field_index(IddObjectType::OsTimestep, "Number of Timesteps per Hour");
        let second = field_index(IddObjectType::OsTimestep, "NUMBER OF TIMESTEPS PER HOUR");
        assert_eq!(first, second);
        assert!(INDEX_CACHE.contains_key(&(
            IddObjectType::OsTimestep,
            "NUMBER OF TIMESTEPS PER HOUR".to_string()
        )));
    }

    #[test]
    fn test_missing_field() {
        let err = field_index(IddObjectType::OsTimestep, "Bogus").unwrap_err();
        assert_eq!(
            err,
            SchemaError::FieldNotFound {
                object: "OS:Timestep".into(),
                field: "Bogus".into()
            }
        );
        assert_eq!(err.to_string(), "Field not found: OS:Timestep.Bogus");
    }

    #[test]
    fn test_unknown_object_name() {
        assert!(matches!(
            idd_object_by_name("OS:Nope"),
            Err(SchemaError::UnknownObjectType(name)) if name == "OS:Nope"
        ));
        assert_eq!(
            idd_object_by_name("os:site").unwrap().object_type,
            IddObjectType::OsSite
        );
    }

    #[test]
    fn test_field_out_of_range() {
        assert!(field(IddObjectType::OsTimestep, 1).is_ok());
        assert!(matches!(
            field(IddObjectType::OsTimestep, 2),
            Err(SchemaError::IndexOutOfRange { index: 2, .. })
        ));
    }
}
