//! osmodel IDD - static schema tables for OpenStudio model objects
//!
//! This crate describes object types the way an Input Data Dictionary does:
//! an ordered list of fields per type, each with a data type, defaults,
//! numeric bounds and the sizing markers. It has no dependencies and
//! compiles quickly, allowing parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`field`] - Field descriptors and numeric bounds
//! - [`object`] - Object descriptors
//! - [`object_type`] - The closed set of known object types
//! - [`definitions`] - The schema tables themselves

pub mod definitions;
pub mod field;
pub mod object;
pub mod object_type;

pub use field::{Bound, IddField, IddFieldType};
pub use object::IddObject;
pub use object_type::IddObjectType;

/// Look up the descriptor for an object type.
pub fn idd_object(object_type: IddObjectType) -> &'static IddObject {
    definitions::lookup(object_type)
}

/// Look up an object type by its schema name, ignoring ASCII case.
pub fn idd_object_by_name(name: &str) -> Option<&'static IddObject> {
    IddObjectType::ALL
        .iter()
        .map(|ty| idd_object(*ty))
        .find(|obj| obj.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_table() {
        for ty in IddObjectType::ALL {
            let obj = idd_object(*ty);
            assert_eq!(obj.object_type, *ty);
            assert!(!obj.fields.is_empty(), "{} has no fields", obj.name);
        }
    }

    #[test]
    fn name_lookup_ignores_case() {
        let obj = idd_object_by_name("os:convergencelimits").unwrap();
        assert_eq!(obj.object_type, IddObjectType::OsConvergenceLimits);
        assert!(idd_object_by_name("OS:NotAThing").is_none());
    }

    #[test]
    fn modeling_types_lead_with_a_handle() {
        for ty in IddObjectType::ALL {
            let obj = idd_object(*ty);
            if obj.has_handle_field {
                assert_eq!(obj.fields[0].field_type, IddFieldType::Handle);
            } else {
                assert!(obj.fields.iter().all(|f| f.field_type != IddFieldType::Handle));
            }
        }
    }

    #[test]
    fn name_field_is_an_alpha() {
        for ty in IddObjectType::ALL {
            let obj = idd_object(*ty);
            if let Some(index) = obj.name_field {
                assert_eq!(obj.fields[index].field_type, IddFieldType::Alpha);
            }
        }
    }

    #[test]
    fn defaults_respect_choice_keys() {
        for ty in IddObjectType::ALL {
            for field in idd_object(*ty).fields {
                if let (IddFieldType::Choice, Some(default)) = (field.field_type, field.default) {
                    assert!(
                        field.keys.iter().any(|k| k.eq_ignore_ascii_case(default)),
                        "default '{}' of '{}' is not a key",
                        default,
                        field.name
                    );
                }
            }
        }
    }
}
