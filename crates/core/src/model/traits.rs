//! Traits implemented by typed wrappers
//!
//! `#[derive(ModelObject)]` implements these; they can also be written by
//! hand for wrappers that dispatch over several types.

use osmodel_idd::IddObjectType;
use tracing::warn;

use super::registry::TypeInfo;
use super::ModelObject;
use crate::idf::SizingValue;
use crate::schema::field_index;

/// A typed view of a [`ModelObject`]
pub trait ModelObjectCast: Sized {
    /// Wrap `object` if it has a matching type
    fn from_object(object: ModelObject) -> Option<Self>;

    fn as_object(&self) -> &ModelObject;
}

impl ModelObjectCast for ModelObject {
    fn from_object(object: ModelObject) -> Option<Self> {
        Some(object)
    }

    fn as_object(&self) -> &ModelObject {
        self
    }
}

/// A wrapper bound to exactly one object type
pub trait ModelObjectType: ModelObjectCast + Clone {
    const IDD_OBJECT_TYPE: IddObjectType;

    const ALLOWABLE_CHILD_TYPES: &'static [IddObjectType] = &[];

    fn type_info() -> TypeInfo;
}

/// Marker for types with at most one instance per model
pub trait UniqueModelObject: ModelObjectType {}

/// A field filled in from simulation sizing results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedField {
    pub field_name: &'static str,
    /// Label of the value in the sizing results
    pub description: &'static str,
    pub units: &'static str,
}

/// The autosize → run → harvest → freeze cycle
pub trait Autosize: ModelObjectType {
    const SIZED_FIELDS: &'static [SizedField];

    /// Mark every sized field as autosized
    ///
    /// Returns the number of fields that were marked.
    fn autosize(&self) -> usize {
        let object = self.as_object();
        let mut marked = 0;
        for sized in Self::SIZED_FIELDS {
            let Ok(index) = field_index(Self::IDD_OBJECT_TYPE, sized.field_name) else {
                continue;
            };
            if object.set_sizing(index, SizingValue::Autosized) {
                marked += 1;
            } else {
                warn!(
                    "Could not autosize '{}' of {}",
                    sized.field_name,
                    object.brief_description()
                );
            }
        }
        marked
    }

    /// Copy every available sizing result into its field
    ///
    /// Returns the number of fields that were hard-set.
    fn apply_sizing_values(&self) -> usize {
        let object = self.as_object();
        let mut applied = 0;
        for sized in Self::SIZED_FIELDS {
            let Ok(index) = field_index(Self::IDD_OBJECT_TYPE, sized.field_name) else {
                continue;
            };
            if let Some(value) = object.autosized_value(sized.description, sized.units) {
                if object.set_sizing(index, SizingValue::Hardset(value)) {
                    applied += 1;
                } else {
                    warn!(
                        "Sizing value {} rejected for '{}' of {}",
                        value,
                        sized.field_name,
                        object.brief_description()
                    );
                }
            }
        }
        applied
    }
}
