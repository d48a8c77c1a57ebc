//! Type-safe schema field accessor
//!
//! This module provides a generic `SchemaField<T>` type that lazily resolves
//! a field index from the schema tables and provides typed read/write access
//! to a model object's fields.

use std::marker::PhantomData;
use std::sync::OnceLock;

use osmodel_idd::{IddField, IddObjectType};

use super::system::{field, field_index, SchemaError};
use crate::idf::SizingValue;
use crate::model::{FieldValue, ModelObject, ModelObjectCast};

/// A lazily-resolved schema field accessor
///
/// The index is looked up by name on first access and cached in a
/// `OnceLock` for lock-free subsequent access.
///
/// # Type Parameters
/// * `T` - The value type. A [`FieldValue`] for data fields, or a
///   [`ModelObjectCast`] wrapper for object-list fields.
///
/// # Example
///
/// ```ignore
/// static FREQUENCY: SchemaField<i32> =
///     SchemaField::new(IddObjectType::OsShadowCalculation, "Calculation Frequency");
///
/// let frequency = FREQUENCY.get(&object);
/// FREQUENCY.set(&object, 30);
/// ```
pub struct SchemaField<T> {
    object_type: IddObjectType,
    field_name: &'static str,
    index: OnceLock<usize>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SchemaField<T> {
    /// Create a new schema field accessor
    ///
    /// The index is not resolved until first access, so accessors can be
    /// declared as statics.
    pub const fn new(object_type: IddObjectType, field_name: &'static str) -> Self {
        Self {
            object_type,
            field_name,
            index: OnceLock::new(),
            _marker: PhantomData,
        }
    }

    /// Resolve the field index (cached after first call)
    pub fn resolve(&self) -> Result<usize, SchemaError> {
        if let Some(index) = self.index.get() {
            return Ok(*index);
        }
        let index = field_index(self.object_type, self.field_name)?;
        Ok(*self.index.get_or_init(|| index))
    }

    /// Get the field index
    ///
    /// # Panics
    /// Panics if the field name is not in the schema table, which is a
    /// defect in the wrapper declaration.
    pub fn index(&self) -> usize {
        match self.resolve() {
            Ok(index) => index,
            Err(e) => panic!("Failed to resolve schema field: {}", e),
        }
    }

    /// Try to get the field index without panicking
    pub fn try_index(&self) -> Option<usize> {
        self.resolve().ok()
    }

    /// The field descriptor
    pub fn idd_field(&self) -> &'static IddField {
        match field(self.object_type, self.index()) {
            Ok(f) => f,
            Err(e) => panic!("Failed to resolve schema field: {}", e),
        }
    }

    /// True when the slot holds no value, i.e. the field is defaulted
    pub fn is_empty(&self, object: &ModelObject) -> bool {
        object.is_empty(self.index())
    }

    /// Clear the slot so the default applies again
    pub fn reset(&self, object: &ModelObject) -> bool {
        object.reset(self.index())
    }

    pub const fn object_type(&self) -> IddObjectType {
        self.object_type
    }

    pub const fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Check if the index has been resolved
    pub fn is_resolved(&self) -> bool {
        self.index.get().is_some()
    }
}

impl<T: FieldValue> SchemaField<T> {
    /// Read the value, falling back to the schema default when empty
    pub fn get(&self, object: &ModelObject) -> Option<T> {
        object.get_value(self.index(), true)
    }

    /// Read the stored value only
    pub fn get_raw(&self, object: &ModelObject) -> Option<T> {
        object.get_value(self.index(), false)
    }

    /// Write the value, returning whether it was accepted
    pub fn set(&self, object: &ModelObject, value: T) -> bool {
        object.set_value(self.index(), value)
    }
}

impl SchemaField<f64> {
    /// Read an autosizable or autocalculatable field
    pub fn sizing(&self, object: &ModelObject) -> Option<SizingValue> {
        object.sizing(self.index())
    }

    pub fn set_sizing(&self, object: &ModelObject, value: SizingValue) -> bool {
        object.set_sizing(self.index(), value)
    }
}

impl<T: ModelObjectCast> SchemaField<T> {
    /// Resolve an object-list field to its typed target
    pub fn target(&self, object: &ModelObject) -> Option<T> {
        object.pointer(self.index()).and_then(T::from_object)
    }

    /// Point an object-list field at `target`
    pub fn set_target(&self, object: &ModelObject, target: &T) -> bool {
        object.set_pointer(self.index(), target.as_object())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_field_construction() {
        let field: SchemaField<i32> =
            SchemaField::new(IddObjectType::OsTimestep, "Number of Timesteps per Hour");
        assert_eq!(field.object_type(), IddObjectType::OsTimestep);
        assert_eq!(field.field_name(), "Number of Timesteps per Hour");
        assert!(!field.is_resolved());
        assert_eq!(field.index(), 1);
        assert!(field.is_resolved());
        assert_eq!(field.idd_field().default, Some("6"));
    }

    #[test]
    fn test_unknown_field_does_not_resolve() {
        let field: SchemaField<f64> = SchemaField::new(IddObjectType::OsTimestep, "Nope");
        assert_eq!(field.try_index(), None);
        assert!(!field.is_resolved());
    }

    #[test]
    #[should_panic(expected = "Failed to resolve schema field")]
    fn test_index_panics_on_unknown_field() {
        let field: SchemaField<f64> = SchemaField::new(IddObjectType::OsTimestep, "Nope");
        field.index();
    }

    #[test]
    fn test_schema_field_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemaField<i32>>();
        assert_send_sync::<SchemaField<ModelObject>>();
    }
}
