//! ModelObject - a handle into a model

use std::fmt;
use std::hash::{Hash, Hasher};

use osmodel_idd::{IddObject, IddObjectType};
use tracing::{debug, warn};

use super::registry::{children_of, type_info, ParentRule};
use super::traits::{ModelObjectCast, ModelObjectType};
use super::value::FieldValue;
use super::{Model, ModelError};
use crate::handle::Handle;
use crate::idf::{FieldStore, SizingValue, StrictnessLevel, ValidityReport};
use crate::schema::idd_object;

/// What an object-list field resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    Unset,
    /// The field names an object the model does not hold
    Dangling(Handle),
    Present(ModelObject),
}

impl PointerTarget {
    pub fn object(self) -> Option<ModelObject> {
        match self {
            PointerTarget::Present(object) => Some(object),
            _ => None,
        }
    }

    pub fn is_dangling(&self) -> bool {
        matches!(self, PointerTarget::Dangling(_))
    }
}

/// An object in a model
///
/// Holds the model and the object's handle. Every accessor goes through the
/// model, so clones of a `ModelObject` always see the same data. After the
/// object is removed, reads return `None` and writes return `false`.
#[derive(Clone)]
pub struct ModelObject {
    model: Model,
    handle: Handle,
    object_type: IddObjectType,
}

impl ModelObject {
    pub(crate) fn new(model: Model, handle: Handle, object_type: IddObjectType) -> Self {
        Self {
            model,
            handle,
            object_type,
        }
    }

    #[inline]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    #[inline]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[inline]
    pub fn object_type(&self) -> IddObjectType {
        self.object_type
    }

    pub fn idd_object(&self) -> &'static IddObject {
        idd_object(self.object_type)
    }

    pub fn is_removed(&self) -> bool {
        !self.model.contains(self.handle)
    }

    /// `"<type> '<name>' <handle>"`, for log messages
    pub fn brief_description(&self) -> String {
        match self.name() {
            Some(name) => format!("{} '{}' {}", self.object_type, name, self.handle),
            None => format!("{} {}", self.object_type, self.handle),
        }
    }

    /// Snapshot of the object's fields
    pub fn store(&self) -> Option<FieldStore> {
        self.model.read(self.handle, FieldStore::clone)
    }

    pub fn get_value<T: FieldValue>(&self, index: usize, translate_default: bool) -> Option<T> {
        self.model
            .read(self.handle, |store| T::read(store, index, translate_default))
            .flatten()
    }

    pub fn set_value<T: FieldValue>(&self, index: usize, value: T) -> bool {
        self.model
            .write(self.handle, |store| T::write(store, index, value))
            .unwrap_or(false)
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.model
            .read(self.handle, |store| store.is_empty(index))
            .unwrap_or(true)
    }

    /// Clear a field back to its default
    pub fn reset(&self, index: usize) -> bool {
        self.model
            .write(self.handle, |store| store.set_empty(index))
            .unwrap_or(false)
    }

    pub fn sizing(&self, index: usize) -> Option<SizingValue> {
        self.model
            .read(self.handle, |store| store.get_sizing(index))
            .flatten()
    }

    pub fn set_sizing(&self, index: usize, value: SizingValue) -> bool {
        self.model
            .write(self.handle, |store| store.set_sizing(index, value))
            .unwrap_or(false)
    }

    pub fn pointer_target(&self, index: usize) -> PointerTarget {
        let Some(Some(target)) = self.model.read(self.handle, |store| store.get_pointer(index))
        else {
            return PointerTarget::Unset;
        };
        match self.model.object(target) {
            Some(object) => PointerTarget::Present(object),
            None => PointerTarget::Dangling(target),
        }
    }

    /// Object referenced by field `index`
    ///
    /// A dangling reference reads as `None`.
    pub fn pointer(&self, index: usize) -> Option<ModelObject> {
        match self.pointer_target(index) {
            PointerTarget::Present(object) => Some(object),
            PointerTarget::Dangling(target) => {
                if self.model.config().warn_on_dangling_references {
                    warn!(
                        "Field {} of {} points to missing object {}",
                        index,
                        self.brief_description(),
                        target
                    );
                }
                None
            }
            PointerTarget::Unset => None,
        }
    }

    /// Point field `index` at `target`
    ///
    /// The target must live in the same model and belong to one of the
    /// field's object lists.
    pub fn set_pointer(&self, index: usize, target: &ModelObject) -> bool {
        if target.model != self.model {
            debug!(
                "Cannot point {} at {}: different models",
                self.brief_description(),
                target.handle
            );
            return false;
        }
        if target.is_removed() {
            return false;
        }
        let Some(field) = self.idd_object().field(index) else {
            return false;
        };
        let target_idd = target.idd_object();
        if !field.object_lists.iter().any(|list| target_idd.belongs_to(list)) {
            debug!(
                "{} is not a valid target for field '{}' of {}",
                target_idd.name,
                field.name,
                self.brief_description()
            );
            return false;
        }
        self.model
            .write(self.handle, |store| store.set_pointer(index, target.handle))
            .unwrap_or(false)
    }

    pub fn name(&self) -> Option<String> {
        self.model.read(self.handle, FieldStore::name).flatten()
    }

    /// Rename the object, returning the name actually stored
    ///
    /// A name already used by another object of the same type gets a
    /// numeric suffix.
    pub fn set_name(&self, name: &str) -> Option<String> {
        let applied = self
            .model
            .write(self.handle, |store| store.set_name_raw(name))?;
        if !applied {
            return None;
        }
        self.name()
    }

    pub fn comment(&self) -> String {
        self.model
            .read(self.handle, |store| store.comment().to_string())
            .unwrap_or_default()
    }

    pub fn set_comment(&self, comment: &str) -> bool {
        self.model
            .write(self.handle, |store| store.set_comment(comment))
            .is_some()
    }

    /// The object's parent, created if its type needs one and it is absent
    pub fn parent(&self) -> Option<ModelObject> {
        match type_info(self.object_type).parent {
            ParentRule::None => None,
            ParentRule::Unique(parent_type) => {
                (!self.is_removed()).then(|| self.model.get_or_create_unique(parent_type))
            }
        }
    }

    /// Succeeds only when `parent` is already this object's parent
    ///
    /// Parents are unique objects found by type, so there is nothing to
    /// re-link.
    pub fn set_parent(&self, parent: &ModelObject) -> bool {
        match type_info(self.object_type).parent {
            ParentRule::Unique(parent_type) => {
                parent.object_type == parent_type
                    && parent.model == self.model
                    && !self.is_removed()
                    && !parent.is_removed()
            }
            ParentRule::None => false,
        }
    }

    /// Existing objects whose parent is this object
    pub fn children(&self) -> Vec<ModelObject> {
        if self.is_removed() {
            return Vec::new();
        }
        children_of(self.object_type)
            .flat_map(|child_type| self.model.objects_of_type(child_type))
            .collect()
    }

    pub fn allowable_child_types(&self) -> &'static [IddObjectType] {
        type_info(self.object_type).allowable_child_types
    }

    /// Remove the object and its descendants
    ///
    /// References to any removed object are emptied. Returns the removed
    /// stores.
    pub fn remove(&self) -> Vec<FieldStore> {
        let mut doomed = vec![self.clone()];
        let mut next = 0;
        while next < doomed.len() {
            for child in doomed[next].children() {
                if !doomed.contains(&child) {
                    doomed.push(child);
                }
            }
            next += 1;
        }
        let handles: Vec<Handle> = doomed.iter().map(|object| object.handle).collect();
        self.model.remove_handles(&handles)
    }

    /// Copy the object into `model`
    ///
    /// A unique object cloned into its own model is returned as is; cloned
    /// into another model it replaces that model's instance. Other objects
    /// get a new handle and a unique name. References whose targets are not
    /// in `model` are emptied.
    pub fn clone_into(&self, model: &Model) -> Result<ModelObject, ModelError> {
        let store = self.store().ok_or(ModelError::Removed(self.handle))?;

        if self.idd_object().unique {
            if *model == self.model {
                return Ok(self.clone());
            }
            if let Some(existing) = model.optional_unique(self.object_type) {
                existing.remove();
            }
        }

        let mut copy = store.duplicate();
        let missing: Vec<usize> = copy
            .references()
            .filter(|(_, target)| !model.contains(*target))
            .map(|(index, _)| index)
            .collect();
        for index in missing {
            copy.set_empty(index);
        }

        let cloned = model.add_object(copy)?;
        debug!(
            "Cloned {} as {}",
            self.brief_description(),
            cloned.handle
        );
        Ok(cloned)
    }

    /// Objects whose fields point at this one
    pub fn sources(&self) -> Vec<ModelObject> {
        self.model.sources_of(self.handle)
    }

    pub fn cast<T: ModelObjectCast>(&self) -> Option<T> {
        T::from_object(self.clone())
    }

    pub fn validity_report(&self, level: StrictnessLevel) -> Option<ValidityReport> {
        self.model
            .read(self.handle, |store| store.validity_report(level))
    }

    /// Look up a sized value in the model's sizing results
    ///
    /// Results are keyed by the type name without its `OS:` prefix and the
    /// upper-cased object name.
    pub fn autosized_value(&self, description: &str, units: &str) -> Option<f64> {
        let Some(name) = self.name() else {
            warn!(
                "{} has no name, cannot look up '{}'",
                self.brief_description(),
                description
            );
            return None;
        };
        let Some(results) = self.model.sizing_results() else {
            warn!(
                "Model has no sizing results, cannot look up '{}' for {}",
                description,
                self.brief_description()
            );
            return None;
        };

        let idd_name = self.idd_object().name;
        let comp_type = idd_name.strip_prefix("OS:").unwrap_or(idd_name);
        let value = results.autosized_value(comp_type, &name.to_uppercase(), description, units);
        if value.is_none() {
            debug!(
                "No sizing result '{}' [{}] for {}",
                description,
                units,
                self.brief_description()
            );
        }
        value
    }
}

impl PartialEq for ModelObject {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle && self.model == other.model
    }
}

impl Eq for ModelObject {}

impl Hash for ModelObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl fmt::Debug for ModelObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelObject")
            .field("type", &self.object_type.name())
            .field("handle", &self.handle)
            .finish()
    }
}

impl fmt::Display for ModelObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let space = self.model.config().printed_field_space;
        match self.model.read(self.handle, |store| store.to_idf_string(space)) {
            Some(text) => f.write_str(&text),
            None => write!(f, "! removed {} {}", self.object_type, self.handle),
        }
    }
}

/// Wrap an object already known to have `T`'s type
pub(super) fn cast_exact<T: ModelObjectType>(object: ModelObject) -> T {
    let object_type = object.object_type;
    match T::from_object(object) {
        Some(typed) => typed,
        None => unreachable!(
            "{} object does not match wrapper for {}",
            object_type,
            T::IDD_OBJECT_TYPE
        ),
    }
}

/// Panic for a required field with no value
///
/// Generated getters of required fields call this; reaching it means the
/// object was built outside its constructor or the field was cleared.
#[doc(hidden)]
#[cold]
#[track_caller]
pub fn missing_required(object: &ModelObject, field_name: &str) -> ! {
    panic!(
        "{} has no value for required field '{}'",
        object.brief_description(),
        field_name
    )
}
