//! Model - the owning container of all objects
//!
//! A [`Model`] owns every [`FieldStore`] and keeps three indices over them:
//! handle → slot, unique type → handle, and (type, name) → handle. Typed
//! wrappers hold a [`ModelObject`], which is just the model plus a handle;
//! every access takes the model lock for the duration of one field
//! operation and never across user code.
//!
//! # Example
//!
//! ```ignore
//! use osmodel_core::model::Model;
//! use osmodel_core::objects::{ConvergenceLimits, SimulationControl};
//!
//! let model = Model::new();
//! let limits = model.unique_model_object::<ConvergenceLimits>();
//! limits.set_maximum_hvac_iterations(30);
//!
//! // Parents are found by type, creating them on demand
//! let control = limits.parent().unwrap();
//! assert_eq!(control, model.unique_model_object::<SimulationControl>());
//! ```

mod object;
mod registry;
mod traits;
mod value;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use osmodel_idd::IddObjectType;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, warn};

use crate::config::CoreConfig;
use crate::handle::Handle;
use crate::idf::{split_objects, FieldStore, IdfError, StrictnessLevel, ValidityReport};
use crate::schema::idd_object;
use crate::sizing::SizingResults;

pub use object::{missing_required, ModelObject, PointerTarget};
pub use registry::{children_of, registered_types, type_info, InitFn, ParentRule, TypeInfo};
pub use traits::{Autosize, ModelObjectCast, ModelObjectType, SizedField, UniqueModelObject};
pub use value::FieldValue;

new_key_type! {
    /// Slot of an object in the model's storage
    struct ObjectKey;
}

/// Errors from whole-object model operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Idf(#[from] IdfError),

    #[error("An object with handle {0} already exists in the model")]
    DuplicateHandle(Handle),

    #[error("The model already holds its unique {0} object")]
    DuplicateUnique(IddObjectType),

    #[error("Object belongs to a different model")]
    WrongModel,

    #[error("Object {0} has been removed from its model")]
    Removed(Handle),
}

struct ModelInner {
    objects: SlotMap<ObjectKey, FieldStore>,
    handles: HashMap<Handle, ObjectKey>,
    unique: HashMap<IddObjectType, Handle>,
    /// Upper-cased names per type
    names: HashMap<IddObjectType, HashMap<String, Handle>>,
    sizing_results: Option<Arc<dyn SizingResults>>,
    config: CoreConfig,
}

impl ModelInner {
    fn new(config: CoreConfig) -> Self {
        Self {
            objects: SlotMap::with_key(),
            handles: HashMap::new(),
            unique: HashMap::new(),
            names: HashMap::new(),
            sizing_results: None,
            config,
        }
    }

    fn store(&self, handle: Handle) -> Option<&FieldStore> {
        self.handles.get(&handle).map(|key| &self.objects[*key])
    }

    /// Mutate one store, keeping the name index in step
    fn write<R>(&mut self, handle: Handle, f: impl FnOnce(&mut FieldStore) -> R) -> Option<R> {
        let key = *self.handles.get(&handle)?;
        let store = &mut self.objects[key];
        let before = store.name();
        let result = f(store);
        let after = store.name();
        if before != after {
            self.reindex_name(key, before, after);
        }
        Some(result)
    }

    fn name_owner(&self, object_type: IddObjectType, name: &str) -> Option<Handle> {
        self.names.get(&object_type)?.get(&name_key(name)).copied()
    }

    /// `requested` if no other object of the type uses it, otherwise the
    /// first free `<base> <n>`
    fn unique_name(&self, object_type: IddObjectType, requested: &str, owner: Option<Handle>) -> String {
        let is_free = |candidate: &str| {
            self.name_owner(object_type, candidate)
                .map_or(true, |h| Some(h) == owner)
        };
        let requested = requested.trim();
        if is_free(requested) {
            return requested.to_string();
        }
        let (mut base, mut n) = split_numbered(requested);
        loop {
            let candidate = format!("{} {}", base, n);
            if is_free(&candidate) {
                return candidate;
            }
            n = match n.checked_add(1) {
                Some(next) => next,
                None => {
                    base = requested;
                    1
                }
            };
        }
    }

    fn reindex_name(&mut self, key: ObjectKey, before: Option<String>, after: Option<String>) {
        let (object_type, handle) = {
            let store = &self.objects[key];
            (store.object_type(), store.handle())
        };
        if let Some(old) = before {
            if let Some(map) = self.names.get_mut(&object_type) {
                if map.get(&name_key(&old)) == Some(&handle) {
                    map.remove(&name_key(&old));
                }
            }
        }
        if let Some(new) = after {
            let name = self.unique_name(object_type, &new, Some(handle));
            if name != new {
                debug!("Name '{}' is taken, using '{}'", new, name);
                self.objects[key].set_name_raw(&name);
            }
            self.names
                .entry(object_type)
                .or_default()
                .insert(name_key(&name), handle);
        }
    }

    fn check_insert(&self, store: &FieldStore) -> Result<(), ModelError> {
        if self.handles.contains_key(&store.handle()) {
            return Err(ModelError::DuplicateHandle(store.handle()));
        }
        let object_type = store.object_type();
        if idd_object(object_type).unique && self.unique.contains_key(&object_type) {
            return Err(ModelError::DuplicateUnique(object_type));
        }
        Ok(())
    }

    /// Insert a store that passed `check_insert`
    fn insert_unchecked(&mut self, mut store: FieldStore) -> Handle {
        let handle = store.handle();
        let object_type = store.object_type();
        let idd = idd_object(object_type);

        if idd.name_field.is_some() {
            let requested = store
                .name()
                .unwrap_or_else(|| format!("{} 1", default_base_name(object_type)));
            let name = self.unique_name(object_type, &requested, None);
            store.set_name_raw(&name);
            self.names
                .entry(object_type)
                .or_default()
                .insert(name_key(&name), handle);
        }
        if idd.unique {
            self.unique.insert(object_type, handle);
        }

        let key = self.objects.insert(store);
        self.handles.insert(handle, key);
        handle
    }

    fn remove(&mut self, handles: &[Handle]) -> Vec<FieldStore> {
        let mut removed = Vec::new();
        for handle in handles {
            let Some(key) = self.handles.remove(handle) else {
                continue;
            };
            let Some(store) = self.objects.remove(key) else {
                continue;
            };
            let object_type = store.object_type();
            if self.unique.get(&object_type) == Some(handle) {
                self.unique.remove(&object_type);
            }
            if let (Some(name), Some(map)) = (store.name(), self.names.get_mut(&object_type)) {
                if map.get(&name_key(&name)) == Some(handle) {
                    map.remove(&name_key(&name));
                }
            }
            removed.push(store);
        }

        let doomed: HashSet<Handle> = removed.iter().map(FieldStore::handle).collect();
        let cleared: usize = self
            .objects
            .values_mut()
            .map(|store| store.clear_references(&doomed))
            .sum();
        debug!(
            "Removed {} object(s), cleared {} reference(s)",
            removed.len(),
            cleared
        );
        removed
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_uppercase()
}

/// "Boiler 3" → ("Boiler", 4); "Boiler" → ("Boiler", 1)
///
/// A suffix with no successor counts as part of the base.
fn split_numbered(name: &str) -> (&str, u64) {
    name.rsplit_once(' ')
        .and_then(|(base, suffix)| {
            let n = suffix.parse::<u64>().ok()?;
            Some((base, n.checked_add(1)?))
        })
        .unwrap_or((name, 1))
}

/// "OS:Boiler:HotWater" → "Boiler Hot Water"
fn default_base_name(object_type: IddObjectType) -> String {
    let name = object_type.name();
    let name = name.strip_prefix("OS:").unwrap_or(name);
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c == ':' {
            out.push(' ');
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c);
    }
    out
}

/// Shared handle to a model
///
/// Cloning is cheap; clones refer to the same model. Two `Model` values
/// are equal iff they are the same model.
#[derive(Clone)]
pub struct Model {
    inner: Arc<RwLock<ModelInner>>,
}

impl Model {
    pub fn new() -> Self {
        Self::with_config(CoreConfig::default())
    }

    pub fn with_config(config: CoreConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ModelInner::new(config))),
        }
    }

    pub fn config(&self) -> CoreConfig {
        self.inner.read().config.clone()
    }

    pub fn num_objects(&self) -> usize {
        self.inner.read().objects.len()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.inner.read().handles.contains_key(&handle)
    }

    pub fn object(&self, handle: Handle) -> Option<ModelObject> {
        let object_type = self.inner.read().store(handle)?.object_type();
        Some(ModelObject::new(self.clone(), handle, object_type))
    }

    pub fn objects(&self) -> Vec<ModelObject> {
        let pairs: Vec<_> = self
            .inner
            .read()
            .objects
            .values()
            .map(|s| (s.handle(), s.object_type()))
            .collect();
        pairs
            .into_iter()
            .map(|(handle, object_type)| ModelObject::new(self.clone(), handle, object_type))
            .collect()
    }

    pub fn objects_of_type(&self, object_type: IddObjectType) -> Vec<ModelObject> {
        let handles: Vec<_> = self
            .inner
            .read()
            .objects
            .values()
            .filter(|s| s.object_type() == object_type)
            .map(FieldStore::handle)
            .collect();
        handles
            .into_iter()
            .map(|handle| ModelObject::new(self.clone(), handle, object_type))
            .collect()
    }

    /// Every object of the wrapper's type, wrapped
    pub fn concrete_model_objects<T: ModelObjectType>(&self) -> Vec<T> {
        self.objects_of_type(T::IDD_OBJECT_TYPE)
            .into_iter()
            .filter_map(T::from_object)
            .collect()
    }

    /// Object of `object_type` named `name`, ignoring case
    pub fn object_by_name(&self, object_type: IddObjectType, name: &str) -> Option<ModelObject> {
        let handle = self.inner.read().name_owner(object_type, name)?;
        Some(ModelObject::new(self.clone(), handle, object_type))
    }

    /// Create a new object the way its type's constructor does
    ///
    /// For unique types this returns the existing instance if there is one.
    pub fn create_object(&self, object_type: IddObjectType) -> ModelObject {
        if idd_object(object_type).unique {
            return self.get_or_create_unique(object_type);
        }
        let store = type_info(object_type).construct();
        let handle = self.inner.write().insert_unchecked(store);
        debug!("Created {} {}", object_type, handle);
        ModelObject::new(self.clone(), handle, object_type)
    }

    /// The unique instance of `object_type`, created if absent
    pub(crate) fn get_or_create_unique(&self, object_type: IddObjectType) -> ModelObject {
        debug_assert!(idd_object(object_type).unique, "{} is not unique", object_type);
        let inner = self.inner.upgradable_read();
        if let Some(handle) = inner.unique.get(&object_type).copied() {
            return ModelObject::new(self.clone(), handle, object_type);
        }
        let mut inner = RwLockUpgradableReadGuard::upgrade(inner);
        let store = type_info(object_type).construct();
        let handle = inner.insert_unchecked(store);
        debug!("Created unique {} {}", object_type, handle);
        ModelObject::new(self.clone(), handle, object_type)
    }

    /// The unique instance of `object_type`, if present
    pub fn optional_unique(&self, object_type: IddObjectType) -> Option<ModelObject> {
        let handle = self.inner.read().unique.get(&object_type).copied()?;
        Some(ModelObject::new(self.clone(), handle, object_type))
    }

    /// The unique `T`, created with its constructor values if absent
    pub fn unique_model_object<T: UniqueModelObject>(&self) -> T {
        object::cast_exact(self.get_or_create_unique(T::IDD_OBJECT_TYPE))
    }

    /// The unique `T`, without creating it
    pub fn optional_unique_model_object<T: UniqueModelObject>(&self) -> Option<T> {
        self.optional_unique(T::IDD_OBJECT_TYPE).map(object::cast_exact)
    }

    /// Add an existing store, keeping its handle
    ///
    /// Its name is made unique among objects of its type.
    pub fn add_object(&self, store: FieldStore) -> Result<ModelObject, ModelError> {
        let object_type = store.object_type();
        let mut inner = self.inner.write();
        inner.check_insert(&store)?;
        let handle = inner.insert_unchecked(store);
        Ok(ModelObject::new(self.clone(), handle, object_type))
    }

    /// Remove `object` and its children from this model
    pub fn remove_object(&self, object: &ModelObject) -> Result<Vec<FieldStore>, ModelError> {
        if object.model() != self {
            return Err(ModelError::WrongModel);
        }
        if object.is_removed() {
            return Err(ModelError::Removed(object.handle()));
        }
        Ok(object.remove())
    }

    fn remove_handles(&self, handles: &[Handle]) -> Vec<FieldStore> {
        self.inner.write().remove(handles)
    }

    /// Objects holding a reference to `handle`
    pub fn sources_of(&self, handle: Handle) -> Vec<ModelObject> {
        let pairs: Vec<_> = self
            .inner
            .read()
            .objects
            .values()
            .filter(|s| s.references().any(|(_, target)| target == handle))
            .map(|s| (s.handle(), s.object_type()))
            .collect();
        pairs
            .into_iter()
            .map(|(h, object_type)| ModelObject::new(self.clone(), h, object_type))
            .collect()
    }

    pub fn set_sizing_results(&self, results: impl SizingResults + 'static) {
        self.inner.write().sizing_results = Some(Arc::new(results));
    }

    pub fn clear_sizing_results(&self) {
        self.inner.write().sizing_results = None;
    }

    pub fn sizing_results(&self) -> Option<Arc<dyn SizingResults>> {
        self.inner.read().sizing_results.clone()
    }

    pub(crate) fn read<R>(&self, handle: Handle, f: impl FnOnce(&FieldStore) -> R) -> Option<R> {
        self.inner.read().store(handle).map(f)
    }

    pub(crate) fn write<R>(
        &self,
        handle: Handle,
        f: impl FnOnce(&mut FieldStore) -> R,
    ) -> Option<R> {
        self.inner.write().write(handle, f)
    }

    /// Print every object in IDF layout
    pub fn to_osm_string(&self) -> String {
        let inner = self.inner.read();
        let space = inner.config.printed_field_space;
        inner
            .objects
            .values()
            .map(|store| store.to_idf_string(space))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Load a model from text, keeping handles
    pub fn from_osm_str(text: &str) -> Result<Self, ModelError> {
        let model = Self::new();
        model.load_osm_str(text)?;
        Ok(model)
    }

    /// Add the objects of `text` to this model
    ///
    /// A second instance of a unique type is dropped with a warning. On
    /// error the model is left unchanged.
    pub fn load_osm_str(&self, text: &str) -> Result<Vec<ModelObject>, ModelError> {
        let stores = split_objects(text)
            .iter()
            .map(|chunk| FieldStore::load(chunk))
            .collect::<Result<Vec<_>, _>>()?;

        let mut inner = self.inner.write();
        let mut handles = HashSet::new();
        let mut unique = HashSet::new();
        let mut accepted = Vec::with_capacity(stores.len());
        for store in stores {
            let object_type = store.object_type();
            if inner.handles.contains_key(&store.handle()) || !handles.insert(store.handle()) {
                return Err(ModelError::DuplicateHandle(store.handle()));
            }
            if idd_object(object_type).unique
                && (inner.unique.contains_key(&object_type) || !unique.insert(object_type))
            {
                warn!("Dropping duplicate unique {} object", object_type);
                continue;
            }
            accepted.push(store);
        }

        let added: Vec<ModelObject> = accepted
            .into_iter()
            .map(|store| {
                let object_type = store.object_type();
                let handle = inner.insert_unchecked(store);
                ModelObject::new(self.clone(), handle, object_type)
            })
            .collect();
        debug!("Loaded {} object(s)", added.len());
        Ok(added)
    }

    /// Reports for every object that fails at `level`
    pub fn validity_report(&self, level: StrictnessLevel) -> Vec<ValidityReport> {
        self.inner
            .read()
            .objects
            .values()
            .map(|store| store.validity_report(level))
            .filter(|report| !report.is_valid())
            .collect()
    }

    pub fn is_valid(&self, level: StrictnessLevel) -> bool {
        self.validity_report(level).is_empty()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Model {}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("objects", &self.num_objects())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{
        BoilerHotWater, ConvergenceLimits, CurveQuadratic, ShadowCalculation, SimulationControl,
        Site, Timestep,
    };

    #[test]
    fn test_default_base_name() {
        assert_eq!(default_base_name(IddObjectType::OsBoilerHotWater), "Boiler Hot Water");
        assert_eq!(default_base_name(IddObjectType::OsCurveQuadratic), "Curve Quadratic");
        assert_eq!(default_base_name(IddObjectType::OsSite), "Site");
    }

    #[test]
    fn test_split_numbered() {
        assert_eq!(split_numbered("Boiler 3"), ("Boiler", 4));
        assert_eq!(split_numbered("Boiler"), ("Boiler", 1));
        assert_eq!(split_numbered("Boiler Hot Water 1"), ("Boiler Hot Water", 2));
    }

    #[test]
    fn test_split_numbered_without_successor() {
        assert_eq!(
            split_numbered("B 18446744073709551614"),
            ("B", u64::MAX)
        );
        assert_eq!(
            split_numbered("B 18446744073709551615"),
            ("B 18446744073709551615", 1)
        );
    }

    #[test]
    fn test_huge_name_suffix_is_made_unique() {
        let model = Model::new();
        let a = BoilerHotWater::new(&model);
        let b = BoilerHotWater::new(&model);
        let c = BoilerHotWater::new(&model);
        let d = BoilerHotWater::new(&model);

        let max = "B 18446744073709551615";
        assert_eq!(a.set_name(max).as_deref(), Some(max));
        assert_eq!(
            b.set_name(max).as_deref(),
            Some("B 18446744073709551615 1")
        );

        let below = "B 18446744073709551614";
        assert_eq!(c.set_name(below).as_deref(), Some(below));
        assert_eq!(
            d.set_name(below).as_deref(),
            Some("B 18446744073709551614 1")
        );

        let by_name = |name: &str| {
            model
                .object_by_name(IddObjectType::OsBoilerHotWater, name)
                .map(|o| o.handle())
        };
        assert_eq!(by_name(max), Some(a.handle()));
        assert_eq!(by_name("B 18446744073709551615 1"), Some(b.handle()));
        assert_eq!(by_name("B 18446744073709551614 1"), Some(d.handle()));
    }

    #[test]
    fn test_model_identity() {
        let a = Model::new();
        let b = a.clone();
        let c = Model::new();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_unique_object_is_created_once() {
        let model = Model::new();
        let first = model.unique_model_object::<SimulationControl>();
        let second = model.unique_model_object::<SimulationControl>();
        assert_eq!(first.handle(), second.handle());
        assert_eq!(model.num_objects(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not unique")]
    fn test_get_or_create_unique_refuses_plain_types() {
        let model = Model::new();
        model.get_or_create_unique(IddObjectType::OsBoilerHotWater);
    }

    #[test]
    fn test_create_object_reuses_unique_instance() {
        let model = Model::new();
        let first = model.create_object(IddObjectType::OsSite);
        let second = model.create_object(IddObjectType::OsSite);
        assert_eq!(first, second);
        let a = model.create_object(IddObjectType::OsCurveCubic);
        let b = model.create_object(IddObjectType::OsCurveCubic);
        assert_ne!(a, b);
        assert_eq!(model.num_objects(), 3);
    }

    #[test]
    fn test_optional_unique_does_not_create() {
        let model = Model::new();
        assert!(model.optional_unique_model_object::<Timestep>().is_none());
        assert_eq!(model.num_objects(), 0);
        let timestep = model.unique_model_object::<Timestep>();
        assert_eq!(
            model.optional_unique_model_object::<Timestep>().map(|t| t.handle()),
            Some(timestep.handle())
        );
    }

    #[test]
    fn test_default_names_count_up() {
        let model = Model::new();
        let a = BoilerHotWater::new(&model);
        let b = BoilerHotWater::new(&model);
        assert_eq!(a.name().as_deref(), Some("Boiler Hot Water 1"));
        assert_eq!(b.name().as_deref(), Some("Boiler Hot Water 2"));
        // names are unique per type only
        let curve = CurveQuadratic::new(&model);
        assert_eq!(curve.name().as_deref(), Some("Curve Quadratic 1"));
    }

    #[test]
    fn test_set_name_is_made_unique() {
        let model = Model::new();
        let a = BoilerHotWater::new(&model);
        let b = BoilerHotWater::new(&model);
        assert_eq!(a.set_name("Main Boiler").as_deref(), Some("Main Boiler"));
        assert_eq!(b.set_name("main boiler").as_deref(), Some("main boiler 1"));
        // renaming to its own name keeps it
        assert_eq!(a.set_name("Main Boiler").as_deref(), Some("Main Boiler"));
        assert_eq!(
            model
                .object_by_name(IddObjectType::OsBoilerHotWater, "MAIN BOILER")
                .map(|o| o.handle()),
            Some(a.handle())
        );
    }

    #[test]
    fn test_freed_name_can_be_reused() {
        let model = Model::new();
        let a = BoilerHotWater::new(&model);
        a.set_name("Boiler");
        a.remove();
        let b = BoilerHotWater::new(&model);
        assert_eq!(b.set_name("Boiler").as_deref(), Some("Boiler"));
    }

    #[test]
    fn test_objects_and_concrete_objects() {
        let model = Model::new();
        BoilerHotWater::new(&model);
        BoilerHotWater::new(&model);
        model.unique_model_object::<Site>();
        assert_eq!(model.objects().len(), 3);
        assert_eq!(model.objects_of_type(IddObjectType::OsBoilerHotWater).len(), 2);
        assert_eq!(model.concrete_model_objects::<BoilerHotWater>().len(), 2);
        assert!(model.concrete_model_objects::<Timestep>().is_empty());
    }

    #[test]
    fn test_add_object_rejects_duplicates() {
        let model = Model::new();
        let boiler = BoilerHotWater::new(&model);
        let store = boiler.store().unwrap();
        assert_eq!(
            model.add_object(store),
            Err(ModelError::DuplicateHandle(boiler.handle()))
        );

        model.unique_model_object::<Timestep>();
        let another = FieldStore::new(IddObjectType::OsTimestep);
        assert_eq!(
            model.add_object(another),
            Err(ModelError::DuplicateUnique(IddObjectType::OsTimestep))
        );
    }

    #[test]
    fn test_remove_object_checks_model() {
        let a = Model::new();
        let b = Model::new();
        let boiler = BoilerHotWater::new(&a);
        assert_eq!(b.remove_object(&boiler), Err(ModelError::WrongModel));
        assert_eq!(a.remove_object(&boiler).map(|v| v.len()), Ok(1));
        assert_eq!(
            a.remove_object(&boiler),
            Err(ModelError::Removed(boiler.handle()))
        );
    }

    #[test]
    fn test_osm_round_trip_with_delimiters_in_text() {
        let model = Model::new();
        let east = BoilerHotWater::new(&model);
        let west = BoilerHotWater::new(&model);
        assert_eq!(east.set_name("Boiler, East").as_deref(), Some("Boiler, East"));
        assert_eq!(west.set_name("Boiler!1; West").as_deref(), Some("Boiler!1; West"));
        assert!(east.set_end_use_subcategory("Heating,\nDomestic"));

        let loaded = Model::from_osm_str(&model.to_osm_string()).unwrap();
        assert_eq!(loaded.num_objects(), 2);

        let loaded_east = loaded.object(east.handle()).and_then(|o| o.cast::<BoilerHotWater>()).unwrap();
        let loaded_west = loaded.object(west.handle()).and_then(|o| o.cast::<BoilerHotWater>()).unwrap();
        assert_eq!(loaded_east.name().as_deref(), Some("Boiler, East"));
        assert_eq!(loaded_east.end_use_subcategory(), "Heating,\nDomestic");
        assert_eq!(loaded_east.fuel_type(), "NaturalGas");
        assert_eq!(loaded_west.name().as_deref(), Some("Boiler!1; West"));
        assert!(loaded_west.is_nominal_capacity_autosized());
    }

    #[test]
    fn test_text_whitespace_survives_round_trip() {
        let model = Model::new();
        let boiler = BoilerHotWater::new(&model);
        assert!(boiler.set_end_use_subcategory(" Heating "));
        assert_eq!(boiler.end_use_subcategory(), "Heating");
        assert_eq!(boiler.set_name("  Plant Boiler ").as_deref(), Some("Plant Boiler"));

        let loaded = Model::from_osm_str(&model.to_osm_string()).unwrap();
        let copy = loaded.object(boiler.handle()).and_then(|o| o.cast::<BoilerHotWater>()).unwrap();
        assert_eq!(copy.end_use_subcategory(), boiler.end_use_subcategory());
        assert_eq!(copy.name(), boiler.name());
    }

    #[test]
    fn test_failed_load_leaves_model_unchanged() {
        let model = Model::new();
        let boiler = BoilerHotWater::new(&model);
        let text = format!(
            "OS:Timestep,\n  {},\n  4;\n\nOS:Boiler:HotWater,\n  ,\n  Bad,\n  NaturalGas,\n  lots;\n",
            Handle::new()
        );
        assert!(matches!(
            model.load_osm_str(&text),
            Err(ModelError::Idf(IdfError::InvalidField { .. }))
        ));
        assert_eq!(model.num_objects(), 1);
        assert!(model.optional_unique_model_object::<Timestep>().is_none());
        assert!(model.contains(boiler.handle()));
    }

    #[test]
    fn test_load_with_repeated_handle_adds_nothing() {
        let model = Model::new();
        let handle = Handle::new();
        let text = format!(
            "OS:Curve:Quadratic,\n  {h},\n  A;\nOS:Curve:Cubic,\n  {h},\n  B;\n",
            h = handle
        );
        assert_eq!(
            model.load_osm_str(&text),
            Err(ModelError::DuplicateHandle(handle))
        );
        assert_eq!(model.num_objects(), 0);
    }

    #[test]
    fn test_osm_round_trip() {
        let model = Model::new();
        let boiler = BoilerHotWater::new(&model);
        let curve = CurveQuadratic::new(&model);
        assert!(boiler.set_normalized_boiler_efficiency_curve(&curve.clone().into()));
        model.unique_model_object::<ConvergenceLimits>();
        model.unique_model_object::<ShadowCalculation>();

        let text = model.to_osm_string();
        let loaded = Model::from_osm_str(&text).unwrap();
        assert_eq!(loaded.num_objects(), model.num_objects());

        let copy = loaded
            .object(boiler.handle())
            .and_then(|o| o.cast::<BoilerHotWater>())
            .unwrap();
        assert_eq!(copy.name(), boiler.name());
        assert!(copy.is_nominal_capacity_autosized());
        assert_eq!(
            copy.normalized_boiler_efficiency_curve().map(|c| c.handle()),
            Some(curve.handle())
        );
        assert_eq!(loaded.to_osm_string().len(), text.len());
    }

    #[test]
    fn test_load_drops_duplicate_unique() {
        let model = Model::new();
        model.unique_model_object::<Timestep>();
        let text = model.to_osm_string();
        let other = FieldStore::new(IddObjectType::OsTimestep).to_string();
        let loaded = Model::from_osm_str(&format!("{}\n{}", text, other)).unwrap();
        assert_eq!(loaded.num_objects(), 1);
    }

    #[test]
    fn test_load_errors_propagate() {
        assert!(matches!(
            Model::from_osm_str("OS:Nothing;"),
            Err(ModelError::Idf(IdfError::UnknownObjectType(_)))
        ));
        let boiler = FieldStore::new(IddObjectType::OsBoilerHotWater).to_string();
        assert!(matches!(
            Model::from_osm_str(&format!("{}\n{}", boiler, boiler)),
            Err(ModelError::DuplicateHandle(_))
        ));
    }

    #[test]
    fn test_model_validity() {
        let model = Model::new();
        let boiler = BoilerHotWater::new(&model);
        assert!(model.is_valid(StrictnessLevel::Final));
        boiler.reset(boiler.idd_object().field_index("Fuel Type").unwrap());
        let reports = model.validity_report(StrictnessLevel::Final);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].handle, boiler.handle());
    }

    #[test]
    fn test_printed_field_space_from_config() {
        let config = CoreConfig {
            printed_field_space: 50,
            ..CoreConfig::default()
        };
        let model = Model::with_config(config);
        model.unique_model_object::<Timestep>();
        let text = model.to_osm_string();
        assert!(text.contains(&format!("{:<50} !- Number of Timesteps per Hour", "  6;")));
    }

    #[test]
    fn test_model_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Model>();
        assert_send_sync::<ModelObject>();
    }
}
