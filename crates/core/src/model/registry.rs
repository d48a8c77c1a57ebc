//! Type registry - per-type construction and hierarchy rules
//!
//! Parent/child relationships are computed from type, never stored on the
//! objects. The registry records, for every concrete wrapper type, which
//! unique type is its parent, which types it may contain and the hook that
//! writes its constructor-time values.

use std::collections::HashMap;
use std::sync::LazyLock;

use osmodel_idd::IddObjectType;

use crate::idf::FieldStore;
use crate::schema::idd_object;

/// Writes constructor-time values into a fresh store
pub type InitFn = fn(&mut FieldStore);

/// How an object's parent is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentRule {
    /// No parent
    None,
    /// The model's single instance of the given unique type
    Unique(IddObjectType),
}

/// Construction and hierarchy facts for one type
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub object_type: IddObjectType,
    pub parent: ParentRule,
    pub allowable_child_types: &'static [IddObjectType],
    pub init: Option<InitFn>,
}

impl TypeInfo {
    /// Facts for a type with no wrapper: no parent, no children
    pub const fn new(object_type: IddObjectType) -> Self {
        Self {
            object_type,
            parent: ParentRule::None,
            allowable_child_types: &[],
            init: None,
        }
    }

    pub fn is_unique(&self) -> bool {
        idd_object(self.object_type).unique
    }

    /// A store populated the way the type's constructor leaves it
    pub fn construct(&self) -> FieldStore {
        let mut store = FieldStore::new(self.object_type);
        if let Some(init) = self.init {
            init(&mut store);
        }
        store
    }
}

static TYPE_INFOS: LazyLock<HashMap<IddObjectType, TypeInfo>> = LazyLock::new(|| {
    crate::objects::type_infos()
        .into_iter()
        .map(|info| (info.object_type, info))
        .collect()
});

/// Facts for `object_type`
pub fn type_info(object_type: IddObjectType) -> TypeInfo {
    TYPE_INFOS
        .get(&object_type)
        .copied()
        .unwrap_or_else(|| TypeInfo::new(object_type))
}

/// Types that have a wrapper
pub fn registered_types() -> Vec<IddObjectType> {
    let mut types: Vec<_> = TYPE_INFOS.keys().copied().collect();
    types.sort_unstable();
    types
}

/// Types whose parent is the unique `parent_type`
pub fn children_of(parent_type: IddObjectType) -> impl Iterator<Item = IddObjectType> {
    type_info(parent_type)
        .allowable_child_types
        .iter()
        .copied()
        .filter(move |child| type_info(*child).parent == ParentRule::Unique(parent_type))
}
