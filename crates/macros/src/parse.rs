//! Attribute parsing for the ModelObject derive macro

use darling::{FromDeriveInput, FromField};
use syn::{DeriveInput, Ident, Path, Type};

/// Parsed #[model_object(...)] attributes on the struct
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(model_object), supports(struct_named))]
pub struct ModelObjectArgs {
    /// Struct identifier
    pub ident: Ident,

    /// Struct fields
    pub data: darling::ast::Data<(), FieldArgs>,

    /// `IddObjectType` variant (e.g., "OsBoilerHotWater")
    pub idd: Ident,

    /// At most one instance per model
    #[darling(default)]
    pub unique: bool,

    /// Wrapper type of the unique parent
    #[darling(default)]
    pub parent: Option<Path>,

    /// Wrapper types this object may contain
    #[darling(multiple, rename = "child")]
    pub children: Vec<Path>,

    /// `fn(&mut FieldStore)` writing constructor-time values
    #[darling(default)]
    pub init: Option<Path>,
}

/// How a field's getter reports its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Always holds a value; getter returns `T`
    Required,
    /// Falls back to the schema default; getter returns `T`
    Defaulted,
    /// Getter returns `Option<T>`
    Optional,
    /// Numeric field that may hold `autosize`
    Autosizable,
    /// Object-list field; `T` is the target wrapper
    Pointer,
}

/// Parsed #[field(...)] attributes on a field
#[derive(Debug, FromField)]
#[darling(attributes(field))]
pub struct FieldArgs {
    /// Field identifier
    pub ident: Option<Ident>,

    /// Field type
    pub ty: Type,

    /// Schema field name (e.g., "Nominal Capacity")
    /// If not specified, this is not a schema field (e.g., the obj field)
    #[darling(rename = "name")]
    pub field_name: Option<String>,

    #[darling(default)]
    pub required: bool,

    #[darling(default)]
    pub defaulted: bool,

    #[darling(default)]
    pub optional: bool,

    #[darling(default)]
    pub autosizable: bool,

    #[darling(default)]
    pub pointer: bool,

    /// Generate `valid_*_values()`
    #[darling(default)]
    pub choice: bool,

    /// Don't generate a setter
    #[darling(default)]
    pub readonly: bool,

    /// Label of the sized value in sizing results
    #[darling(default)]
    pub sizing: Option<String>,

    /// Units of the sized value
    #[darling(default)]
    pub units: Option<String>,
}

impl FieldArgs {
    /// Check if this is a schema field (has name attribute)
    pub fn is_schema_field(&self) -> bool {
        self.field_name.is_some()
    }

    /// Check if this is the base object field
    pub fn is_obj_field(&self) -> bool {
        self.ident.as_ref().map(|i| i == "obj").unwrap_or(false)
    }

    /// The single access kind this field declares
    pub fn kind(&self) -> darling::Result<FieldKind> {
        let declared = [
            (self.required, FieldKind::Required),
            (self.defaulted, FieldKind::Defaulted),
            (self.optional, FieldKind::Optional),
            (self.autosizable, FieldKind::Autosizable),
            (self.pointer, FieldKind::Pointer),
        ];
        let mut kinds = declared.iter().filter(|(set, _)| *set).map(|(_, kind)| *kind);
        match (kinds.next(), kinds.next()) {
            (Some(kind), None) => Ok(kind),
            (None, _) => Err(darling::Error::custom(
                "expected one of `required`, `defaulted`, `optional`, `autosizable`, `pointer`",
            )),
            (Some(_), Some(_)) => Err(darling::Error::custom(
                "only one of `required`, `defaulted`, `optional`, `autosizable`, `pointer` may be given",
            )),
        }
    }
}

/// Parse a DeriveInput into ModelObjectArgs
pub fn parse_model_object(input: &DeriveInput) -> darling::Result<ModelObjectArgs> {
    ModelObjectArgs::from_derive_input(input)
}
