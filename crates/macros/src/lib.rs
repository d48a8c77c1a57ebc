//! osmodel Proc Macros
//!
//! This crate provides `#[derive(ModelObject)]`, which turns a struct
//! declaring schema fields into a typed model object wrapper.
//!
//! # Example
//!
//! ```ignore
//! use std::marker::PhantomData;
//! use osmodel_core::model::ModelObject;
//! use osmodel_macros::ModelObject;
//!
//! #[derive(Clone, ModelObject)]
//! #[model_object(idd = "OsTimestep", unique, parent = "SimulationControl", init = "init")]
//! pub struct Timestep {
//!     obj: ModelObject,
//!
//!     #[field(name = "Number of Timesteps per Hour", defaulted)]
//!     number_of_timesteps_per_hour: PhantomData<i32>,
//! }
//!
//! // Generated methods:
//! // - timestep.number_of_timesteps_per_hour() -> i32
//! // - timestep.set_number_of_timesteps_per_hour(4) -> bool
//! // - timestep.is_number_of_timesteps_per_hour_defaulted() -> bool
//! // - timestep.reset_number_of_timesteps_per_hour() -> bool
//! // - timestep.parent() -> Option<SimulationControl>
//! ```
//!
//! # Attributes
//!
//! ## Struct Attributes
//!
//! - `#[model_object(idd = "Variant")]` - **Required.** The `IddObjectType` variant.
//! - `#[model_object(unique)]` - At most one instance per model; no `new` is generated.
//! - `#[model_object(parent = "Wrapper")]` - The unique parent's wrapper type.
//! - `#[model_object(child = "Wrapper")]` - An allowable child type; may repeat.
//! - `#[model_object(init = "path")]` - `fn(&mut FieldStore)` run by the constructor.
//!
//! ## Field Attributes
//!
//! Exactly one access kind:
//!
//! - `required` - getter returns `T`, panicking if the field was cleared.
//! - `defaulted` - getter returns `T`, using the schema default when empty.
//! - `optional` - getter returns `Option<T>`.
//! - `autosizable` - numeric field that may hold `autosize`.
//! - `pointer` - object-list field; `T` is the target wrapper.
//!
//! And optionally:
//!
//! - `choice` - generate `valid_*_values()`.
//! - `readonly` - don't generate a setter.
//! - `sizing = "label", units = "W"` - the field's entry in sizing results.

mod model_object;
mod parse;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive macro for model object wrappers
///
/// The struct must hold the wrapped object in a field named `obj`. Every
/// other field is a `PhantomData<T>` marker carrying a `#[field(...)]`
/// attribute.
///
/// # Generated Code
///
/// For each schema field, the macro generates:
///
/// - A lazily-resolved `SchemaField<T>` static
/// - A getter and, unless `readonly`, a setter
/// - A `*_FIELD` constant holding the schema field name
/// - Reset, default, sizing and choice helpers as the attributes ask
///
/// For the struct:
///
/// - `IDD_OBJECT_TYPE` and `ALLOWABLE_CHILD_TYPES` constants
/// - `new(&Model)` for types that are not unique
/// - Typed `parent()` / `set_parent()` when a parent is given
/// - `ModelObjectCast`, `ModelObjectType`, and where they apply
///   `UniqueModelObject` and `Autosize`
/// - `Deref<Target = ModelObject>`, `From<Self> for ModelObject`,
///   `PartialEq`, `Eq`, `Hash` and `Debug`
#[proc_macro_derive(ModelObject, attributes(model_object, field))]
pub fn derive_model_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    model_object::derive_model_object(input).into()
}
