//! IDF object layer - the per-object field store
//!
//! A [`FieldStore`] is the persisted data of one object: its type, its
//! handle and one [`FieldSlot`] per schema field. Everything above this
//! layer (the model container, typed wrappers) reads and writes through
//! the store's index-based accessors.
//!
//! # Example
//!
//! ```ignore
//! use osmodel_core::idf::FieldStore;
//! use osmodel_core::IddObjectType;
//!
//! let mut store = FieldStore::new(IddObjectType::OsTimestep);
//! assert!(store.is_empty(1));
//! assert_eq!(store.get_int(1, true), Some(6));
//!
//! assert!(store.set_int(1, 4));
//! println!("{}", store);
//! ```

mod slot;
mod store;
mod text;
mod validity;

pub use slot::{FieldSlot, SizingValue, AUTOCALCULATE, AUTOSIZE};
pub use store::FieldStore;
pub use text::{split_objects, IdfError, DEFAULT_FIELD_SPACE};
pub use validity::{DataError, DataErrorType, StrictnessLevel, ValidityReport};
