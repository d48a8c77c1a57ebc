//! Typed field values
//!
//! [`FieldValue`] maps a Rust type onto the store's text / numeric slots.
//! `bool` maps onto `Yes` / `No` choice fields.

use osmodel_idd::IddFieldType;
use tracing::debug;

use crate::idf::FieldStore;

/// A Rust type that can be read from and written to a field slot
pub trait FieldValue: Sized {
    fn read(store: &FieldStore, index: usize, translate_default: bool) -> Option<Self>;

    /// Returns `false` and leaves the slot unchanged on rejection
    fn write(store: &mut FieldStore, index: usize, value: Self) -> bool;
}

impl FieldValue for f64 {
    fn read(store: &FieldStore, index: usize, translate_default: bool) -> Option<Self> {
        store.get_double(index, translate_default)
    }

    fn write(store: &mut FieldStore, index: usize, value: Self) -> bool {
        store.set_double(index, value)
    }
}

impl FieldValue for i32 {
    fn read(store: &FieldStore, index: usize, translate_default: bool) -> Option<Self> {
        store.get_int(index, translate_default)
    }

    fn write(store: &mut FieldStore, index: usize, value: Self) -> bool {
        store.set_int(index, value)
    }
}

impl FieldValue for String {
    fn read(store: &FieldStore, index: usize, translate_default: bool) -> Option<Self> {
        store.get_string(index, translate_default)
    }

    /// Choice fields only take schema keys and store their canonical spelling
    fn write(store: &mut FieldStore, index: usize, value: Self) -> bool {
        match store.field(index) {
            Some(field) if field.field_type == IddFieldType::Choice => {
                match field.canonical_key(&value) {
                    Some(key) => store.set_string(index, key),
                    None => {
                        debug!(
                            "'{}' is not a valid key for {} field '{}'",
                            value,
                            store.idd_object().name,
                            field.name
                        );
                        false
                    }
                }
            }
            _ => store.set_string(index, &value),
        }
    }
}

impl FieldValue for bool {
    fn read(store: &FieldStore, index: usize, translate_default: bool) -> Option<Self> {
        let text = store.get_string(index, translate_default)?;
        if text.eq_ignore_ascii_case("Yes") {
            Some(true)
        } else if text.eq_ignore_ascii_case("No") {
            Some(false)
        } else {
            None
        }
    }

    fn write(store: &mut FieldStore, index: usize, value: Self) -> bool {
        let key = if value { "Yes" } else { "No" };
        match store.field(index) {
            Some(field) if field.canonical_key(key).is_some() => store.set_string(index, key),
            _ => false,
        }
    }
}
