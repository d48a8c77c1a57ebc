//! Field store for a single object

use std::collections::HashSet;

use osmodel_idd::{IddField, IddFieldType, IddObject, IddObjectType};
use tracing::{debug, trace};

use super::slot::{FieldSlot, SizingValue, AUTOCALCULATE, AUTOSIZE};
use super::text::encode_field_text;
use crate::handle::Handle;
use crate::schema::{idd_object, FieldFlags};

/// Typed slots for one object instance
///
/// The slot vector always has one entry per schema field. The object's own
/// handle is kept beside the slots; a handle field reads it but cannot be
/// written.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStore {
    object_type: IddObjectType,
    handle: Handle,
    fields: Vec<FieldSlot>,
    comment: String,
}

impl FieldStore {
    /// Create an empty store with a fresh handle
    pub fn new(object_type: IddObjectType) -> Self {
        Self::with_handle(object_type, Handle::new())
    }

    /// Create an empty store that keeps `handle`
    pub fn with_handle(object_type: IddObjectType, handle: Handle) -> Self {
        let idd = idd_object(object_type);
        Self {
            object_type,
            handle,
            fields: vec![FieldSlot::Empty; idd.num_fields()],
            comment: String::new(),
        }
    }

    #[inline]
    pub fn object_type(&self) -> IddObjectType {
        self.object_type
    }

    #[inline]
    pub fn idd_object(&self) -> &'static IddObject {
        idd_object(self.object_type)
    }

    #[inline]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    #[inline]
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn slot(&self, index: usize) -> Option<&FieldSlot> {
        self.fields.get(index)
    }

    pub fn field(&self, index: usize) -> Option<&'static IddField> {
        self.idd_object().field(index)
    }

    pub fn field_flags(&self, index: usize) -> FieldFlags {
        self.field(index).map(FieldFlags::of).unwrap_or_else(FieldFlags::empty)
    }

    /// Read a text value
    ///
    /// Returns `None` for an empty slot unless `translate_default` is set and
    /// the schema declares a default. Numeric and reference slots do not
    /// read as text.
    pub fn get_string(&self, index: usize, translate_default: bool) -> Option<String> {
        let field = self.field(index)?;
        if field.field_type == IddFieldType::Handle {
            return Some(self.handle.to_string());
        }
        match &self.fields[index] {
            FieldSlot::StringValue(s) => Some(s.clone()),
            FieldSlot::Empty if translate_default => field.default.map(str::to_string),
            FieldSlot::Empty => None,
            other => {
                trace!(
                    "{} field '{}' holds {:?}, not text",
                    self.idd_object().name,
                    field.name,
                    other
                );
                None
            }
        }
    }

    /// Read a numeric value
    ///
    /// Sizing sentinels and text slots read as `None`.
    pub fn get_double(&self, index: usize, translate_default: bool) -> Option<f64> {
        let field = self.field(index)?;
        match &self.fields[index] {
            FieldSlot::NumericValue(v) => Some(*v),
            FieldSlot::Empty if translate_default => field
                .default
                .and_then(SizingValue::parse)
                .and_then(|v| v.value()),
            _ => None,
        }
    }

    /// Read a whole number
    pub fn get_int(&self, index: usize, translate_default: bool) -> Option<i32> {
        let value = self.get_double(index, translate_default)?;
        if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
            Some(value as i32)
        } else {
            None
        }
    }

    /// Write a value given as text
    ///
    /// Numeric fields parse the text; the sizing sentinels are accepted on
    /// fields that allow them. Empty text clears the slot. Returns `false`
    /// and leaves the slot unchanged when the value is rejected.
    pub fn set_string(&mut self, index: usize, value: &str) -> bool {
        let Some(field) = self.field(index) else {
            debug!("{} has no field {}", self.idd_object().name, index);
            return false;
        };
        let text = value.trim();

        match field.field_type {
            IddFieldType::Handle => {
                self.reject(field, value, "handle fields are read-only");
                false
            }
            _ if text.is_empty() => {
                self.fields[index] = FieldSlot::Empty;
                true
            }
            IddFieldType::ObjectList => {
                self.reject(field, value, "object-list fields hold references");
                false
            }
            IddFieldType::Real | IddFieldType::Integer => {
                if text.eq_ignore_ascii_case(AUTOSIZE) {
                    if !field.autosizable {
                        self.reject(field, value, "field is not autosizable");
                        return false;
                    }
                    self.fields[index] = FieldSlot::StringValue(AUTOSIZE.to_string());
                    true
                } else if text.eq_ignore_ascii_case(AUTOCALCULATE) {
                    if !field.autocalculatable {
                        self.reject(field, value, "field is not autocalculatable");
                        return false;
                    }
                    self.fields[index] = FieldSlot::StringValue(AUTOCALCULATE.to_string());
                    true
                } else {
                    match text.parse::<f64>() {
                        Ok(number) => self.set_double(index, number),
                        Err(_) => {
                            self.reject(field, value, "not a number");
                            false
                        }
                    }
                }
            }
            IddFieldType::Alpha | IddFieldType::Choice => {
                self.fields[index] = FieldSlot::StringValue(text.to_string());
                true
            }
        }
    }

    /// Write a numeric value
    pub fn set_double(&mut self, index: usize, value: f64) -> bool {
        let Some(field) = self.field(index) else {
            debug!("{} has no field {}", self.idd_object().name, index);
            return false;
        };
        if !field.field_type.is_numeric() {
            self.reject(field, &value.to_string(), "field is not numeric");
            return false;
        }
        if !value.is_finite() {
            self.reject(field, &value.to_string(), "value is not finite");
            return false;
        }
        if field.field_type == IddFieldType::Integer && value.fract() != 0.0 {
            self.reject(field, &value.to_string(), "field takes whole numbers");
            return false;
        }
        if !field.in_bounds(value) {
            self.reject(field, &value.to_string(), "value is out of bounds");
            return false;
        }
        self.fields[index] = FieldSlot::NumericValue(value);
        true
    }

    /// Write a whole number
    pub fn set_int(&mut self, index: usize, value: i32) -> bool {
        self.set_double(index, f64::from(value))
    }

    /// True iff the slot holds no value
    ///
    /// The object's own handle field is never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        match self.fields.get(index) {
            Some(slot) => slot.is_empty() && !self.field_flags(index).contains(FieldFlags::HANDLE),
            None => true,
        }
    }

    /// Clear the slot back to `Empty`
    pub fn set_empty(&mut self, index: usize) -> bool {
        if index >= self.fields.len() || self.field_flags(index).contains(FieldFlags::HANDLE) {
            return false;
        }
        self.fields[index] = FieldSlot::Empty;
        true
    }

    /// Read an autosizable or autocalculatable field
    pub fn get_sizing(&self, index: usize) -> Option<SizingValue> {
        let field = self.field(index)?;
        match &self.fields[index] {
            FieldSlot::NumericValue(v) => Some(SizingValue::Hardset(*v)),
            FieldSlot::StringValue(s) => SizingValue::parse(s),
            FieldSlot::Empty => field.default.and_then(SizingValue::parse),
            FieldSlot::Reference(_) => None,
        }
    }

    pub fn set_sizing(&mut self, index: usize, value: SizingValue) -> bool {
        match value {
            SizingValue::Autosized => self.set_string(index, AUTOSIZE),
            SizingValue::Autocalculated => self.set_string(index, AUTOCALCULATE),
            SizingValue::Hardset(v) => self.set_double(index, v),
        }
    }

    /// Handle stored in an object-list field
    pub fn get_pointer(&self, index: usize) -> Option<Handle> {
        match self.fields.get(index)? {
            FieldSlot::Reference(handle) => Some(*handle),
            _ => None,
        }
    }

    /// Store a reference in an object-list field
    ///
    /// Only the field type is checked here; the target is the model's concern.
    pub fn set_pointer(&mut self, index: usize, target: Handle) -> bool {
        let Some(field) = self.field(index) else {
            return false;
        };
        if field.field_type != IddFieldType::ObjectList {
            self.reject(field, &target.to_string(), "field does not hold references");
            return false;
        }
        self.fields[index] = FieldSlot::Reference(target);
        true
    }

    /// All (index, target) pairs of the reference slots
    pub fn references(&self) -> impl Iterator<Item = (usize, Handle)> + '_ {
        self.fields.iter().enumerate().filter_map(|(i, slot)| match slot {
            FieldSlot::Reference(h) => Some((i, *h)),
            _ => None,
        })
    }

    /// Empty every reference slot pointing at one of `targets`
    pub(crate) fn clear_references(&mut self, targets: &HashSet<Handle>) -> usize {
        let mut cleared = 0;
        for slot in &mut self.fields {
            if matches!(slot, FieldSlot::Reference(h) if targets.contains(h)) {
                *slot = FieldSlot::Empty;
                cleared += 1;
            }
        }
        cleared
    }

    /// Copy of this store under a fresh handle
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            handle: Handle::new(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> Option<String> {
        let index = self.idd_object().name_field?;
        self.get_string(index, false)
    }

    /// Set the name field without any uniqueness check
    pub fn set_name_raw(&mut self, name: &str) -> bool {
        match self.idd_object().name_field {
            Some(index) => self.set_string(index, name),
            None => false,
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Replace the object comment, prefixing each line with `! `
    pub fn set_comment(&mut self, comment: &str) {
        self.comment = make_comment(comment);
    }

    /// Text of a slot as it is printed
    pub(crate) fn field_text(&self, index: usize) -> String {
        if self.field_flags(index).contains(FieldFlags::HANDLE) {
            return self.handle.to_string();
        }
        match self.fields.get(index) {
            Some(FieldSlot::StringValue(s)) => encode_field_text(s),
            Some(FieldSlot::NumericValue(v)) => v.to_string(),
            Some(FieldSlot::Reference(h)) => h.to_string(),
            Some(FieldSlot::Empty) | None => String::new(),
        }
    }

    fn reject(&self, field: &IddField, value: &str, reason: &str) {
        debug!(
            "Rejected '{}' for {} field '{}': {}",
            value,
            self.idd_object().name,
            field.name,
            reason
        );
    }
}

fn make_comment(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with('!') {
                line.to_string()
            } else {
                format!("! {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boiler() -> FieldStore {
        FieldStore::new(IddObjectType::OsBoilerHotWater)
    }

    #[test]
    fn test_new_store_is_sized_to_schema() {
        let store = FieldStore::new(IddObjectType::OsConvergenceLimits);
        assert_eq!(store.num_fields(), 5);
        assert!(!store.is_empty(0));
        assert!((1..5).all(|i| store.is_empty(i)));
    }

    #[test]
    fn test_with_handle_keeps_handle() {
        let handle = Handle::new();
        let store = FieldStore::with_handle(IddObjectType::OsTimestep, handle);
        assert_eq!(store.handle(), handle);
        assert_eq!(store.get_string(0, false), Some(handle.to_string()));
    }

    #[test]
    fn test_default_translation() {
        let store = FieldStore::new(IddObjectType::OsConvergenceLimits);
        assert_eq!(store.get_int(2, false), None);
        assert_eq!(store.get_int(2, true), Some(20));
        // no default declared
        assert_eq!(store.get_int(1, true), None);
    }

    #[test]
    fn test_string_default_translation() {
        let store = FieldStore::new(IddObjectType::OsSimulationControl);
        assert_eq!(store.get_string(1, true).as_deref(), Some("No"));
        assert_eq!(store.get_string(1, false), None);
    }

    #[test]
    fn test_type_mismatch_reads_none() {
        let mut store = boiler();
        assert!(store.set_double(4, 0.9));
        assert_eq!(store.get_string(4, true), None);
        assert!(store.set_string(2, "NaturalGas"));
        assert_eq!(store.get_double(2, true), None);
    }

    #[test]
    fn test_set_string_parses_numbers() {
        let mut store = boiler();
        assert!(store.set_string(4, " 0.85 "));
        assert_eq!(store.get_double(4, false), Some(0.85));
        assert!(!store.set_string(4, "efficient"));
        assert_eq!(store.get_double(4, false), Some(0.85));
    }

    #[test]
    fn test_bounds_rejected() {
        let mut store = boiler();
        assert!(!store.set_double(4, 0.0));
        assert!(!store.set_double(4, 1.5));
        assert!(store.set_double(4, 1.0));
        assert!(!store.set_double(3, -1.0));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut store = boiler();
        assert!(!store.set_double(3, f64::NAN));
        assert!(!store.set_double(3, f64::INFINITY));
        assert!(store.is_empty(3));
    }

    #[test]
    fn test_integer_fields_take_whole_numbers() {
        let mut store = FieldStore::new(IddObjectType::OsTimestep);
        assert!(!store.set_double(1, 4.5));
        assert!(store.set_double(1, 4.0));
        assert_eq!(store.get_int(1, false), Some(4));
        assert!(!store.set_int(1, 61));
    }

    #[test]
    fn test_handle_field_is_read_only() {
        let mut store = boiler();
        assert!(!store.set_string(0, &Handle::new().to_string()));
        assert!(!store.set_empty(0));
    }

    #[test]
    fn test_empty_text_clears() {
        let mut store = boiler();
        assert!(store.set_double(4, 0.8));
        assert!(store.set_string(4, "  "));
        assert!(store.is_empty(4));
    }

    #[test]
    fn test_text_is_stored_trimmed() {
        let mut store = boiler();
        assert!(store.set_name_raw("  East Boiler \t"));
        assert_eq!(store.name().as_deref(), Some("East Boiler"));
        assert!(store.set_string(2, " Electricity "));
        assert_eq!(store.get_string(2, false).as_deref(), Some("Electricity"));
    }

    #[test]
    fn test_printed_text_is_escaped() {
        let mut store = boiler();
        store.set_name_raw("East, Wing; Boiler!");
        assert_eq!(store.field_text(1), "East&#44 Wing&#59 Boiler&#33");
        assert_eq!(store.name().as_deref(), Some("East, Wing; Boiler!"));
    }

    #[test]
    fn test_set_empty() {
        let mut store = FieldStore::new(IddObjectType::OsTimestep);
        assert!(store.set_int(1, 4));
        assert!(store.set_empty(1));
        assert!(store.set_empty(1));
        assert!(store.is_empty(1));
        assert!(!store.set_empty(7));
    }

    #[test]
    fn test_sizing_round_trip() {
        let mut store = boiler();
        assert_eq!(store.get_sizing(3), None);
        assert!(store.set_sizing(3, SizingValue::Autosized));
        assert_eq!(store.get_sizing(3), Some(SizingValue::Autosized));
        assert_eq!(store.get_double(3, true), None);
        assert!(store.set_sizing(3, SizingValue::Hardset(100.0)));
        assert_eq!(store.get_sizing(3), Some(SizingValue::Hardset(100.0)));
        assert_eq!(store.get_double(3, true), Some(100.0));
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        let mut store = boiler();
        assert!(store.set_string(7, "AutoSize"));
        assert_eq!(store.get_sizing(7), Some(SizingValue::Autosized));
        assert_eq!(store.field_text(7), "autosize");
    }

    #[test]
    fn test_sentinel_rejected_on_plain_numeric_field() {
        let mut store = boiler();
        assert!(!store.set_string(4, "autosize"));
        assert!(!store.set_sizing(4, SizingValue::Autocalculated));
        assert!(store.is_empty(4));
    }

    #[test]
    fn test_pointer_slots() {
        let mut store = boiler();
        let target = Handle::new();
        assert!(!store.set_pointer(3, target));
        assert!(store.set_pointer(6, target));
        assert_eq!(store.get_pointer(6), Some(target));
        assert!(!store.set_string(6, "Some Curve"));
        assert_eq!(store.references().collect::<Vec<_>>(), vec![(6, target)]);
    }

    #[test]
    fn test_clear_references() {
        let mut store = boiler();
        let target = Handle::new();
        store.set_pointer(6, target);
        let other: HashSet<Handle> = [Handle::new()].into_iter().collect();
        assert_eq!(store.clear_references(&other), 0);
        let doomed: HashSet<Handle> = [target].into_iter().collect();
        assert_eq!(store.clear_references(&doomed), 1);
        assert!(store.is_empty(6));
    }

    #[test]
    fn test_names() {
        let mut store = boiler();
        assert_eq!(store.name(), None);
        assert!(store.set_name_raw("Main Boiler"));
        assert_eq!(store.name().as_deref(), Some("Main Boiler"));

        let mut timestep = FieldStore::new(IddObjectType::OsTimestep);
        assert!(!timestep.set_name_raw("Nope"));
        assert_eq!(timestep.name(), None);
    }

    #[test]
    fn test_comment_normalization() {
        let mut store = boiler();
        store.set_comment("Custom Object\n\n! already marked");
        assert_eq!(store.comment(), "! Custom Object\n! already marked");
        store.set_comment("");
        assert_eq!(store.comment(), "");
    }

    #[test]
    fn test_duplicate_changes_handle_only() {
        let mut store = boiler();
        store.set_double(4, 0.8);
        let copy = store.duplicate();
        assert_ne!(copy.handle(), store.handle());
        assert_eq!(copy.get_double(4, false), Some(0.8));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut store = FieldStore::new(IddObjectType::OsTimestep);
        assert_eq!(store.get_string(9, true), None);
        assert!(!store.set_string(9, "1"));
        assert!(store.is_empty(9));
    }
}
