//! Validity reports
//!
//! Setters already refuse most bad data, so a report mostly catches choice
//! values that are not schema keys and required fields left empty.

use std::fmt;

use osmodel_idd::{IddFieldType, IddObjectType};

use super::slot::{FieldSlot, SizingValue};
use super::store::FieldStore;
use crate::handle::Handle;

/// How strictly an object is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StrictnessLevel {
    /// No checks
    None,
    /// Types, choice keys and numeric bounds
    #[default]
    Draft,
    /// Draft plus required fields
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataErrorType {
    DataType,
    NumericBound,
    NullAndRequired,
}

/// One failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataError {
    pub field_index: usize,
    pub field_name: &'static str,
    pub error_type: DataErrorType,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field {} '{}': {:?}",
            self.field_index, self.field_name, self.error_type
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityReport {
    pub level: StrictnessLevel,
    pub object_type: IddObjectType,
    pub handle: Handle,
    pub errors: Vec<DataError>,
}

impl ValidityReport {
    pub fn num_errors(&self) -> usize {
        self.errors.len()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} at {:?} strictness: {} error(s)",
            self.object_type,
            self.handle,
            self.level,
            self.errors.len()
        )?;
        for error in &self.errors {
            writeln!(f, "  {}", error)?;
        }
        Ok(())
    }
}

impl FieldStore {
    pub fn validity_report(&self, level: StrictnessLevel) -> ValidityReport {
        let mut errors = Vec::new();
        if level > StrictnessLevel::None {
            for (index, field) in self.idd_object().fields.iter().enumerate() {
                let Some(slot) = self.slot(index) else {
                    continue;
                };
                let error_type = match (field.field_type, slot) {
                    (IddFieldType::Handle, _) | (_, FieldSlot::Empty) => {
                        let missing = level >= StrictnessLevel::Final
                            && field.required
                            && field.default.is_none()
                            && self.is_empty(index);
                        missing.then_some(DataErrorType::NullAndRequired)
                    }
                    (IddFieldType::Choice, FieldSlot::StringValue(s)) => field
                        .canonical_key(s)
                        .is_none()
                        .then_some(DataErrorType::DataType),
                    (IddFieldType::Alpha, FieldSlot::StringValue(_)) => None,
                    (IddFieldType::Real | IddFieldType::Integer, FieldSlot::StringValue(s)) => {
                        let permitted = match SizingValue::parse(s) {
                            Some(SizingValue::Autosized) => field.autosizable,
                            Some(SizingValue::Autocalculated) => field.autocalculatable,
                            _ => false,
                        };
                        (!permitted).then_some(DataErrorType::DataType)
                    }
                    (IddFieldType::Real | IddFieldType::Integer, FieldSlot::NumericValue(v)) => {
                        if !v.is_finite()
                            || (field.field_type == IddFieldType::Integer && v.fract() != 0.0)
                        {
                            Some(DataErrorType::DataType)
                        } else if !field.in_bounds(*v) {
                            Some(DataErrorType::NumericBound)
                        } else {
                            None
                        }
                    }
                    (IddFieldType::ObjectList, FieldSlot::Reference(_)) => None,
                    _ => Some(DataErrorType::DataType),
                };
                if let Some(error_type) = error_type {
                    errors.push(DataError {
                        field_index: index,
                        field_name: field.name,
                        error_type,
                    });
                }
            }
        }

        ValidityReport {
            level,
            object_type: self.object_type(),
            handle: self.handle(),
            errors,
        }
    }

    pub fn is_valid(&self, level: StrictnessLevel) -> bool {
        self.validity_report(level).is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_boiler_fails_final_only() {
        let store = FieldStore::new(IddObjectType::OsBoilerHotWater);
        assert!(store.is_valid(StrictnessLevel::Draft));

        let report = store.validity_report(StrictnessLevel::Final);
        let names: Vec<_> = report.errors.iter().map(|e| e.field_name).collect();
        assert_eq!(names, vec!["Name", "Fuel Type", "Nominal Thermal Efficiency"]);
        assert!(report
            .errors
            .iter()
            .all(|e| e.error_type == DataErrorType::NullAndRequired));
    }

    #[test]
    fn test_required_with_default_is_fine() {
        // Calculation Frequency is required but defaulted
        let store = FieldStore::new(IddObjectType::OsShadowCalculation);
        assert!(store.is_valid(StrictnessLevel::Final));
    }

    #[test]
    fn test_unknown_choice_key() {
        let mut store = FieldStore::new(IddObjectType::OsBoilerHotWater);
        assert!(store.set_string(2, "Plutonium"));
        let report = store.validity_report(StrictnessLevel::Draft);
        assert_eq!(report.num_errors(), 1);
        assert_eq!(report.errors[0].field_index, 2);
        assert_eq!(report.errors[0].error_type, DataErrorType::DataType);

        assert!(store.set_string(2, "naturalgas"));
        assert!(store.is_valid(StrictnessLevel::Draft));
    }

    #[test]
    fn test_none_level_checks_nothing() {
        let mut store = FieldStore::new(IddObjectType::OsBoilerHotWater);
        store.set_string(2, "Plutonium");
        assert!(store.is_valid(StrictnessLevel::None));
    }

    #[test]
    fn test_strictness_ordering() {
        assert!(StrictnessLevel::None < StrictnessLevel::Draft);
        assert!(StrictnessLevel::Draft < StrictnessLevel::Final);
    }

    #[test]
    fn test_report_display() {
        let store = FieldStore::new(IddObjectType::OsBoilerHotWater);
        let text = store.validity_report(StrictnessLevel::Final).to_string();
        assert!(text.starts_with("OS:Boiler:HotWater {"));
        assert!(text.contains("3 error(s)"));
        assert!(text.contains("field 2 'Fuel Type': NullAndRequired"));
    }
}
