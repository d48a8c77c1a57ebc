//! Object descriptors

use crate::field::IddField;
use crate::object_type::IddObjectType;

/// Descriptor of one object type: its name and ordered fields.
#[derive(Debug)]
pub struct IddObject {
    pub object_type: IddObjectType,
    /// Schema name, e.g. `OS:Boiler:HotWater`.
    pub name: &'static str,
    pub fields: &'static [IddField],
    /// At most one instance may exist per model.
    pub unique: bool,
    /// Field 0 holds the object handle.
    pub has_handle_field: bool,
    pub name_field: Option<usize>,
    /// Reference lists this type belongs to, targets of object-list fields.
    pub references: &'static [&'static str],
}

impl IddObject {
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&'static IddField> {
        self.fields.get(index)
    }

    /// Index of the field named `name`, ignoring ASCII case.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn belongs_to(&self, reference_list: &str) -> bool {
        self.references
            .iter()
            .any(|r| r.eq_ignore_ascii_case(reference_list))
    }
}

#[cfg(test)]
mod tests {
    use crate::{idd_object, IddObjectType};

    #[test]
    fn field_index_by_name() {
        let obj = idd_object(IddObjectType::OsConvergenceLimits);
        assert_eq!(obj.field_index("Handle"), Some(0));
        assert_eq!(obj.field_index("maximum hvac iterations"), Some(2));
        assert_eq!(obj.field_index("Nope"), None);
    }

    #[test]
    fn curves_are_univariate() {
        assert!(idd_object(IddObjectType::OsCurveQuadratic).belongs_to("UniVariateCurves"));
        assert!(idd_object(IddObjectType::OsCurveCubic).belongs_to("univariatecurves"));
        assert!(!idd_object(IddObjectType::OsTimestep).belongs_to("UniVariateCurves"));
    }
}
