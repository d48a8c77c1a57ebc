//! Field slots and sizing values

use std::fmt;

use crate::handle::Handle;

/// Sentinel stored in an autosizable field
pub const AUTOSIZE: &str = "autosize";

/// Sentinel stored in an autocalculatable field
pub const AUTOCALCULATE: &str = "autocalculate";

/// Contents of one field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldSlot {
    /// No value; the schema default applies
    #[default]
    Empty,
    StringValue(String),
    NumericValue(f64),
    /// Handle of another object in the same model
    Reference(Handle),
}

impl FieldSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldSlot::Empty)
    }
}

/// Value of an autosizable or autocalculatable field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingValue {
    /// Sized by the simulation engine
    Autosized,
    /// Calculated by the simulation engine
    Autocalculated,
    /// A concrete number
    Hardset(f64),
}

impl SizingValue {
    /// Interpret a sentinel or number, ignoring ASCII case
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case(AUTOSIZE) {
            Some(SizingValue::Autosized)
        } else if text.eq_ignore_ascii_case(AUTOCALCULATE) {
            Some(SizingValue::Autocalculated)
        } else {
            text.parse::<f64>().ok().map(SizingValue::Hardset)
        }
    }

    pub fn is_autosized(&self) -> bool {
        matches!(self, SizingValue::Autosized)
    }

    pub fn is_autocalculated(&self) -> bool {
        matches!(self, SizingValue::Autocalculated)
    }

    /// The number, if hard-set
    pub fn value(&self) -> Option<f64> {
        match self {
            SizingValue::Hardset(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for SizingValue {
    fn from(value: f64) -> Self {
        SizingValue::Hardset(value)
    }
}

impl fmt::Display for SizingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingValue::Autosized => f.write_str(AUTOSIZE),
            SizingValue::Autocalculated => f.write_str(AUTOCALCULATE),
            SizingValue::Hardset(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinels() {
        assert_eq!(SizingValue::parse("AutoSize"), Some(SizingValue::Autosized));
        assert_eq!(SizingValue::parse(" autocalculate "), Some(SizingValue::Autocalculated));
        assert_eq!(SizingValue::parse("12.5"), Some(SizingValue::Hardset(12.5)));
        assert_eq!(SizingValue::parse("big"), None);
    }

    #[test]
    fn test_value_and_flags() {
        assert_eq!(SizingValue::Hardset(3.0).value(), Some(3.0));
        assert_eq!(SizingValue::Autosized.value(), None);
        assert!(SizingValue::Autosized.is_autosized());
        assert!(!SizingValue::Autocalculated.is_autosized());
        assert!(SizingValue::Autocalculated.is_autocalculated());
    }

    #[test]
    fn test_display() {
        assert_eq!(SizingValue::Autosized.to_string(), "autosize");
        assert_eq!(SizingValue::from(100.0).to_string(), "100");
    }

    #[test]
    fn test_slot_default_is_empty() {
        assert!(FieldSlot::default().is_empty());
        assert!(!FieldSlot::NumericValue(0.0).is_empty());
    }
}
