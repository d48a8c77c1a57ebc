//! Per-field flag summary

use bitflags::bitflags;
use osmodel_idd::{IddField, IddFieldType};

bitflags! {
    /// Flags summarising a field descriptor
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u32 {
        /// Must be non-empty at final strictness
        const REQUIRED = 0x01;
        /// Accepts the `Autosize` keyword
        const AUTOSIZABLE = 0x02;
        /// Accepts the `Autocalculate` keyword
        const AUTOCALCULATABLE = 0x04;
        /// Has a schema default
        const HAS_DEFAULT = 0x08;
        /// Real or integer
        const NUMERIC = 0x10;
        /// Whole numbers only
        const INTEGER = 0x20;
        /// Holds a handle to another object
        const REFERENCE = 0x40;
        /// The object's own handle
        const HANDLE = 0x80;
    }
}

impl FieldFlags {
    pub fn of(field: &IddField) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::REQUIRED, field.required);
        flags.set(Self::AUTOSIZABLE, field.autosizable);
        flags.set(Self::AUTOCALCULATABLE, field.autocalculatable);
        flags.set(Self::HAS_DEFAULT, field.default.is_some());
        flags.set(Self::NUMERIC, field.field_type.is_numeric());
        flags.set(Self::INTEGER, field.field_type == IddFieldType::Integer);
        flags.set(Self::REFERENCE, field.field_type == IddFieldType::ObjectList);
        flags.set(Self::HANDLE, field.field_type == IddFieldType::Handle);
        flags
    }

    /// Accepts at least one sizing keyword
    pub fn is_sizable(self) -> bool {
        self.intersects(Self::AUTOSIZABLE | Self::AUTOCALCULATABLE)
    }
}
