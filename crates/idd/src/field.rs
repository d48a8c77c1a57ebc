//! Field descriptors
//!
//! Tables are built with a `const` builder so every descriptor lives in
//! static memory:
//!
//! ```ignore
//! const LOADS: IddField = IddField::real("Loads Convergence Tolerance Value")
//!     .default("0.04")
//!     .min_exclusive(0.0)
//!     .max(0.5)
//!     .units("W");
//! ```

/// Data type of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IddFieldType {
    /// The object's identity, printed as `{uuid}`.
    Handle,
    /// Free text.
    Alpha,
    /// One of a fixed set of keys.
    Choice,
    /// Floating point number.
    Real,
    /// Whole number.
    Integer,
    /// Reference to another object by handle.
    ObjectList,
}

impl IddFieldType {
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Real | Self::Integer)
    }
}

/// A numeric bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

impl Bound {
    pub fn admits_as_minimum(self, value: f64) -> bool {
        match self {
            Bound::Inclusive(min) => value >= min,
            Bound::Exclusive(min) => value > min,
        }
    }

    pub fn admits_as_maximum(self, value: f64) -> bool {
        match self {
            Bound::Inclusive(max) => value <= max,
            Bound::Exclusive(max) => value < max,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Bound::Inclusive(v) | Bound::Exclusive(v) => v,
        }
    }
}

/// Descriptor of one field of an object type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IddField {
    pub name: &'static str,
    pub field_type: IddFieldType,
    pub required: bool,
    pub default: Option<&'static str>,
    pub minimum: Option<Bound>,
    pub maximum: Option<Bound>,
    pub autosizable: bool,
    pub autocalculatable: bool,
    /// Allowed keys for [`IddFieldType::Choice`] fields.
    pub keys: &'static [&'static str],
    pub units: Option<&'static str>,
    /// Reference lists an [`IddFieldType::ObjectList`] field accepts.
    pub object_lists: &'static [&'static str],
}

impl IddField {
    const fn new(name: &'static str, field_type: IddFieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
            default: None,
            minimum: None,
            maximum: None,
            autosizable: false,
            autocalculatable: false,
            keys: &[],
            units: None,
            object_lists: &[],
        }
    }

    pub const fn handle() -> Self {
        Self::new("Handle", IddFieldType::Handle).required()
    }

    pub const fn alpha(name: &'static str) -> Self {
        Self::new(name, IddFieldType::Alpha)
    }

    pub const fn choice(name: &'static str, keys: &'static [&'static str]) -> Self {
        let mut field = Self::new(name, IddFieldType::Choice);
        field.keys = keys;
        field
    }

    pub const fn real(name: &'static str) -> Self {
        Self::new(name, IddFieldType::Real)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, IddFieldType::Integer)
    }

    pub const fn object_list(name: &'static str, lists: &'static [&'static str]) -> Self {
        let mut field = Self::new(name, IddFieldType::ObjectList);
        field.object_lists = lists;
        field
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default(mut self, text: &'static str) -> Self {
        self.default = Some(text);
        self
    }

    pub const fn min(mut self, value: f64) -> Self {
        self.minimum = Some(Bound::Inclusive(value));
        self
    }

    pub const fn min_exclusive(mut self, value: f64) -> Self {
        self.minimum = Some(Bound::Exclusive(value));
        self
    }

    pub const fn max(mut self, value: f64) -> Self {
        self.maximum = Some(Bound::Inclusive(value));
        self
    }

    pub const fn max_exclusive(mut self, value: f64) -> Self {
        self.maximum = Some(Bound::Exclusive(value));
        self
    }

    pub const fn autosizable(mut self) -> Self {
        self.autosizable = true;
        self
    }

    pub const fn autocalculatable(mut self) -> Self {
        self.autocalculatable = true;
        self
    }

    pub const fn units(mut self, units: &'static str) -> Self {
        self.units = Some(units);
        self
    }

    /// Whether `value` lies within both bounds.
    pub fn in_bounds(&self, value: f64) -> bool {
        self.minimum.map_or(true, |b| b.admits_as_minimum(value))
            && self.maximum.map_or(true, |b| b.admits_as_maximum(value))
    }

    /// Case-insensitive key lookup, returning the canonical spelling.
    pub fn canonical_key(&self, text: &str) -> Option<&'static str> {
        self.keys
            .iter()
            .copied()
            .find(|key| key.eq_ignore_ascii_case(text.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_flags() {
        const F: IddField = IddField::real("Nominal Capacity")
            .autosizable()
            .min(0.0)
            .units("W");
        assert!(F.autosizable);
        assert!(!F.autocalculatable);
        assert!(!F.required);
        assert_eq!(F.units, Some("W"));
        assert_eq!(F.minimum, Some(Bound::Inclusive(0.0)));
    }

    #[test]
    fn exclusive_bounds() {
        let f = IddField::real("X").min_exclusive(0.0).max(0.5);
        assert!(!f.in_bounds(0.0));
        assert!(f.in_bounds(0.25));
        assert!(f.in_bounds(0.5));
        assert!(!f.in_bounds(0.51));
    }

    #[test]
    fn unbounded_accepts_everything() {
        let f = IddField::real("X");
        assert!(f.in_bounds(-1.0e9));
        assert!(f.in_bounds(1.0e9));
    }

    #[test]
    fn canonical_key_lookup() {
        let f = IddField::choice("Mode", &["NotModulated", "ConstantFlow"]);
        assert_eq!(f.canonical_key("constantflow"), Some("ConstantFlow"));
        assert_eq!(f.canonical_key(" NOTMODULATED "), Some("NotModulated"));
        assert_eq!(f.canonical_key("Bogus"), None);
    }

    #[test]
    fn handle_is_required() {
        let f = IddField::handle();
        assert!(f.required);
        assert_eq!(f.field_type, IddFieldType::Handle);
    }
}
