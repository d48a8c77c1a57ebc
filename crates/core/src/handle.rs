//! Object handles
//!
//! Every model object carries a globally unique handle. Handles are what
//! object-list fields store, so a reference survives renames and is
//! printed in text form as a braced UUID:
//!
//! ```text
//! {8a1c7e52-2a5e-4c4e-9a51-0c1b3a1c9f10}
//! ```

use std::fmt;

use uuid::Uuid;

/// Globally unique identity of a model object
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(Uuid);

impl Handle {
    /// Create a fresh random handle
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The null handle, never assigned to an object
    #[inline]
    pub const fn null() -> Self {
        Self(Uuid::nil())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_nil()
    }

    /// Parse the braced text form. Bare UUIDs are accepted too.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let inner = text
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .unwrap_or(text);
        Uuid::parse_str(inner).ok().map(Self)
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for Handle {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Handle(null)")
        } else {
            write!(f, "Handle({})", self.0.hyphenated())
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_handles_are_distinct() {
        let a = Handle::new();
        let b = Handle::new();
        assert_ne!(a, b);
        assert!(!a.is_null());
    }

    #[test]
    fn test_null_handle() {
        let h = Handle::null();
        assert!(h.is_null());
        assert_eq!(format!("{:?}", h), "Handle(null)");
    }

    #[test]
    fn test_display_is_braced() {
        let h = Handle::new();
        let text = h.to_string();
        assert!(text.starts_with('{'));
        assert!(text.ends_with('}'));
        assert_eq!(text.len(), 38);
    }

    #[test]
    fn test_parse_round_trip() {
        let h = Handle::new();
        assert_eq!(Handle::parse(&h.to_string()), Some(h));
        assert_eq!(Handle::parse(&format!("  {}  ", h)), Some(h));
    }

    #[test]
    fn test_parse_bare_uuid() {
        let h = Handle::parse("8a1c7e52-2a5e-4c4e-9a51-0c1b3a1c9f10").unwrap();
        assert_eq!(h.to_string(), "{8a1c7e52-2a5e-4c4e-9a51-0c1b3a1c9f10}");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Handle::parse(""), None);
        assert_eq!(Handle::parse("{not-a-uuid}"), None);
        assert_eq!(Handle::parse("Boiler 1"), None);
    }

    #[test]
    fn test_handle_clone_copy() {
        let h1 = Handle::new();
        let h2 = h1;
        let h3 = h1.clone();
        assert_eq!(h1, h2);
        assert_eq!(h1, h3);
    }
}
