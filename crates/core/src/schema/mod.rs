//! Schema access - field lookup over the static IDD tables
//!
//! Typed wrappers never hard-code field positions. They name fields by their
//! schema name and resolve the index lazily on first access, which keeps the
//! wrappers correct if a table gains or reorders fields.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   osmodel-idd (static tables)               │
//! │   idd_object(type) → IddObject { fields: [IddField] }       │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Schema Module                             │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │ system::field_index(type, name) -> usize            │   │
//! │  │   - Case-insensitive name lookup                    │   │
//! │  │   - Caches results in DashMap                       │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                          │                                  │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │ SchemaField<T>                                      │   │
//! │  │   - Per-field OnceLock for the index                │   │
//! │  │   - get(object) -> Option<T>                        │   │
//! │  │   - set(object, value) -> bool                      │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use osmodel_core::schema::{field_index, SchemaField};
//! use osmodel_core::IddObjectType;
//!
//! static MAX_HVAC: SchemaField<i32> =
//!     SchemaField::new(IddObjectType::OsConvergenceLimits, "Maximum HVAC Iterations");
//!
//! let iterations = MAX_HVAC.get(&object);
//! MAX_HVAC.set(&object, 30);
//!
//! // Or query indices directly
//! let index = field_index(IddObjectType::OsConvergenceLimits, "Maximum HVAC Iterations")?;
//! ```

pub mod field;
pub mod flags;
pub mod system;

pub use field::SchemaField;
pub use flags::FieldFlags;
pub use system::{field, field_index, idd_object, idd_object_by_name, SchemaError};
