//! Common types and traits for all catalog records

pub mod catalog_record;
pub mod serde_helpers;

// Re-exports
pub use catalog_record::{CatalogRecord, FieldValues};
