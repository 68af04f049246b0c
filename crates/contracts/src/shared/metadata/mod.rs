//! Field metadata for catalog records
//!
//! Every record kind describes its editable text fields as a static slice of
//! [`FieldMetadata`]. Editor forms are rendered from it and required-field
//! validation reads it, so both stay in one place.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::CatalogRecord;
//!
//! for field in CurriculumChapter::field_metadata() {
//!     if field.is_required(FormMode::Create) {
//!         println!("Required: {}", field.ui.label);
//!     }
//! }
//! ```

mod types;
mod validation;

pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::{FormMode, Requirement};
