use crate::shared::metadata::FieldMetadata;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Text field values of an editor buffer, keyed by wire name
pub type FieldValues = BTreeMap<&'static str, String>;

/// A record kept in a remote REST collection
///
/// Both catalog resources (curriculum chapters and pricing plans) share the
/// same shape: a server-assigned id, a handful of text fields and one ordered
/// list of free-form strings. The list/editor machinery in the frontend is
/// written once against this trait.
pub trait CatalogRecord:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Request body for create/update: the record without its id
    type Draft: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Server-assigned id
    fn id(&self) -> &str;

    /// Value of a text field by wire name, `None` for unknown names
    fn field_value(&self, name: &str) -> Option<&str>;

    /// The ordered sub-item list (lessons, benefits)
    fn sub_items(&self) -> &[String];

    // ============================================================================
    // Record kind metadata
    // ============================================================================

    /// UI name of a single record (e.g. "Chapter")
    fn element_name() -> &'static str;

    /// UI name of the list (e.g. "Curriculum")
    fn list_name() -> &'static str;

    /// UI name of the sub-item list (e.g. "Lessons")
    fn sub_items_label() -> &'static str;

    /// Editable text fields, in form order
    fn field_metadata() -> &'static [FieldMetadata];

    /// Build the request body from editor values
    fn build_draft(fields: &FieldValues, sub_items: Vec<String>) -> Self::Draft;

    /// The record a server stores for `draft` under `id`
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    // ============================================================================
    // Provided
    // ============================================================================

    /// Snapshot of every editable field, missing values as empty strings
    fn field_values(&self) -> FieldValues {
        Self::field_metadata()
            .iter()
            .map(|f| (f.name, self.field_value(f.name).unwrap_or_default().to_string()))
            .collect()
    }
}

/// Read a field from editor values, empty when absent
pub(crate) fn take(fields: &FieldValues, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}
