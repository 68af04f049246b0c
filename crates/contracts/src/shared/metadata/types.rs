//! Core metadata types for record fields
//!
//! All types use 'static lifetimes so record kinds can declare them as
//! compile-time constants.

use super::validation::{FormMode, Requirement};

/// Metadata for a single editable text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Wire name of the field (as in the JSON body)
    pub name: &'static str,
    pub ui: FieldUiMetadata,
    pub required: Requirement,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, required: Requirement) -> Self {
        Self {
            name,
            ui: FieldUiMetadata {
                label,
                placeholder: None,
                multiline: false,
            },
            required,
        }
    }

    pub const fn with_placeholder(self, placeholder: &'static str) -> Self {
        Self {
            ui: FieldUiMetadata {
                placeholder: Some(placeholder),
                ..self.ui
            },
            ..self
        }
    }

    pub const fn multiline(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                multiline: true,
                ..self.ui
            },
            ..self
        }
    }

    /// Check if the field must be filled in the given form mode
    pub fn is_required(&self, mode: FormMode) -> bool {
        self.required.applies_to(mode)
    }

    /// Check a value against the requirement; `Err` carries the field label
    pub fn check(&self, value: &str, mode: FormMode) -> Result<(), &'static str> {
        if self.is_required(mode) && value.trim().is_empty() {
            Err(self.ui.label)
        } else {
            Ok(())
        }
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    /// Render as a textarea instead of a single-line input
    pub multiline: bool,
}
