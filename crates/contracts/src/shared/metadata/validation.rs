//! Requirement rules for editor fields

/// Editor mode a record form is opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMode {
    Create,
    Edit,
}

/// When a field has to be non-blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    #[default]
    Optional,
    /// Required both when creating and when editing
    Always,
    /// Required only when creating a new record
    OnCreate,
}

impl Requirement {
    pub const fn applies_to(&self, mode: FormMode) -> bool {
        match self {
            Requirement::Optional => false,
            Requirement::Always => true,
            Requirement::OnCreate => matches!(mode, FormMode::Create),
        }
    }
}
