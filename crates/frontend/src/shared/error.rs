//! Failure kinds of the list/editor synchronization
//!
//! Every network call and every submit attempt ends in `Result<_, SyncError>`.
//! Screens never inspect transport errors directly: they show
//! [`SyncError::user_message`] through the alert service.

use thiserror::Error;

/// Which write operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update,
    Delete,
}

impl WriteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteAction::Create => "create",
            WriteAction::Update => "update",
            WriteAction::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Loading the collection failed (network, HTTP status or JSON)
    #[error("failed to load data: {message}")]
    Fetch { message: String },

    /// A required field is blank; nothing was sent
    #[error("{field} is required")]
    Validation { field: String },

    /// Create/update/delete failed on the network or on the server
    #[error("failed to {}: {message}", .action.as_str())]
    Write { action: WriteAction, message: String },

    /// A submit from the same editor is still in flight
    #[error("a save is already in progress")]
    Busy,

    /// The editor is closed
    #[error("the editor is not open")]
    NotOpen,
}

impl SyncError {
    pub fn fetch(message: impl Into<String>) -> Self {
        SyncError::Fetch {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>) -> Self {
        SyncError::Validation {
            field: field.into(),
        }
    }

    pub fn write(action: WriteAction, message: impl Into<String>) -> Self {
        SyncError::Write {
            action,
            message: message.into(),
        }
    }

    /// Short title for the alert box
    pub fn title(&self) -> &'static str {
        match self {
            SyncError::Fetch { .. } => "Loading failed",
            SyncError::Validation { .. } => "Missing information",
            SyncError::Write { .. } => "Saving failed",
            SyncError::Busy | SyncError::NotOpen => "Please wait",
        }
    }

    /// Human-readable text shown to the user
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => text,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SyncError::validation("Chapter title").user_message(),
            "Chapter title is required"
        );
        assert_eq!(
            SyncError::write(WriteAction::Delete, "HTTP 404").user_message(),
            "Failed to delete: HTTP 404"
        );
        assert_eq!(
            SyncError::fetch("HTTP 500").user_message(),
            "Failed to load data: HTTP 500"
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(SyncError::Busy.title(), "Please wait");
        assert!(SyncError::validation("x").is_validation());
        assert!(!SyncError::NotOpen.is_validation());
    }
}
