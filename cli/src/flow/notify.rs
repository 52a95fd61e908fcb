//! Notification capability.

use std::fmt;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Sink for toast-style messages. Fire-and-forget.
pub trait Notifier {
    /// Shows `message` to the user.
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Messages the workspace flow emits.
pub mod messages {
    pub const SWITCHED: &str = "Switched workspace";
    pub const SAVE_FAILED: &str = "Save failed";
    pub const NAME_REQUIRED: &str = "Workspace name is required";
    pub const CREATED: &str = "Workspace created";
    pub const EXCEEDED_LIMIT: &str = "You have reached the maximum number of workspaces";
    pub const CREATE_FAILED: &str = "Failed to create workspace";
    pub const DELETED: &str = "Workspace deleted";
    pub const DELETE_FAILED: &str = "Failed to delete workspace";
}
