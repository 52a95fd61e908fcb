//! Transient state owned by the workspace flow.

use crate::workspace::Workspace;

/// A deletion waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub id: String,
    pub name: String,
}

impl From<&Workspace> for PendingDeletion {
    fn from(workspace: &Workspace) -> Self {
        Self {
            id: workspace.id.clone(),
            name: workspace.name.clone(),
        }
    }
}

/// The create prompt's input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationDraft {
    pub name: String,
    /// Set while the create request (and its chained switch) is in flight.
    pub submitting: bool,
}

impl CreationDraft {
    /// Clears the name and the submitting flag.
    pub fn reset(&mut self) {
        self.name.clear();
        self.submitting = false;
    }
}
