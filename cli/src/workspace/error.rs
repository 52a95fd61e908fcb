//! Workspace-specific error types.

use thiserror::Error;

/// Errors raised while interpreting the cached workspace list.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// No workspace has the given id or name.
    #[error("Workspace '{0}' not found. Run 'wsctl list' to see your workspaces.")]
    NotFound(String),

    /// Several workspaces share the given name.
    #[error("More than one workspace is named '{0}'. Use the workspace id instead.")]
    AmbiguousName(String),

    /// The server marked more than one workspace as current.
    #[error("The server reported several current workspaces: {}", .0.join(", "))]
    MultipleCurrent(Vec<String>),

    /// The account is not the owner of the workspace.
    #[error("Only the owner of workspace '{0}' can delete it.")]
    NotOwner(String),

    /// The workspace to delete is the current one.
    #[error("Cannot delete '{0}' while it is the current workspace. Switch to another workspace first.")]
    DeleteCurrent(String),

    /// A workspace name is blank after trimming.
    #[error("Workspace name cannot be empty.")]
    InvalidName,
}
