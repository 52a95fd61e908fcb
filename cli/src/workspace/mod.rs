//! Workspace model for wsctl.
//!
//! This module holds the data the console returns about workspaces:
//! - [`Workspace`] with its [`WorkspaceRole`] and [`WorkspacePlan`]
//! - [`WorkspaceList`], the per-command cache of the account's workspaces

pub mod error;
pub mod types;

pub use error::WorkspaceError;
pub use types::{validate_name, Workspace, WorkspaceList, WorkspacePlan, WorkspaceRole};
