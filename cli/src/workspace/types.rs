//! Workspace data types for wsctl.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workspace::error::WorkspaceError;

/// A workspace (tenant) the signed-in account belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique workspace id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Whether this is the account's current workspace.
    #[serde(default)]
    pub current: bool,

    /// The account's role in this workspace.
    #[serde(default)]
    pub role: WorkspaceRole,

    /// Billing plan of the workspace.
    #[serde(default)]
    pub plan: WorkspacePlan,

    /// Server-side status (`normal`, `archive`).
    #[serde(default)]
    pub status: Option<String>,

    /// When the workspace was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Role of the account inside a workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceRole {
    Owner,
    Admin,
    Editor,
    Normal,
    DatasetOperator,
    #[default]
    #[serde(other)]
    Unknown,
}

impl WorkspaceRole {
    /// Only owners may delete a workspace.
    #[must_use]
    pub const fn is_owner(self) -> bool {
        matches!(self, Self::Owner)
    }
}

impl fmt::Display for WorkspaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Normal => "normal",
            Self::DatasetOperator => "dataset_operator",
            Self::Unknown => "unknown",
        };
        f.pad(s)
    }
}

/// Billing plan of a workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspacePlan {
    Sandbox,
    Professional,
    Team,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for WorkspacePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sandbox => "sandbox",
            Self::Professional => "professional",
            Self::Team => "team",
            Self::Unknown => "unknown",
        };
        f.pad(s)
    }
}

/// Cached list of the account's workspaces.
///
/// The server is the source of truth: the list is fetched once per command
/// and never edited locally. After a mutation it is simply fetched again.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceList {
    workspaces: Vec<Workspace>,
}

impl WorkspaceList {
    /// Wraps a fetched list, checking that at most one entry is current.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::MultipleCurrent`] if several entries claim
    /// to be current.
    pub fn new(workspaces: Vec<Workspace>) -> Result<Self, WorkspaceError> {
        let current: Vec<String> = workspaces
            .iter()
            .filter(|ws| ws.current)
            .map(|ws| ws.id.clone())
            .collect();

        if current.len() > 1 {
            return Err(WorkspaceError::MultipleCurrent(current));
        }

        Ok(Self { workspaces })
    }

    /// The current workspace, if the server marked one.
    #[must_use]
    pub fn current(&self) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.current)
    }

    /// Finds a workspace by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.id == id)
    }

    /// Resolves a command-line argument to a workspace.
    ///
    /// An exact id wins; otherwise the name must match exactly one workspace.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::NotFound`] if nothing matches, or
    /// [`WorkspaceError::AmbiguousName`] if several workspaces share the name.
    pub fn resolve(&self, key: &str) -> Result<&Workspace, WorkspaceError> {
        if let Some(ws) = self.find(key) {
            return Ok(ws);
        }

        let mut by_name = self.workspaces.iter().filter(|ws| ws.name == key);
        match (by_name.next(), by_name.next()) {
            (Some(ws), None) => Ok(ws),
            (Some(_), Some(_)) => Err(WorkspaceError::AmbiguousName(key.to_string())),
            (None, _) => Err(WorkspaceError::NotFound(key.to_string())),
        }
    }

    /// Resolves `key` to a workspace the account may delete.
    ///
    /// # Errors
    ///
    /// Fails like [`resolve`](Self::resolve), with
    /// [`WorkspaceError::NotOwner`] unless the account owns the workspace, and
    /// with [`WorkspaceError::DeleteCurrent`] if it is the current one.
    pub fn deletable(&self, key: &str) -> Result<&Workspace, WorkspaceError> {
        let ws = self.resolve(key)?;

        if !ws.role.is_owner() {
            return Err(WorkspaceError::NotOwner(ws.name.clone()));
        }
        if ws.current {
            return Err(WorkspaceError::DeleteCurrent(ws.name.clone()));
        }

        Ok(ws)
    }

    /// Iterates over the workspaces in server order.
    pub fn iter(&self) -> impl Iterator<Item = &Workspace> {
        self.workspaces.iter()
    }

    /// Number of workspaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    /// Whether the account has no workspaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }
}

/// Trims a user-supplied workspace name.
///
/// # Errors
///
/// Returns [`WorkspaceError::InvalidName`] if nothing is left.
pub fn validate_name(name: &str) -> Result<&str, WorkspaceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(WorkspaceError::InvalidName)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
pub(crate) fn test_workspace(id: &str, name: &str, current: bool) -> Workspace {
    Workspace {
        id: id.to_string(),
        name: name.to_string(),
        current,
        role: WorkspaceRole::Owner,
        plan: WorkspacePlan::Sandbox,
        status: Some("normal".to_string()),
        created_at: None,
    }
}
