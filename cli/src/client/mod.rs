//! Console API client.
//!
//! - [`WorkspaceApi`] - Trait for the remote workspace operations
//! - [`ConsoleApiClient`] - HTTP implementation against the console API
//! - [`RemoteError`] - Failure carrying the unread response body

pub mod api;
pub mod error;
pub mod middleware;

pub use api::{ConsoleApiClient, CreatedWorkspace, WorkspaceApi};
pub use error::{BodyStream, RemoteError};

#[cfg(test)]
pub use api::MockWorkspaceApi;
