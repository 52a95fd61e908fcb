//! Console workspace API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::Deserialize;
use url::Url;

use crate::client::error::{body_stream, RemoteError};
use crate::client::middleware::{AuthMiddleware, TraceMiddleware};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::workspace::Workspace;

/// Payload returned by a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedWorkspace {
    /// Id of the new workspace.
    pub id: String,
    /// Name as stored by the server.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize)]
struct WorkspaceListResponse {
    workspaces: Vec<Workspace>,
}

#[derive(Deserialize)]
struct WorkspaceInfoResponse {
    tenant: Workspace,
}

/// Remote workspace operations (enables mocking).
///
/// Every method fails with a [`RemoteError`]; when the server answered, the
/// error still holds the unread response body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    /// Lists the workspaces the account belongs to, flagging the current one.
    async fn list_workspaces(&self) -> std::result::Result<Vec<Workspace>, RemoteError>;

    /// Fetches the account's current workspace.
    async fn current_workspace(&self) -> std::result::Result<Workspace, RemoteError>;

    /// Renames the current workspace and returns it as stored.
    async fn rename_workspace(&self, name: &str) -> std::result::Result<Workspace, RemoteError>;

    /// Makes `tenant_id` the account's current workspace.
    async fn switch_workspace(&self, tenant_id: &str) -> std::result::Result<(), RemoteError>;

    /// Creates a workspace owned by the account.
    async fn create_workspace(
        &self,
        name: &str,
    ) -> std::result::Result<CreatedWorkspace, RemoteError>;

    /// Deletes a workspace owned by the account.
    async fn delete_workspace(&self, workspace_id: &str)
        -> std::result::Result<(), RemoteError>;
}

/// HTTP client for the console workspace endpoints.
pub struct ConsoleApiClient {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl ConsoleApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let inner_client = Client::builder()
            .user_agent(format!("wsctl/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // Build middleware stack
        let client = ClientBuilder::new(inner_client)
            .with(AuthMiddleware::new(config.access_token.clone()))
            .with(TraceMiddleware)
            .build();

        Ok(Self {
            client,
            base_url: with_trailing_slash(config.base_url.clone()),
        })
    }

    /// Get the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, RemoteError> {
        self.base_url
            .join(path)
            .map_err(|e| RemoteError::transport(format!("Invalid URL for {path}: {e}")))
    }

    /// POSTs a JSON body and hands back the response if it was a success.
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> std::result::Result<Response, RemoteError> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;

        ensure_success(response)
    }
}

/// Keeps the base path when joining relative endpoint paths.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn ensure_success(response: Response) -> std::result::Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RemoteError::with_body(status.as_u16(), body_stream(response)))
    }
}

#[async_trait]
impl WorkspaceApi for ConsoleApiClient {
    async fn list_workspaces(&self) -> std::result::Result<Vec<Workspace>, RemoteError> {
        let url = self.endpoint("workspaces")?;
        tracing::debug!("GET {url}");

        let response = ensure_success(self.client.get(url).send().await?)?;
        let status = response.status().as_u16();
        let data: WorkspaceListResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::from_status(status, format!("Malformed workspace list: {e}")))?;

        Ok(data.workspaces)
    }

    async fn current_workspace(&self) -> std::result::Result<Workspace, RemoteError> {
        let url = self.endpoint("workspaces/current")?;
        tracing::debug!("GET {url}");

        let response = ensure_success(self.client.get(url).send().await?)?;
        let status = response.status().as_u16();
        let mut workspace: Workspace = response.json().await.map_err(|e| {
            RemoteError::from_status(status, format!("Malformed current workspace: {e}"))
        })?;

        // The payload has no `current` flag.
        workspace.current = true;
        Ok(workspace)
    }

    async fn rename_workspace(&self, name: &str) -> std::result::Result<Workspace, RemoteError> {
        let response = self
            .post_json("workspaces/info", &serde_json::json!({ "name": name }))
            .await?;
        let status = response.status().as_u16();

        let data: WorkspaceInfoResponse = response.json().await.map_err(|e| {
            RemoteError::from_status(status, format!("Malformed rename response: {e}"))
        })?;

        let mut workspace = data.tenant;
        workspace.current = true;
        Ok(workspace)
    }

    async fn switch_workspace(&self, tenant_id: &str) -> std::result::Result<(), RemoteError> {
        self.post_json(
            "workspaces/switch",
            &serde_json::json!({ "tenant_id": tenant_id }),
        )
        .await?;
        Ok(())
    }

    async fn create_workspace(
        &self,
        name: &str,
    ) -> std::result::Result<CreatedWorkspace, RemoteError> {
        let response = self
            .post_json("workspaces/create", &serde_json::json!({ "name": name }))
            .await?;
        let status = response.status().as_u16();

        response.json().await.map_err(|e| {
            RemoteError::from_status(status, format!("Malformed create response: {e}"))
        })
    }

    async fn delete_workspace(&self, workspace_id: &str) -> std::result::Result<(), RemoteError> {
        self.post_json(
            "workspaces/delete",
            &serde_json::json!({ "workspace_id": workspace_id }),
        )
        .await?;
        Ok(())
    }
}
