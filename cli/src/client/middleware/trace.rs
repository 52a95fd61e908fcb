//! Request logging middleware.

use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next, Result};

/// Middleware that logs every console request and its outcome.
pub struct TraceMiddleware;

#[async_trait]
impl Middleware for TraceMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();

        let result = next.run(req, extensions).await;

        match &result {
            Ok(response) if response.status() == StatusCode::UNAUTHORIZED => {
                tracing::warn!("{method} {url} -> 401 Unauthorized - access token may be missing or invalid");
            }
            Ok(response) => {
                tracing::debug!("{method} {url} -> {}", response.status());
            }
            Err(e) => {
                tracing::debug!("{method} {url} failed: {e}");
            }
        }

        result
    }
}
