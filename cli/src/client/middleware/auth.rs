//! Authentication middleware for injecting Bearer tokens.

use async_trait::async_trait;
use http::{Extensions, HeaderValue};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Middleware that injects the configured console token into requests.
pub struct AuthMiddleware {
    header: Option<HeaderValue>,
}

impl AuthMiddleware {
    /// Create a new authentication middleware.
    ///
    /// A token that is not a valid header value is dropped with a warning.
    #[must_use]
    pub fn new(access_token: Option<String>) -> Self {
        let header = access_token.and_then(|token| {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    Some(value)
                }
                Err(_) => {
                    tracing::warn!("access token contains invalid characters; sending requests without it");
                    None
                }
            }
        });
        Self { header }
    }
}

#[async_trait]
impl Middleware for AuthMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        if let Some(value) = &self.header {
            req.headers_mut()
                .insert(http::header::AUTHORIZATION, value.clone());
        }

        next.run(req, extensions).await
    }
}
