//! Bearer token injection for every outbound request.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use http::Extensions;
use reqwest::{
    Request, Response,
    header::{AUTHORIZATION, HeaderValue},
};
use reqwest_middleware::{Middleware, Next, Result as MiddlewareResult};

use crate::hrms::credentials::CredentialProvider;

/// Sets `Authorization: Bearer <token>` when the provider has a non-empty
/// token at send time, and leaves the request alone otherwise.
pub struct BearerAuth {
    credentials: Arc<dyn CredentialProvider>,
}

impl BearerAuth {
    #[must_use]
    pub const fn new(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl Middleware for BearerAuth {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> MiddlewareResult<Response> {
        if let Some(token) = self.credentials.bearer_token().filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                reqwest_middleware::Error::Middleware(anyhow!("bearer token is not a valid header value: {e}"))
            })?;
            value.set_sensitive(true);
            req.headers_mut().insert(AUTHORIZATION, value);
        }
        next.run(req, extensions).await
    }
}
