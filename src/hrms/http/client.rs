//! Shared request sender for the HRMS backend.
//!
//! This module provides:
//! - `ApiClient`: one long-lived client bound to the configured origin and
//!   default headers, with bearer-token injection and request tracing
//! - The tracing span backend used for every outbound call
//! - Status handling shared by all endpoint groups

use std::sync::Arc;

use http::Extensions;
use reqwest::{Method, Request, Response, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde::Serialize;
use tracing::{Span, info};

use crate::hrms::{
    config::ClientConfig,
    credentials::CredentialProvider,
    error::{HrmsError, Result},
    http::{auth::BearerAuth, url::Endpoint},
};

// Span backend for outbound calls. Only ever named as a type parameter of
// TracingMiddleware, so the compiler sees it as never constructed.
// Headers stay out of the span: they carry the bearer token.
#[allow(dead_code)]
struct HrmsTracing;

impl ReqwestOtelSpanBackend for HrmsTracing {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(name = "hrms-api-request", req)
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Cheap to clone; clones share the connection pool and middleware stack.
#[derive(Clone)]
pub struct ApiClient {
    http: ClientWithMiddleware,
    base_url: Url,
}

impl ApiClient {
    /// # Errors
    /// `Http` if the underlying reqwest client cannot be built (TLS backend
    /// initialisation, invalid default headers).
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let mut client_builder =
            reqwest::Client::builder().default_headers(config.default_headers.clone());

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let http = ClientBuilder::new(client_builder.build()?)
            .with(TracingMiddleware::<HrmsTracing>::new())
            .with(BearerAuth::new(credentials))
            .build();

        info!(base_url = %config.base_url, "HRMS API client configured");

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Starts a URL under the configured base origin.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(&self.base_url)
    }

    /// Sends one request and hands back the response untouched if it is 2xx.
    ///
    /// # Errors
    /// * `HttpMiddleware` - connection, DNS or timeout failures, or a token
    ///   that cannot be sent as a header
    /// * `Status` - the backend answered outside 2xx; its body is kept verbatim
    /// * `UnreadableBody` - the backend answered outside 2xx and the connection
    ///   broke while its body was being read
    pub async fn send(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<Response> {
        let mut request_builder = self.http.request(method, url);
        if let Some(body) = body {
            request_builder = request_builder.body(body);
        }

        let response = request_builder.send().await?;
        ensure_success(response).await
    }

    /// # Errors
    /// See [`ApiClient::send`].
    pub async fn get(&self, url: Url) -> Result<Response> {
        self.send(Method::GET, url, None).await
    }

    /// # Errors
    /// See [`ApiClient::send`].
    pub async fn delete(&self, url: Url) -> Result<Response> {
        self.send(Method::DELETE, url, None).await
    }

    /// PUT without a request body.
    ///
    /// # Errors
    /// See [`ApiClient::send`].
    pub async fn put(&self, url: Url) -> Result<Response> {
        self.send(Method::PUT, url, None).await
    }

    /// # Errors
    /// `Serialization` if `body` cannot be encoded as JSON, otherwise see
    /// [`ApiClient::send`].
    pub async fn post_json<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<Response> {
        self.send(Method::POST, url, Some(serde_json::to_vec(body)?))
            .await
    }

    /// # Errors
    /// `Serialization` if `body` cannot be encoded as JSON, otherwise see
    /// [`ApiClient::send`].
    pub async fn put_json<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<Response> {
        self.send(Method::PUT, url, Some(serde_json::to_vec(body)?))
            .await
    }
}

async fn ensure_success(mut response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let mut received = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => received.extend_from_slice(&chunk),
            Ok(None) => {
                let body = String::from_utf8_lossy(&received).into_owned();
                return Err(HrmsError::Status { status, url, body });
            }
            Err(source) => {
                let partial_body = String::from_utf8_lossy(&received).into_owned();
                return Err(HrmsError::UnreadableBody {
                    status,
                    url,
                    partial_body,
                    source,
                });
            }
        }
    }
}
