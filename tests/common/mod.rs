#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! In-process stand-in for the HRMS backend.
//!
//! Every request is recorded (method, path with query, `Authorization` and
//! `Content-Type` headers, body) and answered with `{"ok":true}`, except paths registered
//! as failing, which answer 500 with a fixed JSON body.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{
        HeaderMap, Method, StatusCode, Uri,
        header::{AUTHORIZATION, CONTENT_TYPE, HeaderName},
    },
    response::IntoResponse,
};
use hrms_client::{ClientConfig, HrmsClient, LocalStore};
use tokio::net::TcpListener;

pub const FAILURE_BODY: &str = r#"{"message":"database unavailable"}"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone, Default)]
struct Backend {
    requests: Arc<Mutex<Vec<Recorded>>>,
    failing: Arc<HashSet<String>>,
}

pub struct MockServer {
    pub base_url: String,
    backend: Backend,
}

impl MockServer {
    pub async fn start() -> Self {
        Self::start_failing(&[]).await
    }

    /// `failing` holds request targets (path plus query) answered with 500.
    pub async fn start_failing(failing: &[&str]) -> Self {
        let backend = Backend {
            requests: Arc::default(),
            failing: Arc::new(failing.iter().map(|p| (*p).to_string()).collect()),
        };
        let router = Router::new().fallback(record).with_state(backend.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            backend,
        }
    }

    pub fn client(&self, store: LocalStore) -> HrmsClient {
        let config = ClientConfig::new(&self.base_url).unwrap();
        HrmsClient::with_store(&config, store).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.backend.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> Recorded {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.remove(0)
    }
}

async fn record(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let authorization = header(AUTHORIZATION);
    let content_type = header(CONTENT_TYPE);

    let fails = backend.failing.contains(&path);
    backend.requests.lock().unwrap().push(Recorded {
        method,
        path,
        authorization,
        content_type,
        body: body.to_vec(),
    });

    if fails {
        (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_BODY)
    } else {
        (StatusCode::OK, r#"{"ok":true}"#)
    }
}
