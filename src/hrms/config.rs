//! Client configuration.
//!
//! `ClientConfig::default()` is the reference deployment (a backend on
//! `localhost:5053`). `ClientConfig::from_env()` lets a deployment override
//! the origin, the token key and the request timeout through environment
//! variables (optionally loaded from a `.env` file by the binary).

use std::{env, time::Duration};

use reqwest::{
    Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};

use crate::hrms::error::{HrmsError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5053/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";

pub const BASE_URL_VAR: &str = "HRMS_API_BASE_URL";
pub const TOKEN_KEY_VAR: &str = "HRMS_TOKEN_KEY";
pub const TIMEOUT_VAR: &str = "HRMS_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin plus API prefix every endpoint path is appended to.
    pub base_url: Url,
    /// Sent with every request.
    pub default_headers: HeaderMap,
    /// Key the bearer token is read from in the shared store.
    pub token_key: String,
    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// # Errors
    /// `InvalidConfig` if `base_url` does not parse or cannot carry paths.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// # Errors
    /// `InvalidConfig` if the base URL or timeout variable holds an invalid value.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token_key = env::var(TOKEN_KEY_VAR).unwrap_or_else(|_| DEFAULT_TOKEN_KEY.to_string());
        let timeout = env::var(TIMEOUT_VAR)
            .ok()
            .map(|secs| parse_timeout(&secs))
            .transpose()?;

        Ok(Self {
            token_key,
            timeout,
            ..Self::new(&base_url)?
        })
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// # Errors
    /// `InvalidConfig` if `name` or `value` is not a valid header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| HrmsError::InvalidConfig(format!("header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| HrmsError::InvalidConfig(format!("header {name}: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }
}

impl Default for ClientConfig {
    #[expect(clippy::expect_used, reason = "DEFAULT_BASE_URL is a valid absolute URL")]
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            default_headers,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            timeout: None,
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| HrmsError::InvalidConfig(format!("{BASE_URL_VAR} {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(HrmsError::InvalidConfig(format!(
            "{BASE_URL_VAR} {raw:?} cannot carry endpoint paths"
        )));
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| HrmsError::InvalidConfig(format!("{TIMEOUT_VAR} {raw:?}: {e}")))
}
