//! Client for the employee-management (HRMS) REST backend.
//!
//! The implementation is organized into:
//!
//! - `config`: base origin, default headers, token key, timeout
//! - `credentials`: where bearer tokens are read from
//! - `error`: error types and conversions
//! - `http`: the shared request sender and its middleware
//! - `api`: one group of endpoint calls per backend resource
//! - `model`: optional request payload types
//!
//! The main entry point is `HrmsClient`, which owns one `ApiClient` and
//! hands out the endpoint groups.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod model;

use std::sync::Arc;

use crate::hrms::{
    api::{
        AttendanceApi, AuthApi, DashboardApi, DepartmentApi, EmployeeApi, LeaveApi, PayrollApi,
        PerformanceApi,
    },
    config::ClientConfig,
    credentials::{CredentialProvider, LocalStore, StoredToken},
    error::Result,
    http::{ApiClient, Url},
};

#[derive(Clone)]
pub struct HrmsClient {
    api: ApiClient,
}

impl HrmsClient {
    /// # Errors
    /// `Http` if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig, credentials: impl CredentialProvider + 'static) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config, Arc::new(credentials))?,
        })
    }

    /// Reads the bearer token from `store` under `config.token_key` on every request.
    ///
    /// # Errors
    /// `Http` if the underlying HTTP client cannot be built.
    pub fn with_store(config: &ClientConfig, store: LocalStore) -> Result<Self> {
        Self::new(config, StoredToken::new(store, config.token_key.clone()))
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        self.api.base_url()
    }

    /// The underlying request sender, for endpoints the groups do not cover.
    #[must_use]
    pub const fn raw(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.api)
    }

    #[must_use]
    pub const fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(&self.api)
    }

    #[must_use]
    pub const fn employees(&self) -> EmployeeApi<'_> {
        EmployeeApi::new(&self.api)
    }

    #[must_use]
    pub const fn leave(&self) -> LeaveApi<'_> {
        LeaveApi::new(&self.api)
    }

    #[must_use]
    pub const fn attendance(&self) -> AttendanceApi<'_> {
        AttendanceApi::new(&self.api)
    }

    #[must_use]
    pub const fn payroll(&self) -> PayrollApi<'_> {
        PayrollApi::new(&self.api)
    }

    #[must_use]
    pub const fn performance(&self) -> PerformanceApi<'_> {
        PerformanceApi::new(&self.api)
    }

    #[must_use]
    pub const fn departments(&self) -> DepartmentApi<'_> {
        DepartmentApi::new(&self.api)
    }
}
