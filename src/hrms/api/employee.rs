//! Employee records: CRUD plus free-text search.

use std::fmt::Display;

use serde::Serialize;

use crate::hrms::{
    error::Result,
    http::{ApiClient, Endpoint, Response},
};

const EMPLOYEES: &str = "employees";

pub struct EmployeeApi<'a> {
    api: &'a ApiClient,
}

impl<'a> EmployeeApi<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn employees(&self) -> Endpoint {
        self.api.endpoint().segment(EMPLOYEES)
    }

    /// `GET /employees`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn all(&self) -> Result<Response> {
        self.api.get(self.employees().into_url()).await
    }

    /// `GET /employees/{id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn by_id(&self, id: impl Display) -> Result<Response> {
        self.api.get(self.employees().segment(id).into_url()).await
    }

    /// `POST /employees`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn create<B: Serialize + ?Sized>(&self, employee: &B) -> Result<Response> {
        self.api.post_json(self.employees().into_url(), employee).await
    }

    /// `PUT /employees/{id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        employee: &B,
    ) -> Result<Response> {
        let url = self.employees().segment(id).into_url();
        self.api.put_json(url, employee).await
    }

    /// `DELETE /employees/{id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn delete(&self, id: impl Display) -> Result<Response> {
        self.api.delete(self.employees().segment(id).into_url()).await
    }

    /// `GET /employees/search?q={query}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn search(&self, query: &str) -> Result<Response> {
        let url = self
            .employees()
            .segment("search")
            .query("q", query)
            .into_url();
        self.api.get(url).await
    }
}
