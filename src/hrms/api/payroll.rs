use std::fmt::Display;

use crate::hrms::{
    error::Result,
    http::{ApiClient, Endpoint, Response},
};

pub struct PayrollApi<'a> {
    api: &'a ApiClient,
}

impl<'a> PayrollApi<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn payrolls(&self) -> Endpoint {
        self.api.endpoint().segment("payrolls")
    }

    /// `GET /payrolls`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn all(&self) -> Result<Response> {
        self.api.get(self.payrolls().into_url()).await
    }

    /// `GET /payrolls/employee/{employee_id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn by_employee(&self, employee_id: impl Display) -> Result<Response> {
        let url = self.payrolls().segment("employee").segment(employee_id).into_url();
        self.api.get(url).await
    }

    /// `GET /payrolls/status/{status}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn by_status(&self, status: &str) -> Result<Response> {
        let url = self.payrolls().segment("status").segment(status).into_url();
        self.api.get(url).await
    }

    /// `PUT /payrolls/{id}/status?status={status}`, no body.
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn update_status(&self, id: impl Display, status: &str) -> Result<Response> {
        let url = self
            .payrolls()
            .segment(id)
            .segment("status")
            .query("status", status)
            .into_url();
        self.api.put(url).await
    }
}
