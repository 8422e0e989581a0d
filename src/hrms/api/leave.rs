//! Leave requests and their approval workflow.

use std::fmt::Display;

use serde::Serialize;

use crate::hrms::{
    error::Result,
    http::{ApiClient, Endpoint, Response},
};

pub struct LeaveApi<'a> {
    api: &'a ApiClient,
}

impl<'a> LeaveApi<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn leave_requests(&self) -> Endpoint {
        self.api.endpoint().segment("leave-requests")
    }

    /// `GET /leave-requests`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn all(&self) -> Result<Response> {
        self.api.get(self.leave_requests().into_url()).await
    }

    /// `GET /leave-requests/employee/{employee_id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn by_employee(&self, employee_id: impl Display) -> Result<Response> {
        let url = self
            .leave_requests()
            .segment("employee")
            .segment(employee_id)
            .into_url();
        self.api.get(url).await
    }

    /// `POST /leave-requests`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn create<B: Serialize + ?Sized>(&self, leave_request: &B) -> Result<Response> {
        self.api
            .post_json(self.leave_requests().into_url(), leave_request)
            .await
    }

    /// `PUT /leave-requests/{id}/approve`, no body.
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn approve(&self, id: impl Display) -> Result<Response> {
        let url = self.leave_requests().segment(id).segment("approve").into_url();
        self.api.put(url).await
    }

    /// `PUT /leave-requests/{id}/reject`, no body.
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn reject(&self, id: impl Display) -> Result<Response> {
        let url = self.leave_requests().segment(id).segment("reject").into_url();
        self.api.put(url).await
    }

    /// `PUT /leave-requests/{id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        leave_request: &B,
    ) -> Result<Response> {
        let url = self.leave_requests().segment(id).into_url();
        self.api.put_json(url, leave_request).await
    }
}
