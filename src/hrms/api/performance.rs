use std::fmt::Display;

use serde::Serialize;

use crate::hrms::{
    error::Result,
    http::{ApiClient, Endpoint, Response},
};

pub struct PerformanceApi<'a> {
    api: &'a ApiClient,
}

impl<'a> PerformanceApi<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn reviews(&self) -> Endpoint {
        self.api.endpoint().segment("performance-reviews")
    }

    /// `GET /performance-reviews`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn all(&self) -> Result<Response> {
        self.api.get(self.reviews().into_url()).await
    }

    /// `GET /performance-reviews/employee/{employee_id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn by_employee(&self, employee_id: impl Display) -> Result<Response> {
        let url = self.reviews().segment("employee").segment(employee_id).into_url();
        self.api.get(url).await
    }

    /// `POST /performance-reviews`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn create<B: Serialize + ?Sized>(&self, review: &B) -> Result<Response> {
        self.api.post_json(self.reviews().into_url(), review).await
    }
}
