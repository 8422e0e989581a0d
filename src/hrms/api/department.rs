//! Departments and their member listings.

use std::fmt::Display;

use serde::Serialize;

use crate::hrms::{
    error::Result,
    http::{ApiClient, Endpoint, Response},
};

pub struct DepartmentApi<'a> {
    api: &'a ApiClient,
}

impl<'a> DepartmentApi<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn departments(&self) -> Endpoint {
        self.api.endpoint().segment("departments")
    }

    /// `GET /departments`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn all(&self) -> Result<Response> {
        self.api.get(self.departments().into_url()).await
    }

    /// `GET /departments/{id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn by_id(&self, id: impl Display) -> Result<Response> {
        self.api.get(self.departments().segment(id).into_url()).await
    }

    /// `POST /departments`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn create<B: Serialize + ?Sized>(&self, department: &B) -> Result<Response> {
        self.api
            .post_json(self.departments().into_url(), department)
            .await
    }

    /// `PUT /departments/{id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        department: &B,
    ) -> Result<Response> {
        let url = self.departments().segment(id).into_url();
        self.api.put_json(url, department).await
    }

    /// `DELETE /departments/{id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn delete(&self, id: impl Display) -> Result<Response> {
        self.api.delete(self.departments().segment(id).into_url()).await
    }

    /// `GET /departments/{id}/employees`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn employees(&self, id: impl Display) -> Result<Response> {
        let url = self.departments().segment(id).segment("employees").into_url();
        self.api.get(url).await
    }
}
