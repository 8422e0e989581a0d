use crate::hrms::{
    error::Result,
    http::{ApiClient, Response},
};

pub struct DashboardApi<'a> {
    api: &'a ApiClient,
}

impl<'a> DashboardApi<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    async fn fetch(&self, section: &str) -> Result<Response> {
        let url = self.api.endpoint().segments(["dashboard", section]).into_url();
        self.api.get(url).await
    }

    /// `GET /dashboard/stats`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn stats(&self) -> Result<Response> {
        self.fetch("stats").await
    }

    /// `GET /dashboard/recent-employees`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn recent_employees(&self) -> Result<Response> {
        self.fetch("recent-employees").await
    }

    /// `GET /dashboard/activities`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn activities(&self) -> Result<Response> {
        self.fetch("activities").await
    }
}
