//! Sign-in and sign-up. The returned token is the caller's to store.

use serde::Serialize;

use crate::hrms::{
    error::Result,
    http::{ApiClient, Response},
};

pub struct AuthApi<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// `POST /auth/signin`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn login<B: Serialize + ?Sized>(&self, credentials: &B) -> Result<Response> {
        let url = self.api.endpoint().segments(["auth", "signin"]).into_url();
        self.api.post_json(url, credentials).await
    }

    /// `POST /auth/signup`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn register<B: Serialize + ?Sized>(&self, user: &B) -> Result<Response> {
        let url = self.api.endpoint().segments(["auth", "signup"]).into_url();
        self.api.post_json(url, user).await
    }
}
