//! Endpoint URL construction.
//!
//! Identifiers and query values are percent-encoded as they are appended, so
//! an id such as `a/b` stays a single path segment and search text cannot
//! smuggle extra query parameters.

use std::fmt::Display;

use reqwest::Url;

#[derive(Debug, Clone)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// `base` must be able to carry path segments (checked by `ClientConfig`).
    #[must_use]
    pub fn new(base: &Url) -> Self {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
        }
        Self { url }
    }

    #[must_use]
    pub fn segment(mut self, segment: impl Display) -> Self {
        if let Ok(mut segments) = self.url.path_segments_mut() {
            segments.push(&segment.to_string());
        }
        self
    }

    #[must_use]
    pub fn segments<I>(self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        segments
            .into_iter()
            .fold(self, |endpoint, segment| endpoint.segment(segment))
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl Display) -> Self {
        self.url
            .query_pairs_mut()
            .append_pair(key, &value.to_string());
        self
    }

    #[must_use]
    pub fn into_url(self) -> Url {
        self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:5053/api").unwrap()
    }

    #[test]
    fn appends_segments_under_the_api_prefix() {
        let url = Endpoint::new(&base())
            .segments(["leave-requests", "7", "approve"])
            .into_url();
        assert_eq!(url.as_str(), "http://localhost:5053/api/leave-requests/7/approve");
    }

    #[test]
    fn trailing_slash_on_base_is_not_doubled() {
        let base = Url::parse("http://localhost:5053/api/").unwrap();
        let url = Endpoint::new(&base).segment("employees").into_url();
        assert_eq!(url.path(), "/api/employees");
    }

    #[test]
    fn numeric_ids_and_queries() {
        let url = Endpoint::new(&base())
            .segments(["payrolls", "3", "status"])
            .query("status", "PAID")
            .into_url();
        assert_eq!(url.path(), "/api/payrolls/3/status");
        assert_eq!(url.query(), Some("status=PAID"));

        let url = Endpoint::new(&base()).segment("employees").segment(42).into_url();
        assert_eq!(url.path(), "/api/employees/42");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let url = Endpoint::new(&base())
            .segments(["employees", "a/b?c"])
            .into_url();
        assert_eq!(url.path(), "/api/employees/a%2Fb%3Fc");

        let url = Endpoint::new(&base())
            .segments(["employees", "search"])
            .query("q", "jane & co=1")
            .into_url();
        assert_eq!(url.query(), Some("q=jane+%26+co%3D1"));
    }

    #[test]
    fn empty_identifier_is_forwarded_as_empty_segment() {
        let url = Endpoint::new(&base()).segments(["employees", ""]).into_url();
        assert_eq!(url.path(), "/api/employees/");

        let url = Endpoint::new(&base())
            .segments(["leave-requests", "", "approve"])
            .into_url();
        assert_eq!(url.path(), "/api/leave-requests//approve");
    }

    #[test]
    fn bare_origin_base() {
        let base = Url::parse("http://localhost:5053").unwrap();
        let url = Endpoint::new(&base).segments(["dashboard", "stats"]).into_url();
        assert_eq!(url.as_str(), "http://localhost:5053/dashboard/stats");
    }
}
