//! Daily attendance: single marks, check-ins, and bulk saves.
//!
//! A bulk save issues one `PUT /attendance/mark/{id}?status=..` per record.
//! All requests are in flight at once and complete in whatever order the
//! backend answers. Nothing is rolled back when some of them fail.

use std::fmt::Display;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::hrms::{
    error::Result,
    http::{ApiClient, Endpoint, Response, Url},
    model::{AttendanceOutcome, AttendanceRecord},
};

pub struct AttendanceApi<'a> {
    api: &'a ApiClient,
}

impl<'a> AttendanceApi<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    fn attendance(&self) -> Endpoint {
        self.api.endpoint().segment("attendance")
    }

    fn mark_url(&self, employee_id: impl Display, status: impl Display) -> Url {
        self.attendance()
            .segment("mark")
            .segment(employee_id)
            .query("status", status)
            .into_url()
    }

    /// `PUT /attendance/mark/{employee_id}?status={status}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn mark(&self, employee_id: impl Display, status: &str) -> Result<Response> {
        self.api.put(self.mark_url(employee_id, status)).await
    }

    /// `PUT /attendance/addcheckin/{employee_id}`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn add_check_in(&self, employee_id: impl Display) -> Result<Response> {
        let url = self
            .attendance()
            .segment("addcheckin")
            .segment(employee_id)
            .into_url();
        self.api.put(url).await
    }

    /// `GET /attendance/today`
    ///
    /// # Errors
    /// Fails as described on [`ApiClient::send`].
    pub async fn today(&self) -> Result<Response> {
        self.api.get(self.attendance().segment("today").into_url()).await
    }

    /// Marks every record concurrently and succeeds only if all of them did.
    ///
    /// Waits for every request to settle before returning. On failure the
    /// error of the earliest failing record (in input order) is returned and
    /// the successful marks stay applied. Responses come back in input order.
    ///
    /// # Errors
    /// Any record's failure as described on [`ApiClient::send`], or `Task` if
    /// a request task panicked.
    pub async fn save_all(&self, records: &[AttendanceRecord]) -> Result<Vec<Response>> {
        debug!(count = records.len(), "saving attendance (all-or-nothing)");
        self.fan_out(records).await.into_iter().collect()
    }

    /// Like `save_all`, but reports each record's own outcome instead of
    /// collapsing them into one result.
    pub async fn save_each(&self, records: &[AttendanceRecord]) -> Vec<AttendanceOutcome> {
        debug!(count = records.len(), "saving attendance (per-record outcomes)");
        self.fan_out(records)
            .await
            .into_iter()
            .zip(records)
            .map(|(result, record)| AttendanceOutcome {
                employee_id: record.employee_id,
                result: result.map(|response| response.status()),
            })
            .collect()
    }

    async fn fan_out(&self, records: &[AttendanceRecord]) -> Vec<Result<Response>> {
        let in_flight: Vec<JoinHandle<Result<Response>>> = records
            .iter()
            .map(|record| {
                let api = self.api.clone();
                let url = self.mark_url(record.employee_id, &record.status);
                tokio::spawn(async move { api.put(url).await })
            })
            .collect();

        let mut settled = Vec::with_capacity(in_flight.len());
        for handle in in_flight {
            settled.push(handle.await.unwrap_or_else(|e| Err(e.into())));
        }
        settled
    }
}
