//! Async client for the employee-management (HRMS) backend.
//!
//! ```no_run
//! use hrms_client::{ClientConfig, HrmsClient, LocalStore};
//!
//! # async fn run() -> hrms_client::Result<()> {
//! let store = LocalStore::new();
//! let client = HrmsClient::with_store(&ClientConfig::default(), store.clone())?;
//!
//! store.set("token", "eyJhbGciOi...");
//! let employee = client.employees().by_id(42).await?;
//! println!("{}", employee.text().await?);
//! # Ok(())
//! # }
//! ```

pub mod hrms;

pub use hrms::{
    HrmsClient,
    config::ClientConfig,
    credentials::{CredentialProvider, LocalStore, NoCredentials, StoredToken},
    error::{HrmsError, Result},
    model::{AttendanceOutcome, AttendanceRecord, Credentials, LeaveRequest, Registration},
};
