//! Endpoint groups of the HRMS backend.
//!
//! Each module maps one resource family onto its REST endpoints:
//! - `auth`: sign-in and sign-up
//! - `dashboard`: summary statistics and activity feeds
//! - `employee`: employee CRUD and search
//! - `leave`: leave requests and approvals
//! - `attendance`: daily marks, check-ins and bulk saves
//! - `payroll`: payroll listings and status changes
//! - `performance`: performance reviews
//! - `department`: department CRUD and member listings
//!
//! Groups borrow the shared `ApiClient`; none of them keep state of their own.

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod leave;
pub mod payroll;
pub mod performance;

pub use attendance::AttendanceApi;
pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use department::DepartmentApi;
pub use employee::EmployeeApi;
pub use leave::LeaveApi;
pub use payroll::PayrollApi;
pub use performance::PerformanceApi;
