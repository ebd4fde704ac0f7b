//! Reads and writes of the job board documents.
//!
//! Every operation validates its input first and converts storage errors
//! into [`AppError`](crate::error::AppError), so a duplicate follow comes
//! back as `Conflict` rather than an opaque database failure.

pub mod candidates;
pub mod jobs;
pub mod reports;

pub use candidates::{follow_candidate, list_follows, list_views, record_view};
pub use jobs::{create_job, get_job, list_jobs};
pub use reports::{generate_report, list_reports};
