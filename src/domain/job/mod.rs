//! Refresh job domain: orchestration records and their state machine

mod entity;
mod error;
mod repository;

pub use entity::{JobStatus, JobTarget, JobType, JobUnitError, RefreshJob, RefreshJobId};
pub use error::JobError;
pub use repository::RefreshJobRepository;

#[cfg(test)]
pub use repository::tests;
