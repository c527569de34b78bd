use super::RunStatus;
use chrono::{DateTime, Utc};

/// Audit record written once per job invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunLogEntry {
    pub job_type: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: RunStatus,
}

impl RunLogEntry {
    pub fn new(
        job_type: impl Into<String>,
        description: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        status: RunStatus,
    ) -> Self {
        Self {
            job_type: job_type.into(),
            description: description.into(),
            start_time,
            end_time,
            status,
        }
    }
}
