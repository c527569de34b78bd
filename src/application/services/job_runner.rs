use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::application::ports::{RunLogRepository, RunNotifier};
use crate::domain::{RunLogEntry, RunStatus};

use super::{BatchUpdater, NormalizationContext};

pub const JOB_TYPE: &str = "normalizer";
pub const JOB_DESCRIPTION: &str = "Нормалізація тексту для пошуку";

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub status: RunStatus,
    pub processed: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn duration(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}

/// Runs the batch updater and always finishes the run: one audit entry, a
/// notification and the elapsed time, whatever the outcome.
pub struct JobRunner {
    updater: BatchUpdater,
    run_logs: Arc<dyn RunLogRepository>,
    notifier: Arc<dyn RunNotifier>,
    version: String,
}

impl JobRunner {
    pub fn new(
        updater: BatchUpdater,
        run_logs: Arc<dyn RunLogRepository>,
        notifier: Arc<dyn RunNotifier>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            updater,
            run_logs,
            notifier,
            version: version.into(),
        }
    }

    pub async fn run(&self, context: &NormalizationContext) -> RunReport {
        tracing::info!(job = JOB_TYPE, version = %self.version, "Job started");

        let started_at = Utc::now();
        let (status, processed) = match self.updater.run(context).await {
            Ok(processed) => (RunStatus::Success, processed),
            Err(e) => {
                tracing::error!(error = %e.kind, committed = e.committed, "Normalization failed");
                (RunStatus::Error, e.committed)
            }
        };
        let finished_at = Utc::now();

        let report = RunReport {
            status,
            processed,
            started_at,
            finished_at,
        };

        self.write_run_log(&report).await;
        self.send_notification(status).await;

        tracing::info!(
            status = %status,
            processed,
            "Execution time: {}",
            format_duration(report.duration())
        );

        report
    }

    async fn write_run_log(&self, report: &RunReport) {
        let entry = RunLogEntry::new(
            JOB_TYPE,
            JOB_DESCRIPTION,
            report.started_at,
            report.finished_at,
            report.status,
        );

        if let Err(e) = self.run_logs.insert(&entry).await {
            tracing::error!(error = %e, "Failed to write run log entry");
        }
    }

    async fn send_notification(&self, status: RunStatus) {
        let message = format!("{} - {}", JOB_DESCRIPTION, status);
        if let Err(e) = self.notifier.notify(&message).await {
            tracing::warn!(error = %e, "Failed to send run notification");
        }
    }
}

/// Whole hours, minutes and seconds, e.g. `1h 2m 3s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}
