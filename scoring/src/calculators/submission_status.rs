use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::results::{Completion, SubmissionStatus};
use crate::traits::time_provider::TimeProvider;

/// Derives submission statuses for questions and aggregates them.
#[derive(Clone)]
pub struct SubmissionStatusCalculator {
    time_provider: Arc<dyn TimeProvider>,
}

impl SubmissionStatusCalculator {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { time_provider }
    }

    /// Status of a single question attempt.
    ///
    /// Interactive questions are only completed once they earn a positive
    /// score. Non-interactive questions are completed by any submission.
    pub fn status_for_question(
        &self,
        date_submitted: Option<DateTime<Utc>>,
        date_due: Option<DateTime<Utc>>,
        interactive: bool,
        score: f64,
    ) -> SubmissionStatus {
        let Some(submitted) = date_submitted else {
            let late = date_due.is_some_and(|due| self.time_provider.utc_now() > due);
            return SubmissionStatus::new(Completion::NotStarted, late);
        };

        let late = date_due.is_some_and(|due| submitted > due);
        let completion = if !interactive || score > 0.0 {
            Completion::Completed
        } else {
            Completion::InProgress
        };

        SubmissionStatus::new(completion, late)
    }

    /// Combines statuses into one.
    ///
    /// The result takes the best completion level present. It is late when
    /// any status at that level is late.
    pub fn status_for_assignment<I>(&self, statuses: I) -> SubmissionStatus
    where
        I: IntoIterator<Item = SubmissionStatus>,
    {
        let mut combined: Option<SubmissionStatus> = None;
        for status in statuses {
            combined = match combined {
                None => Some(status),
                Some(best) if status.completion > best.completion => Some(status),
                Some(best) if status.completion == best.completion => Some(
                    SubmissionStatus::new(best.completion, best.late || status.late),
                ),
                keep => keep,
            };
        }

        combined.unwrap_or(SubmissionStatus::new(Completion::NotStarted, false))
    }
}
