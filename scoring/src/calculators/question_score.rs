//! Lateness deduction for a single submission.
//!
//! A late submission loses `late_day_deduction` of its value for every day
//! (or part of a day) past the due date, up to `max_late_deduction`.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserQuestionSubmission;
use crate::utilities::rounding::round_to;

/// Lateness deduction parameters, as fractions of the earned score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatenessPolicy {
    pub late_day_deduction: f64,
    pub max_late_deduction: f64,
}

impl Default for LatenessPolicy {
    fn default() -> Self {
        Self {
            late_day_deduction: 0.05,
            max_late_deduction: 0.20,
        }
    }
}

impl LatenessPolicy {
    /// Fraction of the score removed for a submission `days_late` days late.
    pub fn deduction(&self, days_late: f64) -> f64 {
        (days_late * self.late_day_deduction).min(self.max_late_deduction)
    }
}

/// Scores single submissions, applying a [`LatenessPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionScoreCalculator {
    policy: LatenessPolicy,
}

impl QuestionScoreCalculator {
    pub fn new(policy: LatenessPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LatenessPolicy {
        self.policy
    }

    /// Points earned by `submission` out of `question_points`, rounded to two
    /// decimal places.
    pub fn submission_score(
        &self,
        submission: &UserQuestionSubmission,
        date_due: Option<DateTime<Utc>>,
        question_points: f64,
        with_lateness: bool,
    ) -> f64 {
        let earned = submission.score * question_points;

        let due = match date_due {
            Some(due) if with_lateness && question_points != 0.0 => due,
            _ => return round_to(earned, 2),
        };
        if submission.date_submitted <= due {
            return round_to(earned, 2);
        }

        let days_late = started_days(submission.date_submitted - due);
        round_to(earned * (1.0 - self.policy.deduction(days_late as f64)), 2)
    }
}

/// Whole days in `elapsed`, counting any partial day as a full one.
fn started_days(elapsed: TimeDelta) -> i64 {
    let days = elapsed.num_days();
    if elapsed > TimeDelta::days(days) {
        days + 1
    } else {
        days
    }
}
