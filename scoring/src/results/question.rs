use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::results::status::SubmissionStatus;

/// The result of a single submission of a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSubmissionResult {
    pub question_id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub submission_date: DateTime<Utc>,
    pub status: SubmissionStatus,
    /// Points earned by this submission, after any lateness deduction.
    pub score: f64,
    pub question_points: f64,
}

/// A student's result on one assignment question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentQuestionResult {
    pub question_id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub combined_submissions: bool,
    pub question_name: String,
    pub question_points: f64,
    pub score: f64,
    pub status: SubmissionStatus,
    /// Per-submission breakdown, only present for non-interactive questions
    /// on separate-submission assignments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_results: Option<Vec<QuestionSubmissionResult>>,
}
