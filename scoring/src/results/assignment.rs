//! Assignment-level results.
//!
//! An [`AssignmentResult`] carries the fields common to both submission modes
//! and an [`AssignmentResultDetails`] with the mode-specific breakdown.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::results::question::StudentQuestionResult;
use crate::results::status::SubmissionStatus;

/// One combined-submission event: every question answered together at the
/// same instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentSubmissionResult {
    pub assignment_id: i64,
    pub user_id: i64,
    pub submission_date: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub score: f64,
    pub assignment_points: f64,
    pub question_results: Vec<StudentQuestionResult>,
}

/// Mode-specific part of an assignment result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AssignmentResultDetails {
    /// Each question is submitted on its own.
    SeparateSubmissions {
        question_results: Vec<StudentQuestionResult>,
    },
    /// All questions are submitted together.
    CombinedSubmissions {
        submission_results: Vec<AssignmentSubmissionResult>,
    },
}

/// A student's result on one assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentResult {
    pub assignment_name: String,
    pub assignment_id: i64,
    pub user_id: i64,
    pub assignment_due_date: Option<DateTime<Utc>>,
    pub score: f64,
    pub total_points: f64,
    pub status: SubmissionStatus,
    #[serde(flatten)]
    pub details: AssignmentResultDetails,
}

impl AssignmentResult {
    pub fn combined_submissions(&self) -> bool {
        matches!(self.details, AssignmentResultDetails::CombinedSubmissions { .. })
    }

    /// Question results for separate-submission assignments, if any.
    pub fn question_results(&self) -> Option<&[StudentQuestionResult]> {
        match &self.details {
            AssignmentResultDetails::SeparateSubmissions { question_results } => {
                Some(question_results)
            }
            AssignmentResultDetails::CombinedSubmissions { .. } => None,
        }
    }

    /// Submission events for combined-submission assignments, if any.
    pub fn submission_results(&self) -> Option<&[AssignmentSubmissionResult]> {
        match &self.details {
            AssignmentResultDetails::CombinedSubmissions { submission_results } => {
                Some(submission_results)
            }
            AssignmentResultDetails::SeparateSubmissions { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::status::Completion;

    #[test]
    fn serializes_mode_tag_alongside_common_fields() {
        let result = AssignmentResult {
            assignment_name: "Quiz".into(),
            assignment_id: 3,
            user_id: 9,
            assignment_due_date: None,
            score: 4.0,
            total_points: 5.0,
            status: SubmissionStatus::new(Completion::Completed, false),
            details: AssignmentResultDetails::CombinedSubmissions {
                submission_results: vec![],
            },
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["mode"], "combined_submissions");
        assert_eq!(value["assignment_name"], "Quiz");
        assert_eq!(value["score"], 4.0);
        assert!(value["submission_results"].as_array().unwrap().is_empty());
        assert!(result.combined_submissions());
        assert!(result.question_results().is_none());
    }
}
