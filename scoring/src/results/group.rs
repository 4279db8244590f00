use serde::Serialize;

use crate::results::assignment::AssignmentResult;
use crate::results::status::SubmissionStatus;

/// A student's result on one assignment group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentGroupResult {
    pub assignment_group_name: String,
    pub user_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub score: f64,
    pub total_points: f64,
    pub assignment_results: Vec<AssignmentResult>,
    pub status: SubmissionStatus,
}
