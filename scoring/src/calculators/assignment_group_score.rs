use crate::calculators::submission_status::SubmissionStatusCalculator;
use crate::models::Assignment;
use crate::results::{AssignmentResult, SubmissionStatus};
use crate::utilities::rounding::round_to;

/// Aggregates assignment results into an assignment group score and status.
#[derive(Clone)]
pub struct AssignmentGroupScoreCalculator {
    status: SubmissionStatusCalculator,
}

impl AssignmentGroupScoreCalculator {
    /// Create a group calculator.
    ///
    /// # Arguments
    /// * `status` - Aggregates the assignment statuses into the group status.
    pub fn new(status: SubmissionStatusCalculator) -> Self {
        Self { status }
    }

    /// Sum of the assignment scores.
    ///
    /// # Arguments
    /// * `assignment_results` - One student's results for the group's assignments.
    /// * `round_digits` - Decimal places kept in the total.
    pub fn group_score(&self, assignment_results: &[AssignmentResult], round_digits: u32) -> f64 {
        round_to(assignment_results.iter().map(|r| r.score).sum(), round_digits)
    }

    /// Points available across every question of every assignment.
    pub fn group_total_points(&self, assignments: &[&Assignment], round_digits: u32) -> f64 {
        round_to(assignments.iter().map(|a| a.total_points()).sum(), round_digits)
    }

    /// Best completion level across the assignments, late if any assignment
    /// at that level is late.
    pub fn group_status(&self, assignment_results: &[AssignmentResult]) -> SubmissionStatus {
        self.status
            .status_for_assignment(assignment_results.iter().map(|r| r.status))
    }
}
