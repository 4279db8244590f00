use tracing::debug;

use crate::calculators::AssignmentGroupScoreCalculator;
use crate::filter::AssignmentFilter;
use crate::generators::assignment_result::AssignmentResultGenerator;
use crate::models::{Assignment, Section, User, UserQuestionSubmission};
use crate::results::{AssignmentGroupResult, AssignmentResult};

/// Builds a student's result on one assignment group.
/// Scores one student on one assignment group.
#[derive(Clone)]
pub struct AssignmentGroupResultGenerator {
    filter: AssignmentFilter,
    assignment_results: AssignmentResultGenerator,
    group_score: AssignmentGroupScoreCalculator,
}

impl AssignmentGroupResultGenerator {
    pub fn new(
        filter: AssignmentFilter,
        assignment_results: AssignmentResultGenerator,
        group_score: AssignmentGroupScoreCalculator,
    ) -> Self {
        Self {
            filter,
            assignment_results,
            group_score,
        }
    }

    /// Scores the assignments of `group_name` due for `section`, using only
    /// the submissions of `user`. Score and total points are rounded to one
    /// decimal place.
    pub fn group_result(
        &self,
        group_name: &str,
        assignments: &[&Assignment],
        section: Option<&Section>,
        user: &User,
        submissions: &[&UserQuestionSubmission],
        admin: bool,
    ) -> AssignmentGroupResult {
        let group_assignments =
            self.filter
                .filter_assignments(assignments.iter().copied(), section, Some(group_name));
        let user_submissions = self.filter.filter_submissions(
            group_assignments.iter().copied(),
            submissions.iter().copied(),
            Some(user),
            None,
        );

        let assignment_results: Vec<AssignmentResult> = group_assignments
            .iter()
            .map(|assignment| {
                self.assignment_results.create_assignment_result(
                    section,
                    assignment,
                    user,
                    admin,
                    &user_submissions,
                )
            })
            .collect();

        debug!(
            group = group_name,
            user_id = user.id,
            assignments = assignment_results.len(),
            "built assignment group result"
        );

        AssignmentGroupResult {
            assignment_group_name: group_name.to_string(),
            user_id: user.id,
            last_name: user.last_name.clone(),
            first_name: user.first_name.clone(),
            score: self.group_score.group_score(&assignment_results, 1),
            total_points: self.group_score.group_total_points(&group_assignments, 1),
            status: self.group_score.group_status(&assignment_results),
            assignment_results,
        }
    }
}
