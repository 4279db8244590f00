use std::collections::HashMap;

use tracing::debug;

use crate::calculators::AssignmentGroupScoreCalculator;
use crate::filter::AssignmentFilter;
use crate::generators::assignment_group_result::AssignmentGroupResultGenerator;
use crate::models::{Assignment, Section, User, UserQuestionSubmission};
use crate::results::{AssignmentGroupResult, SectionAssignmentResults};

/// Reports one assignment group for every student of a section.
#[derive(Clone)]
pub struct SectionAssignmentReportGenerator {
    filter: AssignmentFilter,
    group_results: AssignmentGroupResultGenerator,
    group_score: AssignmentGroupScoreCalculator,
}

impl SectionAssignmentReportGenerator {
    pub fn new(
        filter: AssignmentFilter,
        group_results: AssignmentGroupResultGenerator,
        group_score: AssignmentGroupScoreCalculator,
    ) -> Self {
        Self {
            filter,
            group_results,
            group_score,
        }
    }

    /// One row per user, ordered by last name then first name. Rows always
    /// include the per-question breakdown.
    pub fn section_group_results(
        &self,
        group_name: &str,
        assignments: &[&Assignment],
        section: &Section,
        users: &[&User],
        submissions: &[&UserQuestionSubmission],
    ) -> SectionAssignmentResults {
        let group_assignments =
            self.filter
                .filter_assignments(assignments.iter().copied(), Some(section), Some(group_name));
        let group_submissions = self.filter.filter_submissions(
            group_assignments.iter().copied(),
            submissions.iter().copied(),
            None,
            None,
        );

        let mut submissions_by_user: HashMap<i64, Vec<&UserQuestionSubmission>> = HashMap::new();
        for submission in group_submissions {
            submissions_by_user
                .entry(submission.user_id())
                .or_default()
                .push(submission);
        }

        let mut ordered_users = users.to_vec();
        ordered_users.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });

        let results: Vec<AssignmentGroupResult> = ordered_users
            .into_iter()
            .map(|user| {
                let user_submissions = submissions_by_user
                    .get(&user.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                self.group_results.group_result(
                    group_name,
                    &group_assignments,
                    Some(section),
                    user,
                    user_submissions,
                    true,
                )
            })
            .collect();

        debug!(
            section = %section.name,
            group = group_name,
            students = results.len(),
            "built section report"
        );

        SectionAssignmentResults {
            assignment_group_name: group_name.to_string(),
            section_name: section.display_name().to_string(),
            points: self.group_score.group_total_points(&group_assignments, 1),
            assignment_group_results: results,
        }
    }
}
