use tracing::debug;

use crate::filter::AssignmentFilter;
use crate::generators::assignment_group_result::AssignmentGroupResultGenerator;
use crate::models::{Assignment, Section, User, UserQuestionSubmission};
use crate::results::StudentAssignmentResults;

/// Reports every assignment group of one student.
#[derive(Clone)]
pub struct StudentAssignmentReportGenerator {
    filter: AssignmentFilter,
    group_results: AssignmentGroupResultGenerator,
}

impl StudentAssignmentReportGenerator {
    pub fn new(filter: AssignmentFilter, group_results: AssignmentGroupResultGenerator) -> Self {
        Self {
            filter,
            group_results,
        }
    }

    /// One group result per assignment group due for `section` (or every
    /// group when no section is given), in group order.
    pub fn student_group_results(
        &self,
        user: &User,
        section: Option<&Section>,
        assignments: &[&Assignment],
        submissions: &[&UserQuestionSubmission],
        admin: bool,
    ) -> StudentAssignmentResults {
        let section_assignments =
            self.filter
                .filter_assignments(assignments.iter().copied(), section, None);
        let user_submissions = self.filter.filter_submissions(
            section_assignments.iter().copied(),
            submissions.iter().copied(),
            Some(user),
            None,
        );

        let groups = self
            .filter
            .assignment_groups(section, section_assignments.iter().copied());

        let assignment_group_results = groups
            .iter()
            .map(|group| {
                self.group_results.group_result(
                    group.name,
                    &group.assignments,
                    section,
                    user,
                    &user_submissions,
                    admin,
                )
            })
            .collect::<Vec<_>>();

        debug!(
            user_id = user.id,
            groups = assignment_group_results.len(),
            "built student report"
        );

        StudentAssignmentResults {
            last_name: user.last_name.clone(),
            first_name: user.first_name.clone(),
            section_name: section.map(|s| s.display_name().to_string()),
            assignment_group_results,
        }
    }
}
