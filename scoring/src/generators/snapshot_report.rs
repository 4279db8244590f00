use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::filter::AssignmentFilter;
use crate::generators::section_report::SectionAssignmentReportGenerator;
use crate::models::{Assignment, Section, User, UserQuestionSubmission};
use crate::results::SectionAssignmentResults;

/// Section reports as they would have looked at a past point in time.
#[derive(Clone)]
pub struct SnapshotAssignmentReportGenerator {
    filter: AssignmentFilter,
    section_reports: SectionAssignmentReportGenerator,
}

impl SnapshotAssignmentReportGenerator {
    pub fn new(
        filter: AssignmentFilter,
        section_reports: SectionAssignmentReportGenerator,
    ) -> Self {
        Self {
            filter,
            section_reports,
        }
    }

    /// One section report per assignment group due for `section`, counting
    /// only submissions made on or before `snapshot_date`.
    pub fn group_results_snapshot(
        &self,
        assignments: &[&Assignment],
        users: &[&User],
        section: &Section,
        submissions: &[&UserQuestionSubmission],
        snapshot_date: DateTime<Utc>,
    ) -> Vec<SectionAssignmentResults> {
        let section_assignments =
            self.filter
                .filter_assignments(assignments.iter().copied(), Some(section), None);
        let groups = self
            .filter
            .assignment_groups(Some(section), section_assignments.iter().copied());
        let snapshot_submissions = self.filter.filter_submissions(
            section_assignments.iter().copied(),
            submissions.iter().copied(),
            None,
            Some(snapshot_date),
        );

        let group_of: HashMap<i64, &str> = section_assignments
            .iter()
            .map(|a| (a.id, a.group_name()))
            .collect();
        let mut submissions_by_group: HashMap<&str, Vec<&UserQuestionSubmission>> = HashMap::new();
        for submission in snapshot_submissions {
            if let Some(group) = group_of.get(&submission.assignment_id()) {
                submissions_by_group.entry(*group).or_default().push(submission);
            }
        }

        debug!(
            section = %section.name,
            %snapshot_date,
            groups = groups.len(),
            "computing snapshot"
        );

        groups
            .iter()
            .map(|group| {
                let group_submissions = submissions_by_group
                    .get(group.name)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                self.section_reports.section_group_results(
                    group.name,
                    &group.assignments,
                    section,
                    users,
                    group_submissions,
                )
            })
            .collect()
    }
}
