//! Changes since the last gradebook transfer.
//!
//! Two snapshots are computed: one at the last transfer and one now. A row is
//! reported when its (group, student) pair is new or its score moved by more
//! than the configured tolerance. Groups without reported rows are dropped.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use tracing::{debug, info};

use crate::generators::snapshot_report::SnapshotAssignmentReportGenerator;
use crate::models::{Assignment, Section, User, UserQuestionSubmission};
use crate::results::{SectionAssignmentResults, UpdatedSectionAssignmentResults};
use crate::traits::time_provider::TimeProvider;

/// Finds report rows whose score changed since the last gradebook transfer.
#[derive(Clone)]
pub struct UpdatedAssignmentReportGenerator {
    snapshots: SnapshotAssignmentReportGenerator,
    time_provider: Arc<dyn TimeProvider>,
    tolerance: f64,
}

impl UpdatedAssignmentReportGenerator {
    /// Create an updated report generator.
    ///
    /// # Arguments
    /// * `snapshots` - Builds the reports that are compared.
    /// * `time_provider` - Clock for the retrieval date.
    /// * `tolerance` - Smallest score change that counts as an update.
    pub fn new(
        snapshots: SnapshotAssignmentReportGenerator,
        time_provider: Arc<dyn TimeProvider>,
        tolerance: f64,
    ) -> Self {
        Self {
            snapshots,
            time_provider,
            tolerance,
        }
    }

    /// Section reports for the current minute, keeping only rows that are new
    /// or whose score moved by more than the tolerance since
    /// `last_transfer_date`. Groups left with no rows are dropped.
    ///
    /// # Arguments
    /// * `gradebook_name` - Name of the gradebook the rows are transferred to.
    /// * `last_transfer_date` - When the gradebook last received scores.
    pub fn updated_group_results(
        &self,
        assignments: &[&Assignment],
        users: &[&User],
        section: &Section,
        gradebook_name: &str,
        last_transfer_date: DateTime<Utc>,
        submissions: &[&UserQuestionSubmission],
    ) -> UpdatedSectionAssignmentResults {
        let retrieved = self.date_retrieved();

        let old_results = self.snapshots.group_results_snapshot(
            assignments,
            users,
            section,
            submissions,
            last_transfer_date,
        );
        let new_results =
            self.snapshots
                .group_results_snapshot(assignments, users, section, submissions, retrieved);

        let changed = self.changed_results(&old_results, new_results);
        info!(
            section = %section.name,
            gradebook = gradebook_name,
            %last_transfer_date,
            %retrieved,
            changed_groups = changed.len(),
            "computed updated results"
        );

        UpdatedSectionAssignmentResults {
            section_name: section.display_name().to_string(),
            gradebook_name: gradebook_name.to_string(),
            assignments_last_graded_date: last_transfer_date,
            results_retrieved_date: retrieved,
            section_assignment_results: changed,
        }
    }

    /// Now, truncated to the whole minute.
    fn date_retrieved(&self) -> DateTime<Utc> {
        let now = self.time_provider.utc_now();
        now.duration_trunc(TimeDelta::minutes(1)).unwrap_or(now)
    }

    fn changed_results(
        &self,
        old_results: &[SectionAssignmentResults],
        new_results: Vec<SectionAssignmentResults>,
    ) -> Vec<SectionAssignmentResults> {
        let mut old_scores: HashMap<&str, HashMap<i64, f64>> = HashMap::new();
        for row in old_results.iter().flat_map(|report| &report.assignment_group_results) {
            old_scores
                .entry(row.assignment_group_name.as_str())
                .or_default()
                .insert(row.user_id, row.score);
        }

        new_results
            .into_iter()
            .filter_map(|mut report| {
                report.assignment_group_results.retain(|row| {
                    let old = old_scores
                        .get(row.assignment_group_name.as_str())
                        .and_then(|scores| scores.get(&row.user_id));
                    match old {
                        Some(old) => (row.score - old).abs() > self.tolerance,
                        None => true,
                    }
                });
                debug!(
                    group = %report.assignment_group_name,
                    changed_rows = report.assignment_group_results.len(),
                    "diffed group"
                );
                (!report.assignment_group_results.is_empty()).then_some(report)
            })
            .collect()
    }
}
