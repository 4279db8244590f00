//! # Report Types
//!
//! Report envelopes returned by the section, student and updated report
//! generators.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::results::group::AssignmentGroupResult;

/// Results for one assignment group across every student of a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionAssignmentResults {
    pub assignment_group_name: String,
    pub section_name: String,
    /// Total points available in the group.
    pub points: f64,
    pub assignment_group_results: Vec<AssignmentGroupResult>,
}

/// Results for every assignment group of one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAssignmentResults {
    pub last_name: String,
    pub first_name: String,
    pub section_name: Option<String>,
    pub assignment_group_results: Vec<AssignmentGroupResult>,
}

/// Section results that changed since the last gradebook transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatedSectionAssignmentResults {
    pub section_name: String,
    pub gradebook_name: String,
    pub assignments_last_graded_date: DateTime<Utc>,
    pub results_retrieved_date: DateTime<Utc>,
    pub section_assignment_results: Vec<SectionAssignmentResults>,
}
