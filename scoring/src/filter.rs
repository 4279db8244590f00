//! # Assignment Filter
//!
//! Selection, ordering and grouping of assignments and submissions for a
//! section, an assignment group, a user and a point in time.
//!
//! Assignments are ordered by their due date for the section (undated last),
//! with ties broken by natural order of the name. Groups are ordered by the
//! latest due date among their assignments, then by natural order of the
//! group name.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{Assignment, Section, User, UserQuestionSubmission};
use crate::utilities::natural_order::natural_cmp;

/// Assignments sharing a group name, in input order.
/// Assignments sharing a group name, in due date order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentGroup<'a> {
    pub name: &'a str,
    pub assignments: Vec<&'a Assignment>,
}

/// Selects and orders the assignments and submissions a report covers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentFilter;

impl AssignmentFilter {
    pub fn new() -> Self {
        Self
    }

    /// Keeps assignments in `group_name` (when given) that have a due date for
    /// `section` (when given), ordered by that due date.
    pub fn filter_assignments<'a, I>(
        &self,
        assignments: I,
        section: Option<&Section>,
        group_name: Option<&str>,
    ) -> Vec<&'a Assignment>
    where
        I: IntoIterator<Item = &'a Assignment>,
    {
        let mut filtered: Vec<&'a Assignment> = assignments
            .into_iter()
            .filter(|a| group_name.is_none_or(|group| a.group_name() == group))
            .filter(|a| section.is_none_or(|section| a.is_assigned_to(section)))
            .collect();

        filtered.sort_by(|a, b| {
            sort_date(a.due_date(section))
                .cmp(&sort_date(b.due_date(section)))
                .then_with(|| natural_cmp(&a.name, &b.name))
        });
        filtered
    }

    /// Groups assignments by group name. Each group keeps the relative input
    /// order of its assignments.
    pub fn assignment_groups<'a, I>(
        &self,
        section: Option<&Section>,
        assignments: I,
    ) -> Vec<AssignmentGroup<'a>>
    where
        I: IntoIterator<Item = &'a Assignment>,
    {
        let mut groups: Vec<AssignmentGroup<'a>> = Vec::new();
        for assignment in assignments {
            let name = assignment.group_name();
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.assignments.push(assignment),
                None => groups.push(AssignmentGroup {
                    name,
                    assignments: vec![assignment],
                }),
            }
        }

        groups.sort_by(|a, b| compare_groups(a, b, section));
        groups
    }

    /// Keeps submissions to any of `assignments`, optionally only those of
    /// `user` and only those submitted on or before `snapshot_date`.
    pub fn filter_submissions<'a, 'b, A, S>(
        &self,
        assignments: A,
        submissions: S,
        user: Option<&User>,
        snapshot_date: Option<DateTime<Utc>>,
    ) -> Vec<&'a UserQuestionSubmission>
    where
        A: IntoIterator<Item = &'b Assignment>,
        S: IntoIterator<Item = &'a UserQuestionSubmission>,
    {
        let assignment_ids: HashSet<i64> = assignments.into_iter().map(|a| a.id).collect();

        submissions
            .into_iter()
            .filter(|s| user.is_none_or(|user| s.user_id() == user.id))
            .filter(|s| snapshot_date.is_none_or(|date| s.date_submitted <= date))
            .filter(|s| assignment_ids.contains(&s.assignment_id()))
            .collect()
    }
}

fn sort_date(due_date: Option<DateTime<Utc>>) -> DateTime<Utc> {
    due_date.unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn compare_groups(
    a: &AssignmentGroup<'_>,
    b: &AssignmentGroup<'_>,
    section: Option<&Section>,
) -> Ordering {
    let last_due = |group: &AssignmentGroup<'_>| {
        group
            .assignments
            .iter()
            .map(|a| sort_date(a.due_date(section)))
            .max()
    };

    last_due(a)
        .cmp(&last_due(b))
        .then_with(|| natural_cmp(a.name, b.name))
}
