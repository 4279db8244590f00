//! # Assignment Model
//!
//! An assignment is an ordered list of questions, each worth a number of
//! points, with at most one due date per section. Assignments sharing a group
//! name are reported and scored together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::{QuestionKind, SolverType};
use crate::models::section::Section;

/// The due date of an assignment for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDueDate {
    pub section_id: i64,
    pub due_date: DateTime<Utc>,
}

/// One question's inclusion in an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentQuestion {
    pub id: i64,
    /// Filled in from the owning assignment when loaded through a dataset.
    #[serde(default)]
    pub assignment_id: i64,
    pub name: String,
    #[serde(default)]
    pub order: i32,
    pub points: f64,
    #[serde(default)]
    pub question: QuestionKind,
}

impl AssignmentQuestion {
    /// Whether the question allows multiple submissions from the same page.
    ///
    /// Questions on a combined-submission assignment are never interactive.
    pub fn is_interactive(&self, assignment: &Assignment) -> bool {
        !assignment.combined_submissions && self.question.supports(SolverType::Interactive)
    }
}

/// An assignment of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    #[serde(default)]
    pub classroom_id: i64,
    pub name: String,
    /// Group used for reporting; see [`Assignment::group_name`].
    #[serde(default, rename = "group_name", skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub due_dates: Vec<AssignmentDueDate>,
    /// All questions are answered on one page and submitted together.
    #[serde(default)]
    pub combined_submissions: bool,
    /// Hide the per-question breakdown from non-admins.
    #[serde(default)]
    pub only_show_combined_score: bool,
    #[serde(default)]
    pub questions: Vec<AssignmentQuestion>,
}

impl Assignment {
    /// The group this assignment is reported under. Falls back to the
    /// assignment name when no group is set.
    pub fn group_name(&self) -> &str {
        match self.group.as_deref() {
            Some(group) if !group.is_empty() => group,
            _ => &self.name,
        }
    }

    /// Returns the due date for the given section, or `None` if the assignment
    /// is not assigned to it. Without a section, returns the latest due date
    /// across all sections (or `None` if there are no due dates at all).
    pub fn due_date(&self, section: Option<&Section>) -> Option<DateTime<Utc>> {
        match section {
            Some(section) => self
                .due_dates
                .iter()
                .find(|d| d.section_id == section.id)
                .map(|d| d.due_date),
            None => self.due_dates.iter().map(|d| d.due_date).max(),
        }
    }

    /// Whether the assignment has a due date for the section.
    pub fn is_assigned_to(&self, section: &Section) -> bool {
        self.due_dates.iter().any(|d| d.section_id == section.id)
    }

    /// Sum of all question points.
    pub fn total_points(&self) -> f64 {
        self.questions.iter().map(|q| q.points).sum()
    }

    /// Questions in display order.
    pub fn ordered_questions(&self) -> Vec<&AssignmentQuestion> {
        let mut questions: Vec<&AssignmentQuestion> = self.questions.iter().collect();
        questions.sort_by_key(|q| q.order);
        questions
    }
}
