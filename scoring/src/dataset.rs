//! # Dataset
//!
//! A JSON document holding everything the scoring pipeline needs for one
//! classroom: sections, users, assignments (with due dates and questions) and
//! submissions. Loading links submissions to their assignments and checks
//! referential integrity once, so the scoring code can assume consistent
//! input.
//!
//! ```json
//! {
//!   "sections": [{ "id": 1, "name": "Period1" }],
//!   "users": [{ "id": 1, "user_name": "jdoe", "first_name": "John", "last_name": "Doe" }],
//!   "assignments": [{
//!     "id": 1, "name": "Unit 1a", "group_name": "Unit 1",
//!     "due_dates": [{ "section_id": 1, "due_date": "2017-01-05T12:00:00Z" }],
//!     "questions": [{ "id": 1, "name": "Q1", "points": 5.0, "question": "multiple_choice" }]
//!   }],
//!   "submissions": [{
//!     "user_id": 1, "assignment_question_id": 1,
//!     "date_submitted": "2017-01-04T09:30:00Z", "score": 1.0
//!   }]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ScoringError, ScoringResult};
use crate::models::{Assignment, Classroom, Section, User, UserQuestionSubmission};

/// A classroom's sections, users, assignments and submissions as one JSON
/// document.
///
/// Submissions may omit `assignment_id`; it is filled in from the question
/// when the document is loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub submissions: Vec<UserQuestionSubmission>,
}

impl Dataset {
    /// Parses, links and validates a dataset document.
    pub fn from_json_str(json: &str) -> ScoringResult<Self> {
        let mut dataset: Dataset = serde_json::from_str(json)?;
        dataset.link()?;
        dataset.validate()?;

        debug!(
            sections = dataset.sections.len(),
            users = dataset.users.len(),
            assignments = dataset.assignments.len(),
            submissions = dataset.submissions.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Reads a dataset document from disk.
    pub fn load(path: impl AsRef<Path>) -> ScoringResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ScoringError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Fills in the assignment id of every question and submission.
    fn link(&mut self) -> ScoringResult<()> {
        let mut question_assignments: HashMap<i64, i64> = HashMap::new();
        for assignment in &mut self.assignments {
            for question in &mut assignment.questions {
                question.assignment_id = assignment.id;
                question_assignments.insert(question.id, assignment.id);
            }
        }

        for submission in &mut self.submissions {
            let data = &mut submission.user_question_data;
            let actual = *question_assignments.get(&data.assignment_question_id).ok_or(
                ScoringError::UnknownAssignmentQuestion {
                    submission_id: submission.id,
                    assignment_question_id: data.assignment_question_id,
                },
            )?;
            if data.assignment_id != 0 && data.assignment_id != actual {
                return Err(ScoringError::AssignmentMismatch {
                    submission_id: submission.id,
                    assignment_question_id: data.assignment_question_id,
                    claimed: data.assignment_id,
                    actual,
                });
            }
            data.assignment_id = actual;
        }

        Ok(())
    }

    /// Checks that every reference in the dataset resolves.
    pub fn validate(&self) -> ScoringResult<()> {
        let section_ids: HashSet<i64> = self.sections.iter().map(|s| s.id).collect();
        let user_ids: HashSet<i64> = self.users.iter().map(|u| u.id).collect();
        let question_ids: HashSet<i64> = self
            .assignments
            .iter()
            .flat_map(|a| a.questions.iter().map(|q| q.id))
            .collect();

        for assignment in &self.assignments {
            let mut seen = HashSet::new();
            for due_date in &assignment.due_dates {
                if !section_ids.contains(&due_date.section_id) {
                    return Err(ScoringError::UnknownSection(format!(
                        "id {} (due date of assignment {})",
                        due_date.section_id, assignment.id
                    )));
                }
                if !seen.insert(due_date.section_id) {
                    return Err(ScoringError::DuplicateDueDate {
                        assignment_id: assignment.id,
                        section_id: due_date.section_id,
                    });
                }
            }

            if assignment.combined_submissions {
                let code_questions = assignment
                    .questions
                    .iter()
                    .filter(|q| q.question.is_code_question());
                for question in code_questions {
                    warn!(
                        assignment_id = assignment.id,
                        question_id = question.id,
                        "code question in a combined-submission assignment"
                    );
                }
            }
        }

        for submission in &self.submissions {
            if !question_ids.contains(&submission.assignment_question_id()) {
                return Err(ScoringError::UnknownAssignmentQuestion {
                    submission_id: submission.id,
                    assignment_question_id: submission.assignment_question_id(),
                });
            }
            if !user_ids.contains(&submission.user_id()) {
                return Err(ScoringError::UnknownUser(format!(
                    "id {} (submission {})",
                    submission.user_id(),
                    submission.id
                )));
            }
        }

        Ok(())
    }

    /// Looks up a section by its short name.
    ///
    /// # Arguments
    /// * `name` - The section's `name`, not its display name.
    pub fn section_by_name(&self, name: &str) -> ScoringResult<&Section> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ScoringError::UnknownSection(name.to_string()))
    }

    /// Looks up a user by login name.
    ///
    /// # Arguments
    /// * `user_name` - The user's `user_name`.
    pub fn user_by_name(&self, user_name: &str) -> ScoringResult<&User> {
        self.users
            .iter()
            .find(|u| u.user_name == user_name)
            .ok_or_else(|| ScoringError::UnknownUser(user_name.to_string()))
    }

    /// Users enrolled in `section`: its explicit roster, or every user when
    /// the section has none.
    pub fn section_members(&self, section: &Section) -> Vec<&User> {
        match &section.member_ids {
            Some(ids) => self.users.iter().filter(|u| ids.contains(&u.id)).collect(),
            None => self.users.iter().collect(),
        }
    }

    /// Borrowed view of every assignment, in document order.
    pub fn assignment_refs(&self) -> Vec<&Assignment> {
        self.assignments.iter().collect()
    }

    /// Borrowed view of every submission, in document order.
    pub fn submission_refs(&self) -> Vec<&UserQuestionSubmission> {
        self.submissions.iter().collect()
    }
}

/// Parses an RFC 3339 timestamp into UTC.
pub fn parse_utc(value: &str) -> ScoringResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|source| ScoringError::InvalidDate {
            value: value.to_string(),
            source,
        })
}
