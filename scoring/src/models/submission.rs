use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who answered which assignment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserQuestionData {
    pub user_id: i64,
    pub assignment_question_id: i64,
    /// Filled in from the assignment question when loaded through a dataset.
    #[serde(default)]
    pub assignment_id: i64,
}

/// One attempt by one student at one assignment question.
///
/// `score` is the fraction (0.0 to 1.0) of the question's points earned by the
/// attempt, before any lateness deduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserQuestionSubmission {
    #[serde(default)]
    pub id: i64,
    pub date_submitted: DateTime<Utc>,
    pub score: f64,
    #[serde(flatten)]
    pub user_question_data: UserQuestionData,
}

impl UserQuestionSubmission {
    pub fn user_id(&self) -> i64 {
        self.user_question_data.user_id
    }

    pub fn assignment_id(&self) -> i64 {
        self.user_question_data.assignment_id
    }

    pub fn assignment_question_id(&self) -> i64 {
        self.user_question_data.assignment_question_id
    }
}
