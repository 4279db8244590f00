use chrono::{DateTime, Utc};

use crate::models::{Assignment, AssignmentQuestion, User, UserQuestionSubmission};
use crate::results::StudentQuestionResult;

/// Builds a student's result on one assignment question.
///
/// Implementations decide how a question's submissions are scored. The
/// default one is [`crate::generators::question_result::ScoredQuestionResultGenerator`].
pub trait QuestionResultGenerator: Send + Sync {
    /// - `submissions`: the user's submissions of `question` only, in any order.
    /// - `due_date`: the assignment's due date for the section being reported.
    fn create_question_result(
        &self,
        question: &AssignmentQuestion,
        assignment: &Assignment,
        user: &User,
        submissions: &[&UserQuestionSubmission],
        due_date: Option<DateTime<Utc>>,
    ) -> StudentQuestionResult;
}
