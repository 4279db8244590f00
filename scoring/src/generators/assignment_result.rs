//! Builds a student's result on one assignment.
//!
//! Separate-submission assignments are scored question by question.
//! Combined-submission assignments are scored per submission event (every
//! submission sharing one timestamp), and the best event counts.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::calculators::AssignmentScoreCalculator;
use crate::models::{Assignment, Section, User, UserQuestionSubmission};
use crate::results::{
    AssignmentResult, AssignmentResultDetails, AssignmentSubmissionResult, StudentQuestionResult,
};
use crate::traits::question_result_generator::QuestionResultGenerator;

/// Scores one student on one assignment in either submission mode.
#[derive(Clone)]
pub struct AssignmentResultGenerator {
    question_results: Arc<dyn QuestionResultGenerator>,
    score: AssignmentScoreCalculator,
}

impl AssignmentResultGenerator {
    /// Create an assignment result generator.
    ///
    /// # Arguments
    /// * `question_results` - Strategy that scores each question.
    /// * `score` - Totals and statuses for both submission modes.
    pub fn new(
        question_results: Arc<dyn QuestionResultGenerator>,
        score: AssignmentScoreCalculator,
    ) -> Self {
        Self {
            question_results,
            score,
        }
    }

    /// Builds the result of `user` on `assignment`.
    ///
    /// `submissions` may include submissions to other assignments; only those
    /// of `assignment` are scored. The per-question breakdown is left empty
    /// when the assignment only shows its combined score, unless `admin`.
    pub fn create_assignment_result(
        &self,
        section: Option<&Section>,
        assignment: &Assignment,
        user: &User,
        admin: bool,
        submissions: &[&UserQuestionSubmission],
    ) -> AssignmentResult {
        let due_date = assignment.due_date(section);
        let total_points = assignment.total_points();
        let show_question_results = !assignment.only_show_combined_score || admin;

        let (score, status, details) = if assignment.combined_submissions {
            let submission_results = self.submission_results(
                assignment,
                user,
                show_question_results,
                submissions,
                due_date,
                total_points,
            );
            debug!(
                assignment_id = assignment.id,
                user_id = user.id,
                events = submission_results.len(),
                "scored combined-submission assignment"
            );

            (
                self.score.combined_assignment_score(&submission_results, 2),
                self.score
                    .combined_assignment_status(&submission_results, due_date),
                AssignmentResultDetails::CombinedSubmissions { submission_results },
            )
        } else {
            let question_results = self.question_results(assignment, user, submissions, due_date);
            let score = self.score.assignment_score(&question_results, 2);
            let status = self.score.assignment_status(&question_results);

            (
                score,
                status,
                AssignmentResultDetails::SeparateSubmissions {
                    question_results: if show_question_results {
                        question_results
                    } else {
                        Vec::new()
                    },
                },
            )
        };

        AssignmentResult {
            assignment_name: assignment.name.clone(),
            assignment_id: assignment.id,
            user_id: user.id,
            assignment_due_date: due_date,
            score,
            total_points,
            status,
            details,
        }
    }

    fn submission_results(
        &self,
        assignment: &Assignment,
        user: &User,
        show_question_results: bool,
        submissions: &[&UserQuestionSubmission],
        due_date: Option<DateTime<Utc>>,
        total_points: f64,
    ) -> Vec<AssignmentSubmissionResult> {
        let mut own: Vec<&UserQuestionSubmission> = submissions
            .iter()
            .copied()
            .filter(|s| s.assignment_id() == assignment.id)
            .collect();
        own.sort_by_key(|s| s.date_submitted);

        own.chunk_by(|a, b| a.date_submitted == b.date_submitted)
            .map(|event| {
                let question_results = self.question_results(assignment, user, event, due_date);
                let score: f64 = question_results.iter().map(|r| r.score).sum();
                let status = self.score.assignment_status(&question_results);

                AssignmentSubmissionResult {
                    assignment_id: assignment.id,
                    user_id: user.id,
                    submission_date: event[0].date_submitted,
                    status,
                    score,
                    assignment_points: total_points,
                    question_results: if show_question_results {
                        question_results
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect()
    }

    /// One result per question, in question order.
    fn question_results(
        &self,
        assignment: &Assignment,
        user: &User,
        submissions: &[&UserQuestionSubmission],
        due_date: Option<DateTime<Utc>>,
    ) -> Vec<StudentQuestionResult> {
        assignment
            .ordered_questions()
            .into_iter()
            .map(|question| {
                let question_submissions: Vec<&UserQuestionSubmission> = submissions
                    .iter()
                    .copied()
                    .filter(|s| s.assignment_question_id() == question.id)
                    .collect();

                self.question_results.create_question_result(
                    question,
                    assignment,
                    user,
                    &question_submissions,
                    due_date,
                )
            })
            .collect()
    }
}
