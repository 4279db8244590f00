//! Default question scoring.
//!
//! Every submission is scored with the lateness deduction. The best one
//! (highest adjusted score, then highest raw score, then earliest) decides
//! the question's score and status.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::calculators::{QuestionScoreCalculator, SubmissionStatusCalculator};
use crate::models::{Assignment, AssignmentQuestion, User, UserQuestionSubmission};
use crate::results::{QuestionSubmissionResult, StudentQuestionResult};
use crate::traits::question_result_generator::QuestionResultGenerator;

struct ScoredSubmission<'a> {
    submission: &'a UserQuestionSubmission,
    score: f64,
}

/// Default [`QuestionResultGenerator`]: a question's score is its best
/// lateness-adjusted submission.
#[derive(Clone)]
pub struct ScoredQuestionResultGenerator {
    score: QuestionScoreCalculator,
    status: SubmissionStatusCalculator,
}

impl ScoredQuestionResultGenerator {
    pub fn new(score: QuestionScoreCalculator, status: SubmissionStatusCalculator) -> Self {
        Self { score, status }
    }
}

impl QuestionResultGenerator for ScoredQuestionResultGenerator {
    fn create_question_result(
        &self,
        question: &AssignmentQuestion,
        assignment: &Assignment,
        user: &User,
        submissions: &[&UserQuestionSubmission],
        due_date: Option<DateTime<Utc>>,
    ) -> StudentQuestionResult {
        let mut scored: Vec<ScoredSubmission<'_>> = submissions
            .iter()
            .map(|&submission| ScoredSubmission {
                submission,
                score: self
                    .score
                    .submission_score(submission, due_date, question.points, true),
            })
            .collect();
        scored.sort_by_key(|s| s.submission.date_submitted);

        let mut best: Option<&ScoredSubmission<'_>> = None;
        for candidate in &scored {
            if best.is_none_or(|b| beats(candidate, b)) {
                best = Some(candidate);
            }
        }

        let interactive = question.is_interactive(assignment);
        let status = self.status.status_for_question(
            best.map(|b| b.submission.date_submitted),
            due_date,
            interactive,
            best.map_or(0.0, |b| b.submission.score),
        );

        let submission_results = (!interactive && !assignment.combined_submissions).then(|| {
            scored
                .iter()
                .map(|s| QuestionSubmissionResult {
                    question_id: question.id,
                    assignment_id: assignment.id,
                    user_id: user.id,
                    submission_date: s.submission.date_submitted,
                    status: self.status.status_for_question(
                        Some(s.submission.date_submitted),
                        due_date,
                        false,
                        s.submission.score,
                    ),
                    score: s.score,
                    question_points: question.points,
                })
                .collect::<Vec<_>>()
        });

        StudentQuestionResult {
            question_id: question.id,
            assignment_id: assignment.id,
            user_id: user.id,
            combined_submissions: assignment.combined_submissions,
            question_name: question.name.clone(),
            question_points: question.points,
            score: best.map_or(0.0, |b| b.score),
            status,
            submission_results,
        }
    }
}

/// Strictly better: higher adjusted score, then higher raw score. Candidates
/// are visited in date order, so equal ones keep the earliest.
fn beats(candidate: &ScoredSubmission<'_>, best: &ScoredSubmission<'_>) -> bool {
    let ordering = candidate
        .score
        .partial_cmp(&best.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            candidate
                .submission
                .score
                .partial_cmp(&best.submission.score)
                .unwrap_or(Ordering::Equal)
        });
    ordering == Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionKind, UserQuestionData};
    use crate::results::{Completion, SubmissionStatus};
    use crate::traits::time_provider::FixedTimeProvider;
    use chrono::{Duration, TimeZone};
    use std::sync::Arc;

    fn due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 1, 10, 0, 0, 0).unwrap()
    }

    fn generator() -> ScoredQuestionResultGenerator {
        let status = SubmissionStatusCalculator::new(Arc::new(FixedTimeProvider::new(due())));
        ScoredQuestionResultGenerator::new(QuestionScoreCalculator::default(), status)
    }

    fn assignment(kind: QuestionKind, combined: bool) -> Assignment {
        Assignment {
            id: 7,
            classroom_id: 1,
            name: "Homework".into(),
            group: None,
            due_dates: vec![],
            combined_submissions: combined,
            only_show_combined_score: false,
            questions: vec![AssignmentQuestion {
                id: 3,
                assignment_id: 7,
                name: "Question".into(),
                order: 0,
                points: 10.0,
                question: kind,
            }],
        }
    }

    fn user() -> User {
        User {
            id: 42,
            user_name: "jdoe".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            public_name: None,
        }
    }

    fn submission(score: f64, date_submitted: DateTime<Utc>) -> UserQuestionSubmission {
        UserQuestionSubmission {
            id: 0,
            date_submitted,
            score,
            user_question_data: UserQuestionData {
                user_id: 42,
                assignment_question_id: 3,
                assignment_id: 7,
            },
        }
    }

    fn run(
        assignment: &Assignment,
        submissions: &[UserQuestionSubmission],
    ) -> StudentQuestionResult {
        let refs: Vec<&UserQuestionSubmission> = submissions.iter().collect();
        generator().create_question_result(
            &assignment.questions[0],
            assignment,
            &user(),
            &refs,
            Some(due()),
        )
    }

    #[test]
    fn no_submissions() {
        let assignment = assignment(QuestionKind::Method, false);
        let result = run(&assignment, &[]);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.status, SubmissionStatus::new(Completion::NotStarted, false));
        assert_eq!(result.submission_results, None);
        assert_eq!(result.question_name, "Question");
        assert_eq!(result.user_id, 42);
    }

    #[test]
    fn best_adjusted_score_wins_over_late_higher_raw_score() {
        let assignment = assignment(QuestionKind::Method, false);
        let submissions = vec![
            submission(0.9, due() - Duration::days(1)),
            submission(1.0, due() + Duration::days(5)),
        ];
        let result = run(&assignment, &submissions);
        assert_eq!(result.score, 9.0);
        assert_eq!(result.status, SubmissionStatus::new(Completion::Completed, false));
    }

    #[test]
    fn late_best_submission_marks_question_late() {
        let assignment = assignment(QuestionKind::Method, false);
        let submissions = vec![
            submission(0.0, due() - Duration::days(1)),
            submission(1.0, due() + Duration::hours(2)),
        ];
        let result = run(&assignment, &submissions);
        assert_eq!(result.score, 9.5);
        assert_eq!(result.status, SubmissionStatus::new(Completion::Completed, true));
    }

    #[test]
    fn interactive_question_without_credit_is_in_progress() {
        let assignment = assignment(QuestionKind::Program, false);
        let submissions = vec![submission(0.0, due() - Duration::days(1))];
        let result = run(&assignment, &submissions);
        assert_eq!(result.status, SubmissionStatus::new(Completion::InProgress, false));
        assert_eq!(result.submission_results, None);
    }

    #[test]
    fn non_interactive_question_lists_submissions_in_date_order() {
        let assignment = assignment(QuestionKind::RandomlySelected, false);
        let submissions = vec![
            submission(0.5, due() + Duration::days(1)),
            submission(0.0, due() - Duration::days(2)),
        ];
        let result = run(&assignment, &submissions);

        assert_eq!(result.score, 4.75);
        assert_eq!(result.status, SubmissionStatus::new(Completion::Completed, true));
        let details = result.submission_results.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].submission_date, due() - Duration::days(2));
        assert_eq!(details[0].status, SubmissionStatus::new(Completion::Completed, false));
        assert_eq!(details[1].score, 4.75);
        assert_eq!(details[1].question_points, 10.0);
    }

    #[test]
    fn combined_assignment_never_lists_submissions() {
        let assignment = assignment(QuestionKind::MultipleChoice, true);
        let submissions = vec![submission(0.0, due() - Duration::days(1))];
        let result = run(&assignment, &submissions);
        assert!(result.combined_submissions);
        assert_eq!(result.submission_results, None);
        assert_eq!(result.status, SubmissionStatus::new(Completion::Completed, false));
    }

    #[test]
    fn ties_keep_the_earliest_submission() {
        let assignment = assignment(QuestionKind::Method, false);
        let submissions = vec![
            submission(1.0, due() - Duration::hours(1)),
            submission(1.0, due() - Duration::days(2)),
        ];
        let result = run(&assignment, &submissions);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.status, SubmissionStatus::new(Completion::Completed, false));
    }
}
