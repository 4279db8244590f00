use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::calculators::submission_status::SubmissionStatusCalculator;
use crate::results::{
    AssignmentSubmissionResult, Completion, StudentQuestionResult, SubmissionStatus,
};
use crate::traits::time_provider::TimeProvider;
use crate::utilities::rounding::round_to;

/// Aggregates question or combined-submission results into an assignment
/// score and status.
#[derive(Clone)]
pub struct AssignmentScoreCalculator {
    status: SubmissionStatusCalculator,
    time_provider: Arc<dyn TimeProvider>,
}

impl AssignmentScoreCalculator {
    /// Create an assignment calculator.
    ///
    /// # Arguments
    /// * `status` - Aggregates question and submission statuses.
    /// * `time_provider` - Clock for the lateness of unsubmitted combined assignments.
    pub fn new(status: SubmissionStatusCalculator, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { status, time_provider }
    }

    /// Sum of the question scores.
    pub fn assignment_score(
        &self,
        question_results: &[StudentQuestionResult],
        round_digits: u32,
    ) -> f64 {
        round_to(question_results.iter().map(|r| r.score).sum(), round_digits)
    }

    /// Best combined-submission score, or 0.0 if nothing was submitted.
    pub fn combined_assignment_score(
        &self,
        submission_results: &[AssignmentSubmissionResult],
        round_digits: u32,
    ) -> f64 {
        best_submission(submission_results)
            .map(|best| round_to(best.score, round_digits))
            .unwrap_or(0.0)
    }

    /// Aggregate status of a separate-submission assignment.
    pub fn assignment_status(
        &self,
        question_results: &[StudentQuestionResult],
    ) -> SubmissionStatus {
        self.status
            .status_for_assignment(question_results.iter().map(|r| r.status))
    }

    /// Status of the best combined submission. Without any submission the
    /// assignment is not started, and late once the due date has passed.
    pub fn combined_assignment_status(
        &self,
        submission_results: &[AssignmentSubmissionResult],
        due_date: Option<DateTime<Utc>>,
    ) -> SubmissionStatus {
        match best_submission(submission_results) {
            Some(best) => best.status,
            None => {
                let late = due_date.is_some_and(|due| self.time_provider.utc_now() > due);
                SubmissionStatus::new(Completion::NotStarted, late)
            }
        }
    }
}

/// First submission result with the highest score.
fn best_submission(results: &[AssignmentSubmissionResult]) -> Option<&AssignmentSubmissionResult> {
    let mut best: Option<&AssignmentSubmissionResult> = None;
    for result in results {
        if best.is_none_or(|b| result.score > b.score) {
            best = Some(result);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::time_provider::FixedTimeProvider;
    use chrono::TimeZone;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 1, day, 0, 0, 0).unwrap()
    }

    fn calculator(now: DateTime<Utc>) -> AssignmentScoreCalculator {
        let clock: Arc<dyn TimeProvider> = Arc::new(FixedTimeProvider::new(now));
        AssignmentScoreCalculator::new(SubmissionStatusCalculator::new(clock.clone()), clock)
    }

    fn question_result(score: f64, status: SubmissionStatus) -> StudentQuestionResult {
        StudentQuestionResult {
            question_id: 1,
            assignment_id: 1,
            user_id: 1,
            combined_submissions: false,
            question_name: "Question".into(),
            question_points: 1.0,
            score,
            status,
            submission_results: None,
        }
    }

    fn submission_result(
        day: u32,
        score: f64,
        status: SubmissionStatus,
    ) -> AssignmentSubmissionResult {
        AssignmentSubmissionResult {
            assignment_id: 1,
            user_id: 1,
            submission_date: date(day),
            status,
            score,
            assignment_points: 10.0,
            question_results: vec![],
        }
    }

    fn completed(late: bool) -> SubmissionStatus {
        SubmissionStatus::new(Completion::Completed, late)
    }

    #[test]
    fn assignment_score_sums_and_rounds() {
        let calc = calculator(date(1));
        let results = vec![
            question_result(1.0, completed(false)),
            question_result(2.0, completed(false)),
            question_result(2.954, completed(false)),
        ];
        assert_eq!(calc.assignment_score(&results, 2), 5.95);
        assert_eq!(calc.assignment_score(&results, 2), 5.95);
        assert_eq!(calc.assignment_score(&[], 2), 0.0);
    }

    #[test]
    fn combined_score_is_best_submission() {
        let calc = calculator(date(1));
        let results = vec![
            submission_result(1, 3.0, completed(false)),
            submission_result(2, 7.126, completed(true)),
            submission_result(3, 5.0, completed(true)),
        ];
        assert_eq!(calc.combined_assignment_score(&results, 2), 7.13);
        assert_eq!(calc.combined_assignment_score(&[], 2), 0.0);
    }

    #[test]
    fn assignment_status_aggregates_question_statuses() {
        let calc = calculator(date(1));
        let results = vec![
            question_result(0.0, SubmissionStatus::new(Completion::InProgress, true)),
            question_result(1.0, completed(false)),
        ];
        assert_eq!(calc.assignment_status(&results), completed(false));
    }

    #[test]
    fn combined_status_takes_first_best_submission() {
        let calc = calculator(date(1));
        let results = vec![
            submission_result(1, 2.0, SubmissionStatus::new(Completion::InProgress, false)),
            submission_result(2, 6.0, completed(false)),
            submission_result(3, 6.0, completed(true)),
        ];
        assert_eq!(calc.combined_assignment_status(&results, Some(date(2))), completed(false));
    }

    #[test]
    fn combined_status_without_submissions() {
        let calc = calculator(date(5));
        let not_started = |late| SubmissionStatus::new(Completion::NotStarted, late);
        assert_eq!(calc.combined_assignment_status(&[], Some(date(3))), not_started(true));
        assert_eq!(calc.combined_assignment_status(&[], Some(date(6))), not_started(false));
        assert_eq!(calc.combined_assignment_status(&[], None), not_started(false));
    }
}
