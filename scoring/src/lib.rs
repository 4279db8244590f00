//! # Scoring Library
//!
//! Computes completion status, lateness and point totals of classroom
//! assignments for students and sections, and reports what changed since the
//! last gradebook transfer.
//!
//! ## Key Concepts
//! - **ScoringEngine**: wires calculators and generators from a clock and a
//!   [`ScoringConfig`].
//! - **Separate vs combined submissions**: separate-submission assignments
//!   add up each question's best score; combined-submission assignments take
//!   the best single submission event.
//! - **Assignment groups**: assignments sharing a group name are scored and
//!   reported together.
//! - **Snapshots**: a section report as of a past instant, diffed against
//!   the current one to find changed rows.
//!
//! All computations are synchronous and pure apart from the injected
//! [`TimeProvider`](traits::time_provider::TimeProvider).

pub mod calculators;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod generators;
pub mod models;
pub mod results;
pub mod traits;
pub mod utilities;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::calculators::{
    AssignmentGroupScoreCalculator, AssignmentScoreCalculator, LatenessPolicy,
    QuestionScoreCalculator, SubmissionStatusCalculator,
};
use crate::filter::AssignmentFilter;
use crate::generators::{
    AssignmentGroupResultGenerator, AssignmentResultGenerator, ScoredQuestionResultGenerator,
    SectionAssignmentReportGenerator, SnapshotAssignmentReportGenerator,
    StudentAssignmentReportGenerator, UpdatedAssignmentReportGenerator,
};
use crate::traits::question_result_generator::QuestionResultGenerator;
use crate::traits::time_provider::TimeProvider;

/// Tunable scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Deduction applied to late submissions.
    pub lateness: LatenessPolicy,
    /// Smallest score change reported by the updated report.
    pub score_tolerance: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            lateness: LatenessPolicy::default(),
            score_tolerance: 0.0001,
        }
    }
}

/// Entry point to the scoring pipeline.
///
/// Every accessor builds a fresh, immutable component; components are cheap
/// to build and `Send + Sync`, so they can be shared across threads.
#[derive(Clone)]
pub struct ScoringEngine {
    time_provider: Arc<dyn TimeProvider>,
    config: ScoringConfig,
    question_results: Option<Arc<dyn QuestionResultGenerator>>,
}

impl ScoringEngine {
    /// Create an engine with default scoring parameters.
    ///
    /// # Arguments
    /// * `time_provider` - Clock used for lateness of unsubmitted work and
    ///   for the updated report's retrieval date.
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            time_provider,
            config: ScoringConfig::default(),
            question_results: None,
        }
    }

    /// Set the lateness policy and score tolerance.
    ///
    /// # Arguments
    /// * `config` - Scoring parameters, usually from the application config.
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default question scoring strategy.
    ///
    /// # Arguments
    /// * `generator` - An implementation of the `QuestionResultGenerator` trait.
    pub fn with_question_result_generator<G>(mut self, generator: G) -> Self
    where
        G: QuestionResultGenerator + 'static,
    {
        self.question_results = Some(Arc::new(generator));
        self
    }

    /// The active scoring parameters.
    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    /// Assignment and submission filtering.
    pub fn filter(&self) -> AssignmentFilter {
        AssignmentFilter::new()
    }

    /// Completion and lateness of questions and assignments.
    pub fn status_calculator(&self) -> SubmissionStatusCalculator {
        SubmissionStatusCalculator::new(self.time_provider.clone())
    }

    /// Per-submission scoring with the configured lateness policy.
    pub fn question_score_calculator(&self) -> QuestionScoreCalculator {
        QuestionScoreCalculator::new(self.config.lateness)
    }

    /// Assignment totals for both submission modes.
    pub fn assignment_score_calculator(&self) -> AssignmentScoreCalculator {
        AssignmentScoreCalculator::new(self.status_calculator(), self.time_provider.clone())
    }

    /// Assignment group totals and status.
    pub fn group_score_calculator(&self) -> AssignmentGroupScoreCalculator {
        AssignmentGroupScoreCalculator::new(self.status_calculator())
    }

    /// The question scoring strategy, either the one set with
    /// [`with_question_result_generator`](Self::with_question_result_generator)
    /// or [`ScoredQuestionResultGenerator`].
    pub fn question_result_generator(&self) -> Arc<dyn QuestionResultGenerator> {
        match &self.question_results {
            Some(generator) => generator.clone(),
            None => Arc::new(ScoredQuestionResultGenerator::new(
                self.question_score_calculator(),
                self.status_calculator(),
            )),
        }
    }

    /// Per-student assignment results.
    pub fn assignment_result_generator(&self) -> AssignmentResultGenerator {
        AssignmentResultGenerator::new(
            self.question_result_generator(),
            self.assignment_score_calculator(),
        )
    }

    /// Per-student assignment group results.
    pub fn group_result_generator(&self) -> AssignmentGroupResultGenerator {
        AssignmentGroupResultGenerator::new(
            self.filter(),
            self.assignment_result_generator(),
            self.group_score_calculator(),
        )
    }

    /// One row per student for an assignment group in a section.
    pub fn section_report_generator(&self) -> SectionAssignmentReportGenerator {
        SectionAssignmentReportGenerator::new(
            self.filter(),
            self.group_result_generator(),
            self.group_score_calculator(),
        )
    }

    /// Every assignment group for one student.
    pub fn student_report_generator(&self) -> StudentAssignmentReportGenerator {
        StudentAssignmentReportGenerator::new(self.filter(), self.group_result_generator())
    }

    /// Section reports as of a past instant.
    pub fn snapshot_report_generator(&self) -> SnapshotAssignmentReportGenerator {
        SnapshotAssignmentReportGenerator::new(self.filter(), self.section_report_generator())
    }

    /// Rows that changed since the last gradebook transfer.
    pub fn updated_report_generator(&self) -> UpdatedAssignmentReportGenerator {
        UpdatedAssignmentReportGenerator::new(
            self.snapshot_report_generator(),
            self.time_provider.clone(),
            self.config.score_tolerance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::time_provider::SystemTimeProvider;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn components_are_shareable() {
        assert_send_sync::<ScoringEngine>();
        assert_send_sync::<UpdatedAssignmentReportGenerator>();
        assert_send_sync::<StudentAssignmentReportGenerator>();
    }

    #[test]
    fn config_flows_into_calculators() {
        let config = ScoringConfig {
            lateness: LatenessPolicy {
                late_day_deduction: 0.1,
                max_late_deduction: 0.3,
            },
            score_tolerance: 0.5,
        };
        let engine = ScoringEngine::new(Arc::new(SystemTimeProvider)).with_config(config);
        assert_eq!(engine.config(), config);
        assert_eq!(engine.question_score_calculator().policy(), config.lateness);
    }
}
