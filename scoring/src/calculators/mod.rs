//! # Calculators
//!
//! Pure score and status arithmetic used by the result generators.
//!
//! - [`submission_status`]: completion and lateness of questions and aggregates.
//! - [`question_score`]: lateness deduction on a single submission.
//! - [`assignment_score`]: assignment score and status from question or submission results.
//! - [`assignment_group_score`]: group score, total points and status.

pub mod assignment_group_score;
pub mod assignment_score;
pub mod question_score;
pub mod submission_status;

pub use assignment_group_score::AssignmentGroupScoreCalculator;
pub use assignment_score::AssignmentScoreCalculator;
pub use question_score::{LatenessPolicy, QuestionScoreCalculator};
pub use submission_status::SubmissionStatusCalculator;
