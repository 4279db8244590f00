//! # Generators
//!
//! Build result values from models, bottom-up:
//!
//! - [`question_result`]: default question scoring.
//! - [`assignment_result`]: one assignment for one student.
//! - [`assignment_group_result`]: one assignment group for one student.
//! - [`section_report`] and [`student_report`]: report envelopes.
//! - [`snapshot_report`] and [`updated_report`]: point-in-time reports and
//!   their difference.

pub mod assignment_group_result;
pub mod assignment_result;
pub mod question_result;
pub mod section_report;
pub mod snapshot_report;
pub mod student_report;
pub mod updated_report;

pub use assignment_group_result::AssignmentGroupResultGenerator;
pub use assignment_result::AssignmentResultGenerator;
pub use question_result::ScoredQuestionResultGenerator;
pub use section_report::SectionAssignmentReportGenerator;
pub use snapshot_report::SnapshotAssignmentReportGenerator;
pub use student_report::StudentAssignmentReportGenerator;
pub use updated_report::UpdatedAssignmentReportGenerator;
