//! # Results
//!
//! Value types produced by the scoring pipeline. Every report request builds
//! these fresh; they are never cached or mutated afterwards. All of them
//! serialize to JSON for the presentation layer.

pub mod assignment;
pub mod group;
pub mod question;
pub mod report;
pub mod status;

pub use assignment::{AssignmentResult, AssignmentResultDetails, AssignmentSubmissionResult};
pub use group::AssignmentGroupResult;
pub use question::{QuestionSubmissionResult, StudentQuestionResult};
pub use report::{
    SectionAssignmentResults, StudentAssignmentResults, UpdatedSectionAssignmentResults,
};
pub use status::{Completion, SubmissionStatus};
