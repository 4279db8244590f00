//! # Models
//!
//! Read-only inputs to the scoring pipeline. These are fully materialized
//! records handed over by the persistence layer (or loaded from a
//! [`crate::dataset::Dataset`]); nothing in this crate mutates them.

pub mod assignment;
pub mod question;
pub mod section;
pub mod submission;
pub mod user;

pub use assignment::{Assignment, AssignmentDueDate, AssignmentQuestion};
pub use question::{QuestionKind, SolverType};
pub use section::{Classroom, Section};
pub use submission::{UserQuestionData, UserQuestionSubmission};
pub use user::User;
