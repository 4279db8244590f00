//! Scoring Error Types
//!
//! The scoring computations themselves cannot fail. Errors only arise at the
//! dataset boundary, when input documents are read, parsed and checked for
//! referential integrity before anything is scored.

use std::path::PathBuf;

/// Errors raised while loading or validating a dataset.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// The dataset file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the dataset schema.
    #[error("invalid dataset JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown user: {0}")]
    UnknownUser(String),
    /// A submission refers to a question that is not part of any assignment.
    #[error(
        "submission {submission_id} refers to unknown assignment question {assignment_question_id}"
    )]
    UnknownAssignmentQuestion {
        submission_id: i64,
        assignment_question_id: i64,
    },
    /// A submission's assignment id disagrees with its question's assignment.
    #[error(
        "submission {submission_id} names assignment {claimed} but question {assignment_question_id} belongs to assignment {actual}"
    )]
    AssignmentMismatch {
        submission_id: i64,
        assignment_question_id: i64,
        claimed: i64,
        actual: i64,
    },
    #[error("assignment {assignment_id} has more than one due date for section {section_id}")]
    DuplicateDueDate { assignment_id: i64, section_id: i64 },
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type ScoringResult<T> = Result<T, ScoringError>;
