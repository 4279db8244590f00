use serde::{Deserialize, Serialize};

/// Progress marker for a question, assignment or assignment group.
///
/// Variants are declared worst to best, so the derived ordering ranks
/// `Completed > InProgress > NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    NotStarted,
    InProgress,
    Completed,
}

/// Completion plus lateness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub completion: Completion,
    pub late: bool,
}

impl SubmissionStatus {
    pub fn new(completion: Completion, late: bool) -> Self {
        Self { completion, late }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_ranking() {
        assert!(Completion::Completed > Completion::InProgress);
        assert!(Completion::InProgress > Completion::NotStarted);
    }

    #[test]
    fn serializes_snake_case() {
        let status = SubmissionStatus::new(Completion::InProgress, true);
        let value = serde_json::to_value(status).unwrap();
        assert_eq!(value["completion"], "in_progress");
        assert_eq!(value["late"], true);
    }
}
