//! Question kinds and the solvers they support.

use serde::{Deserialize, Serialize};

/// How a student works through a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverType {
    /// The student may submit repeatedly from the same page and sees feedback each time.
    Interactive,
    /// The student submits once per attempt without immediate feedback.
    NonInteractive,
}

/// The kind of question referenced by an [`crate::models::AssignmentQuestion`].
///
/// Question content is owned elsewhere; scoring only needs to know which
/// solvers a kind supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    ShortAnswer,
    Method,
    Class,
    Program,
    GeneratedTemplate,
    RandomlySelected,
}

const BOTH: &[SolverType] = &[SolverType::Interactive, SolverType::NonInteractive];
const INTERACTIVE_ONLY: &[SolverType] = &[SolverType::Interactive];
const NON_INTERACTIVE_ONLY: &[SolverType] = &[SolverType::NonInteractive];

/// Solver support per question kind.
const SUPPORTED_SOLVERS: &[(QuestionKind, &[SolverType])] = &[
    (QuestionKind::MultipleChoice, BOTH),
    (QuestionKind::ShortAnswer, BOTH),
    (QuestionKind::Method, INTERACTIVE_ONLY),
    (QuestionKind::Class, INTERACTIVE_ONLY),
    (QuestionKind::Program, INTERACTIVE_ONLY),
    (QuestionKind::GeneratedTemplate, INTERACTIVE_ONLY),
    (QuestionKind::RandomlySelected, NON_INTERACTIVE_ONLY),
];

impl QuestionKind {
    /// Whether this kind of question can be solved with the given solver.
    pub fn supports(self, solver: SolverType) -> bool {
        SUPPORTED_SOLVERS
            .iter()
            .find(|(kind, _)| *kind == self)
            .is_some_and(|(_, solvers)| solvers.contains(&solver))
    }

    /// Whether this is one of the code question kinds.
    pub fn is_code_question(self) -> bool {
        matches!(
            self,
            QuestionKind::Method
                | QuestionKind::Class
                | QuestionKind::Program
                | QuestionKind::GeneratedTemplate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_solver_entry() {
        for kind in [
            QuestionKind::MultipleChoice,
            QuestionKind::ShortAnswer,
            QuestionKind::Method,
            QuestionKind::Class,
            QuestionKind::Program,
            QuestionKind::GeneratedTemplate,
            QuestionKind::RandomlySelected,
        ] {
            assert!(
                kind.supports(SolverType::Interactive) || kind.supports(SolverType::NonInteractive),
                "{kind:?} supports no solver"
            );
        }
    }

    #[test]
    fn code_questions_are_interactive_only() {
        assert!(QuestionKind::Method.supports(SolverType::Interactive));
        assert!(!QuestionKind::Method.supports(SolverType::NonInteractive));
        assert!(QuestionKind::Program.is_code_question());
    }

    #[test]
    fn randomly_selected_is_non_interactive_only() {
        assert!(!QuestionKind::RandomlySelected.supports(SolverType::Interactive));
        assert!(QuestionKind::RandomlySelected.supports(SolverType::NonInteractive));
    }

    #[test]
    fn deserializes_snake_case() {
        let kind: QuestionKind = serde_json::from_str("\"generated_template\"").unwrap();
        assert_eq!(kind, QuestionKind::GeneratedTemplate);
    }
}
