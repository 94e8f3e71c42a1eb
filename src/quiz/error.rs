//! Error types for quiz sessions and catalogs.

use crate::quiz::model::{OptionId, QuestionId, QuizId};
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Refusals from a quiz session. The session is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("No quiz with id {quiz_id}")]
    NotFound { quiz_id: QuizId },

    #[error("`{operation}` requires {requirement}")]
    PreconditionNotMet {
        operation: &'static str,
        requirement: String,
    },
}

/// A single problem found while validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogViolation {
    #[error("quiz id {quiz_id} is used more than once")]
    DuplicateQuizId { quiz_id: QuizId },

    #[error("quiz {quiz_id} has no questions")]
    EmptyQuiz { quiz_id: QuizId },

    #[error("quiz {quiz_id}: question id {question_id} is used more than once")]
    DuplicateQuestionId {
        quiz_id: QuizId,
        question_id: QuestionId,
    },

    #[error("quiz {quiz_id}, question {question_id}: option id {option_id} is used more than once")]
    DuplicateOptionId {
        quiz_id: QuizId,
        question_id: QuestionId,
        option_id: OptionId,
    },

    #[error("quiz {quiz_id}, question {question_id}: correct option {option_id} is not among its options")]
    UnknownCorrectOption {
        quiz_id: QuizId,
        question_id: QuestionId,
        option_id: OptionId,
    },
}

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog parse failed: {0}")]
    Parse(String),

    #[error("Catalog validation failed with {} violation(s): {}", .0.len(), join(.0))]
    Invalid(NonEmptyVec<CatalogViolation>),
}

fn join(violations: &NonEmptyVec<CatalogViolation>) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
