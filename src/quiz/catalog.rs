//! Read-only quiz catalog.
//!
//! A catalog is validated once when it is built and never changes after
//! that. Validation uses `Validation` so a broken document reports every
//! problem in one pass instead of stopping at the first.

use crate::quiz::error::{CatalogError, CatalogViolation};
use crate::quiz::model::{AnswerOption, OptionId, Question, QuestionId, Quiz, QuizId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(Catalog {
        quizzes: builtin_quizzes().into_iter().map(Arc::new).collect(),
    })
});

/// One row of the quiz list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub question_count: usize,
}

impl QuizSummary {
    /// Count line shown under the description, e.g. "3 questions".
    pub fn question_count_label(&self) -> String {
        match self.question_count {
            1 => "1 question".to_string(),
            n => format!("{n} questions"),
        }
    }
}

/// Immutable table of quizzes, queryable by id.
#[derive(Clone, Debug)]
pub struct Catalog {
    quizzes: Vec<Arc<Quiz>>,
}

impl Catalog {
    /// Build a catalog, rejecting it if any quiz is malformed.
    pub fn new(quizzes: Vec<Quiz>) -> Result<Self, CatalogError> {
        match validate(&quizzes) {
            Validation::Success(_) => {
                debug!(quizzes = quizzes.len(), "catalog loaded");
                Ok(Self {
                    quizzes: quizzes.into_iter().map(Arc::new).collect(),
                })
            }
            Validation::Failure(violations) => Err(CatalogError::Invalid(violations)),
        }
    }

    /// Parse a JSON array of quizzes and validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let quizzes: Vec<Quiz> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(quizzes)
    }

    /// The baseball quizzes shipped with the crate, built once per process.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn get_quiz_by_id(&self, id: QuizId) -> Option<Arc<Quiz>> {
        self.quizzes.iter().find(|q| q.id == id).map(Arc::clone)
    }

    pub fn quizzes(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.iter().map(AsRef::as_ref)
    }

    /// Quiz list rows in catalog order.
    pub fn listing(&self) -> Vec<QuizSummary> {
        self.quizzes()
            .map(|q| QuizSummary {
                id: q.id,
                title: q.title.clone(),
                description: q.description.clone(),
                question_count: q.question_count(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

/// Check a set of quizzes, accumulating every violation.
pub fn validate(quizzes: &[Quiz]) -> Validation<(), NonEmptyVec<CatalogViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<CatalogViolation>>> = Vec::new();
    let mut quiz_ids = HashSet::new();

    for quiz in quizzes {
        if !quiz_ids.insert(quiz.id) {
            checks.push(Validation::fail(CatalogViolation::DuplicateQuizId {
                quiz_id: quiz.id,
            }));
        }

        if quiz.questions.is_empty() {
            checks.push(Validation::fail(CatalogViolation::EmptyQuiz {
                quiz_id: quiz.id,
            }));
        }

        let mut question_ids = HashSet::new();
        for question in &quiz.questions {
            if !question_ids.insert(question.id) {
                checks.push(Validation::fail(CatalogViolation::DuplicateQuestionId {
                    quiz_id: quiz.id,
                    question_id: question.id,
                }));
            }
            checks.extend(validate_question(quiz.id, question));
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}

fn validate_question(
    quiz_id: QuizId,
    question: &Question,
) -> Vec<Validation<(), NonEmptyVec<CatalogViolation>>> {
    let mut checks = Vec::new();
    let mut option_ids = HashSet::new();

    for option in &question.options {
        if !option_ids.insert(option.id) {
            checks.push(Validation::fail(CatalogViolation::DuplicateOptionId {
                quiz_id,
                question_id: question.id,
                option_id: option.id,
            }));
        }
    }

    if question.option(question.correct_option_id).is_none() {
        checks.push(Validation::fail(CatalogViolation::UnknownCorrectOption {
            quiz_id,
            question_id: question.id,
            option_id: question.correct_option_id,
        }));
    }

    checks
}

fn question(id: u32, prompt: &str, options: [&str; 4], correct: u32) -> Question {
    Question {
        id: QuestionId(id),
        prompt: prompt.to_string(),
        options: options
            .iter()
            .zip(1..)
            .map(|(text, option_id)| AnswerOption {
                id: OptionId(option_id),
                text: text.to_string(),
            })
            .collect(),
        correct_option_id: OptionId(correct),
    }
}

fn builtin_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: QuizId(1),
            title: "Baseball Basics".to_string(),
            description: "Test your knowledge of basic baseball rules".to_string(),
            questions: vec![
                question(
                    1,
                    "How many innings are in a regulation baseball game?",
                    ["7 innings", "9 innings", "11 innings", "5 innings"],
                    2,
                ),
                question(
                    2,
                    "How many outs are needed to end an inning?",
                    ["1 out", "2 outs", "3 outs", "4 outs"],
                    3,
                ),
                question(
                    3,
                    "How many strikes make an out?",
                    ["1 strike", "2 strikes", "3 strikes", "4 strikes"],
                    3,
                ),
            ],
        },
        Quiz {
            id: QuizId(2),
            title: "Field Positions".to_string(),
            description: "Test your knowledge of baseball positions".to_string(),
            questions: vec![
                question(
                    1,
                    "Which position is responsible for throwing the ball to the batter?",
                    ["Catcher", "Pitcher", "Shortstop", "First Baseman"],
                    2,
                ),
                question(
                    2,
                    "How many outfielders are there in a standard baseball team?",
                    [
                        "2 outfielders",
                        "3 outfielders",
                        "4 outfielders",
                        "5 outfielders",
                    ],
                    2,
                ),
                question(
                    3,
                    "Which position is located between second and third base?",
                    ["Left Fielder", "First Baseman", "Shortstop", "Second Baseman"],
                    3,
                ),
            ],
        },
        Quiz {
            id: QuizId(3),
            title: "Scoring & Gameplay".to_string(),
            description: "Test your knowledge of how scoring works in baseball".to_string(),
            questions: vec![
                question(
                    1,
                    "What is it called when a batter hits the ball over the outfield fence in fair territory?",
                    ["Triple", "Home run", "Grand slam", "Foul ball"],
                    2,
                ),
                question(
                    2,
                    "What is a 'walk' in baseball?",
                    [
                        "When a batter misses all three strikes",
                        "When a batter gets four balls and advances to first base",
                        "When a player runs slowly to the base",
                        "When a pitcher is replaced",
                    ],
                    2,
                ),
            ],
        },
    ]
}
