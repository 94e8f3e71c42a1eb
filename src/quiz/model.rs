//! Quiz reference data: quizzes, their questions and answer options.
//!
//! The serialized layout matches the catalog JSON documents, including the
//! camel-cased `correctOptionId` key.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

id_newtype!(
    /// Identifies a quiz within a catalog.
    QuizId
);
id_newtype!(
    /// Identifies a question within its quiz.
    QuestionId
);
id_newtype!(
    /// Identifies an answer option within its question.
    OptionId
);

/// One selectable answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
}

/// A multiple-choice question. Option order is display order only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    #[serde(rename = "correctOptionId")]
    pub correct_option_id: OptionId,
}

impl Question {
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn is_correct(&self, id: OptionId) -> bool {
        self.correct_option_id == id
    }
}

/// A quiz. Question order is presentation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.questions.len().checked_sub(1)
    }
}
