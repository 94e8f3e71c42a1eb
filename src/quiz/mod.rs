//! Multiple-choice quizzes: reference data, the session state machine, and scoring.
//!
//! # Example
//!
//! ```rust
//! use dugout::quiz::{Grade, OptionId, QuestionId, QuizId, QuizPhase, QuizSession};
//!
//! let mut session = QuizSession::with_builtin_catalog();
//! session.select_quiz(QuizId(3))?;
//!
//! session.select_answer(QuestionId(1), OptionId(2))?;
//! session.advance()?;
//! session.select_answer(QuestionId(2), OptionId(2))?;
//! let snapshot = session.advance()?;
//!
//! assert_eq!(snapshot.phase, QuizPhase::Completed);
//! let result = snapshot.result.unwrap();
//! assert_eq!(result.grade, Grade::Perfect);
//! assert_eq!(result.summary(), "You scored 2 out of 2");
//! # Ok::<(), dugout::quiz::QuizError>(())
//! ```

mod catalog;
mod error;
mod model;
mod result;
mod session;

pub use catalog::{validate, Catalog, QuizSummary};
pub use error::{CatalogError, CatalogViolation, QuizError};
pub use model::{AnswerOption, OptionId, Question, QuestionId, Quiz, QuizId};
pub use result::{percentage, score_answers, Grade, QuizResult};
pub use session::{QuestionView, QuizHeader, QuizPhase, QuizSession, SessionSnapshot};
