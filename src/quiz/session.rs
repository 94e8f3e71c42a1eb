//! The quiz session state machine.
//!
//! ```text
//! Browsing --select_quiz--> InProgress --advance (last)--> Completed
//!    ^                        |    ^                          |
//!    +--------- exit ---------+    +-------- restart ---------+
//! ```
//!
//! Every operation either applies completely and returns the new
//! [`SessionSnapshot`], or returns a [`QuizError`] and leaves the session
//! exactly as it was.

use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::quiz::catalog::Catalog;
use crate::quiz::error::QuizError;
use crate::quiz::model::{AnswerOption, OptionId, Question, QuestionId, Quiz, QuizId};
use crate::quiz::result::{score_answers, QuizResult};
use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

state_enum! {
    /// Where a session is in the quiz flow.
    pub enum QuizPhase {
        /// No active quiz; the quiz list is showing.
        Browsing,
        /// Answering questions.
        InProgress,
        /// Last question advanced; the result is available.
        Completed,
    }
    final: [Completed]
}

fn answering() -> Guard<QuizPhase> {
    Guard::new("a quiz in progress", |p: &QuizPhase| {
        matches!(p, QuizPhase::InProgress)
    })
}

fn with_active_quiz() -> Guard<QuizPhase> {
    Guard::new("an active quiz", |p: &QuizPhase| {
        matches!(p, QuizPhase::InProgress | QuizPhase::Completed)
    })
}

/// Header of the active quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizHeader {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub question_count: usize,
}

/// The question currently on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: QuestionId,
    /// 1-based position of the question.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub selected_option: Option<OptionId>,
    pub can_advance: bool,
}

impl QuestionView {
    /// "Question {number} of {total}"
    pub fn progress(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    /// Label of the advance control: "Next Question" or, on the last question, "Finish Quiz".
    pub fn advance_label(&self) -> &'static str {
        if self.number < self.total {
            "Next Question"
        } else {
            "Finish Quiz"
        }
    }
}

/// Everything a view needs to render the session after an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: QuizPhase,
    pub quiz: Option<QuizHeader>,
    pub question: Option<QuestionView>,
    pub answered: usize,
    pub result: Option<QuizResult>,
}

/// One user's pass through the quiz list and the quizzes in it.
#[derive(Clone, Debug)]
pub struct QuizSession {
    catalog: Arc<Catalog>,
    active_quiz: Option<Arc<Quiz>>,
    current_question_index: usize,
    selected_answers: BTreeMap<QuestionId, OptionId>,
    is_complete: bool,
    score: usize,
    history: StateHistory<QuizPhase>,
}

impl QuizSession {
    /// A session browsing the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            active_quiz: None,
            current_question_index: 0,
            selected_answers: BTreeMap::new(),
            is_complete: false,
            score: 0,
            history: StateHistory::new(),
        }
    }

    /// A session over the built-in baseball quizzes.
    pub fn with_builtin_catalog() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn phase(&self) -> QuizPhase {
        match (&self.active_quiz, self.is_complete) {
            (None, _) => QuizPhase::Browsing,
            (Some(_), false) => QuizPhase::InProgress,
            (Some(_), true) => QuizPhase::Completed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.active_quiz.as_deref()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active_quiz
            .as_deref()
            .and_then(|q| q.question_at(self.current_question_index))
    }

    pub fn selected_answers(&self) -> &BTreeMap<QuestionId, OptionId> {
        &self.selected_answers
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// The score, once the quiz is completed.
    pub fn score(&self) -> Option<usize> {
        self.is_complete.then_some(self.score)
    }

    /// Phase changes of the current run, or of the last one after `exit`.
    ///
    /// Each `select_quiz` or `restart` starts a fresh history.
    pub fn history(&self) -> &StateHistory<QuizPhase> {
        &self.history
    }

    /// Start a quiz from the catalog, discarding any run in progress.
    pub fn select_quiz(&mut self, quiz_id: QuizId) -> Result<SessionSnapshot, QuizError> {
        let Some(quiz) = self.catalog.get_quiz_by_id(quiz_id) else {
            warn!(%quiz_id, "quiz selection refused: unknown id");
            return Err(QuizError::NotFound { quiz_id });
        };

        let from = self.phase();
        debug!(%quiz_id, title = %quiz.title, "quiz selected");
        self.active_quiz = Some(quiz);
        self.reset_progress();
        self.begin_run(from, "select_quiz");
        Ok(self.snapshot())
    }

    /// Record an answer for the current question, replacing any earlier one.
    pub fn select_answer(
        &mut self,
        question_id: QuestionId,
        option_id: OptionId,
    ) -> Result<SessionSnapshot, QuizError> {
        const OPERATION: &str = "select_answer";
        self.require(OPERATION, &answering())?;

        let question = self.current_question().ok_or_else(|| {
            self.refuse(OPERATION, "a question at the current position".to_string())
        })?;
        if question.id != question_id {
            return Err(self.refuse(
                OPERATION,
                format!(
                    "the current question ({}), not question {question_id}",
                    question.id
                ),
            ));
        }
        if question.option(option_id).is_none() {
            return Err(self.refuse(
                OPERATION,
                format!("an option of question {question_id}, not option {option_id}"),
            ));
        }

        debug!(%question_id, %option_id, "answer selected");
        self.selected_answers.insert(question_id, option_id);
        Ok(self.snapshot())
    }

    /// Move to the next question, or score the quiz after the last one.
    pub fn advance(&mut self) -> Result<SessionSnapshot, QuizError> {
        const OPERATION: &str = "advance";
        self.require(OPERATION, &answering())?;

        let Some(quiz) = self.active_quiz.clone() else {
            return Err(self.refuse(OPERATION, "an active quiz".to_string()));
        };
        let question = quiz
            .question_at(self.current_question_index)
            .ok_or_else(|| self.refuse(OPERATION, "a question at the current position".to_string()))?;
        if !self.selected_answers.contains_key(&question.id) {
            return Err(self.refuse(
                OPERATION,
                format!("an answer to the current question ({})", question.id),
            ));
        }

        if quiz.last_index() == Some(self.current_question_index) {
            self.score = score_answers(&quiz, &self.selected_answers);
            self.is_complete = true;
            debug!(score = self.score, total = quiz.question_count(), "quiz completed");
            self.record(QuizPhase::InProgress, OPERATION);
        } else {
            self.current_question_index += 1;
            debug!(index = self.current_question_index, "advanced to next question");
        }
        Ok(self.snapshot())
    }

    /// Start the active quiz over from its first question.
    pub fn restart(&mut self) -> Result<SessionSnapshot, QuizError> {
        const OPERATION: &str = "restart";
        self.require(OPERATION, &with_active_quiz())?;

        let from = self.phase();
        self.reset_progress();
        debug!("quiz restarted");
        self.begin_run(from, OPERATION);
        Ok(self.snapshot())
    }

    /// Leave the active quiz and return to the quiz list.
    pub fn exit(&mut self) -> Result<SessionSnapshot, QuizError> {
        const OPERATION: &str = "exit";
        self.require(OPERATION, &with_active_quiz())?;

        let from = self.phase();
        self.active_quiz = None;
        self.reset_progress();
        debug!("returned to quiz list");
        self.record(from, OPERATION);
        Ok(self.snapshot())
    }

    /// The view-model for the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let phase = self.phase();
        let quiz = self.active_quiz.as_deref();

        let question = match phase {
            QuizPhase::InProgress => self.current_question().map(|q| {
                let selected_option = self.selected_answers.get(&q.id).copied();
                QuestionView {
                    id: q.id,
                    number: self.current_question_index + 1,
                    total: quiz.map_or(0, Quiz::question_count),
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                    selected_option,
                    can_advance: selected_option.is_some(),
                }
            }),
            _ => None,
        };

        let result = match (phase, quiz) {
            (QuizPhase::Completed, Some(q)) => {
                Some(QuizResult::new(self.score, q.question_count()))
            }
            _ => None,
        };

        SessionSnapshot {
            phase,
            quiz: quiz.map(|q| QuizHeader {
                id: q.id,
                title: q.title.clone(),
                description: q.description.clone(),
                question_count: q.question_count(),
            }),
            question,
            answered: self.selected_answers.len(),
            result,
        }
    }

    fn reset_progress(&mut self) {
        self.current_question_index = 0;
        self.selected_answers.clear();
        self.is_complete = false;
        self.score = 0;
    }

    fn require(&self, operation: &'static str, guard: &Guard<QuizPhase>) -> Result<(), QuizError> {
        let phase = self.phase();
        if guard.check(&phase) {
            return Ok(());
        }
        Err(self.refuse(
            operation,
            format!("{}, but the session is {}", guard.requirement(), phase.name()),
        ))
    }

    fn refuse(&self, operation: &'static str, requirement: String) -> QuizError {
        warn!(operation, %requirement, phase = self.phase().name(), "quiz operation refused");
        QuizError::PreconditionNotMet {
            operation,
            requirement,
        }
    }

    /// Start the history of a new run. Recorded even when the phase is unchanged,
    /// so a quiz switched mid-run still shows up.
    fn begin_run(&mut self, from: QuizPhase, event: &str) {
        let to = self.phase();
        self.history = StateHistory::new().record(StateTransition::now(from, to, event));
    }

    fn record(&mut self, from: QuizPhase, event: &str) {
        let to = self.phase();
        if from != to {
            self.history = self.history.record(StateTransition::now(from, to, event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::result::Grade;

    fn scenario_catalog() -> Arc<Catalog> {
        let question = |id: u32, correct: u32| Question {
            id: QuestionId(id),
            prompt: format!("Question {id}"),
            options: (1..=3)
                .map(|o| AnswerOption {
                    id: OptionId(o),
                    text: format!("Option {o}"),
                })
                .collect(),
            correct_option_id: OptionId(correct),
        };
        let catalog = Catalog::new(vec![Quiz {
            id: QuizId(1),
            title: "Scenario".to_string(),
            description: "Two questions".to_string(),
            questions: vec![question(1, 2), question(2, 3)],
        }])
        .unwrap();
        Arc::new(catalog)
    }

    fn started() -> QuizSession {
        let mut session = QuizSession::new(scenario_catalog());
        session.select_quiz(QuizId(1)).unwrap();
        session
    }

    #[test]
    fn new_session_is_browsing() {
        let session = QuizSession::new(scenario_catalog());
        let snapshot = session.snapshot();

        assert_eq!(snapshot.phase, QuizPhase::Browsing);
        assert!(snapshot.quiz.is_none());
        assert!(snapshot.question.is_none());
        assert!(snapshot.result.is_none());
    }

    #[test]
    fn select_quiz_starts_at_first_question() {
        let mut session = QuizSession::new(scenario_catalog());
        let snapshot = session.select_quiz(QuizId(1)).unwrap();

        assert_eq!(snapshot.phase, QuizPhase::InProgress);
        let question = snapshot.question.unwrap();
        assert_eq!(question.id, QuestionId(1));
        assert_eq!(question.progress(), "Question 1 of 2");
        assert_eq!(question.advance_label(), "Next Question");
        assert!(!question.can_advance);
    }

    #[test]
    fn select_unknown_quiz_is_not_found() {
        let mut session = QuizSession::new(scenario_catalog());
        let err = session.select_quiz(QuizId(99)).unwrap_err();

        assert_eq!(err, QuizError::NotFound { quiz_id: QuizId(99) });
        assert_eq!(session.phase(), QuizPhase::Browsing);
    }

    #[test]
    fn scenario_scores_one_of_two() {
        let mut session = started();

        session.select_answer(QuestionId(1), OptionId(2)).unwrap();
        let snapshot = session.advance().unwrap();
        assert_eq!(session.current_question_index(), 1);
        assert_eq!(snapshot.question.unwrap().advance_label(), "Finish Quiz");

        session.select_answer(QuestionId(2), OptionId(1)).unwrap();
        let snapshot = session.advance().unwrap();

        assert_eq!(snapshot.phase, QuizPhase::Completed);
        assert_eq!(session.score(), Some(1));
        let result = snapshot.result.unwrap();
        assert_eq!(result.percentage, 50);
        assert_eq!(result.grade, Grade::Decent);
    }

    #[test]
    fn reselecting_overwrites_answer() {
        let mut session = started();

        session.select_answer(QuestionId(1), OptionId(1)).unwrap();
        let snapshot = session.select_answer(QuestionId(1), OptionId(2)).unwrap();
        assert_eq!(snapshot.question.unwrap().selected_option, Some(OptionId(2)));

        session.advance().unwrap();
        session.select_answer(QuestionId(2), OptionId(3)).unwrap();
        session.advance().unwrap();
        assert_eq!(session.score(), Some(2));
    }

    #[test]
    fn advance_without_answer_is_refused() {
        let mut session = started();
        let err = session.advance().unwrap_err();

        assert!(matches!(
            err,
            QuizError::PreconditionNotMet {
                operation: "advance",
                ..
            }
        ));
        assert_eq!(session.current_question_index(), 0);
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn answer_for_other_question_is_refused() {
        let mut session = started();
        let err = session
            .select_answer(QuestionId(2), OptionId(3))
            .unwrap_err();

        assert!(matches!(err, QuizError::PreconditionNotMet { .. }));
        assert!(session.selected_answers().is_empty());
    }

    #[test]
    fn answer_with_unknown_option_is_refused() {
        let mut session = started();
        assert!(session.select_answer(QuestionId(1), OptionId(9)).is_err());
        assert!(session.selected_answers().is_empty());
    }

    #[test]
    fn operations_refused_while_browsing() {
        let mut session = QuizSession::new(scenario_catalog());

        assert!(session.select_answer(QuestionId(1), OptionId(1)).is_err());
        assert!(session.advance().is_err());
        assert!(session.restart().is_err());
        assert!(session.exit().is_err());
        assert!(session.history().transitions().is_empty());
    }

    #[test]
    fn completed_quiz_refuses_answers_and_advance() {
        let mut session = started();
        session.select_answer(QuestionId(1), OptionId(2)).unwrap();
        session.advance().unwrap();
        session.select_answer(QuestionId(2), OptionId(3)).unwrap();
        session.advance().unwrap();

        assert!(session.select_answer(QuestionId(2), OptionId(1)).is_err());
        assert!(session.advance().is_err());
        assert_eq!(session.score(), Some(2));
    }

    #[test]
    fn restart_keeps_quiz_and_clears_progress() {
        let mut session = started();
        session.select_answer(QuestionId(1), OptionId(2)).unwrap();
        session.advance().unwrap();
        session.select_answer(QuestionId(2), OptionId(3)).unwrap();
        session.advance().unwrap();

        let snapshot = session.restart().unwrap();

        assert_eq!(snapshot.phase, QuizPhase::InProgress);
        assert_eq!(snapshot.quiz.map(|q| q.id), Some(QuizId(1)));
        assert!(session.selected_answers().is_empty());
        assert!(!session.is_complete());
        assert_eq!(session.score(), None);
        assert_eq!(session.current_question_index(), 0);
    }

    #[test]
    fn restart_in_progress_is_idempotent() {
        let mut session = started();
        session.select_answer(QuestionId(1), OptionId(2)).unwrap();

        let first = session.restart().unwrap();
        let second = session.restart().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn exit_returns_to_browsing() {
        let mut session = started();
        session.select_answer(QuestionId(1), OptionId(2)).unwrap();

        let snapshot = session.exit().unwrap();
        assert_eq!(snapshot.phase, QuizPhase::Browsing);
        assert!(session.active_quiz().is_none());
        assert!(session.selected_answers().is_empty());
    }

    fn finish(session: &mut QuizSession) {
        session.select_answer(QuestionId(1), OptionId(2)).unwrap();
        session.advance().unwrap();
        session.select_answer(QuestionId(2), OptionId(3)).unwrap();
        session.advance().unwrap();
    }

    fn events(session: &QuizSession) -> Vec<&str> {
        session
            .history()
            .transitions()
            .iter()
            .map(|t| t.event.as_str())
            .collect()
    }

    #[test]
    fn history_tracks_one_run() {
        let mut session = started();
        finish(&mut session);

        let path: Vec<QuizPhase> = session.history().get_path().into_iter().copied().collect();
        assert_eq!(
            path,
            vec![
                QuizPhase::Browsing,
                QuizPhase::InProgress,
                QuizPhase::Completed,
            ]
        );
        assert_eq!(events(&session), vec!["select_quiz", "advance"]);

        session.exit().unwrap();
        assert_eq!(events(&session), vec!["select_quiz", "advance", "exit"]);
    }

    #[test]
    fn history_restarts_with_each_run() {
        let mut session = started();
        finish(&mut session);
        session.exit().unwrap();

        session.select_quiz(QuizId(1)).unwrap();
        let history = session.history();
        assert_eq!(history.transitions().len(), 1);
        assert_eq!(history.transitions()[0].from, QuizPhase::Browsing);
        assert_eq!(history.transitions()[0].to, QuizPhase::InProgress);

        finish(&mut session);
        session.restart().unwrap();
        let history = session.history();
        assert_eq!(history.transitions().len(), 1);
        assert_eq!(history.transitions()[0].from, QuizPhase::Completed);
        assert_eq!(events(&session), vec!["restart"]);
    }

    #[test]
    fn history_records_mid_run_quiz_switch() {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(catalog);
        session.select_quiz(QuizId(1)).unwrap();
        session.select_answer(QuestionId(1), OptionId(2)).unwrap();
        session.advance().unwrap();

        session.select_quiz(QuizId(2)).unwrap();

        let history = session.history();
        assert_eq!(history.transitions().len(), 1);
        let switch = &history.transitions()[0];
        assert_eq!(switch.event, "select_quiz");
        assert_eq!(switch.from, QuizPhase::InProgress);
        assert_eq!(switch.to, QuizPhase::InProgress);
        assert_eq!(session.active_quiz().map(|q| q.id), Some(QuizId(2)));
    }

    #[test]
    fn restart_mid_run_starts_new_history() {
        let mut session = started();
        session.select_answer(QuestionId(1), OptionId(2)).unwrap();
        session.restart().unwrap();

        let history = session.history();
        assert_eq!(history.transitions().len(), 1);
        assert_eq!(history.transitions()[0].from, QuizPhase::InProgress);
    }

    #[test]
    fn snapshot_serializes_for_views() {
        let session = started();
        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["phase"], "InProgress");
        assert_eq!(json["question"]["number"], 1);
        assert_eq!(json["quiz"]["title"], "Scenario");
    }
}
