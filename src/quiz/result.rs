//! Scoring and result classification.

use crate::quiz::model::{OptionId, QuestionId, Quiz};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count the questions whose recorded answer is the correct option.
///
/// Always a full pass over the quiz; unanswered questions never match.
pub fn score_answers(quiz: &Quiz, answers: &BTreeMap<QuestionId, OptionId>) -> usize {
    quiz.questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(|chosen| q.is_correct(*chosen)))
        .count()
}

/// `100 * score / total`, rounded to the nearest integer with halves rounding up.
///
/// Returns 0 for an empty quiz.
///
/// ```
/// use dugout::quiz::percentage;
///
/// assert_eq!(percentage(1, 2), 50);
/// assert_eq!(percentage(2, 3), 67);
/// assert_eq!(percentage(1, 8), 13);
/// ```
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Widened so `200 * score` cannot overflow.
    let score = score.min(total) as u128;
    let total = total as u128;
    u32::try_from((200 * score + total) / (2 * total)).unwrap_or(100)
}

/// Result band shown on the results screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Perfect,
    Great,
    Decent,
    NeedsPractice,
}

impl Grade {
    /// Classify a result. Perfect needs every answer right; the other bands
    /// use the rounded percentage (`>= 70` great, `>= 50` decent).
    pub fn classify(score: usize, total: usize) -> Self {
        if total > 0 && score >= total {
            return Self::Perfect;
        }
        match percentage(score, total) {
            70.. => Self::Great,
            50..=69 => Self::Decent,
            _ => Self::NeedsPractice,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! You're a baseball expert!",
            Self::Great => "Great job! You know your baseball!",
            Self::Decent => "Not bad! Keep learning!",
            Self::NeedsPractice => "Keep practicing! You'll get better!",
        }
    }
}

/// Final tally of a completed quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            percentage: percentage(score, total),
            grade: Grade::classify(score, total),
        }
    }

    /// "You scored {score} out of {total}"
    pub fn summary(&self) -> String {
        format!("You scored {} out of {}", self.score, self.total)
    }

    pub fn message(&self) -> &'static str {
        self.grade.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::{AnswerOption, Question, QuizId};

    fn two_question_quiz() -> Quiz {
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
        Quiz {
            id: QuizId(1),
            title: "Sample".to_string(),
            description: String::new(),
            questions: vec![question(1, 2), question(2, 3)],
        }
    }

    #[test]
    fn score_counts_correct_answers_only() {
        let quiz = two_question_quiz();
        let mut answers = BTreeMap::new();
        answers.insert(QuestionId(1), OptionId(2));
        answers.insert(QuestionId(2), OptionId(1));

        assert_eq!(score_answers(&quiz, &answers), 1);
    }

    #[test]
    fn unanswered_questions_never_match() {
        let quiz = two_question_quiz();
        assert_eq!(score_answers(&quiz, &BTreeMap::new()), 0);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let quiz = two_question_quiz();
        let mut answers = BTreeMap::new();
        answers.insert(QuestionId(9), OptionId(2));
        answers.insert(QuestionId(2), OptionId(3));

        assert_eq!(score_answers(&quiz, &answers), 1);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(139, 200), 70);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::classify(3, 3), Grade::Perfect);
        assert_eq!(Grade::classify(7, 10), Grade::Great);
        assert_eq!(Grade::classify(2, 3), Grade::Decent);
        assert_eq!(Grade::classify(1, 2), Grade::Decent);
        assert_eq!(Grade::classify(1, 3), Grade::NeedsPractice);
        assert_eq!(Grade::classify(0, 2), Grade::NeedsPractice);
    }

    #[test]
    fn rounding_to_hundred_is_not_perfect() {
        assert_eq!(percentage(199, 200), 100);
        assert_eq!(Grade::classify(199, 200), Grade::Great);
    }

    #[test]
    fn rounding_decides_band_edges() {
        // 69.5% rounds to 70.
        assert_eq!(Grade::classify(139, 200), Grade::Great);
        // 49.5% rounds to 50.
        assert_eq!(Grade::classify(99, 200), Grade::Decent);
    }

    #[test]
    fn large_quizzes_do_not_truncate() {
        let total = usize::MAX;
        assert_eq!(percentage(total / 2, total), 50);
        assert_eq!(percentage(total, total), 100);
        assert_eq!(Grade::classify(total - 1, total), Grade::Great);

        let result = QuizResult::new(total, total);
        assert_eq!(result.score, usize::MAX);
        assert_eq!(result.grade, Grade::Perfect);
    }

    #[test]
    fn result_summary_and_message() {
        let result = QuizResult::new(1, 2);
        assert_eq!(result.percentage, 50);
        assert_eq!(result.summary(), "You scored 1 out of 2");
        assert_eq!(result.message(), "Not bad! Keep learning!");
        assert_eq!(QuizResult::new(2, 2).message(), "Perfect! You're a baseball expert!");
    }
}
