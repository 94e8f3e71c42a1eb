//! Quiz Walkthrough
//!
//! Lists the built-in quizzes, plays one with a mix of right and wrong
//! answers, shows a refused operation, then restarts and exits.
//!
//! Run with: RUST_LOG=dugout=debug cargo run --example quiz_walkthrough

use dugout::quiz::{QuizError, QuizId, QuizSession};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QuizError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    println!("=== Baseball Quizzes ===\n");

    let mut session = QuizSession::with_builtin_catalog();
    for summary in session.catalog().listing() {
        println!(
            "[{}] {} - {} ({})",
            summary.id,
            summary.title,
            summary.description,
            summary.question_count_label()
        );
    }

    let mut snapshot = session.select_quiz(QuizId(1))?;

    if let Err(err) = session.advance() {
        println!("\nRefused: {err}");
    }

    // Answer the first option that is wrong on the second question, right elsewhere.
    while let Some(question) = snapshot.question.clone() {
        println!("\n{}", question.progress());
        println!("{}", question.prompt);
        for option in &question.options {
            println!("  {}. {}", option.id, option.text);
        }

        let current = session
            .current_question()
            .map(|q| (q.correct_option_id, q.options.iter().map(|o| o.id).collect::<Vec<_>>()));
        let Some((correct, options)) = current else {
            break;
        };
        let choice = if question.number == 2 {
            options.into_iter().find(|id| *id != correct).unwrap_or(correct)
        } else {
            correct
        };

        session.select_answer(question.id, choice)?;
        println!("  -> picked {choice}, {}", question.advance_label());
        snapshot = session.advance()?;
    }

    if let Some(result) = &snapshot.result {
        println!("\nQuiz Complete!");
        println!("{}", result.summary());
        println!("{}%", result.percentage);
        println!("{}", result.message());
    }

    session.restart()?;
    session.exit()?;

    if let Some(elapsed) = session.history().duration() {
        println!("\nSession lasted {elapsed:?}");
    }
    println!("Phases: {:?}", session.history().get_path());

    println!("\n=== Example Complete ===");
    Ok(())
}
