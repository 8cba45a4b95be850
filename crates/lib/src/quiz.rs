//! # Quiz Scorer
//!
//! Scoring is a pure computation over the submitted answers; persistence of
//! the result row is a single insert. Correctness flags arrive from the
//! client and are recorded as-is.

use crate::{
    errors::StoreError,
    types::{AnswerRecord, QuizScore},
};
use turso::{params, Database};

/// Computes the score for a submission: `correct` answers out of `total`,
/// as a 0-100 percentage. An empty submission scores zero.
pub fn score_answers(answers: &[AnswerRecord]) -> QuizScore {
    let total = answers.len() as u32;
    let correct = answers.iter().filter(|a| a.is_correct).count() as u32;
    let score = if total > 0 {
        f64::from(correct) * 100.0 / f64::from(total)
    } else {
        0.0
    };
    QuizScore {
        score,
        correct,
        total,
    }
}

/// Scores a submission and appends one row to `results`.
///
/// The stored row carries the first answer's `quiz_id`; a submission
/// spanning several questions is recorded under that single id. An empty
/// submission returns the zero score without writing a row, since there is
/// no quiz id to record.
pub async fn submit_result(
    db: &Database,
    user_id: i64,
    answers: &[AnswerRecord],
) -> Result<QuizScore, StoreError> {
    let outcome = score_answers(answers);

    let Some(first) = answers.first() else {
        return Ok(outcome);
    };

    let conn = db
        .connect()
        .map_err(|e| StoreError::Connection(e.to_string()))?;
    conn.execute(
        "INSERT INTO results (user_id, quiz_id, score, total_questions) VALUES (?, ?, ?, ?)",
        params![user_id, first.quiz_id, outcome.score, outcome.total as i64],
    )
    .await?;

    tracing::debug!(user_id, score = outcome.score, total = outcome.total, "Recorded quiz result");
    Ok(outcome)
}
