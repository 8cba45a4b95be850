//! # Progress Aggregator
//!
//! Per-user learning statistics, recomputed from the stored rows on every
//! call. There is no caching layer, so the staleness window is zero by
//! construction.

use crate::{errors::StoreError, types::ProgressSummary};
use turso::{params, Database, Value as TursoValue};

/// Rounds to two decimal places for the wire format.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn numeric_or_zero(value: TursoValue) -> f64 {
    match value {
        TursoValue::Real(f) => f,
        TursoValue::Integer(i) => i as f64,
        _ => 0.0,
    }
}

/// Returns `{learned_words, average_score, quizzes_taken}` for one user.
///
/// Each aggregate is computed independently: `learned_words` over the
/// `progress` table, the score average and quiz count over `results`. A user
/// with no rows in either table gets all zeros.
pub async fn progress_for_user(
    db: &Database,
    user_id: i64,
) -> Result<ProgressSummary, StoreError> {
    let conn = db
        .connect()
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    let mut rows = conn
        .query(
            "SELECT COUNT(DISTINCT vocab_id) FROM progress WHERE user_id = ?",
            params![user_id],
        )
        .await?;
    let learned_words = match rows.next().await? {
        Some(row) => row.get(0)?,
        None => 0,
    };

    let mut rows = conn
        .query(
            "SELECT AVG(score), COUNT(id) FROM results WHERE user_id = ?",
            params![user_id],
        )
        .await?;
    let (average_score, quizzes_taken) = match rows.next().await? {
        Some(row) => {
            let avg = numeric_or_zero(row.get_value(0)?);
            let count: i64 = row.get(1)?;
            (round2(avg), count)
        }
        None => (0.0, 0),
    };

    Ok(ProgressSummary {
        learned_words,
        average_score,
        quizzes_taken,
    })
}
