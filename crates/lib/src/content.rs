//! # Content Access
//!
//! Read-only queries over the seeded topic, vocabulary, and quiz tables.
//! Unknown topic ids yield empty sequences rather than a distinct not-found
//! signal, matching the service's wire contract.

use crate::{
    errors::StoreError,
    types::{QuizOptions, QuizQuestionView, Topic, Vocabulary},
};
use turso::{params, Database, Row, Value as TursoValue};

fn connect(db: &Database) -> Result<turso::Connection, StoreError> {
    db.connect()
        .map_err(|e| StoreError::Connection(e.to_string()))
}

/// Reads a nullable TEXT column.
fn optional_text(value: TursoValue) -> Option<String> {
    match value {
        TursoValue::Text(s) => Some(s),
        _ => None,
    }
}

impl TryFrom<&Row> for Topic {
    type Error = StoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Topic {
            id: row.get(0)?,
            name: row.get(1)?,
            level: row.get(2)?,
            description: optional_text(row.get_value(3)?),
        })
    }
}

impl TryFrom<&Row> for Vocabulary {
    type Error = StoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Vocabulary {
            id: row.get(0)?,
            word: row.get(1)?,
            meaning: row.get(2)?,
            example: optional_text(row.get_value(3)?),
            pronunciation: optional_text(row.get_value(4)?),
            topic_id: row.get(5)?,
        })
    }
}

impl TryFrom<&Row> for QuizQuestionView {
    type Error = StoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(QuizQuestionView {
            id: row.get(0)?,
            topic_id: row.get(1)?,
            question: row.get(2)?,
            options: QuizOptions {
                a: row.get(3)?,
                b: row.get(4)?,
                c: row.get(5)?,
                d: row.get(6)?,
            },
            correct_answer: row.get(7)?,
        })
    }
}

/// Returns all topics in insertion order.
pub async fn list_topics(db: &Database) -> Result<Vec<Topic>, StoreError> {
    let conn = connect(db)?;
    let mut rows = conn
        .query("SELECT id, name, level, description FROM topics", ())
        .await?;

    let mut topics = Vec::new();
    while let Some(row) = rows.next().await? {
        topics.push(Topic::try_from(&row)?);
    }
    Ok(topics)
}

/// Looks up a single topic by id.
pub async fn get_topic(db: &Database, topic_id: i64) -> Result<Option<Topic>, StoreError> {
    let conn = connect(db)?;
    let mut rows = conn
        .query(
            "SELECT id, name, level, description FROM topics WHERE id = ?",
            params![topic_id],
        )
        .await?;

    match rows.next().await? {
        Some(row) => Ok(Some(Topic::try_from(&row)?)),
        None => Ok(None),
    }
}

/// Returns all vocabulary entries for a topic; empty when the topic has no
/// entries or does not exist.
pub async fn list_vocabularies(
    db: &Database,
    topic_id: i64,
) -> Result<Vec<Vocabulary>, StoreError> {
    let conn = connect(db)?;
    let mut rows = conn
        .query(
            "SELECT id, word, meaning, example, pronunciation, topic_id
             FROM vocabularies WHERE topic_id = ?",
            params![topic_id],
        )
        .await?;

    let mut vocabularies = Vec::new();
    while let Some(row) = rows.next().await? {
        vocabularies.push(Vocabulary::try_from(&row)?);
    }
    Ok(vocabularies)
}

/// Returns a topic's quiz questions, each reshaped so the four option
/// columns are grouped under their `A`..`D` labels.
pub async fn list_quiz(db: &Database, topic_id: i64) -> Result<Vec<QuizQuestionView>, StoreError> {
    let conn = connect(db)?;
    let mut rows = conn
        .query(
            "SELECT id, topic_id, question, option_a, option_b, option_c, option_d, correct_answer
             FROM quizzes WHERE topic_id = ?",
            params![topic_id],
        )
        .await?;

    let mut questions = Vec::new();
    while let Some(row) = rows.next().await? {
        questions.push(QuizQuestionView::try_from(&row)?);
    }
    Ok(questions)
}
