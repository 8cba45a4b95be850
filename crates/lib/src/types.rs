//! Shared wire types for the learning domain. These structs are serialized
//! directly on the HTTP boundary, so field names match the JSON contract.

use serde::{Deserialize, Serialize};

/// A study topic, tagged with a CEFR level such as "A1" or "B2".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub description: Option<String>,
}

/// A single vocabulary entry belonging to a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub id: i64,
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub pronunciation: Option<String>,
    pub topic_id: i64,
}

/// The four answer options of a multiple-choice question, keyed by label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

/// A quiz question reshaped for the client: options grouped under their
/// labels instead of the flat `option_a..option_d` storage columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestionView {
    pub id: i64,
    pub topic_id: i64,
    pub question: String,
    pub options: QuizOptions,
    pub correct_answer: String,
}

/// One finalized answer as submitted by the client.
///
/// `is_correct` is asserted by the client; the server records it without
/// re-checking against the stored question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub quiz_id: i64,
    pub selected_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// The outcome of scoring a quiz submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
    pub score: f64,
    pub correct: u32,
    pub total: u32,
}

/// Aggregate learning statistics for one user, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub learned_words: i64,
    pub average_score: f64,
    pub quizzes_taken: i64,
}
