//! Integration tests for the SQLite provider, seeding, content access,
//! quiz persistence, and progress aggregation, all against an in-memory
//! database.

use anyhow::Result;
use wordtrail::types::AnswerRecord;
use wordtrail::{content, progress, quiz, seed, SqliteProvider};

async fn seeded_provider() -> Result<SqliteProvider> {
    let provider = SqliteProvider::new(":memory:").await?;
    provider.initialize_schema().await?;
    seed::seed_sample_data(&provider.db).await?;
    Ok(provider)
}

fn answer(quiz_id: i64, selected: &str, correct: &str) -> AnswerRecord {
    AnswerRecord {
        quiz_id,
        selected_answer: selected.to_string(),
        correct_answer: correct.to_string(),
        is_correct: selected == correct,
    }
}

#[tokio::test]
async fn seeding_is_idempotent() -> Result<()> {
    let provider = SqliteProvider::new(":memory:").await?;
    provider.initialize_schema().await?;

    assert!(seed::seed_sample_data(&provider.db).await?);
    assert!(!seed::seed_sample_data(&provider.db).await?);

    let topics = content::list_topics(&provider.db).await?;
    assert_eq!(topics.len(), 4);
    Ok(())
}

#[tokio::test]
async fn topics_are_listed_in_insertion_order() -> Result<()> {
    let provider = seeded_provider().await?;
    let topics = content::list_topics(&provider.db).await?;

    let names: Vec<_> = topics.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Family", "Travel", "Business", "Technology"]);
    assert_eq!(topics[0].level, "A1");
    assert_eq!(
        topics[0].description.as_deref(),
        Some("Basic family vocabulary")
    );
    Ok(())
}

#[tokio::test]
async fn get_topic_finds_existing_and_misses_unknown() -> Result<()> {
    let provider = seeded_provider().await?;

    let topic = content::get_topic(&provider.db, 2).await?;
    assert_eq!(topic.map(|t| t.name), Some("Travel".to_string()));

    assert!(content::get_topic(&provider.db, 999).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn vocabularies_are_scoped_to_their_topic() -> Result<()> {
    let provider = seeded_provider().await?;

    let family = content::list_vocabularies(&provider.db, 1).await?;
    assert_eq!(family.len(), 4);
    assert!(family.iter().all(|v| v.topic_id == 1));
    assert_eq!(family[0].word, "father");
    assert_eq!(family[0].meaning, "bố");
    assert_eq!(family[0].pronunciation.as_deref(), Some("/ˈfɑːðər/"));
    Ok(())
}

#[tokio::test]
async fn unknown_topic_yields_empty_vocabulary_not_an_error() -> Result<()> {
    let provider = seeded_provider().await?;
    let vocab = content::list_vocabularies(&provider.db, 999).await?;
    assert!(vocab.is_empty());
    Ok(())
}

#[tokio::test]
async fn quiz_rows_are_reshaped_into_labeled_options() -> Result<()> {
    let provider = seeded_provider().await?;

    let questions = content::list_quiz(&provider.db, 1).await?;
    assert_eq!(questions.len(), 2);

    let first = &questions[0];
    assert_eq!(first.question, "What does \"father\" mean?");
    assert_eq!(first.options.a, "bố");
    assert_eq!(first.options.d, "chị gái");
    assert_eq!(first.correct_answer, "A");
    Ok(())
}

#[tokio::test]
async fn submit_records_one_result_row_under_first_quiz_id() -> Result<()> {
    let provider = seeded_provider().await?;

    let answers = vec![
        answer(1, "A", "A"),
        answer(2, "D", "D"),
        answer(3, "A", "B"),
    ];
    let score = quiz::submit_result(&provider.db, 7, &answers).await?;
    assert_eq!(score.correct, 2);
    assert_eq!(score.total, 3);

    let conn = provider.db.connect()?;
    let mut rows = conn
        .query(
            "SELECT quiz_id, total_questions FROM results WHERE user_id = 7",
            (),
        )
        .await?;
    let row = rows.next().await?.expect("result row should exist");
    let quiz_id: i64 = row.get(0)?;
    let total: i64 = row.get(1)?;
    assert_eq!(quiz_id, 1);
    assert_eq!(total, 3);
    assert!(rows.next().await?.is_none(), "exactly one row per submission");
    Ok(())
}

#[tokio::test]
async fn empty_submission_scores_zero_and_writes_nothing() -> Result<()> {
    let provider = seeded_provider().await?;

    let score = quiz::submit_result(&provider.db, 7, &[]).await?;
    assert_eq!(score.score, 0.0);
    assert_eq!(score.correct, 0);
    assert_eq!(score.total, 0);

    let conn = provider.db.connect()?;
    let mut rows = conn
        .query("SELECT COUNT(*) FROM results WHERE user_id = 7", ())
        .await?;
    let row = rows.next().await?.expect("count row");
    let count: i64 = row.get(0)?;
    assert_eq!(count, 0);
    Ok(())
}

#[tokio::test]
async fn progress_is_all_zeros_for_a_fresh_user() -> Result<()> {
    let provider = seeded_provider().await?;

    let summary = progress::progress_for_user(&provider.db, 42).await?;
    assert_eq!(summary.learned_words, 0);
    assert_eq!(summary.average_score, 0.0);
    assert_eq!(summary.quizzes_taken, 0);
    Ok(())
}

#[tokio::test]
async fn progress_averages_scores_across_submissions() -> Result<()> {
    let provider = seeded_provider().await?;

    quiz::submit_result(
        &provider.db,
        5,
        &[
            answer(1, "A", "A"),
            answer(2, "D", "D"),
            answer(3, "B", "B"),
            answer(4, "A", "A"),
            answer(1, "B", "A"),
        ],
    )
    .await?;
    quiz::submit_result(&provider.db, 5, &[answer(1, "A", "A"), answer(2, "D", "D")]).await?;

    // 80 and 100 average to exactly 90.00.
    let summary = progress::progress_for_user(&provider.db, 5).await?;
    assert_eq!(summary.average_score, 90.0);
    assert_eq!(summary.quizzes_taken, 2);
    assert_eq!(summary.learned_words, 0);
    Ok(())
}

#[tokio::test]
async fn learned_words_counts_distinct_vocabulary() -> Result<()> {
    let provider = seeded_provider().await?;
    provider
        .initialize_with_data(
            "INSERT INTO progress (user_id, vocab_id, status) VALUES (5, 1, 'learned');
             INSERT INTO progress (user_id, vocab_id, status) VALUES (5, 1, 'learned');
             INSERT INTO progress (user_id, vocab_id, status) VALUES (5, 2, 'learned');
             INSERT INTO progress (user_id, vocab_id, status) VALUES (6, 3, 'learned');",
        )
        .await?;

    let summary = progress::progress_for_user(&provider.db, 5).await?;
    assert_eq!(summary.learned_words, 2, "duplicates and other users excluded");
    Ok(())
}
