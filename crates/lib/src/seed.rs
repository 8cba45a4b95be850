//! # Sample Data Seeding
//!
//! An explicit, idempotent seeding step invoked once by server startup.
//! Seeding is keyed on the `topics` table: when any topic exists the whole
//! step is a no-op, so restarts never duplicate content.

use crate::errors::StoreError;
use turso::{params, Database};

const SEED_TOPICS: &[(&str, &str, &str)] = &[
    ("Family", "A1", "Basic family vocabulary"),
    ("Travel", "A2", "Travel-related words"),
    ("Business", "B1", "Business English vocabulary"),
    ("Technology", "B2", "Technology terms"),
];

const SEED_VOCABULARIES: &[(&str, &str, &str, &str, i64)] = &[
    ("father", "bố", "My father is a teacher.", "/ˈfɑːðər/", 1),
    ("mother", "mẹ", "My mother cooks delicious food.", "/ˈmʌðər/", 1),
    ("brother", "anh/em trai", "I have one brother.", "/ˈbrʌðər/", 1),
    ("sister", "chị/em gái", "My sister is younger than me.", "/ˈsɪstər/", 1),
    ("airport", "sân bay", "We arrived at the airport early.", "/ˈeərpɔːrt/", 2),
    ("hotel", "khách sạn", "The hotel was very comfortable.", "/hoʊˈtel/", 2),
    ("passport", "hộ chiếu", "Don't forget your passport.", "/ˈpæspɔːrt/", 2),
    ("meeting", "cuộc họp", "We have a meeting at 3 PM.", "/ˈmiːtɪŋ/", 3),
    ("computer", "máy tính", "I use my computer every day.", "/kəmˈpjuːtər/", 4),
];

const SEED_QUIZZES: &[(i64, &str, &str, &str, &str, &str, &str)] = &[
    (1, "What does \"father\" mean?", "bố", "mẹ", "anh trai", "chị gái", "A"),
    (1, "What does \"sister\" mean?", "bố", "mẹ", "anh trai", "chị/em gái", "D"),
    (2, "What does \"airport\" mean?", "khách sạn", "sân bay", "hộ chiếu", "máy bay", "B"),
    (3, "What does \"meeting\" mean?", "cuộc họp", "văn phòng", "công ty", "nhân viên", "A"),
];

/// Inserts the sample topics, vocabulary, quiz questions, and the admin
/// account. Returns `true` when seeding ran, `false` when data was already
/// present.
pub async fn seed_sample_data(db: &Database) -> Result<bool, StoreError> {
    let conn = db
        .connect()
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    let mut rows = conn.query("SELECT COUNT(*) FROM topics", ()).await?;
    let existing: i64 = match rows.next().await? {
        Some(row) => row.get(0)?,
        None => 0,
    };
    if existing > 0 {
        return Ok(false);
    }

    for (name, level, description) in SEED_TOPICS {
        conn.execute(
            "INSERT INTO topics (name, level, description) VALUES (?, ?, ?)",
            params![*name, *level, *description],
        )
        .await?;
    }

    for (word, meaning, example, pronunciation, topic_id) in SEED_VOCABULARIES {
        conn.execute(
            "INSERT INTO vocabularies (word, meaning, example, pronunciation, topic_id)
             VALUES (?, ?, ?, ?, ?)",
            params![*word, *meaning, *example, *pronunciation, *topic_id],
        )
        .await?;
    }

    for (topic_id, question, a, b, c, d, correct) in SEED_QUIZZES {
        conn.execute(
            "INSERT INTO quizzes (topic_id, question, option_a, option_b, option_c, option_d, correct_answer)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![*topic_id, *question, *a, *b, *c, *d, *correct],
        )
        .await?;
    }

    // The admin account goes through the same hashing path as registration.
    let admin_password = wordtrail_access::hash_password("admin123")
        .map_err(|e| StoreError::OperationFailed(e.to_string()))?;
    conn.execute(
        "INSERT INTO users (username, email, password, role) VALUES (?, ?, ?, ?)",
        params!["admin", "admin@example.com", admin_password, "admin"],
    )
    .await?;

    tracing::info!("Seeded sample topics, vocabularies, quizzes, and the admin user.");
    Ok(true)
}
