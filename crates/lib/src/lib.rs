//! # WordTrail Core
//!
//! Domain logic for the vocabulary-learning service: the SQLite storage
//! provider, topic/vocabulary/quiz content access, quiz scoring, per-user
//! progress aggregation, and the sample-data seeding step run at startup.

pub mod content;
pub mod errors;
pub mod progress;
pub mod providers;
pub mod quiz;
pub mod seed;
pub mod types;

pub use errors::StoreError;
pub use providers::db::sqlite::SqliteProvider;
