//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the
//! `wordtrail-server`. The handlers are split into logical sub-modules based
//! on their functionality (auth, content, quiz, progress).

pub mod auth_handlers;
pub mod content_handlers;
pub mod general;
pub mod progress_handlers;
pub mod quiz_handlers;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use auth_handlers::*;
pub use content_handlers::*;
pub use general::*;
pub use progress_handlers::*;
pub use quiz_handlers::*;
