//! # WordTrail Client
//!
//! The learning-flow client: a typed API wrapper over the server's JSON
//! endpoints, an explicit session object, and the single-threaded view
//! controller driving the dashboard → vocabulary → quiz → results flow.

pub mod api;
pub mod controller;
pub mod session;

pub use api::{ApiClient, ClientError};
pub use controller::{AdvanceOutcome, Screen, ViewController};
pub use session::Session;
