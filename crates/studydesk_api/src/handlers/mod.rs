//! Route handlers.
//!
//! Successful responses are JSON objects carrying `"success": true` next to
//! the payload; failures go through `ApiError`.

pub mod assistant;
pub mod documents;
pub mod habits;
pub mod planner;
pub mod session;
pub mod stats;
pub mod tasks;
