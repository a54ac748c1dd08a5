//! Domain model for study tasks, habits, documents and planner payloads.
//!
//! # Responsibility
//! - Define the records owned by the in-memory store and the dormant
//!   relational schema.
//! - Carry field defaults so partially specified client payloads deserialize
//!   into complete records.
//!
//! # Invariants
//! - Records carry no behavior beyond defaults and small lifecycle helpers.
//! - Identifiers are opaque strings assigned by the store, never by callers.

pub mod document;
pub mod habit;
pub mod planner;
pub mod task;
pub mod user;

/// Opaque identifier assigned to stored records.
///
/// Kept as a type alias so path parameters that are not valid UUIDs still
/// resolve to a clean NotFound instead of a parse failure.
pub type RecordId = String;

/// Generates a fresh globally-unique record id.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn empty_text() -> Option<String> {
    Some(String::new())
}
