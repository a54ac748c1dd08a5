//! User record for the relational schema.
//!
//! Not reachable from the HTTP surface; the in-memory store has no notion
//! of ownership.

use serde::{Deserialize, Serialize};

/// Database-assigned user id.
pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Insert payload for a user row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
}
