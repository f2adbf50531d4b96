//! Domain DTOs for the todo API.
//!
//! # Design
//! Mirrors the server's record shape but is defined independently, so the
//! client does not pull in axum. The end-to-end test catches schema drift
//! between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo record. The id is chosen by the caller, never by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub item: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, item: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
            completed,
        }
    }
}

/// Body the server attaches to 4xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorMessage {
    pub message: String,
}
