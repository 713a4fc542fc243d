//! Todo Entity
//!
//! The single record fetched from the remote endpoint.

use serde::{Deserialize, Serialize};

/// A remote todo record.
///
/// All four fields are required on the wire. The record is never mutated
/// after deserialization and is dropped together with whichever state
/// variant owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Owner of the todo on the remote service
    pub user_id: u32,
    /// Unique identifier
    pub id: u32,
    /// Title text shown to the user
    pub title: String,
    /// Completion status
    pub completed: bool,
}
