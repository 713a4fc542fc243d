//! Fetch Outcome
//!
//! The two-variant result handed out at the repository boundary.

use super::todo::Todo;

/// Result of one fetch attempt.
///
/// Exactly one variant is populated at a time; the record is owned by the
/// variant that holds it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The record was fetched and decoded.
    Success(Todo),
    /// The fetch failed; the message describes the underlying error.
    Failure(String),
}
