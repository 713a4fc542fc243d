//! Repository Layer - Core Traits
//!
//! Defines the fetch boundary seen by the presentation layer.

use async_trait::async_trait;

use crate::domain::FetchOutcome;

/// Fetch boundary for the todo record.
///
/// Implementations never return a raw error; every failure is folded into
/// the outcome before it crosses this boundary.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Run one fetch. Each call goes back to the network; nothing is
    /// cached or memoized.
    async fn fetch_todo(&self) -> FetchOutcome;
}
