//! Domain Layer
//!
//! Entities shared across the fetch flow.
//! This layer has NO external dependencies (except serde for serialization).

mod outcome;
mod todo;

pub use outcome::FetchOutcome;
pub use todo::Todo;
