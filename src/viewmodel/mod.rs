//! Presentation Layer
//!
//! Screen state machine and the view model that drives it.

mod todo_view_model;

#[cfg(test)]
mod tests;

pub use todo_view_model::{TodoViewModel, UiState};
