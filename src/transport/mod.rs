//! Transport Layer
//!
//! Issues the single GET against the fixed endpoint and decodes the body.

mod todo_api;

pub use todo_api::{HttpTodoTransport, TodoTransport, TransportError, TODO_ENDPOINT};
