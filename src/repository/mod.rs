//! Repository Layer
//!
//! The boundary where transport errors become outcomes.

mod todo_repo;
mod traits;


pub use todo_repo::RemoteTodoRepository;
pub use traits::TodoRepository;
