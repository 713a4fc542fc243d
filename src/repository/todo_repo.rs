//! Remote repository backed by the HTTP transport.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::FetchOutcome;
use crate::repository::TodoRepository;
use crate::transport::TodoTransport;

/// Stateless wrapper around the transport.
///
/// This is the only place raw transport errors are converted into
/// [`FetchOutcome`]; nothing past this layer sees them.
pub struct RemoteTodoRepository {
    transport: Arc<dyn TodoTransport>,
}

impl RemoteTodoRepository {
    pub fn new(transport: Arc<dyn TodoTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl TodoRepository for RemoteTodoRepository {
    async fn fetch_todo(&self) -> FetchOutcome {
        match self.transport.fetch().await {
            Ok(todo) => {
                debug!(id = todo.id, "todo fetched");
                FetchOutcome::Success(todo)
            }
            Err(err) => {
                warn!(%err, "todo fetch failed");
                FetchOutcome::Failure(err.to_string())
            }
        }
    }
}
