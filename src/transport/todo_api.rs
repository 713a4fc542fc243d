//! HTTP transport for the fixed todo endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Todo;

/// The one endpoint this app ever requests.
pub const TODO_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Failures below the repository boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, timeout, or body-read failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response arrived with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// Body did not decode as a todo record
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Fetches the fixed remote record.
///
/// One attempt per call, no retries; a failed call never yields a partial
/// record.
#[async_trait]
pub trait TodoTransport: Send + Sync {
    async fn fetch(&self) -> Result<Todo, TransportError>;
}

/// `reqwest`-backed transport using the client's default timeouts.
pub struct HttpTodoTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTodoTransport {
    pub fn new() -> Self {
        Self::with_endpoint(TODO_ENDPOINT)
    }

    fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpTodoTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoTransport for HttpTodoTransport {
    async fn fetch(&self) -> Result<Todo, TransportError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| TransportError::Decode(err.to_string()))
    }
}
