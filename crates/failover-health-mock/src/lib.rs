//! In-memory health-check provider for tests and local dry runs.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::{Error, Result};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use proven_failover_health::HealthReader;
use tokio::sync::Mutex;

#[derive(Clone, Debug)]
enum MockResponse {
    Status(String),
    NoStatus,
    Fail,
}

/// Mock health-check provider with scripted responses per check.
#[derive(Clone, Debug, Default)]
pub struct MockHealthReader {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
}

impl MockHealthReader {
    /// Creates a new mock with no registered checks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `raw` as the latest status of `check_id`.
    pub async fn set_status(&self, check_id: impl Into<String>, raw: impl Into<String>) {
        self.set(check_id, MockResponse::Status(raw.into())).await;
    }

    /// Report that `check_id` has no recorded status.
    pub async fn set_no_status(&self, check_id: impl Into<String>) {
        self.set(check_id, MockResponse::NoStatus).await;
    }

    /// Make every fetch of `check_id` fail.
    pub async fn set_failing(&self, check_id: impl Into<String>) {
        self.set(check_id, MockResponse::Fail).await;
    }

    async fn set(&self, check_id: impl Into<String>, response: MockResponse) {
        self.responses.lock().await.insert(check_id.into(), response);
    }
}

#[async_trait]
impl HealthReader for MockHealthReader {
    type Error = Error;

    async fn latest_status(&self, check_id: &str) -> Result<Option<String>> {
        match self.responses.lock().await.get(check_id) {
            Some(MockResponse::Status(raw)) => Ok(Some(raw.clone())),
            Some(MockResponse::NoStatus) => Ok(None),
            Some(MockResponse::Fail) => Err(Error::Simulated(check_id.to_string())),
            None => Err(Error::UnknownCheck(check_id.to_string())),
        }
    }
}
