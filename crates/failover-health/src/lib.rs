//! Abstract interface for reading regional health checks, plus normalization of
//! raw provider statuses into an ordered severity scale.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod status;

pub use status::HealthStatus;

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, warn};

/// Marker trait for `HealthReader` errors.
pub trait HealthReaderError: Debug + Error + Send + Sync + 'static {}

/// Trait for health-check providers.
#[async_trait]
pub trait HealthReader
where
    Self: Clone + Send + Sync + 'static,
{
    /// The error type for the health-check provider.
    type Error: HealthReaderError;

    /// Fetch the most recent raw status recorded for a health check.
    ///
    /// Returns `Ok(None)` if the provider has no recorded status for the check.
    async fn latest_status(&self, check_id: &str) -> Result<Option<String>, Self::Error>;
}

/// A normalized health reading for a single check.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct HealthReading {
    /// Identifier of the health check.
    pub check_id: String,

    /// The raw value reported by the provider, if any was obtained.
    pub raw: Option<String>,

    /// The normalized status.
    pub status: HealthStatus,
}

impl HealthReading {
    /// Build a reading from whatever the provider returned.
    #[must_use]
    pub fn from_raw(check_id: impl Into<String>, raw: Option<String>) -> Self {
        let status = HealthStatus::normalize(raw.as_deref());

        Self {
            check_id: check_id.into(),
            raw,
            status,
        }
    }

    /// Fetch and normalize the status of a health check.
    ///
    /// Never fails: an absent status or a fetch error both yield
    /// [`HealthStatus::Error`].
    pub async fn fetch<R: HealthReader>(reader: &R, check_id: &str) -> Self {
        match reader.latest_status(check_id).await {
            Ok(Some(raw)) => Self::from_raw(check_id, Some(raw)),
            Ok(None) => {
                warn!(check_id, "no recorded status for health check");
                Self::from_raw(check_id, None)
            }
            Err(e) => {
                error!(check_id, "error getting health check status: {e}");
                Self::from_raw(check_id, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Debug, thiserror::Error)]
    #[error("provider unreachable")]
    struct Unreachable;

    impl HealthReaderError for Unreachable {}

    #[derive(Clone, Default)]
    struct StaticReader {
        statuses: Arc<HashMap<String, Option<String>>>,
    }

    #[async_trait]
    impl HealthReader for StaticReader {
        type Error = Unreachable;

        async fn latest_status(&self, check_id: &str) -> Result<Option<String>, Unreachable> {
            self.statuses.get(check_id).cloned().ok_or(Unreachable)
        }
    }

    fn reader() -> StaticReader {
        let mut statuses = HashMap::new();
        statuses.insert("healthy".to_string(), Some("Success".to_string()));
        statuses.insert("degraded".to_string(), Some("Warning".to_string()));
        statuses.insert("garbled".to_string(), Some("success".to_string()));
        statuses.insert("empty".to_string(), None);

        StaticReader {
            statuses: Arc::new(statuses),
        }
    }

    #[tokio::test]
    async fn test_fetch_recognized_status() {
        let reading = HealthReading::fetch(&reader(), "healthy").await;
        assert_eq!(reading.status, HealthStatus::Success);
        assert_eq!(reading.raw.as_deref(), Some("Success"));

        let reading = HealthReading::fetch(&reader(), "degraded").await;
        assert_eq!(reading.status, HealthStatus::Warning);
    }

    #[tokio::test]
    async fn test_fetch_unrecognized_status_is_error() {
        let reading = HealthReading::fetch(&reader(), "garbled").await;
        assert_eq!(reading.status, HealthStatus::Error);
        assert_eq!(reading.raw.as_deref(), Some("success"));
    }

    #[tokio::test]
    async fn test_fetch_absent_status_is_error() {
        let reading = HealthReading::fetch(&reader(), "empty").await;
        assert_eq!(reading.status, HealthStatus::Error);
        assert_eq!(reading.raw, None);
    }

    #[tokio::test]
    async fn test_fetch_error_is_error() {
        let reading = HealthReading::fetch(&reader(), "missing").await;
        assert_eq!(reading.status, HealthStatus::Error);
        assert_eq!(reading.check_id, "missing");
    }
}
