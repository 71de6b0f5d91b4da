//! In-memory notification channel that records everything published to it.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use std::sync::Arc;

use async_trait::async_trait;
use proven_failover_notify::Notifier;
use tokio::sync::Mutex;
use tracing::info;

/// A published notification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    /// Subject line.
    pub subject: String,

    /// Message body.
    pub message: String,
}

/// Notifier that keeps published notifications in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryNotifier {
    published: Arc<Mutex<Vec<Notification>>>,
    unavailable: Arc<Mutex<bool>>,
}

impl MemoryNotifier {
    /// Creates a new, empty `MemoryNotifier`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent publishes fail (or succeed again).
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().await = unavailable;
    }

    /// Everything published so far, oldest first.
    pub async fn published(&self) -> Vec<Notification> {
        self.published.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    type Error = Error;

    async fn publish(&self, subject: &str, message: &str) -> Result<(), Error> {
        if *self.unavailable.lock().await {
            return Err(Error);
        }

        info!(subject, "notification recorded");
        self.published.lock().await.push(Notification {
            subject: subject.to_string(),
            message: message.to_string(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_in_order() {
        let notifier = MemoryNotifier::new();

        notifier.publish("first", "{}").await.unwrap();
        notifier.publish("second", "{\"a\":1}").await.unwrap();

        let published = notifier.published().await;
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].subject, "first");
        assert_eq!(published[1].message, "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_unavailable() {
        let notifier = MemoryNotifier::new();
        notifier.set_unavailable(true).await;

        assert!(notifier.publish("subject", "message").await.is_err());
        assert!(notifier.published().await.is_empty());
    }
}
