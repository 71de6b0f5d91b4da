//! Abstract interface for publishing operator notifications.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;

/// Marker trait for `Notifier` errors.
pub trait NotifierError: Debug + Error + Send + Sync + 'static {}

/// Trait for notification channels.
#[async_trait]
pub trait Notifier
where
    Self: Clone + Send + Sync + 'static,
{
    /// The error type for the notification channel.
    type Error: NotifierError;

    /// Publish a message under `subject`.
    ///
    /// Implementations without a configured destination should log and return
    /// `Ok(())` rather than fail.
    async fn publish(&self, subject: &str, message: &str) -> Result<(), Self::Error>;
}
