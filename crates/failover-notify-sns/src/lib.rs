//! Notification channel publishing to an AWS SNS topic.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::result_large_err)]

mod error;

pub use error::{Error, Result};

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_sns::Client;
use proven_failover_notify::Notifier;
use tracing::{info, warn};

/// SNS rejects subjects longer than this.
const MAX_SUBJECT_CHARS: usize = 100;

/// Options for configuring an `SnsNotifier`.
pub struct SnsNotifierOptions {
    /// The AWS region of the topic.
    pub region: String,

    /// ARN of the topic to publish to. `None` turns publishing into a no-op.
    pub topic_arn: Option<String>,
}

/// Publishes notifications to an SNS topic.
#[derive(Clone, Debug)]
pub struct SnsNotifier {
    client: Client,
    topic_arn: Option<String>,
}

impl SnsNotifier {
    /// Creates a new instance of `SnsNotifier`.
    pub async fn new(SnsNotifierOptions { region, topic_arn }: SnsNotifierOptions) -> Self {
        let config = aws_config::from_env()
            .region(Region::new(region))
            .load()
            .await;

        Self {
            client: Client::new(&config),
            topic_arn,
        }
    }

    /// Creates a notifier from an already configured client.
    #[must_use]
    pub const fn from_client(client: Client, topic_arn: Option<String>) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    type Error = Error;

    async fn publish(&self, subject: &str, message: &str) -> Result<()> {
        let Some(topic_arn) = &self.topic_arn else {
            warn!(subject, "no SNS topic configured, dropping notification");
            return Ok(());
        };

        let resp = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .subject(truncate_subject(subject))
            .message(message)
            .send()
            .await;

        match resp {
            Ok(resp) => {
                info!(subject, message_id = resp.message_id(), "notification sent");
                Ok(())
            }
            Err(e) => Err(Error::Sns(e.into())),
        }
    }
}

fn truncate_subject(subject: &str) -> String {
    subject.chars().take(MAX_SUBJECT_CHARS).collect()
}
