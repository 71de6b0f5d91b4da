//! Health-check provider backed by Route 53 health checks.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::result_large_err)]

mod error;

pub use error::{Error, Result};

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_route53::Client;
use aws_sdk_route53::types::HealthCheckObservation;
use proven_failover_health::HealthReader;
use tracing::debug;

/// Options for the Route 53 health reader.
pub struct Route53HealthReaderOptions {
    /// The AWS region used for client configuration.
    pub region: String,
}

/// Reads the latest observation of Route 53 health checks.
#[derive(Clone, Debug)]
pub struct Route53HealthReader {
    client: Client,
}

impl Route53HealthReader {
    /// Creates a new instance of `Route53HealthReader`.
    pub async fn new(Route53HealthReaderOptions { region }: Route53HealthReaderOptions) -> Self {
        let config = aws_config::from_env()
            .region(Region::new(region))
            .load()
            .await;

        Self {
            client: Client::new(&config),
        }
    }
}

#[async_trait]
impl HealthReader for Route53HealthReader {
    type Error = Error;

    async fn latest_status(&self, check_id: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .get_health_check_status()
            .health_check_id(check_id)
            .send()
            .await;

        match resp {
            Ok(resp) => {
                let observations = resp.health_check_observations();
                debug!(check_id, observations = observations.len(), "fetched health check status");

                Ok(latest_observation(observations)
                    .and_then(|o| o.status_report())
                    .and_then(|r| r.status())
                    .map(status_token))
            }
            Err(e) => Err(Error::Route53(e.into())),
        }
    }
}

/// Pick the observation with the most recent report. Observations without a
/// timestamp sort first.
fn latest_observation(observations: &[HealthCheckObservation]) -> Option<&HealthCheckObservation> {
    observations.iter().max_by_key(|o| {
        o.status_report()
            .and_then(|r| r.checked_time())
            .map(|t| (t.secs(), t.subsec_nanos()))
    })
}

/// Route 53 reports statuses like `Failure: HTTP Status Code 503, ...`; only
/// the leading token is meaningful for classification.
fn status_token(status: &str) -> String {
    status
        .split(':')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_route53::primitives::DateTime;
    use aws_sdk_route53::types::StatusReport;

    fn observation(status: &str, secs: i64) -> HealthCheckObservation {
        HealthCheckObservation::builder()
            .status_report(
                StatusReport::builder()
                    .status(status)
                    .checked_time(DateTime::from_secs(secs))
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_status_token() {
        assert_eq!(
            status_token("Failure: HTTP Status Code 503, Service Unavailable"),
            "Failure"
        );
        assert_eq!(status_token("Success"), "Success");
        assert_eq!(status_token(""), "");
    }

    #[test]
    fn test_latest_observation_by_checked_time() {
        let observations = vec![
            observation("Success: HTTP Status Code 200", 100),
            observation("Failure: Connection timed out", 300),
            observation("Success: HTTP Status Code 200", 200),
        ];

        let latest = latest_observation(&observations)
            .and_then(|o| o.status_report())
            .and_then(|r| r.status())
            .map(status_token);

        assert_eq!(latest.as_deref(), Some("Failure"));
    }

    #[test]
    fn test_no_observations() {
        assert!(latest_observation(&[]).is_none());
    }
}
