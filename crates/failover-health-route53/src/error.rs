use proven_failover_health::HealthReaderError;
use thiserror::Error;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Route 53 API error.
    #[error(transparent)]
    Route53(#[from] aws_sdk_route53::Error),
}

impl HealthReaderError for Error {}
