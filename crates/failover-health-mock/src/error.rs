use proven_failover_health::HealthReaderError;
use thiserror::Error;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in this crate.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// The check was configured to fail.
    #[error("simulated fetch failure for health check {0}")]
    Simulated(String),

    /// The check has not been registered with the mock.
    #[error("health check not found: {0}")]
    UnknownCheck(String),
}

impl HealthReaderError for Error {}
