use proven_failover_notify::NotifierError;
use thiserror::Error;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// SNS API error.
    #[error(transparent)]
    Sns(#[from] aws_sdk_sns::Error),
}

impl NotifierError for Error {}
