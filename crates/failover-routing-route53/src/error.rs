use proven_failover_routing::{Region, RoutingError};
use thiserror::Error;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A change request could not be assembled.
    #[error(transparent)]
    Build(#[from] aws_sdk_route53::error::BuildError),

    /// No alias endpoint was configured for the target region.
    #[error("no alias endpoint configured for {0} region")]
    MissingEndpoint(Region),

    /// Route 53 API error.
    #[error(transparent)]
    Route53(#[from] aws_sdk_route53::Error),
}

impl RoutingError for Error {}
