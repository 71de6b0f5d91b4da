use proven_failover_routing::{Region, RoutingError};
use thiserror::Error;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in this crate.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// Lookups were configured to fail.
    #[error("simulated lookup failure for {0}")]
    LookupFailed(String),

    /// No endpoint registered for the region.
    #[error("no endpoint configured for {0} region")]
    MissingEndpoint(Region),

    /// Changes were configured to fail.
    #[error("simulated change failure for {0}")]
    ChangeRejected(String),
}

impl RoutingError for Error {}
