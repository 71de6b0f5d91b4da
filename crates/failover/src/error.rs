use proven_failover_routing::Region;
use thiserror::Error;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a failover check.
#[derive(Debug, Error)]
pub enum Error {
    /// A decision tried to move traffic to the region that is already active.
    #[error("refusing to route to {0} region: it is already active")]
    InvariantViolation(Region),

    /// A notification payload could not be encoded.
    #[error("failed to encode notification payload: {0}")]
    Payload(#[from] serde_json::Error),
}
