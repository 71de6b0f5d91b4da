use proven_failover_notify::NotifierError;
use thiserror::Error;

/// Errors that can occur in this crate.
#[derive(Clone, Debug, Error)]
#[error("notification channel unavailable")]
pub struct Error;

impl NotifierError for Error {}
