use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// IO operation failed.
    #[error("{0}: {1}")]
    Io(&'static str, #[source] std::io::Error),

    /// JSON encode error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("the exact classifier needs both --primary-alias-dns-name and --dr-alias-dns-name")]
    MissingExactTargets,

    #[error(transparent)]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}
