use thiserror::Error;

/// Fatal configuration failures; the process exits before serving.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

/// The backing store could not be reached or the operation failed.
///
/// Never surfaced to the HTTP client: a failed read degrades the ping
/// message to the cold-start empty string and a failed write is absorbed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("ping store unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

impl StoreError {
    pub fn unavailable(err: impl Into<anyhow::Error>) -> Self {
        StoreError::Unavailable(err.into())
    }
}
