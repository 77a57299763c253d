use thiserror::Error;

/// Non-fatal feed failures. The feed stays in its last-good state and every
/// variant is retryable by re-issuing the operation.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed query failed: {0}")]
    QueryFailed(String),

    #[error("failed to delete entry: {0}")]
    DeleteFailed(String),
}
