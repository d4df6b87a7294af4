//! Error taxonomy for the review pipeline.
//!
//! Everything that can fail after the token check funnels into [`ApiError`];
//! the `/reviews` handler translates it into the embedded-error payload at the
//! boundary instead of letting it escape to the transport layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bearer token missing or not equal to the configured secret.
    #[error("Invalid or missing token")]
    Auth,

    /// Review row could not be written or read.
    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// Metrics CSV row could not be written.
    #[error("metrics write error: {0}")]
    Metrics(#[from] MetricsError),
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
