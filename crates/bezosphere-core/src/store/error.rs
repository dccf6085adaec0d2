//! Store error types.

use thiserror::Error;

/// Errors surfaced by [`super::Store::get`] and [`super::Store::put`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// `customer_id`, `input`, or `output` was missing from the request.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// No row exists at `(id, customer_id)`.
    #[error("cache miss for id {id} customer {customer_id}")]
    CacheMiss { id: String, customer_id: String },

    /// The row exists but is newer than the caller's `max_age` bound (see the freshness note).
    #[error("cache entry expired for id {id} customer {customer_id}")]
    Expired { id: String, customer_id: String },

    /// The stored row is missing `updated_at` or failed to decode.
    #[error("corrupt row for id {id} customer {customer_id}: {reason}")]
    CorruptRow {
        id: String,
        customer_id: String,
        reason: String,
    },

    /// Fingerprinting the request value failed.
    #[error(transparent)]
    Fingerprint(#[from] crate::fingerprint::FingerprintError),

    /// JSON encode/decode of the request or response payload failed.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The underlying database connection or query failed.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}
