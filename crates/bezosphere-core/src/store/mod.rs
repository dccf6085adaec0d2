//! Response Cache / Store (C3): durable key→blob map with per-row update timestamps.

pub mod error;
pub mod noop;
pub mod postgres;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::StoreError;
pub use noop::NoopStore;
pub use postgres::PostgresStore;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockStore;

use chrono::{DateTime, Utc};

use crate::model::{RequestInput, ResponseOutput};

/// Default freshness window applied when a [`crate::model::Request`] carries no `max_age`.
pub const DEFAULT_TTL_SECS: i64 = 120;

/// The canonical persisted cache row (the `resources` table).
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: String,
    pub customer_id: String,
    pub request_type: String,
    pub request_data: String,
    pub response_type: String,
    pub response_data: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The two operations the pipeline needs from the response cache.
pub trait Store: Send + Sync {
    /// Populates a response from cache, or fails with a miss/expiry/corruption signal.
    fn get(
        &self,
        customer_id: &str,
        input: &RequestInput,
        max_age: Option<DateTime<Utc>>,
    ) -> impl std::future::Future<Output = Result<ResponseOutput, StoreError>> + Send;

    /// Upserts one row keyed on `(fingerprint(input), customer_id)`.
    fn put(
        &self,
        customer_id: &str,
        input: &RequestInput,
        output: &ResponseOutput,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}

/// Freshness rule from the source: a row is accepted iff it was updated at or before
/// `max_age`. Note the asymmetry — `max_age` is the *oldest acceptable* update time, so a
/// row updated strictly after `max_age` is rejected as expired. This inverts the intuitive
/// reading of "max age" but is the behavior under test; see the design notes before changing
/// it.
pub fn is_fresh(updated_at: DateTime<Utc>, max_age: DateTime<Utc>) -> bool {
    updated_at <= max_age
}

/// `max_age` as the caller intends it when absent: `now - DEFAULT_TTL_SECS`.
pub fn default_max_age(now: DateTime<Utc>) -> DateTime<Utc> {
    now - chrono::Duration::seconds(DEFAULT_TTL_SECS)
}
