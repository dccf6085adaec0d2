//! A [`Store`] that never holds a row. Lets the gateway run in credentialing-only mode
//! (spec §6) with no Postgres dependency: every read is a miss, every write is a no-op.

use chrono::{DateTime, Utc};

use crate::model::{RequestInput, ResponseOutput};

use super::{Store, StoreError};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl Store for NoopStore {
    async fn get(
        &self,
        customer_id: &str,
        input: &RequestInput,
        _max_age: Option<DateTime<Utc>>,
    ) -> Result<ResponseOutput, StoreError> {
        Err(StoreError::CacheMiss {
            id: crate::fingerprint::fingerprint(input)?,
            customer_id: customer_id.to_string(),
        })
    }

    async fn put(
        &self,
        _customer_id: &str,
        _input: &RequestInput,
        _output: &ResponseOutput,
    ) -> Result<(), StoreError> {
        Ok(())
    }
}
