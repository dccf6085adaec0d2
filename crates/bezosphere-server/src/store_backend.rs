//! Picks between [`PostgresStore`] and [`NoopStore`] at startup based on
//! `Config::has_store`, so the rest of the binary deals with one concrete `Store` type.

use chrono::{DateTime, Utc};

use bezosphere_core::model::{RequestInput, ResponseOutput};
use bezosphere_core::store::{NoopStore, PostgresStore, Store, StoreError};

#[derive(Clone)]
pub enum StoreBackend {
    Postgres(PostgresStore),
    Noop(NoopStore),
}

impl Store for StoreBackend {
    async fn get(
        &self,
        customer_id: &str,
        input: &RequestInput,
        max_age: Option<DateTime<Utc>>,
    ) -> Result<ResponseOutput, StoreError> {
        match self {
            Self::Postgres(store) => store.get(customer_id, input, max_age).await,
            Self::Noop(store) => store.get(customer_id, input, max_age).await,
        }
    }

    async fn put(
        &self,
        customer_id: &str,
        input: &RequestInput,
        output: &ResponseOutput,
    ) -> Result<(), StoreError> {
        match self {
            Self::Postgres(store) => store.put(customer_id, input, output).await,
            Self::Noop(store) => store.put(customer_id, input, output).await,
        }
    }
}
