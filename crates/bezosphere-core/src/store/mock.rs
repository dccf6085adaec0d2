//! In-memory [`Store`] used by tests and by the `mock` feature.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::fingerprint::fingerprint;
use crate::model::{RequestInput, ResponseOutput};

use super::{Resource, Store, StoreError, default_max_age, is_fresh};

#[derive(Default, Clone)]
pub struct MockStore {
    rows: Arc<RwLock<HashMap<(String, String), Resource>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a row directly, bypassing `put`, for tests that need to control `updated_at`.
    pub fn seed(
        &self,
        customer_id: &str,
        input: &RequestInput,
        output: &ResponseOutput,
        updated_at: DateTime<Utc>,
    ) {
        let id = fingerprint(input).expect("fingerprint should not fail in tests");
        let resource = Resource {
            id: id.clone(),
            customer_id: customer_id.to_string(),
            request_type: input.tag().to_string(),
            request_data: serde_json::to_string(input).expect("request encodes"),
            response_type: output.tag().to_string(),
            response_data: serde_json::to_string(output).expect("response encodes"),
            created_at: updated_at,
            updated_at,
        };
        self.rows
            .write()
            .insert((id, customer_id.to_string()), resource);
    }

    pub fn row_count(&self) -> usize {
        self.rows.read().len()
    }

    pub fn contains(&self, customer_id: &str, input: &RequestInput) -> bool {
        let id = fingerprint(input).expect("fingerprint should not fail in tests");
        self.rows.read().contains_key(&(id, customer_id.to_string()))
    }
}

impl Store for MockStore {
    async fn get(
        &self,
        customer_id: &str,
        input: &RequestInput,
        max_age: Option<DateTime<Utc>>,
    ) -> Result<ResponseOutput, StoreError> {
        if customer_id.is_empty() {
            return Err(StoreError::MissingField { field: "customer_id" });
        }

        let id = fingerprint(input)?;
        let key = (id.clone(), customer_id.to_string());

        let row = self
            .rows
            .read()
            .get(&key)
            .cloned()
            .ok_or_else(|| StoreError::CacheMiss {
                id: id.clone(),
                customer_id: customer_id.to_string(),
            })?;

        let bound = max_age.unwrap_or_else(|| default_max_age(Utc::now()));
        if !is_fresh(row.updated_at, bound) {
            return Err(StoreError::Expired {
                id,
                customer_id: customer_id.to_string(),
            });
        }

        let output: ResponseOutput = serde_json::from_str(&row.response_data)?;
        Ok(output)
    }

    async fn put(
        &self,
        customer_id: &str,
        input: &RequestInput,
        output: &ResponseOutput,
    ) -> Result<(), StoreError> {
        if customer_id.is_empty() {
            return Err(StoreError::MissingField { field: "customer_id" });
        }

        let id = fingerprint(input)?;
        let now = Utc::now();
        let mut rows = self.rows.write();

        let created_at = rows
            .get(&(id.clone(), customer_id.to_string()))
            .map(|r| r.created_at)
            .unwrap_or(now);

        let resource = Resource {
            id: id.clone(),
            customer_id: customer_id.to_string(),
            request_type: input.tag().to_string(),
            request_data: serde_json::to_string(input)?,
            response_type: output.tag().to_string(),
            response_data: serde_json::to_string(output)?,
            created_at,
            updated_at: now,
        };

        rows.insert((id, customer_id.to_string()), resource);
        Ok(())
    }
}
