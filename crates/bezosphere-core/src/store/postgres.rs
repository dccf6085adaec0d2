//! Postgres-backed [`Store`] implementation.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::fingerprint::fingerprint;
use crate::model::{RequestInput, ResponseOutput};

use super::{Store, StoreError, default_max_age, is_fresh};

/// Bounded connection pool, matching the reference deployment's 8 open / 8 idle discipline.
const MAX_CONNECTIONS: u32 = 8;
const MIN_CONNECTIONS: u32 = 8;

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connects to `connection_string`, applying the reference pool bounds.
    pub async fn connect(connection_string: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .min_connections(MIN_CONNECTIONS)
            .connect(connection_string)
            .await?;
        Ok(Self { pool })
    }

    /// Wraps an already-constructed pool (tests, or a caller managing pool lifetime itself).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Store for PostgresStore {
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

        let row = sqlx::query(
            "select response_data, updated_at from resources where id = $1 and customer_id = $2",
        )
        .bind(&id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or_else(|| StoreError::CacheMiss {
            id: id.clone(),
            customer_id: customer_id.to_string(),
        })?;

        let updated_at: Option<DateTime<Utc>> = row.try_get("updated_at").ok();
        let updated_at = updated_at.ok_or_else(|| StoreError::CorruptRow {
            id: id.clone(),
            customer_id: customer_id.to_string(),
            reason: "missing updated_at".to_string(),
        })?;

        let bound = max_age.unwrap_or_else(|| default_max_age(Utc::now()));
        if !is_fresh(updated_at, bound) {
            return Err(StoreError::Expired {
                id,
                customer_id: customer_id.to_string(),
            });
        }

        let response_data: String = row.try_get("response_data").map_err(|e| StoreError::CorruptRow {
            id: id.clone(),
            customer_id: customer_id.to_string(),
            reason: e.to_string(),
        })?;

        let output: ResponseOutput = serde_json::from_str(&response_data)?;
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
        let request_data = serde_json::to_string(input)?;
        let response_data = serde_json::to_string(output)?;
        let request_type = input.tag();
        let response_type = output.tag();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "insert into resources \
                (id, customer_id, request_type, request_data, response_type, response_data, created_at, updated_at) \
             values ($1, $2, $3, $4, $5, $6, now(), now()) \
             on conflict on constraint resources_pkey do update set \
                (request_type, request_data, response_type, response_data, updated_at) = \
                ($3, $4, $5, $6, now())",
        )
        .bind(&id)
        .bind(customer_id)
        .bind(request_type)
        .bind(&request_data)
        .bind(response_type)
        .bind(&response_data)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
