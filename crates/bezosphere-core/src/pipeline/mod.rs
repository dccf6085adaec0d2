//! Request Pipeline (C6): the central orchestration — validation, cache lookup, credential
//! acquisition, dispatch, cache write, response wrapping.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::PipelineError;

use tokio_util::sync::CancellationToken;
use tracing::{instrument, warn};

use crate::broker::CredentialBroker;
use crate::dispatch::Dispatcher;
use crate::model::{CloudSession, Request, Response};
use crate::registry::{cacheable, response_tag};
use crate::store::{Store, StoreError};

/// Orchestrates one RPC, generic over the three collaborating backends.
pub struct Pipeline<S, B, D> {
    store: S,
    broker: B,
    dispatcher: D,
}

impl<S, B, D> Pipeline<S, B, D>
where
    S: Store,
    B: CredentialBroker,
    D: Dispatcher,
{
    pub fn new(store: S, broker: B, dispatcher: D) -> Self {
        Self {
            store,
            broker,
            dispatcher,
        }
    }

    #[instrument(
        skip(self, request),
        fields(
            input_variant_tag = tracing::field::Empty,
            customer_id = tracing::field::Empty,
            user_id = tracing::field::Empty,
        )
    )]
    pub async fn handle(
        &self,
        request: Request,
        cancellation: CancellationToken,
    ) -> Result<Response, PipelineError> {
        let input = request.input.ok_or(PipelineError::MissingInput)?;
        let user = request.user.ok_or(PipelineError::MissingUser)?;

        if !user.is_valid() {
            return Err(PipelineError::InvalidUser);
        }
        if request.region.is_empty() {
            return Err(PipelineError::MissingRegion);
        }
        if request.vpc_id.is_empty() {
            return Err(PipelineError::MissingVpcId);
        }

        let span = tracing::Span::current();
        span.record("input_variant_tag", input.tag());
        span.record("customer_id", user.customer_id.as_str());
        span.record("user_id", user.id.as_str());
        tracing::info!(event = "valid-request");

        let expected_tag = response_tag(&input);

        if cacheable(&input) {
            match self.store.get(&user.customer_id, &input, request.max_age).await {
                Ok(output) => {
                    tracing::info!(event = "cache-hit");
                    return Ok(Response { output });
                }
                Err(StoreError::CacheMiss { .. } | StoreError::Expired { .. }) => {
                    tracing::info!(event = "cache-miss");
                }
                Err(other) => {
                    tracing::warn!(event = "cache-miss", error = %other, "treating corrupt/unreadable row as a miss");
                }
            }
        } else {
            tracing::info!(event = "cache-miss", reason = "non-cacheable variant");
        }

        let credentials = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                tracing::warn!(event = "cancelled", stage = "broker");
                return Err(PipelineError::Cancelled);
            }
            result = self.broker.get_credentials(&user) => result.map_err(|e| {
                tracing::warn!(error = %e, "credential broker call failed");
                PipelineError::from(e)
            })?,
        };

        let session = CloudSession {
            region: request.region.clone(),
            credentials,
        };

        let output = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                tracing::warn!(event = "cancelled", stage = "dispatch");
                return Err(PipelineError::Cancelled);
            }
            result = self.dispatcher.dispatch(&session, &input) => match result {
                Ok(output) => output,
                Err(e) => {
                    tracing::warn!(event = "upstream-error", error = %e);
                    return Err(PipelineError::from(e));
                }
            },
        };

        if output.tag() != expected_tag {
            tracing::warn!(event = "no-response-found", expected_tag, actual_tag = output.tag());
        }

        if let Err(e) = self.store.put(&user.customer_id, &input, &output).await {
            tracing::warn!(event = "cache-write-error", error = %e);
        }

        Ok(Response { output })
    }
}
