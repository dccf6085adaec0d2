//! Pipeline error taxonomy: the kinds that terminate the RPC (client-input, credential,
//! upstream, registry, cancellation) versus the ones the pipeline swallows internally (cache
//! miss/expiry, cache-write failure — those never reach this type).

use thiserror::Error;

use crate::broker::BrokerError;
use crate::dispatch::DispatchError;
use crate::registry::RegistryError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("missing input")]
    MissingInput,

    #[error("missing user")]
    MissingUser,

    #[error("invalid user")]
    InvalidUser,

    #[error("missing region")]
    MissingRegion,

    #[error("missing vpc id")]
    MissingVpcId,

    #[error("request cancelled")]
    Cancelled,

    #[error(transparent)]
    InvalidCredentials(#[from] BrokerError),

    #[error(transparent)]
    UpstreamFailure(#[from] DispatchError),

    #[error(transparent)]
    UnknownVariant(#[from] RegistryError),
}
