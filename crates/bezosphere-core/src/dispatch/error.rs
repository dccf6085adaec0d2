//! Cloud Dispatcher error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The upstream cloud SDK call failed; surfaced to the caller verbatim, cache not written.
    #[error("upstream call failed for {variant}: {message}")]
    UpstreamFailure { variant: String, message: String },

    /// A request tag reached the dispatcher with no matching upstream mapping.
    #[error("no dispatch mapping registered for variant: {variant}")]
    UnknownVariant { variant: String },
}
