//! Credential broker error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrokerError {
    /// The broker call failed or was denied; the pipeline does not distinguish the two and
    /// does not retry.
    #[error("invalid credentials: {reason}")]
    InvalidCredentials { reason: String },
}
