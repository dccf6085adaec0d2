//! Cloud Dispatcher (C5): executes the upstream SDK call bound to a request variant and
//! normalises the reply back into the internal variant.

pub mod aws;
pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::DispatchError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockDispatcher;

use crate::model::{CloudSession, RequestInput, ResponseOutput};

/// Given a validated variant and a credentialed cloud session, executes the bound upstream
/// operation. The internal ↔ SDK struct copy is the only "reflective" piece of this system
/// and is exercised by the round-trip property in the variant registry tests; the concrete
/// cloud-SDK call itself is an external collaborator (see [`aws::AwsDispatcher`]).
pub trait Dispatcher: Send + Sync {
    fn dispatch(
        &self,
        session: &CloudSession,
        input: &RequestInput,
    ) -> impl std::future::Future<Output = Result<ResponseOutput, DispatchError>> + Send;
}
