//! Credential Broker Client (C4): exchanges an authenticated caller identity for short-lived
//! cloud credentials.

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::BrokerError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCredentialBroker;

use crate::model::{CloudCredentials, User};

/// A thin typed client over the external credential-issuing authority ("spanx" in the
/// source). No caching at this layer — credential lifetime is the cloud provider's concern.
pub trait CredentialBroker: Send + Sync {
    fn get_credentials(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<CloudCredentials, BrokerError>> + Send;
}
