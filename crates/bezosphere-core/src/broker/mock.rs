//! In-memory [`CredentialBroker`] used by tests and by the `mock` feature.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::{CloudCredentials, User};

use super::{BrokerError, CredentialBroker};

#[derive(Clone)]
pub struct MockCredentialBroker {
    outcome: Arc<RwLock<Outcome>>,
}

#[derive(Clone)]
enum Outcome {
    Succeed(CloudCredentials),
    Fail(String),
}

impl Default for MockCredentialBroker {
    fn default() -> Self {
        Self::succeeding()
    }
}

impl MockCredentialBroker {
    /// A broker that always hands back the given credentials.
    pub fn succeeding() -> Self {
        Self {
            outcome: Arc::new(RwLock::new(Outcome::Succeed(CloudCredentials {
                access_key_id: "AKIAMOCK".to_string(),
                secret_access_key: "mock-secret".to_string(),
                session_token: "mock-session-token".to_string(),
            }))),
        }
    }

    /// A broker that always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Arc::new(RwLock::new(Outcome::Fail(reason.into()))),
        }
    }

    pub fn set_failing(&self, reason: impl Into<String>) {
        *self.outcome.write() = Outcome::Fail(reason.into());
    }
}

impl CredentialBroker for MockCredentialBroker {
    async fn get_credentials(&self, _user: &User) -> Result<CloudCredentials, BrokerError> {
        match self.outcome.read().clone() {
            Outcome::Succeed(creds) => Ok(creds),
            Outcome::Fail(reason) => Err(BrokerError::InvalidCredentials { reason }),
        }
    }
}
