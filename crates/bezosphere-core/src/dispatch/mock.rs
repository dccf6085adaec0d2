//! Configurable [`Dispatcher`] used by tests and by the `mock` feature.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::{CloudSession, RequestInput, ResponseOutput};

use super::{DispatchError, Dispatcher};

#[derive(Default, Clone)]
pub struct MockDispatcher {
    responses: Arc<RwLock<HashMap<String, ResponseOutput>>>,
    failures: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the response to return for `tag`'s variant.
    pub fn set_response(&self, tag: &str, output: ResponseOutput) {
        self.responses.write().insert(tag.to_string(), output);
    }

    /// Registers `tag`'s variant to fail with `message`.
    pub fn set_failure(&self, tag: &str, message: &str) {
        self.failures.write().insert(tag.to_string(), message.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }
}

impl Dispatcher for MockDispatcher {
    async fn dispatch(
        &self,
        _session: &CloudSession,
        input: &RequestInput,
    ) -> Result<ResponseOutput, DispatchError> {
        let tag = input.tag().to_string();
        self.calls.write().push(tag.clone());

        if let Some(message) = self.failures.read().get(&tag) {
            return Err(DispatchError::UpstreamFailure {
                variant: tag,
                message: message.clone(),
            });
        }

        self.responses
            .read()
            .get(&tag)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownVariant { variant: tag })
    }
}
