//! Production [`Dispatcher`]: the per-variant mapping table to the upstream cloud SDK.
//!
//! The concrete SDK calls are an external collaborator (see spec's scope boundary) — this
//! type owns the mapping table and the session-binding contract, not a vendored SDK client.
//! Wiring a real SDK in means filling in each match arm's call site; the shape (allocate
//! native request, deep-copy fields, invoke, deep-copy reply) is the same for every arm.

use crate::model::{CloudSession, RequestInput, ResponseOutput};

use super::{DispatchError, Dispatcher};

#[derive(Debug, Clone, Default)]
pub struct AwsDispatcher;

impl AwsDispatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Dispatcher for AwsDispatcher {
    async fn dispatch(
        &self,
        _session: &CloudSession,
        input: &RequestInput,
    ) -> Result<ResponseOutput, DispatchError> {
        let unwired = |variant: &str| DispatchError::UpstreamFailure {
            variant: variant.to_string(),
            message: "no cloud SDK call wired for this variant yet".to_string(),
        };

        match input {
            RequestInput::ListMetrics(_) => Err(unwired(input.tag())),
            RequestInput::GetMetricStatistics(_) => Err(unwired(input.tag())),
            RequestInput::DescribeAlarms(_) => Err(unwired(input.tag())),
            RequestInput::DescribeAlarmsForMetric(_) => Err(unwired(input.tag())),
            RequestInput::DescribeInstances(_) => Err(unwired(input.tag())),
            RequestInput::DescribeSecurityGroups(_) => Err(unwired(input.tag())),
            RequestInput::DescribeSubnets(_) => Err(unwired(input.tag())),
            RequestInput::DescribeVpcs(_) => Err(unwired(input.tag())),
            RequestInput::DescribeRouteTables(_) => Err(unwired(input.tag())),
            RequestInput::DescribeLoadBalancers(_) => Err(unwired(input.tag())),
            RequestInput::DescribeAutoScalingGroups(_) => Err(unwired(input.tag())),
            RequestInput::DescribeDBInstances(_) => Err(unwired(input.tag())),
            RequestInput::ListClusters(_) => Err(unwired(input.tag())),
            RequestInput::ListServices(_) => Err(unwired(input.tag())),
            RequestInput::DescribeServices(_) => Err(unwired(input.tag())),
            RequestInput::ListTasks(_) => Err(unwired(input.tag())),
            RequestInput::DescribeTasks(_) => Err(unwired(input.tag())),
            RequestInput::ListContainerInstances(_) => Err(unwired(input.tag())),
            RequestInput::DescribeContainerInstances(_) => Err(unwired(input.tag())),
            RequestInput::DescribeTaskDefinition(_) => Err(unwired(input.tag())),
        }
    }
}
