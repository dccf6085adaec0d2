//! The `Bezosphere` gRPC service: translates wire messages through
//! [`bezosphere_core::pipeline::Pipeline`] and back.

use tokio_util::sync::CancellationToken;
use tonic::{Request, Response, Status};

use bezosphere_core::broker::CredentialBroker;
use bezosphere_core::dispatch::Dispatcher;
use bezosphere_core::pipeline::{Pipeline, PipelineError};
use bezosphere_core::store::Store;

use crate::convert::{request_from_proto, response_to_proto};
use crate::proto::gateway::bezosphere_server::Bezosphere;
use crate::proto::gateway::{GetRequest, GetResponse};

pub struct GatewayService<S, B, D> {
    pipeline: Pipeline<S, B, D>,
}

impl<S, B, D> GatewayService<S, B, D>
where
    S: Store + 'static,
    B: CredentialBroker + 'static,
    D: Dispatcher + 'static,
{
    pub fn new(pipeline: Pipeline<S, B, D>) -> Self {
        Self { pipeline }
    }
}

#[tonic::async_trait]
impl<S, B, D> Bezosphere for GatewayService<S, B, D>
where
    S: Store + 'static,
    B: CredentialBroker + 'static,
    D: Dispatcher + 'static,
{
    async fn get(&self, request: Request<GetRequest>) -> Result<Response<GetResponse>, Status> {
        let request = request_from_proto(request.into_inner())
            .map_err(|e| status_from_pipeline_error(PipelineError::from(e)))?;

        // Unary call: the ambient token is this RPC's own lifetime. A future per-connection
        // disconnect signal would call `.cancel()` on a clone of this same token.
        let cancellation = CancellationToken::new();

        let response = self
            .pipeline
            .handle(request, cancellation)
            .await
            .map_err(status_from_pipeline_error)?;

        Ok(Response::new(response_to_proto(response)))
    }
}

fn status_from_pipeline_error(err: PipelineError) -> Status {
    match err {
        PipelineError::MissingInput
        | PipelineError::MissingUser
        | PipelineError::InvalidUser
        | PipelineError::MissingRegion
        | PipelineError::MissingVpcId => Status::invalid_argument(err.to_string()),
        PipelineError::InvalidCredentials(_) => Status::unauthenticated(err.to_string()),
        PipelineError::UpstreamFailure(_) => Status::unavailable(err.to_string()),
        PipelineError::UnknownVariant(_) => Status::internal(err.to_string()),
        PipelineError::Cancelled => Status::cancelled(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bezosphere_core::broker::MockCredentialBroker;
    use bezosphere_core::dispatch::MockDispatcher;
    use bezosphere_core::model::{DescribeInstancesOutput, ResponseOutput};
    use bezosphere_core::store::MockStore;

    use crate::proto::gateway::request_input::Variant;
    use crate::proto::gateway::{DescribeInstancesInput, RequestInput, User};

    fn service(
        broker: MockCredentialBroker,
        dispatcher: MockDispatcher,
    ) -> GatewayService<MockStore, MockCredentialBroker, MockDispatcher> {
        GatewayService::new(Pipeline::new(MockStore::new(), broker, dispatcher))
    }

    fn valid_request() -> GetRequest {
        GetRequest {
            user: Some(User {
                customer_id: "cust-1".to_string(),
                id: "user-1".to_string(),
                email: String::new(),
                active: true,
            }),
            region: "us-east-1".to_string(),
            vpc_id: "vpc-1".to_string(),
            max_age: None,
            input: Some(RequestInput {
                variant: Some(Variant::DescribeInstances(DescribeInstancesInput {
                    filters: vec![],
                    instance_ids: vec![],
                })),
            }),
        }
    }

    #[tokio::test]
    async fn happy_path_returns_dispatched_output() {
        let dispatcher = MockDispatcher::new();
        dispatcher.set_response(
            "DescribeInstances",
            ResponseOutput::DescribeInstances(DescribeInstancesOutput::default()),
        );

        let svc = service(MockCredentialBroker::succeeding(), dispatcher);
        let response = svc.get(Request::new(valid_request())).await.unwrap();
        assert!(response.into_inner().output.is_some());
    }

    #[tokio::test]
    async fn missing_user_is_invalid_argument() {
        let svc = service(MockCredentialBroker::succeeding(), MockDispatcher::new());
        let mut request = valid_request();
        request.user = None;

        let status = svc.get(Request::new(request)).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn broker_failure_is_unauthenticated() {
        let svc = service(
            MockCredentialBroker::failing("denied"),
            MockDispatcher::new(),
        );

        let status = svc.get(Request::new(valid_request())).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }

    #[tokio::test]
    async fn absent_oneof_variant_is_internal_unknown_variant() {
        let svc = service(MockCredentialBroker::succeeding(), MockDispatcher::new());
        let mut request = valid_request();
        request.input = Some(RequestInput { variant: None });

        let status = svc.get(Request::new(request)).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::Internal);
    }
}
