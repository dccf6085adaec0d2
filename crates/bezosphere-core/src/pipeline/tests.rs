use chrono::{Duration, Utc};
use tokio_util::sync::CancellationToken;

use super::*;
use crate::broker::MockCredentialBroker;
use crate::dispatch::MockDispatcher;
use crate::model::{
    DescribeInstancesInput, DescribeInstancesOutput, Filter, GetMetricStatisticsInput,
    GetMetricStatisticsOutput, Instance, RequestInput, ResponseOutput, User,
};
use crate::store::MockStore;

const TENANT: &str = "f2e627a2-d108-11e5-a041-cfa352cc72b9";
const REGION: &str = "us-west-1";
const VPC: &str = "vpc-34610651";

fn user() -> User {
    User {
        customer_id: TENANT.to_string(),
        id: "user-1".to_string(),
        email: None,
        active: true,
    }
}

fn describe_instances_variant() -> (RequestInput, ResponseOutput) {
    let input = RequestInput::DescribeInstances(DescribeInstancesInput {
        filters: vec![Filter {
            name: "vpc-id".to_string(),
            values: vec![VPC.to_string()],
        }],
        instance_ids: vec![],
    });
    let output = ResponseOutput::DescribeInstances(DescribeInstancesOutput {
        instances: vec![Instance {
            instance_id: "i-d3b62266".to_string(),
            instance_type: "t3.micro".to_string(),
            vpc_id: VPC.to_string(),
            state: "running".to_string(),
        }],
    });
    (input, output)
}

fn base_request(input: RequestInput, max_age: Option<chrono::DateTime<Utc>>) -> Request {
    Request {
        user: Some(user()),
        region: REGION.to_string(),
        vpc_id: VPC.to_string(),
        max_age,
        input: Some(input),
    }
}

fn pipeline_with(
    store: MockStore,
    broker: MockCredentialBroker,
    dispatcher: MockDispatcher,
) -> Pipeline<MockStore, MockCredentialBroker, MockDispatcher> {
    Pipeline::new(store, broker, dispatcher)
}

#[tokio::test]
async fn happy_cached_path_hits_without_broker_or_sdk_calls() {
    let store = MockStore::new();
    let broker = MockCredentialBroker::failing("should not be called");
    let dispatcher = MockDispatcher::new();

    let (input, output) = describe_instances_variant();
    store.seed(TENANT, &input, &output, Utc::now() - Duration::seconds(30));

    let pipeline = pipeline_with(store, broker, dispatcher.clone());
    let request = base_request(input, Some(Utc::now() - Duration::seconds(60)));

    let response = pipeline.handle(request, CancellationToken::new()).await.unwrap();
    assert_eq!(response.output, output);
    assert_eq!(dispatcher.call_count(), 0);
}

#[tokio::test]
async fn expired_row_falls_through_to_broker_and_sdk_and_is_overwritten() {
    let store = MockStore::new();
    let broker = MockCredentialBroker::succeeding();
    let dispatcher = MockDispatcher::new();

    let (input, stale_output) = describe_instances_variant();
    store.seed(TENANT, &input, &stale_output, Utc::now() - Duration::seconds(180));

    let fresh_output = ResponseOutput::DescribeInstances(DescribeInstancesOutput {
        instances: vec![Instance {
            instance_id: "i-d3b62266".to_string(),
            instance_type: "t3.large".to_string(),
            vpc_id: VPC.to_string(),
            state: "running".to_string(),
        }],
    });
    dispatcher.set_response("DescribeInstances", fresh_output.clone());

    let pipeline = pipeline_with(store.clone(), broker, dispatcher.clone());
    let request = base_request(input.clone(), Some(Utc::now() - Duration::seconds(60)));

    let response = pipeline.handle(request, CancellationToken::new()).await.unwrap();
    assert_eq!(response.output, fresh_output);
    assert_eq!(dispatcher.call_count(), 1);

    let refreshed = store.get(TENANT, &input, Some(Utc::now())).await.unwrap();
    assert_eq!(refreshed, fresh_output);
}

#[tokio::test]
async fn non_cacheable_variant_always_bypasses_the_cache() {
    let store = MockStore::new();
    let broker = MockCredentialBroker::succeeding();
    let dispatcher = MockDispatcher::new();

    let input = RequestInput::GetMetricStatistics(GetMetricStatisticsInput {
        namespace: "AWS/EC2".to_string(),
        metric_name: "CPUUtilization".to_string(),
        dimensions: vec![],
        start_time: Utc::now() - Duration::hours(1),
        end_time: Utc::now(),
        period_secs: 60,
        statistics: vec!["Average".to_string()],
    });
    let output = ResponseOutput::GetMetricStatistics(GetMetricStatisticsOutput { datapoints: vec![] });

    store.seed(TENANT, &input, &output, Utc::now());
    dispatcher.set_response("GetMetricStatistics", output.clone());

    let pipeline = pipeline_with(store, broker, dispatcher.clone());
    let request = base_request(input, None);

    let response = pipeline.handle(request, CancellationToken::new()).await.unwrap();
    assert_eq!(response.output, output);
    assert_eq!(dispatcher.call_count(), 1, "cache must be bypassed even though a row exists");
}

#[tokio::test]
async fn missing_vpc_id_short_circuits_before_broker_or_store() {
    let store = MockStore::new();
    let broker = MockCredentialBroker::failing("should not be called");
    let dispatcher = MockDispatcher::new();

    let (input, _) = describe_instances_variant();
    let pipeline = pipeline_with(store.clone(), broker, dispatcher.clone());

    let mut request = base_request(input, None);
    request.vpc_id = String::new();

    let err = pipeline.handle(request, CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, PipelineError::MissingVpcId));
    assert_eq!(dispatcher.call_count(), 0);
    assert_eq!(store.row_count(), 0);
}

#[tokio::test]
async fn broker_failure_surfaces_invalid_credentials_without_sdk_call() {
    let store = MockStore::new();
    let broker = MockCredentialBroker::failing("denied");
    let dispatcher = MockDispatcher::new();

    let (input, _) = describe_instances_variant();
    let pipeline = pipeline_with(store, broker, dispatcher.clone());
    let request = base_request(input, None);

    let err = pipeline.handle(request, CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, PipelineError::InvalidCredentials(_)));
    assert_eq!(dispatcher.call_count(), 0);
}

#[tokio::test]
async fn cancellation_before_broker_call_aborts_before_sdk_call() {
    let store = MockStore::new();
    let broker = MockCredentialBroker::succeeding();
    let dispatcher = MockDispatcher::new();

    let (input, _) = describe_instances_variant();
    let pipeline = pipeline_with(store, broker, dispatcher.clone());
    let request = base_request(input, None);

    let token = CancellationToken::new();
    token.cancel();

    let err = pipeline.handle(request, token).await.unwrap_err();
    assert!(matches!(err, PipelineError::Cancelled));
    assert_eq!(dispatcher.call_count(), 0);
}

#[tokio::test]
async fn sdk_failure_surfaces_and_leaves_subsequent_call_as_a_miss() {
    let store = MockStore::new();
    let broker = MockCredentialBroker::succeeding();
    let dispatcher = MockDispatcher::new();

    let (input, _) = describe_instances_variant();
    dispatcher.set_failure("DescribeInstances", "throttled");

    let pipeline = pipeline_with(store.clone(), broker, dispatcher);
    let request = base_request(input.clone(), None);

    let err = pipeline.handle(request, CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, PipelineError::UpstreamFailure(_)));
    assert_eq!(store.row_count(), 0);

    let second_attempt = store.get(TENANT, &input, None).await;
    assert!(second_attempt.is_err());
}

#[tokio::test]
async fn cache_write_failure_does_not_fail_the_rpc() {
    // A Store that always fails Put but serves Get normally, to exercise the
    // "cache write failure is non-fatal" contract without a real database.
    struct PutFailsStore {
        inner: MockStore,
    }

    impl Store for PutFailsStore {
        async fn get(
            &self,
            customer_id: &str,
            input: &RequestInput,
            max_age: Option<chrono::DateTime<Utc>>,
        ) -> Result<ResponseOutput, StoreError> {
            self.inner.get(customer_id, input, max_age).await
        }

        async fn put(
            &self,
            _customer_id: &str,
            _input: &RequestInput,
            _output: &ResponseOutput,
        ) -> Result<(), StoreError> {
            Err(StoreError::Database("disk full".to_string()))
        }
    }

    let store = PutFailsStore {
        inner: MockStore::new(),
    };
    let broker = MockCredentialBroker::succeeding();
    let dispatcher = MockDispatcher::new();

    let (input, output) = describe_instances_variant();
    dispatcher.set_response("DescribeInstances", output.clone());

    let pipeline = Pipeline::new(store, broker, dispatcher);
    let request = base_request(input, None);

    let response = pipeline.handle(request, CancellationToken::new()).await.unwrap();
    assert_eq!(response.output, output);
}

#[tokio::test]
async fn presence_validation_reports_a_distinct_failure_per_missing_field() {
    let store = MockStore::new();
    let broker = MockCredentialBroker::succeeding();
    let dispatcher = MockDispatcher::new();
    let (input, _) = describe_instances_variant();
    let pipeline = pipeline_with(store, broker, dispatcher);

    let mut no_input = base_request(input.clone(), None);
    no_input.input = None;
    assert!(matches!(
        pipeline.handle(no_input, CancellationToken::new()).await.unwrap_err(),
        PipelineError::MissingInput
    ));

    let mut no_user = base_request(input.clone(), None);
    no_user.user = None;
    assert!(matches!(
        pipeline.handle(no_user, CancellationToken::new()).await.unwrap_err(),
        PipelineError::MissingUser
    ));

    let mut inactive_user = base_request(input.clone(), None);
    inactive_user.user = Some(User { active: false, ..user() });
    assert!(matches!(
        pipeline.handle(inactive_user, CancellationToken::new()).await.unwrap_err(),
        PipelineError::InvalidUser
    ));

    let mut no_region = base_request(input.clone(), None);
    no_region.region = String::new();
    assert!(matches!(
        pipeline.handle(no_region, CancellationToken::new()).await.unwrap_err(),
        PipelineError::MissingRegion
    ));

    let mut no_vpc = base_request(input, None);
    no_vpc.vpc_id = String::new();
    assert!(matches!(
        pipeline.handle(no_vpc, CancellationToken::new()).await.unwrap_err(),
        PipelineError::MissingVpcId
    ));
}
