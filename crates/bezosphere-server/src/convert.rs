//! Proto ↔ core struct copying. Every (source, destination) pair is a field-for-field copy,
//! handling the one convention mismatch the two sides disagree on: proto3 has no optional
//! scalars, so an absent `Option<String>` on the core side round-trips through an empty
//! string on the wire.

use chrono::{DateTime, TimeZone, Utc};

use bezosphere_core::model;
use bezosphere_core::registry::RegistryError;

use crate::proto::gateway as proto;

fn opt_string(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn req_string(o: Option<String>) -> String {
    o.unwrap_or_default()
}

fn ts_from_proto(ts: prost_types::Timestamp) -> DateTime<Utc> {
    Utc.timestamp_opt(ts.seconds, ts.nanos.max(0) as u32)
        .single()
        .unwrap_or_else(Utc::now)
}

fn ts_to_proto(dt: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

fn conv_vec<T, U: From<T>>(items: Vec<T>) -> Vec<U> {
    items.into_iter().map(U::from).collect()
}

impl From<proto::Filter> for model::Filter {
    fn from(f: proto::Filter) -> Self {
        Self { name: f.name, values: f.values }
    }
}

impl From<model::Filter> for proto::Filter {
    fn from(f: model::Filter) -> Self {
        Self { name: f.name, values: f.values }
    }
}

impl From<proto::User> for model::User {
    fn from(u: proto::User) -> Self {
        Self {
            customer_id: u.customer_id,
            id: u.id,
            email: opt_string(u.email),
            active: u.active,
        }
    }
}

impl From<model::User> for proto::User {
    fn from(u: model::User) -> Self {
        Self {
            customer_id: u.customer_id,
            id: u.id,
            email: req_string(u.email),
            active: u.active,
        }
    }
}

/// An absent or unrecognized `input` oneof is the same wire-boundary failure the variant
/// registry already names: [`RegistryError::UnknownVariant`].
pub fn request_from_proto(r: proto::GetRequest) -> Result<model::Request, RegistryError> {
    Ok(model::Request {
        user: r.user.map(model::User::from),
        region: r.region,
        vpc_id: r.vpc_id,
        max_age: r.max_age.map(ts_from_proto),
        input: r.input.map(request_input_from_proto).transpose()?,
    })
}

pub fn response_to_proto(r: model::Response) -> proto::GetResponse {
    proto::GetResponse {
        output: Some(response_output_to_proto(r.output)),
    }
}

macro_rules! variant_convert {
    ($($tag:ident => $field:ident),+ $(,)?) => {
        fn request_input_from_proto(input: proto::RequestInput) -> Result<model::RequestInput, RegistryError> {
            use proto::request_input::Variant;
            let variant = input.variant.ok_or_else(|| RegistryError::UnknownVariant {
                tag: "absent".to_string(),
            })?;
            match variant {
                $(Variant::$field(v) => Ok(model::RequestInput::$tag(v.into()))),+
            }
        }

        fn response_output_to_proto(output: model::ResponseOutput) -> proto::ResponseOutput {
            use proto::response_output::Variant;
            let variant = match output {
                $(model::ResponseOutput::$tag(v) => Variant::$field(v.into())),+
            };
            proto::ResponseOutput { variant: Some(variant) }
        }
    };
}

variant_convert! {
    ListMetrics => ListMetrics,
    GetMetricStatistics => GetMetricStatistics,
    DescribeAlarms => DescribeAlarms,
    DescribeAlarmsForMetric => DescribeAlarmsForMetric,
    DescribeInstances => DescribeInstances,
    DescribeSecurityGroups => DescribeSecurityGroups,
    DescribeSubnets => DescribeSubnets,
    DescribeVpcs => DescribeVpcs,
    DescribeRouteTables => DescribeRouteTables,
    DescribeLoadBalancers => DescribeLoadBalancers,
    DescribeAutoScalingGroups => DescribeAutoScalingGroups,
    DescribeDBInstances => DescribeDbInstances,
    ListClusters => ListClusters,
    ListServices => ListServices,
    DescribeServices => DescribeServices,
    ListTasks => ListTasks,
    DescribeTasks => DescribeTasks,
    ListContainerInstances => ListContainerInstances,
    DescribeContainerInstances => DescribeContainerInstances,
    DescribeTaskDefinition => DescribeTaskDefinition,
}

impl From<proto::ListMetricsInput> for model::ListMetricsInput {
    fn from(v: proto::ListMetricsInput) -> Self {
        Self { namespace: opt_string(v.namespace), metric_name: opt_string(v.metric_name) }
    }
}
impl From<model::ListMetricsInput> for proto::ListMetricsInput {
    fn from(v: model::ListMetricsInput) -> Self {
        Self { namespace: req_string(v.namespace), metric_name: req_string(v.metric_name) }
    }
}
impl From<proto::MetricIdentity> for model::MetricIdentity {
    fn from(v: proto::MetricIdentity) -> Self {
        Self { namespace: v.namespace, metric_name: v.metric_name, dimensions: conv_vec(v.dimensions) }
    }
}
impl From<model::MetricIdentity> for proto::MetricIdentity {
    fn from(v: model::MetricIdentity) -> Self {
        Self { namespace: v.namespace, metric_name: v.metric_name, dimensions: conv_vec(v.dimensions) }
    }
}
impl From<proto::ListMetricsOutput> for model::ListMetricsOutput {
    fn from(v: proto::ListMetricsOutput) -> Self {
        Self { metrics: conv_vec(v.metrics) }
    }
}
impl From<model::ListMetricsOutput> for proto::ListMetricsOutput {
    fn from(v: model::ListMetricsOutput) -> Self {
        Self { metrics: conv_vec(v.metrics) }
    }
}

impl From<proto::GetMetricStatisticsInput> for model::GetMetricStatisticsInput {
    fn from(v: proto::GetMetricStatisticsInput) -> Self {
        Self {
            namespace: v.namespace,
            metric_name: v.metric_name,
            dimensions: conv_vec(v.dimensions),
            start_time: v.start_time.map(ts_from_proto).unwrap_or_else(Utc::now),
            end_time: v.end_time.map(ts_from_proto).unwrap_or_else(Utc::now),
            period_secs: v.period_secs,
            statistics: v.statistics,
        }
    }
}
impl From<model::GetMetricStatisticsInput> for proto::GetMetricStatisticsInput {
    fn from(v: model::GetMetricStatisticsInput) -> Self {
        Self {
            namespace: v.namespace,
            metric_name: v.metric_name,
            dimensions: conv_vec(v.dimensions),
            start_time: Some(ts_to_proto(v.start_time)),
            end_time: Some(ts_to_proto(v.end_time)),
            period_secs: v.period_secs,
            statistics: v.statistics,
        }
    }
}
impl From<proto::Datapoint> for model::Datapoint {
    fn from(v: proto::Datapoint) -> Self {
        Self {
            timestamp: v.timestamp.map(ts_from_proto).unwrap_or_else(Utc::now),
            average: v.average,
            unit: v.unit,
        }
    }
}
impl From<model::Datapoint> for proto::Datapoint {
    fn from(v: model::Datapoint) -> Self {
        Self { timestamp: Some(ts_to_proto(v.timestamp)), average: v.average, unit: v.unit }
    }
}
impl From<proto::GetMetricStatisticsOutput> for model::GetMetricStatisticsOutput {
    fn from(v: proto::GetMetricStatisticsOutput) -> Self {
        Self { datapoints: conv_vec(v.datapoints) }
    }
}
impl From<model::GetMetricStatisticsOutput> for proto::GetMetricStatisticsOutput {
    fn from(v: model::GetMetricStatisticsOutput) -> Self {
        Self { datapoints: conv_vec(v.datapoints) }
    }
}

impl From<proto::DescribeAlarmsInput> for model::DescribeAlarmsInput {
    fn from(v: proto::DescribeAlarmsInput) -> Self {
        Self { alarm_names: v.alarm_names, state_value: opt_string(v.state_value) }
    }
}
impl From<model::DescribeAlarmsInput> for proto::DescribeAlarmsInput {
    fn from(v: model::DescribeAlarmsInput) -> Self {
        Self { alarm_names: v.alarm_names, state_value: req_string(v.state_value) }
    }
}
impl From<proto::Alarm> for model::Alarm {
    fn from(v: proto::Alarm) -> Self {
        Self {
            alarm_name: v.alarm_name,
            state_value: v.state_value,
            metric_name: v.metric_name,
            namespace: v.namespace,
        }
    }
}
impl From<model::Alarm> for proto::Alarm {
    fn from(v: model::Alarm) -> Self {
        Self {
            alarm_name: v.alarm_name,
            state_value: v.state_value,
            metric_name: v.metric_name,
            namespace: v.namespace,
        }
    }
}
impl From<proto::DescribeAlarmsOutput> for model::DescribeAlarmsOutput {
    fn from(v: proto::DescribeAlarmsOutput) -> Self {
        Self { alarms: conv_vec(v.alarms) }
    }
}
impl From<model::DescribeAlarmsOutput> for proto::DescribeAlarmsOutput {
    fn from(v: model::DescribeAlarmsOutput) -> Self {
        Self { alarms: conv_vec(v.alarms) }
    }
}
impl From<proto::DescribeAlarmsForMetricInput> for model::DescribeAlarmsForMetricInput {
    fn from(v: proto::DescribeAlarmsForMetricInput) -> Self {
        Self { namespace: v.namespace, metric_name: v.metric_name, dimensions: conv_vec(v.dimensions) }
    }
}
impl From<model::DescribeAlarmsForMetricInput> for proto::DescribeAlarmsForMetricInput {
    fn from(v: model::DescribeAlarmsForMetricInput) -> Self {
        Self { namespace: v.namespace, metric_name: v.metric_name, dimensions: conv_vec(v.dimensions) }
    }
}
impl From<proto::DescribeAlarmsForMetricOutput> for model::DescribeAlarmsForMetricOutput {
    fn from(v: proto::DescribeAlarmsForMetricOutput) -> Self {
        Self { alarms: conv_vec(v.alarms) }
    }
}
impl From<model::DescribeAlarmsForMetricOutput> for proto::DescribeAlarmsForMetricOutput {
    fn from(v: model::DescribeAlarmsForMetricOutput) -> Self {
        Self { alarms: conv_vec(v.alarms) }
    }
}

impl From<proto::DescribeInstancesInput> for model::DescribeInstancesInput {
    fn from(v: proto::DescribeInstancesInput) -> Self {
        Self { filters: conv_vec(v.filters), instance_ids: v.instance_ids }
    }
}
impl From<model::DescribeInstancesInput> for proto::DescribeInstancesInput {
    fn from(v: model::DescribeInstancesInput) -> Self {
        Self { filters: conv_vec(v.filters), instance_ids: v.instance_ids }
    }
}
impl From<proto::Instance> for model::Instance {
    fn from(v: proto::Instance) -> Self {
        Self {
            instance_id: v.instance_id,
            instance_type: v.instance_type,
            vpc_id: v.vpc_id,
            state: v.state,
        }
    }
}
impl From<model::Instance> for proto::Instance {
    fn from(v: model::Instance) -> Self {
        Self {
            instance_id: v.instance_id,
            instance_type: v.instance_type,
            vpc_id: v.vpc_id,
            state: v.state,
        }
    }
}
impl From<proto::DescribeInstancesOutput> for model::DescribeInstancesOutput {
    fn from(v: proto::DescribeInstancesOutput) -> Self {
        Self { instances: conv_vec(v.instances) }
    }
}
impl From<model::DescribeInstancesOutput> for proto::DescribeInstancesOutput {
    fn from(v: model::DescribeInstancesOutput) -> Self {
        Self { instances: conv_vec(v.instances) }
    }
}

impl From<proto::DescribeSecurityGroupsInput> for model::DescribeSecurityGroupsInput {
    fn from(v: proto::DescribeSecurityGroupsInput) -> Self {
        Self { filters: conv_vec(v.filters), group_ids: v.group_ids }
    }
}
impl From<model::DescribeSecurityGroupsInput> for proto::DescribeSecurityGroupsInput {
    fn from(v: model::DescribeSecurityGroupsInput) -> Self {
        Self { filters: conv_vec(v.filters), group_ids: v.group_ids }
    }
}
impl From<proto::SecurityGroup> for model::SecurityGroup {
    fn from(v: proto::SecurityGroup) -> Self {
        Self { group_id: v.group_id, group_name: v.group_name, vpc_id: v.vpc_id }
    }
}
impl From<model::SecurityGroup> for proto::SecurityGroup {
    fn from(v: model::SecurityGroup) -> Self {
        Self { group_id: v.group_id, group_name: v.group_name, vpc_id: v.vpc_id }
    }
}
impl From<proto::DescribeSecurityGroupsOutput> for model::DescribeSecurityGroupsOutput {
    fn from(v: proto::DescribeSecurityGroupsOutput) -> Self {
        Self { security_groups: conv_vec(v.security_groups) }
    }
}
impl From<model::DescribeSecurityGroupsOutput> for proto::DescribeSecurityGroupsOutput {
    fn from(v: model::DescribeSecurityGroupsOutput) -> Self {
        Self { security_groups: conv_vec(v.security_groups) }
    }
}

impl From<proto::DescribeSubnetsInput> for model::DescribeSubnetsInput {
    fn from(v: proto::DescribeSubnetsInput) -> Self {
        Self { filters: conv_vec(v.filters), subnet_ids: v.subnet_ids }
    }
}
impl From<model::DescribeSubnetsInput> for proto::DescribeSubnetsInput {
    fn from(v: model::DescribeSubnetsInput) -> Self {
        Self { filters: conv_vec(v.filters), subnet_ids: v.subnet_ids }
    }
}
impl From<proto::Subnet> for model::Subnet {
    fn from(v: proto::Subnet) -> Self {
        Self {
            subnet_id: v.subnet_id,
            vpc_id: v.vpc_id,
            cidr_block: v.cidr_block,
            availability_zone: v.availability_zone,
        }
    }
}
impl From<model::Subnet> for proto::Subnet {
    fn from(v: model::Subnet) -> Self {
        Self {
            subnet_id: v.subnet_id,
            vpc_id: v.vpc_id,
            cidr_block: v.cidr_block,
            availability_zone: v.availability_zone,
        }
    }
}
impl From<proto::DescribeSubnetsOutput> for model::DescribeSubnetsOutput {
    fn from(v: proto::DescribeSubnetsOutput) -> Self {
        Self { subnets: conv_vec(v.subnets) }
    }
}
impl From<model::DescribeSubnetsOutput> for proto::DescribeSubnetsOutput {
    fn from(v: model::DescribeSubnetsOutput) -> Self {
        Self { subnets: conv_vec(v.subnets) }
    }
}

impl From<proto::DescribeVpcsInput> for model::DescribeVpcsInput {
    fn from(v: proto::DescribeVpcsInput) -> Self {
        Self { filters: conv_vec(v.filters), vpc_ids: v.vpc_ids }
    }
}
impl From<model::DescribeVpcsInput> for proto::DescribeVpcsInput {
    fn from(v: model::DescribeVpcsInput) -> Self {
        Self { filters: conv_vec(v.filters), vpc_ids: v.vpc_ids }
    }
}
impl From<proto::Vpc> for model::Vpc {
    fn from(v: proto::Vpc) -> Self {
        Self { vpc_id: v.vpc_id, cidr_block: v.cidr_block, is_default: v.is_default }
    }
}
impl From<model::Vpc> for proto::Vpc {
    fn from(v: model::Vpc) -> Self {
        Self { vpc_id: v.vpc_id, cidr_block: v.cidr_block, is_default: v.is_default }
    }
}
impl From<proto::DescribeVpcsOutput> for model::DescribeVpcsOutput {
    fn from(v: proto::DescribeVpcsOutput) -> Self {
        Self { vpcs: conv_vec(v.vpcs) }
    }
}
impl From<model::DescribeVpcsOutput> for proto::DescribeVpcsOutput {
    fn from(v: model::DescribeVpcsOutput) -> Self {
        Self { vpcs: conv_vec(v.vpcs) }
    }
}

impl From<proto::DescribeRouteTablesInput> for model::DescribeRouteTablesInput {
    fn from(v: proto::DescribeRouteTablesInput) -> Self {
        Self { filters: conv_vec(v.filters), route_table_ids: v.route_table_ids }
    }
}
impl From<model::DescribeRouteTablesInput> for proto::DescribeRouteTablesInput {
    fn from(v: model::DescribeRouteTablesInput) -> Self {
        Self { filters: conv_vec(v.filters), route_table_ids: v.route_table_ids }
    }
}
impl From<proto::RouteTable> for model::RouteTable {
    fn from(v: proto::RouteTable) -> Self {
        Self { route_table_id: v.route_table_id, vpc_id: v.vpc_id }
    }
}
impl From<model::RouteTable> for proto::RouteTable {
    fn from(v: model::RouteTable) -> Self {
        Self { route_table_id: v.route_table_id, vpc_id: v.vpc_id }
    }
}
impl From<proto::DescribeRouteTablesOutput> for model::DescribeRouteTablesOutput {
    fn from(v: proto::DescribeRouteTablesOutput) -> Self {
        Self { route_tables: conv_vec(v.route_tables) }
    }
}
impl From<model::DescribeRouteTablesOutput> for proto::DescribeRouteTablesOutput {
    fn from(v: model::DescribeRouteTablesOutput) -> Self {
        Self { route_tables: conv_vec(v.route_tables) }
    }
}

impl From<proto::DescribeLoadBalancersInput> for model::DescribeLoadBalancersInput {
    fn from(v: proto::DescribeLoadBalancersInput) -> Self {
        Self { load_balancer_names: v.load_balancer_names }
    }
}
impl From<model::DescribeLoadBalancersInput> for proto::DescribeLoadBalancersInput {
    fn from(v: model::DescribeLoadBalancersInput) -> Self {
        Self { load_balancer_names: v.load_balancer_names }
    }
}
impl From<proto::LoadBalancer> for model::LoadBalancer {
    fn from(v: proto::LoadBalancer) -> Self {
        Self { load_balancer_name: v.load_balancer_name, dns_name: v.dns_name, vpc_id: v.vpc_id }
    }
}
impl From<model::LoadBalancer> for proto::LoadBalancer {
    fn from(v: model::LoadBalancer) -> Self {
        Self { load_balancer_name: v.load_balancer_name, dns_name: v.dns_name, vpc_id: v.vpc_id }
    }
}
impl From<proto::DescribeLoadBalancersOutput> for model::DescribeLoadBalancersOutput {
    fn from(v: proto::DescribeLoadBalancersOutput) -> Self {
        Self { load_balancers: conv_vec(v.load_balancers) }
    }
}
impl From<model::DescribeLoadBalancersOutput> for proto::DescribeLoadBalancersOutput {
    fn from(v: model::DescribeLoadBalancersOutput) -> Self {
        Self { load_balancers: conv_vec(v.load_balancers) }
    }
}

impl From<proto::DescribeAutoScalingGroupsInput> for model::DescribeAutoScalingGroupsInput {
    fn from(v: proto::DescribeAutoScalingGroupsInput) -> Self {
        Self { auto_scaling_group_names: v.auto_scaling_group_names }
    }
}
impl From<model::DescribeAutoScalingGroupsInput> for proto::DescribeAutoScalingGroupsInput {
    fn from(v: model::DescribeAutoScalingGroupsInput) -> Self {
        Self { auto_scaling_group_names: v.auto_scaling_group_names }
    }
}
impl From<proto::AutoScalingGroup> for model::AutoScalingGroup {
    fn from(v: proto::AutoScalingGroup) -> Self {
        Self {
            auto_scaling_group_name: v.auto_scaling_group_name,
            min_size: v.min_size,
            max_size: v.max_size,
            desired_capacity: v.desired_capacity,
        }
    }
}
impl From<model::AutoScalingGroup> for proto::AutoScalingGroup {
    fn from(v: model::AutoScalingGroup) -> Self {
        Self {
            auto_scaling_group_name: v.auto_scaling_group_name,
            min_size: v.min_size,
            max_size: v.max_size,
            desired_capacity: v.desired_capacity,
        }
    }
}
impl From<proto::DescribeAutoScalingGroupsOutput> for model::DescribeAutoScalingGroupsOutput {
    fn from(v: proto::DescribeAutoScalingGroupsOutput) -> Self {
        Self { auto_scaling_groups: conv_vec(v.auto_scaling_groups) }
    }
}
impl From<model::DescribeAutoScalingGroupsOutput> for proto::DescribeAutoScalingGroupsOutput {
    fn from(v: model::DescribeAutoScalingGroupsOutput) -> Self {
        Self { auto_scaling_groups: conv_vec(v.auto_scaling_groups) }
    }
}

impl From<proto::DescribeDbInstancesInput> for model::DescribeDBInstancesInput {
    fn from(v: proto::DescribeDbInstancesInput) -> Self {
        Self { db_instance_identifier: opt_string(v.db_instance_identifier) }
    }
}
impl From<model::DescribeDBInstancesInput> for proto::DescribeDbInstancesInput {
    fn from(v: model::DescribeDBInstancesInput) -> Self {
        Self { db_instance_identifier: req_string(v.db_instance_identifier) }
    }
}
impl From<proto::DbInstance> for model::DbInstance {
    fn from(v: proto::DbInstance) -> Self {
        Self {
            db_instance_identifier: v.db_instance_identifier,
            engine: v.engine,
            status: v.status,
            vpc_id: v.vpc_id,
        }
    }
}
impl From<model::DbInstance> for proto::DbInstance {
    fn from(v: model::DbInstance) -> Self {
        Self {
            db_instance_identifier: v.db_instance_identifier,
            engine: v.engine,
            status: v.status,
            vpc_id: v.vpc_id,
        }
    }
}
impl From<proto::DescribeDbInstancesOutput> for model::DescribeDBInstancesOutput {
    fn from(v: proto::DescribeDbInstancesOutput) -> Self {
        Self { db_instances: conv_vec(v.db_instances) }
    }
}
impl From<model::DescribeDBInstancesOutput> for proto::DescribeDbInstancesOutput {
    fn from(v: model::DescribeDBInstancesOutput) -> Self {
        Self { db_instances: conv_vec(v.db_instances) }
    }
}

impl From<proto::ListClustersInput> for model::ListClustersInput {
    fn from(_: proto::ListClustersInput) -> Self {
        Self {}
    }
}
impl From<model::ListClustersInput> for proto::ListClustersInput {
    fn from(_: model::ListClustersInput) -> Self {
        Self {}
    }
}
impl From<proto::ListClustersOutput> for model::ListClustersOutput {
    fn from(v: proto::ListClustersOutput) -> Self {
        Self { cluster_arns: v.cluster_arns }
    }
}
impl From<model::ListClustersOutput> for proto::ListClustersOutput {
    fn from(v: model::ListClustersOutput) -> Self {
        Self { cluster_arns: v.cluster_arns }
    }
}

impl From<proto::ListServicesInput> for model::ListServicesInput {
    fn from(v: proto::ListServicesInput) -> Self {
        Self { cluster: v.cluster }
    }
}
impl From<model::ListServicesInput> for proto::ListServicesInput {
    fn from(v: model::ListServicesInput) -> Self {
        Self { cluster: v.cluster }
    }
}
impl From<proto::ListServicesOutput> for model::ListServicesOutput {
    fn from(v: proto::ListServicesOutput) -> Self {
        Self { service_arns: v.service_arns }
    }
}
impl From<model::ListServicesOutput> for proto::ListServicesOutput {
    fn from(v: model::ListServicesOutput) -> Self {
        Self { service_arns: v.service_arns }
    }
}

impl From<proto::DescribeServicesInput> for model::DescribeServicesInput {
    fn from(v: proto::DescribeServicesInput) -> Self {
        Self { cluster: v.cluster, services: v.services }
    }
}
impl From<model::DescribeServicesInput> for proto::DescribeServicesInput {
    fn from(v: model::DescribeServicesInput) -> Self {
        Self { cluster: v.cluster, services: v.services }
    }
}
impl From<proto::EcsService> for model::EcsService {
    fn from(v: proto::EcsService) -> Self {
        Self {
            service_name: v.service_name,
            status: v.status,
            desired_count: v.desired_count,
            running_count: v.running_count,
        }
    }
}
impl From<model::EcsService> for proto::EcsService {
    fn from(v: model::EcsService) -> Self {
        Self {
            service_name: v.service_name,
            status: v.status,
            desired_count: v.desired_count,
            running_count: v.running_count,
        }
    }
}
impl From<proto::DescribeServicesOutput> for model::DescribeServicesOutput {
    fn from(v: proto::DescribeServicesOutput) -> Self {
        Self { services: conv_vec(v.services) }
    }
}
impl From<model::DescribeServicesOutput> for proto::DescribeServicesOutput {
    fn from(v: model::DescribeServicesOutput) -> Self {
        Self { services: conv_vec(v.services) }
    }
}

impl From<proto::ListTasksInput> for model::ListTasksInput {
    fn from(v: proto::ListTasksInput) -> Self {
        Self { cluster: v.cluster, service_name: opt_string(v.service_name) }
    }
}
impl From<model::ListTasksInput> for proto::ListTasksInput {
    fn from(v: model::ListTasksInput) -> Self {
        Self { cluster: v.cluster, service_name: req_string(v.service_name) }
    }
}
impl From<proto::ListTasksOutput> for model::ListTasksOutput {
    fn from(v: proto::ListTasksOutput) -> Self {
        Self { task_arns: v.task_arns }
    }
}
impl From<model::ListTasksOutput> for proto::ListTasksOutput {
    fn from(v: model::ListTasksOutput) -> Self {
        Self { task_arns: v.task_arns }
    }
}

impl From<proto::DescribeTasksInput> for model::DescribeTasksInput {
    fn from(v: proto::DescribeTasksInput) -> Self {
        Self { cluster: v.cluster, tasks: v.tasks }
    }
}
impl From<model::DescribeTasksInput> for proto::DescribeTasksInput {
    fn from(v: model::DescribeTasksInput) -> Self {
        Self { cluster: v.cluster, tasks: v.tasks }
    }
}
impl From<proto::EcsTask> for model::EcsTask {
    fn from(v: proto::EcsTask) -> Self {
        Self {
            task_arn: v.task_arn,
            last_status: v.last_status,
            desired_status: v.desired_status,
        }
    }
}
impl From<model::EcsTask> for proto::EcsTask {
    fn from(v: model::EcsTask) -> Self {
        Self {
            task_arn: v.task_arn,
            last_status: v.last_status,
            desired_status: v.desired_status,
        }
    }
}
impl From<proto::DescribeTasksOutput> for model::DescribeTasksOutput {
    fn from(v: proto::DescribeTasksOutput) -> Self {
        Self { tasks: conv_vec(v.tasks) }
    }
}
impl From<model::DescribeTasksOutput> for proto::DescribeTasksOutput {
    fn from(v: model::DescribeTasksOutput) -> Self {
        Self { tasks: conv_vec(v.tasks) }
    }
}

impl From<proto::ListContainerInstancesInput> for model::ListContainerInstancesInput {
    fn from(v: proto::ListContainerInstancesInput) -> Self {
        Self { cluster: v.cluster }
    }
}
impl From<model::ListContainerInstancesInput> for proto::ListContainerInstancesInput {
    fn from(v: model::ListContainerInstancesInput) -> Self {
        Self { cluster: v.cluster }
    }
}
impl From<proto::ListContainerInstancesOutput> for model::ListContainerInstancesOutput {
    fn from(v: proto::ListContainerInstancesOutput) -> Self {
        Self { container_instance_arns: v.container_instance_arns }
    }
}
impl From<model::ListContainerInstancesOutput> for proto::ListContainerInstancesOutput {
    fn from(v: model::ListContainerInstancesOutput) -> Self {
        Self { container_instance_arns: v.container_instance_arns }
    }
}

impl From<proto::DescribeContainerInstancesInput> for model::DescribeContainerInstancesInput {
    fn from(v: proto::DescribeContainerInstancesInput) -> Self {
        Self { cluster: v.cluster, container_instances: v.container_instances }
    }
}
impl From<model::DescribeContainerInstancesInput> for proto::DescribeContainerInstancesInput {
    fn from(v: model::DescribeContainerInstancesInput) -> Self {
        Self { cluster: v.cluster, container_instances: v.container_instances }
    }
}
impl From<proto::ContainerInstance> for model::ContainerInstance {
    fn from(v: proto::ContainerInstance) -> Self {
        Self {
            container_instance_arn: v.container_instance_arn,
            ec2_instance_id: v.ec2_instance_id,
            status: v.status,
        }
    }
}
impl From<model::ContainerInstance> for proto::ContainerInstance {
    fn from(v: model::ContainerInstance) -> Self {
        Self {
            container_instance_arn: v.container_instance_arn,
            ec2_instance_id: v.ec2_instance_id,
            status: v.status,
        }
    }
}
impl From<proto::DescribeContainerInstancesOutput> for model::DescribeContainerInstancesOutput {
    fn from(v: proto::DescribeContainerInstancesOutput) -> Self {
        Self { container_instances: conv_vec(v.container_instances) }
    }
}
impl From<model::DescribeContainerInstancesOutput> for proto::DescribeContainerInstancesOutput {
    fn from(v: model::DescribeContainerInstancesOutput) -> Self {
        Self { container_instances: conv_vec(v.container_instances) }
    }
}

impl From<proto::DescribeTaskDefinitionInput> for model::DescribeTaskDefinitionInput {
    fn from(v: proto::DescribeTaskDefinitionInput) -> Self {
        Self { task_definition: v.task_definition }
    }
}
impl From<model::DescribeTaskDefinitionInput> for proto::DescribeTaskDefinitionInput {
    fn from(v: model::DescribeTaskDefinitionInput) -> Self {
        Self { task_definition: v.task_definition }
    }
}
impl From<proto::DescribeTaskDefinitionOutput> for model::DescribeTaskDefinitionOutput {
    fn from(v: proto::DescribeTaskDefinitionOutput) -> Self {
        Self {
            task_definition_arn: v.task_definition_arn,
            family: v.family,
            revision: v.revision,
        }
    }
}
impl From<model::DescribeTaskDefinitionOutput> for proto::DescribeTaskDefinitionOutput {
    fn from(v: model::DescribeTaskDefinitionOutput) -> Self {
        Self {
            task_definition_arn: v.task_definition_arn,
            family: v.family,
            revision: v.revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_instances_round_trips_through_proto() {
        let original = model::RequestInput::DescribeInstances(model::DescribeInstancesInput {
            filters: vec![model::Filter {
                name: "vpc-id".to_string(),
                values: vec!["vpc-34610651".to_string()],
            }],
            instance_ids: vec!["i-d3b62266".to_string()],
        });

        let proto_input = match original.clone() {
            model::RequestInput::DescribeInstances(v) => proto::RequestInput {
                variant: Some(proto::request_input::Variant::DescribeInstances(v.into())),
            },
            _ => unreachable!(),
        };

        let round_tripped = request_input_from_proto(proto_input).unwrap();
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn absent_oneof_variant_is_unknown_variant() {
        let proto_input = proto::RequestInput { variant: None };
        let err = request_input_from_proto(proto_input).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownVariant { .. }));
    }

    #[test]
    fn user_round_trips_with_empty_email_as_none() {
        let original = model::User {
            customer_id: "cust-1".to_string(),
            id: "user-1".to_string(),
            email: None,
            active: true,
        };
        let proto_user: proto::User = original.clone().into();
        assert_eq!(proto_user.email, "");
        let back: model::User = proto_user.into();
        assert_eq!(back, original);
    }
}
