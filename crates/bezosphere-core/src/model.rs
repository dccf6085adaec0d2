//! Wire and internal data shapes: users, sessions, and the closed request/response variant set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the RPC caller, as carried on every [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub customer_id: String,
    pub id: String,
    pub email: Option<String>,
    pub active: bool,
}

impl User {
    /// Mirrors the source's `user.Validate()` gate: both ids present and the account active.
    pub fn is_valid(&self) -> bool {
        !self.customer_id.is_empty() && !self.id.is_empty() && self.active
    }
}

/// A short-lived cloud credential triple, as handed back by the credential broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

/// A cloud-SDK session bound to a region and a credential triple. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudSession {
    pub region: String,
    pub credentials: CloudCredentials,
}

/// Inbound RPC request: identity, scope, freshness bound, and the tagged input variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub user: Option<User>,
    pub region: String,
    pub vpc_id: String,
    pub max_age: Option<DateTime<Utc>>,
    pub input: Option<RequestInput>,
}

/// Outbound RPC response: the tagged output variant paired one-to-one with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub output: ResponseOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    pub values: Vec<String>,
}

macro_rules! variant_set {
    (
        $(#[$input_meta:meta])*
        enum $input_enum:ident { $($tag:ident($input_ty:ident)),+ $(,)? }
        $(#[$output_meta:meta])*
        enum $output_enum:ident { $($out_tag:ident($output_ty:ident)),+ $(,)? }
    ) => {
        $(#[$input_meta])*
        pub enum $input_enum {
            $($tag($input_ty)),+
        }

        $(#[$output_meta])*
        pub enum $output_enum {
            $($out_tag($output_ty)),+
        }

        impl $input_enum {
            /// Tag name as persisted in `resources.request_type`.
            pub fn tag(&self) -> &'static str {
                match self {
                    $(Self::$tag(_) => stringify!($tag)),+
                }
            }
        }

        impl $output_enum {
            /// Tag name as persisted in `resources.response_type`.
            pub fn tag(&self) -> &'static str {
                match self {
                    $(Self::$out_tag(_) => stringify!($out_tag)),+
                }
            }
        }
    };
}

variant_set! {
    /// The closed tagged union of request variants (spec's Variant Registry domain).
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum RequestInput {
        ListMetrics(ListMetricsInput),
        GetMetricStatistics(GetMetricStatisticsInput),
        DescribeAlarms(DescribeAlarmsInput),
        DescribeAlarmsForMetric(DescribeAlarmsForMetricInput),
        DescribeInstances(DescribeInstancesInput),
        DescribeSecurityGroups(DescribeSecurityGroupsInput),
        DescribeSubnets(DescribeSubnetsInput),
        DescribeVpcs(DescribeVpcsInput),
        DescribeRouteTables(DescribeRouteTablesInput),
        DescribeLoadBalancers(DescribeLoadBalancersInput),
        DescribeAutoScalingGroups(DescribeAutoScalingGroupsInput),
        DescribeDBInstances(DescribeDBInstancesInput),
        ListClusters(ListClustersInput),
        ListServices(ListServicesInput),
        DescribeServices(DescribeServicesInput),
        ListTasks(ListTasksInput),
        DescribeTasks(DescribeTasksInput),
        ListContainerInstances(ListContainerInstancesInput),
        DescribeContainerInstances(DescribeContainerInstancesInput),
        DescribeTaskDefinition(DescribeTaskDefinitionInput),
    }

    /// The closed tagged union of response variants, paired one-to-one with [`RequestInput`].
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum ResponseOutput {
        ListMetrics(ListMetricsOutput),
        GetMetricStatistics(GetMetricStatisticsOutput),
        DescribeAlarms(DescribeAlarmsOutput),
        DescribeAlarmsForMetric(DescribeAlarmsForMetricOutput),
        DescribeInstances(DescribeInstancesOutput),
        DescribeSecurityGroups(DescribeSecurityGroupsOutput),
        DescribeSubnets(DescribeSubnetsOutput),
        DescribeVpcs(DescribeVpcsOutput),
        DescribeRouteTables(DescribeRouteTablesOutput),
        DescribeLoadBalancers(DescribeLoadBalancersOutput),
        DescribeAutoScalingGroups(DescribeAutoScalingGroupsOutput),
        DescribeDBInstances(DescribeDBInstancesOutput),
        ListClusters(ListClustersOutput),
        ListServices(ListServicesOutput),
        DescribeServices(DescribeServicesOutput),
        ListTasks(ListTasksOutput),
        DescribeTasks(DescribeTasksOutput),
        ListContainerInstances(ListContainerInstancesOutput),
        DescribeContainerInstances(DescribeContainerInstancesOutput),
        DescribeTaskDefinition(DescribeTaskDefinitionOutput),
    }
}

macro_rules! plain_struct {
    ($name:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            $(pub $field: $ty),*
        }
    };
}

plain_struct!(ListMetricsInput { namespace: Option<String>, metric_name: Option<String> });
plain_struct!(ListMetricsOutput { metrics: Vec<MetricIdentity> });
plain_struct!(MetricIdentity { namespace: String, metric_name: String, dimensions: Vec<Filter> });

plain_struct!(GetMetricStatisticsInput {
    namespace: String,
    metric_name: String,
    dimensions: Vec<Filter>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    period_secs: i64,
    statistics: Vec<String>,
});
plain_struct!(GetMetricStatisticsOutput { datapoints: Vec<Datapoint> });
plain_struct!(Datapoint { timestamp: DateTime<Utc>, average: f64, unit: String });

plain_struct!(DescribeAlarmsInput { alarm_names: Vec<String>, state_value: Option<String> });
plain_struct!(DescribeAlarmsOutput { alarms: Vec<Alarm> });
plain_struct!(DescribeAlarmsForMetricInput { namespace: String, metric_name: String, dimensions: Vec<Filter> });
plain_struct!(DescribeAlarmsForMetricOutput { alarms: Vec<Alarm> });
plain_struct!(Alarm { alarm_name: String, state_value: String, metric_name: String, namespace: String });

plain_struct!(DescribeInstancesInput { filters: Vec<Filter>, instance_ids: Vec<String> });
plain_struct!(DescribeInstancesOutput { instances: Vec<Instance> });
plain_struct!(Instance { instance_id: String, instance_type: String, vpc_id: String, state: String });

plain_struct!(DescribeSecurityGroupsInput { filters: Vec<Filter>, group_ids: Vec<String> });
plain_struct!(DescribeSecurityGroupsOutput { security_groups: Vec<SecurityGroup> });
plain_struct!(SecurityGroup { group_id: String, group_name: String, vpc_id: String });

plain_struct!(DescribeSubnetsInput { filters: Vec<Filter>, subnet_ids: Vec<String> });
plain_struct!(DescribeSubnetsOutput { subnets: Vec<Subnet> });
plain_struct!(Subnet { subnet_id: String, vpc_id: String, cidr_block: String, availability_zone: String });

plain_struct!(DescribeVpcsInput { filters: Vec<Filter>, vpc_ids: Vec<String> });
plain_struct!(DescribeVpcsOutput { vpcs: Vec<Vpc> });
plain_struct!(Vpc { vpc_id: String, cidr_block: String, is_default: bool });

plain_struct!(DescribeRouteTablesInput { filters: Vec<Filter>, route_table_ids: Vec<String> });
plain_struct!(DescribeRouteTablesOutput { route_tables: Vec<RouteTable> });
plain_struct!(RouteTable { route_table_id: String, vpc_id: String });

plain_struct!(DescribeLoadBalancersInput { load_balancer_names: Vec<String> });
plain_struct!(DescribeLoadBalancersOutput { load_balancers: Vec<LoadBalancer> });
plain_struct!(LoadBalancer { load_balancer_name: String, dns_name: String, vpc_id: String });

plain_struct!(DescribeAutoScalingGroupsInput { auto_scaling_group_names: Vec<String> });
plain_struct!(DescribeAutoScalingGroupsOutput { auto_scaling_groups: Vec<AutoScalingGroup> });
plain_struct!(AutoScalingGroup { auto_scaling_group_name: String, min_size: i32, max_size: i32, desired_capacity: i32 });

plain_struct!(DescribeDBInstancesInput { db_instance_identifier: Option<String> });
plain_struct!(DescribeDBInstancesOutput { db_instances: Vec<DbInstance> });
plain_struct!(DbInstance { db_instance_identifier: String, engine: String, status: String, vpc_id: String });

plain_struct!(ListClustersInput {});
plain_struct!(ListClustersOutput { cluster_arns: Vec<String> });

plain_struct!(ListServicesInput { cluster: String });
plain_struct!(ListServicesOutput { service_arns: Vec<String> });

plain_struct!(DescribeServicesInput { cluster: String, services: Vec<String> });
plain_struct!(DescribeServicesOutput { services: Vec<EcsService> });
plain_struct!(EcsService { service_name: String, status: String, desired_count: i32, running_count: i32 });

plain_struct!(ListTasksInput { cluster: String, service_name: Option<String> });
plain_struct!(ListTasksOutput { task_arns: Vec<String> });

plain_struct!(DescribeTasksInput { cluster: String, tasks: Vec<String> });
plain_struct!(DescribeTasksOutput { tasks: Vec<EcsTask> });
plain_struct!(EcsTask { task_arn: String, last_status: String, desired_status: String });

plain_struct!(ListContainerInstancesInput { cluster: String });
plain_struct!(ListContainerInstancesOutput { container_instance_arns: Vec<String> });

plain_struct!(DescribeContainerInstancesInput { cluster: String, container_instances: Vec<String> });
plain_struct!(DescribeContainerInstancesOutput { container_instances: Vec<ContainerInstance> });
plain_struct!(ContainerInstance { container_instance_arn: String, ec2_instance_id: String, status: String });

plain_struct!(DescribeTaskDefinitionInput { task_definition: String });
plain_struct!(DescribeTaskDefinitionOutput { task_definition_arn: String, family: String, revision: i32 });
