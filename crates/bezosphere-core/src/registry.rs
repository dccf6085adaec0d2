//! Variant Registry (C1): the closed table of request/response pairs and their dispatch policy.

use thiserror::Error;

use crate::model::RequestInput;

/// Failures surfaced by registry lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A request tag arrived that does not match any known variant.
    #[error("unknown request variant: {tag}")]
    UnknownVariant { tag: String },
}

/// `PairFor`/`Cacheable` as specified: every entry in this match arm list is one variant.
/// `GetMetricStatistics` is the sole non-cacheable variant.
pub fn cacheable(input: &RequestInput) -> bool {
    !matches!(input, RequestInput::GetMetricStatistics(_))
}

/// Response tag paired one-to-one with the given request tag. Since `RequestInput` and
/// `ResponseOutput` share variant names, the response tag is just the request tag restated;
/// this function exists as the named registry operation the pipeline calls.
pub fn response_tag(input: &RequestInput) -> &'static str {
    input.tag()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    fn all_variants() -> Vec<RequestInput> {
        vec![
            RequestInput::ListMetrics(ListMetricsInput::default()),
            RequestInput::GetMetricStatistics(GetMetricStatisticsInput::default()),
            RequestInput::DescribeAlarms(DescribeAlarmsInput::default()),
            RequestInput::DescribeAlarmsForMetric(DescribeAlarmsForMetricInput::default()),
            RequestInput::DescribeInstances(DescribeInstancesInput::default()),
            RequestInput::DescribeSecurityGroups(DescribeSecurityGroupsInput::default()),
            RequestInput::DescribeSubnets(DescribeSubnetsInput::default()),
            RequestInput::DescribeVpcs(DescribeVpcsInput::default()),
            RequestInput::DescribeRouteTables(DescribeRouteTablesInput::default()),
            RequestInput::DescribeLoadBalancers(DescribeLoadBalancersInput::default()),
            RequestInput::DescribeAutoScalingGroups(DescribeAutoScalingGroupsInput::default()),
            RequestInput::DescribeDBInstances(DescribeDBInstancesInput::default()),
            RequestInput::ListClusters(ListClustersInput::default()),
            RequestInput::ListServices(ListServicesInput::default()),
            RequestInput::DescribeServices(DescribeServicesInput::default()),
            RequestInput::ListTasks(ListTasksInput::default()),
            RequestInput::DescribeTasks(DescribeTasksInput::default()),
            RequestInput::ListContainerInstances(ListContainerInstancesInput::default()),
            RequestInput::DescribeContainerInstances(DescribeContainerInstancesInput::default()),
            RequestInput::DescribeTaskDefinition(DescribeTaskDefinitionInput::default()),
        ]
    }

    #[test]
    fn exactly_one_variant_is_non_cacheable() {
        let non_cacheable: Vec<_> = all_variants().iter().filter(|v| !cacheable(v)).collect();
        assert_eq!(non_cacheable.len(), 1);
        assert!(matches!(
            all_variants()
                .into_iter()
                .find(|v| !cacheable(v))
                .unwrap(),
            RequestInput::GetMetricStatistics(_)
        ));
    }

    #[test]
    fn every_variant_pairs_to_its_own_tag() {
        for variant in all_variants() {
            assert_eq!(response_tag(&variant), variant.tag());
        }
    }
}
