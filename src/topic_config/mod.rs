// Inner modules
mod admin;
mod errors;

use std::slice;

use crate::internals::Describer;
use crate::kafka_types::{ConfigEntry, ResourceDescriptor};

// Exports
pub use admin::AdminDescriber;
pub use errors::{DescribeError, DescribeResult};

/// Describe the configuration of exactly one `resource`.
///
/// The returned entries are in whatever order the Cluster reported them.
pub async fn describe_resource<D: Describer>(
    describer: &D,
    resource: &ResourceDescriptor,
) -> DescribeResult<Vec<ConfigEntry>> {
    debug!("Describing configs of {resource}");

    let results = describer.describe_configs(slice::from_ref(resource)).await?;
    let entries = single_result(results)?
        .map_err(|code| DescribeError::ResourceFailed(resource.to_string(), code))?;

    info!("Received {} config entries for {resource}", entries.len());
    Ok(entries)
}

fn single_result<T>(mut results: Vec<T>) -> DescribeResult<T> {
    let count = results.len();
    match results.pop() {
        Some(res) if count == 1 => Ok(res),
        _ => Err(DescribeError::UnexpectedResultCount(count)),
    }
}

#[cfg(test)]
mod test {
    use rdkafka::error::KafkaError;
    use rdkafka::types::RDKafkaErrorCode;

    use super::{describe_resource, single_result, DescribeError, DescribeResult};
    use crate::internals::{Describer, ResourceConfigResult};
    use crate::kafka_types::{ConfigEntry, ResourceDescriptor};

    /// Replies to any request with a canned response.
    struct FakeDescriber {
        response: fn() -> DescribeResult<Vec<ResourceConfigResult>>,
    }

    impl Describer for FakeDescriber {
        async fn describe_configs(
            &self,
            resources: &[ResourceDescriptor],
        ) -> DescribeResult<Vec<ResourceConfigResult>> {
            assert_eq!(resources, &[ResourceDescriptor::topic("orders")]);
            (self.response)()
        }
    }

    fn example_entries() -> Vec<ConfigEntry> {
        vec![ConfigEntry::new("retention.ms", "604800000"), ConfigEntry::new("cleanup.policy", "delete")]
    }

    #[test]
    fn single_result_count() {
        assert_eq!(single_result(vec![7]).unwrap(), 7);
        assert!(matches!(single_result::<u8>(vec![]), Err(DescribeError::UnexpectedResultCount(0))));
        assert!(matches!(single_result(vec![1, 2]), Err(DescribeError::UnexpectedResultCount(2))));
    }

    #[tokio::test]
    async fn describe_one_topic() {
        let describer = FakeDescriber {
            response: || Ok(vec![Ok(example_entries())]),
        };

        let entries = describe_resource(&describer, &ResourceDescriptor::topic("orders")).await.unwrap();
        assert_eq!(entries, example_entries());
    }

    #[tokio::test]
    async fn no_results_is_invariant_violation() {
        let describer = FakeDescriber {
            response: || Ok(vec![]),
        };

        let res = describe_resource(&describer, &ResourceDescriptor::topic("orders")).await;
        assert!(matches!(res, Err(DescribeError::UnexpectedResultCount(0))));
    }

    #[tokio::test]
    async fn many_results_is_invariant_violation() {
        let describer = FakeDescriber {
            response: || Ok(vec![Ok(example_entries()), Ok(vec![])]),
        };

        let res = describe_resource(&describer, &ResourceDescriptor::topic("orders")).await;
        assert!(matches!(res, Err(DescribeError::UnexpectedResultCount(2))));
    }

    #[tokio::test]
    async fn resource_error_is_surfaced() {
        let describer = FakeDescriber {
            response: || Ok(vec![Err(RDKafkaErrorCode::UnknownTopicOrPartition)]),
        };

        match describe_resource(&describer, &ResourceDescriptor::topic("orders")).await {
            Err(DescribeError::ResourceFailed(resource, code)) => {
                assert_eq!(resource, "Topic 'orders'");
                assert_eq!(code, RDKafkaErrorCode::UnknownTopicOrPartition);
            },
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn request_error_is_surfaced() {
        let describer = FakeDescriber {
            response: || Err(DescribeError::Request(KafkaError::AdminOp(RDKafkaErrorCode::BrokerTransportFailure))),
        };

        let res = describe_resource(&describer, &ResourceDescriptor::topic("orders")).await;
        assert!(matches!(res, Err(DescribeError::Request(_))));
    }
}
