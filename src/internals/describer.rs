use rdkafka::types::RDKafkaErrorCode;

use crate::kafka_types::{ConfigEntry, ResourceDescriptor};
use crate::topic_config::DescribeResult;

/// Outcome for one of the resources passed to [`Describer::describe_configs`].
///
/// The whole call can succeed while a single resource fails: in that case its
/// entry carries the error reported by the Cluster.
pub type ResourceConfigResult = Result<Vec<ConfigEntry>, RDKafkaErrorCode>;

/// Something that can describe the configuration of Kafka resources.
///
/// This is the only operation the rest of the program needs from a Kafka (Admin) Client.
pub trait Describer {
    /// Describe the configuration of each of the given `resources`.
    ///
    /// The returned results are expected to be one per requested resource,
    /// but callers should not assume so.
    async fn describe_configs(
        &self,
        resources: &[ResourceDescriptor],
    ) -> DescribeResult<Vec<ResourceConfigResult>>;
}
