use rdkafka::error::KafkaError;
use rdkafka::types::RDKafkaErrorCode;
use thiserror::Error;

/// Possible errors from describing the configuration of a Kafka resource.
#[derive(Error, Debug)]
pub enum DescribeError {
    /// The Kafka (Admin) Client rejected the assembled configuration.
    #[error("Failed to create Admin Client: {0}")]
    ClientConstruction(KafkaError),

    /// The describe request failed as a whole.
    #[error("Failed to describe configs: {0}")]
    Request(KafkaError),

    /// The Cluster reported an error for the requested resource.
    #[error("Failed to describe configs of {0}: {1}")]
    ResourceFailed(String, RDKafkaErrorCode),

    /// A request for one resource did not produce exactly one result.
    #[error("Expected 1 result, got {0}")]
    UnexpectedResultCount(usize),
}

pub type DescribeResult<T> = Result<T, DescribeError>;
