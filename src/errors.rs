use std::io;

use thiserror::Error;

use crate::client_config::ClientConfigError;
use crate::topic_config::DescribeError;

/// Anything that can make a run fail.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ClientConfig(#[from] ClientConfigError),

    #[error(transparent)]
    Describe(#[from] DescribeError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    /// Process exit code for this error, following `sysexits.h` conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ClientConfig(_) => exit_code::CONFIG_ERROR,
            AppError::Describe(DescribeError::ClientConstruction(_)) => exit_code::CONFIG_ERROR,
            AppError::Describe(DescribeError::Request(_)) => exit_code::SERVICE_UNAVAILABLE,
            AppError::Describe(DescribeError::ResourceFailed(..)) => exit_code::SERVICE_UNAVAILABLE,
            AppError::Describe(DescribeError::UnexpectedResultCount(_)) => exit_code::SOFTWARE_ERROR,
            AppError::Output(_) => exit_code::IO_ERROR,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use std::io;

    use rdkafka::types::RDKafkaErrorCode;

    use super::AppError;
    use crate::client_config::ClientConfigError;
    use crate::topic_config::DescribeError;

    #[test]
    fn exit_codes() {
        assert_eq!(AppError::from(ClientConfigError::Format("x".into())).exit_code(), exit_code::CONFIG_ERROR);
        assert_eq!(
            AppError::from(DescribeError::ResourceFailed("Topic 'x'".into(), RDKafkaErrorCode::UnknownTopicOrPartition))
                .exit_code(),
            exit_code::SERVICE_UNAVAILABLE
        );
        assert_eq!(AppError::from(DescribeError::UnexpectedResultCount(2)).exit_code(), exit_code::SOFTWARE_ERROR);
        assert_eq!(AppError::from(io::Error::from(io::ErrorKind::BrokenPipe)).exit_code(), exit_code::IO_ERROR);
    }

    #[test]
    fn messages_are_forwarded() {
        assert_eq!(
            AppError::from(DescribeError::UnexpectedResultCount(0)).to_string(),
            "Expected 1 result, got 0"
        );
        assert_eq!(
            AppError::from(ClientConfigError::Format("NOEQUALSIGN".into())).to_string(),
            "Format expected for kafka configs: -X KEY=VALUE (got 'NOEQUALSIGN')"
        );
    }
}
