use thiserror::Error;

/// Possible errors from assembling the Kafka (Admin) Client configuration.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ClientConfigError {
    /// A `-X` entry does not contain a `=`.
    #[error("Format expected for kafka configs: -X KEY=VALUE (got '{0}')")]
    Format(String),

    /// The requested cluster profile is not one of the known ones.
    #[error("Unsupported cluster profile '{0}' (supported: {1})")]
    UnsupportedProfile(String, String),
}

pub type ClientConfigResult<T> = Result<T, ClientConfigError>;
