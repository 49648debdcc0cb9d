use const_format::concatcp;

/// Prefix shared by the environment variables this binary reads.
const ENV_PREFIX: &str = "TOPIC_CONFIG";

/// Environment variable that overrides the logging filter (`env_logger` syntax).
pub(crate) const LOG_ENV_VAR: &str = concatcp!(ENV_PREFIX, "_LOG");

/// Environment variable providing the default for `--authdir`.
pub(crate) const AUTH_DIR_ENV_VAR: &str = "KAFKA_AUTH_DIR";

/// Used when neither `--authdir` nor [`AUTH_DIR_ENV_VAR`] are set.
pub(crate) const DEFAULT_AUTH_DIR: &str = ".";

/// Base-name of the CA certificate, inside the auth directory.
pub(crate) const CA_FILE: &str = "cafile";

/// Base-name of the client certificate, inside the auth directory.
pub(crate) const CERT_FILE: &str = "certfile";

/// Base-name of the client private key, inside the auth directory.
pub(crate) const KEY_FILE: &str = "keyfile";
