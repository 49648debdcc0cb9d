// Inner modules
mod errors;
mod kv_flags;
mod profile;

use std::path::Path;

use rdkafka::ClientConfig;

use profile::ClusterProfile;

// Exports
pub use errors::{ClientConfigError, ClientConfigResult};
pub use kv_flags::KeyValueFlags;

/// Everything the Kafka (Admin) Client configuration is assembled from.
#[derive(Debug, Clone)]
pub struct ClientConfigSources<'a> {
    /// Name of a [`ClusterProfile`], if any.
    pub profile: Option<&'a str>,

    /// Directory holding the credential files of a [`ClusterProfile`].
    pub auth_dir: &'a Path,

    /// Equivalent to `-X bootstrap.servers=...`.
    pub bootstrap_brokers: Option<&'a str>,

    /// Equivalent to `-X client.id=...`.
    pub client_id: &'a str,

    /// Free-form `-X KEY=VALUE` entries.
    pub overrides: &'a KeyValueFlags,
}

/// Assemble a [`ClientConfig`] from the given sources.
///
/// Sources are applied in this order, each overwriting keys set by the previous:
/// profile, bootstrap brokers, client identifier, then `-X` entries as they appeared.
pub fn assemble(sources: &ClientConfigSources) -> ClientConfigResult<ClientConfig> {
    // Parse and resolve everything first, so that no partial configuration is produced
    let profile_entries = match sources.profile {
        Some(name) => ClusterProfile::lookup(name)?.expand(sources.auth_dir),
        None => Vec::new(),
    };
    let overrides = sources.overrides.pairs()?;

    let mut config = ClientConfig::new();
    for (k, v) in profile_entries {
        config.set(k, v);
    }
    if let Some(brokers) = sources.bootstrap_brokers {
        config.set("bootstrap.servers", brokers);
    }
    config.set("client.id", sources.client_id);
    for (k, v) in overrides {
        config.set(k, v);
    }

    trace!("Created:\n{:#?}", config);
    Ok(config)
}
