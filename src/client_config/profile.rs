use std::path::Path;

use super::errors::{ClientConfigError, ClientConfigResult};
use super::kv_flags::KVPair;
use crate::constants::{CA_FILE, CERT_FILE, KEY_FILE};

/// Predefined connection parameters for a Kafka Cluster, selected by name via `--cluster`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterProfile {
    pub name: &'static str,

    /// Value of `bootstrap.servers`.
    pub bootstrap_servers: &'static str,

    /// Value of `security.protocol`.
    pub security_protocol: &'static str,

    /// If `true`, CA, certificate and key are read from the auth directory.
    pub uses_certificates: bool,
}

const PROFILES: &[ClusterProfile] = &[
    ClusterProfile {
        name: "aiven",
        bootstrap_servers: "kafka-aiven.aivencloud.com:24949",
        security_protocol: "ssl",
        uses_certificates: true,
    },
    ClusterProfile {
        name: "local",
        bootstrap_servers: "localhost:9092",
        security_protocol: "plaintext",
        uses_certificates: false,
    },
];

impl ClusterProfile {
    /// Find the profile called `name`.
    ///
    /// An unknown name is an error: there is no fallback profile.
    pub fn lookup(name: &str) -> ClientConfigResult<&'static ClusterProfile> {
        PROFILES.iter().find(|p| p.name == name).ok_or_else(|| {
            ClientConfigError::UnsupportedProfile(name.to_string(), Self::names().join(", "))
        })
    }

    pub fn names() -> Vec<&'static str> {
        PROFILES.iter().map(|p| p.name).collect()
    }

    /// Expand into client configuration entries.
    ///
    /// Certificate paths are `auth_dir` joined with the fixed base-names
    /// [`CA_FILE`], [`CERT_FILE`] and [`KEY_FILE`].
    pub fn expand(&self, auth_dir: &Path) -> Vec<KVPair> {
        let mut entries = vec![
            ("bootstrap.servers".to_string(), self.bootstrap_servers.to_string()),
            ("security.protocol".to_string(), self.security_protocol.to_string()),
        ];

        if self.uses_certificates {
            for (key, file) in [
                ("ssl.ca.location", CA_FILE),
                ("ssl.certificate.location", CERT_FILE),
                ("ssl.key.location", KEY_FILE),
            ] {
                entries.push((key.to_string(), auth_dir.join(file).to_string_lossy().into_owned()));
            }
        }

        entries
    }
}
