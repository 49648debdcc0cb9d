use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser};
use rdkafka::ClientConfig;

use crate::client_config::{self, ClientConfigResult, ClientConfigSources, KeyValueFlags};
use crate::constants::{AUTH_DIR_ENV_VAR, DEFAULT_AUTH_DIR};
use crate::kafka_types::ResourceDescriptor;

/// Command Line Interface, defined via the declarative,
/// `derive` based functionality of the `clap` crate.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("logging_flags")
        .required(false)
        .multiple(false)
        .args(["verbose", "quiet"]),
))]
pub struct Cli {
    /// Topic to describe the configuration of.
    #[arg(short, long, value_name = "TOPIC", value_parser = NonEmptyStringValueParser::new())]
    pub topic: String,

    // ------------------------------------------------------------------ Admin Client configuration
    /// Additional configuration used by the internal Kafka (Admin) Client (format: 'KEY=VALUE').
    ///
    /// To set multiple configurations keys, use this argument multiple times:
    /// when the same key is set more than once, the last one wins.
    /// See: https://github.com/edenhill/librdkafka/blob/master/CONFIGURATION.md.
    #[arg(short = 'X', long = "config", value_name = "KEY=VALUE", verbatim_doc_comment)]
    pub kafka_config: Vec<String>,

    /// Predefined Kafka Cluster connection profile (e.g. 'aiven', 'local').
    ///
    /// Sets 'bootstrap.servers', 'security.protocol' and, if the profile uses certificates,
    /// the CA, certificate and key locations inside '--authdir'.
    #[arg(short, long = "cluster", value_name = "PROFILE", verbatim_doc_comment)]
    pub cluster: Option<String>,

    /// Directory containing the credential files ('cafile', 'certfile', 'keyfile') of '--cluster'.
    #[arg(
        short,
        long = "authdir",
        value_name = "DIR",
        env = AUTH_DIR_ENV_VAR,
        default_value = DEFAULT_AUTH_DIR
    )]
    pub auth_dir: PathBuf,

    /// Initial Kafka Brokers to connect to (format: 'HOST:PORT,...').
    ///
    /// Equivalent to '--config=bootstrap.servers=host:port,...'.
    #[arg(short, long = "brokers", value_name = "BOOTSTRAP_BROKERS")]
    pub bootstrap_brokers: Option<String>,

    /// Client identifier used by the internal Kafka (Admin) Client.
    ///
    /// Equivalent to '--config=client.id=my-client-id'.
    #[arg(long = "client-id", value_name = "CLIENT_ID", default_value = env!("CARGO_PKG_NAME"))]
    pub client_id: String,

    /// Verbose logging.
    ///
    /// * none    = 'WARN'
    /// * '-v'    = 'INFO'
    /// * '-vv'   = 'DEBUG'
    /// * '-vvv'  = 'TRACE'
    ///
    /// Alternatively, set environment variable 'TOPIC_CONFIG_LOG=(ERROR|WARN|INFO|DEBUG|TRACE|OFF)'.
    #[arg(short, long, action = clap::ArgAction::Count, verbatim_doc_comment)]
    pub verbose: u8,

    /// Quiet logging.
    ///
    /// * none    = 'WARN'
    /// * '-q'    = 'ERROR'
    /// * '-qq'   = 'OFF'
    ///
    /// Alternatively, set environment variable 'TOPIC_CONFIG_LOG=(ERROR|WARN|INFO|DEBUG|TRACE|OFF)'.
    #[arg(short, long, action = clap::ArgAction::Count, verbatim_doc_comment)]
    pub quiet: u8,
}

/// Everything needed to run, assembled once from the [`Cli`] (and the environment).
#[derive(Debug)]
pub struct AppConfig {
    pub resource: ResourceDescriptor,
    pub client_config: ClientConfig,
}

impl Cli {
    pub fn verbosity_level(&self) -> i8 {
        self.verbose as i8 - self.quiet as i8
    }

    pub fn overrides(&self) -> KeyValueFlags {
        let mut flags = KeyValueFlags::new();
        for raw in &self.kafka_config {
            flags.append(raw.as_str());
        }
        flags
    }

    pub fn build_client_config(&self) -> ClientConfigResult<ClientConfig> {
        let overrides = self.overrides();
        if !overrides.is_empty() {
            debug!("Kafka config overrides: {overrides}");
        }

        client_config::assemble(&ClientConfigSources {
            profile: self.cluster.as_deref(),
            auth_dir: &self.auth_dir,
            bootstrap_brokers: self.bootstrap_brokers.as_deref(),
            client_id: &self.client_id,
            overrides: &overrides,
        })
    }

    pub fn build_app_config(&self) -> ClientConfigResult<AppConfig> {
        Ok(AppConfig {
            resource: ResourceDescriptor::topic(self.topic.clone()),
            client_config: self.build_client_config()?,
        })
    }
}
