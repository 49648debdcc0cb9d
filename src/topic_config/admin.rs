use rdkafka::admin::{AdminClient, AdminOptions, ResourceSpecifier};
use rdkafka::client::DefaultClientContext;
use rdkafka::ClientConfig;

use super::errors::{DescribeError, DescribeResult};
use crate::internals::{Describer, ResourceConfigResult};
use crate::kafka_types::{ConfigEntry, ResourceDescriptor};

/// [`Describer`] backed by an rdkafka [`AdminClient`].
pub struct AdminDescriber {
    admin_client: AdminClient<DefaultClientContext>,
}

impl AdminDescriber {
    /// Create a new [`AdminDescriber`].
    ///
    /// # Arguments
    ///
    /// * `client_config` - Kafka admin client configuration
    pub fn new(client_config: &ClientConfig) -> DescribeResult<Self> {
        let admin_client: AdminClient<DefaultClientContext> =
            client_config.create().map_err(DescribeError::ClientConstruction)?;

        Ok(Self {
            admin_client,
        })
    }
}

impl Describer for AdminDescriber {
    /// Issue a single `DescribeConfigs` request, using the client default timeouts.
    async fn describe_configs(
        &self,
        resources: &[ResourceDescriptor],
    ) -> DescribeResult<Vec<ResourceConfigResult>> {
        let specifiers: Vec<ResourceSpecifier> = resources.iter().map(|r| r.as_specifier()).collect();

        let results = self
            .admin_client
            .describe_configs(&specifiers, &AdminOptions::new())
            .await
            .map_err(DescribeError::Request)?;

        Ok(results
            .into_iter()
            .map(|res| res.map(|cr| cr.entries.iter().map(ConfigEntry::from).collect()))
            .collect())
    }
}
