use rdkafka::admin;

/// A single configuration setting of a Kafka resource, as reported by the Cluster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct ConfigEntry {
    pub name: String,

    /// Value in effect. Empty if the Cluster withholds it (e.g. sensitive settings).
    pub value: String,
}

impl ConfigEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<&admin::ConfigEntry> for ConfigEntry {
    fn from(e: &admin::ConfigEntry) -> Self {
        ConfigEntry {
            name: e.name.clone(),
            value: e.value.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use rdkafka::admin::{self, ConfigSource};

    use super::ConfigEntry;

    fn admin_entry(name: &str, value: Option<&str>) -> admin::ConfigEntry {
        admin::ConfigEntry {
            name: name.to_string(),
            value: value.map(str::to_string),
            source: ConfigSource::DynamicTopic,
            is_read_only: false,
            is_default: false,
            is_sensitive: value.is_none(),
        }
    }

    #[test]
    fn from_admin_entry() {
        let e = ConfigEntry::from(&admin_entry("retention.ms", Some("604800000")));

        assert_eq!(e, ConfigEntry::new("retention.ms", "604800000"));
    }

    #[test]
    fn withheld_value_is_empty() {
        let e = ConfigEntry::from(&admin_entry("sasl.jaas.config", None));

        assert_eq!(e.name, "sasl.jaas.config");
        assert_eq!(e.value, "");
    }
}
