use std::fmt;

use rdkafka::admin::ResourceSpecifier;

/// Kind of Kafka resource whose configuration can be described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Topic,
}

/// Identifies exactly one Kafka resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    pub name: String,
}

impl ResourceDescriptor {
    pub fn topic(name: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Topic,
            name: name.into(),
        }
    }

    /// Borrow as the specifier expected by [`rdkafka::admin::AdminClient`].
    pub fn as_specifier(&self) -> ResourceSpecifier<'_> {
        match self.kind {
            ResourceKind::Topic => ResourceSpecifier::Topic(&self.name),
        }
    }
}

impl fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ResourceKind::Topic => write!(f, "Topic '{}'", self.name),
        }
    }
}
