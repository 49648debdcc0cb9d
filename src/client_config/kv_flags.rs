use std::fmt;

use super::errors::{ClientConfigError, ClientConfigResult};

/// A simple (key,value) pair of `String`s, parsed from a `KEY=VALUE` argument via [`parse_kv`].
pub type KVPair = (String, String);

/// Raw `KEY=VALUE` strings, in the order they appeared on the command line.
///
/// Entries are kept verbatim: they are only parsed by [`Self::pairs`],
/// so that a malformed entry surfaces as [`ClientConfigError::Format`]
/// when the client configuration is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueFlags {
    values: Vec<String>,
}

impl KeyValueFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, raw: impl Into<String>) {
        self.values.push(raw.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse every entry, in order. Fails on the first malformed one.
    pub fn pairs(&self) -> ClientConfigResult<Vec<KVPair>> {
        self.values.iter().map(|raw| parse_kv(raw)).collect()
    }
}

impl From<Vec<String>> for KeyValueFlags {
    fn from(values: Vec<String>) -> Self {
        Self {
            values,
        }
    }
}

/// Joins the raw entries with `|`.
impl fmt::Display for KeyValueFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.values.join("|"))
    }
}

/// Split `kv` on the first `=`: the value can itself contain `=`.
pub fn parse_kv(kv: &str) -> ClientConfigResult<KVPair> {
    match kv.split_once('=') {
        None => Err(ClientConfigError::Format(kv.to_string())),
        Some((k, v)) => Ok((k.to_string(), v.to_string())),
    }
}
