//! Message names - the routing key for commands, queries and events.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier naming a message type within one bus instance.
///
/// Registries are keyed by `MessageName`, and since it borrows as `str`
/// lookups can be done with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageName(String);

impl MessageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for MessageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MessageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for MessageName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&MessageName> for MessageName {
    fn from(name: &MessageName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for MessageName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MessageName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
