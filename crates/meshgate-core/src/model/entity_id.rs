// ── Core identity type ──

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier assigned by the service.
///
/// The service hands these out as base64-like strings. No local format
/// constraint is imposed beyond "non-empty" -- the service is the only
/// authority on what a well-formed id looks like, and a stricter local
/// rule would reject ids the service accepts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_round_trips_opaque_strings() {
        let id = EntityId::from("UmVzb3VyY2U6MjMxNTQ=");
        assert_eq!(id.as_str(), "UmVzb3VyY2U6MjMxNTQ=");
        assert_eq!(id.to_string(), "UmVzb3VyY2U6MjMxNTQ=");
    }

    #[test]
    fn entity_id_from_str() {
        let id: EntityId = "R3JvdXA6MQ==".parse().unwrap();
        assert!(!id.is_empty());
    }

    #[test]
    fn entity_id_empty() {
        assert!(EntityId::from("").is_empty());
    }
}
