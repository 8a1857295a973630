// ── Resource domain type ──

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entity_id::EntityId;
use super::protocol::ProtocolsConfig;

/// A protected network endpoint managed by the access-control service.
///
/// A resource is "pending" while `id` is `None`, "live" once the remote
/// create call assigns one, and dropped from tracked state when a read
/// finds it gone remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// `None` until the remote create call assigns an id.
    pub id: Option<EntityId>,
    pub name: String,
    /// Hostname or IP the resource answers on.
    pub address: String,
    /// The remote network the resource lives on. Required at create
    /// time, immutable afterwards.
    pub remote_network_id: EntityId,
    /// Groups authorized to reach this resource. Weak references: a
    /// resource never owns a group's lifecycle, and membership is
    /// replaced wholesale on update.
    #[serde(default)]
    pub group_ids: BTreeSet<EntityId>,
    /// `None` means the service default policy applies (allow-all on
    /// both protocols, ICMP permitted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocols: Option<ProtocolsConfig>,
    /// Service-assigned; not settable through configuration.
    #[serde(default)]
    pub is_active: bool,
}

impl Resource {
    /// A pending resource with the minimal required fields.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        remote_network_id: impl Into<EntityId>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            remote_network_id: remote_network_id.into(),
            group_ids: BTreeSet::new(),
            protocols: None,
            is_active: false,
        }
    }

    /// The protocol policy in force, with absence resolved to the
    /// service default.
    pub fn effective_protocols(&self) -> ProtocolsConfig {
        self.protocols.clone().unwrap_or_default()
    }
}
