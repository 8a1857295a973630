// ── API-to-domain type conversions ──
//
// Bridges raw `meshgate_api` wire types into canonical
// `meshgate_core::model` domain types and back. Reads use `TryFrom`: a
// response that cannot be mapped (an unknown policy mode, say) is a
// `CoreError::Mapping`, fatal for that call rather than silently
// dropped. Writes are plain builders -- the domain types are strictly
// narrower than the wire.

use std::collections::BTreeSet;
use std::str::FromStr;

use meshgate_api::types::{
    GroupNode, ProtocolNode, ProtocolsNode, RemoteNetworkNode, ResourceCreateRequest,
    ResourceNode, ResourceUpdateRequest,
};

use crate::error::CoreError;
use crate::model::{
    EntityId, Group, PolicyMode, ProtocolPolicy, ProtocolsConfig, RemoteNetwork, Resource,
};
use crate::reconcile::ResourceChanges;

// ── Helpers ────────────────────────────────────────────────────────

fn parse_mode(raw: &str) -> Result<PolicyMode, CoreError> {
    PolicyMode::from_str(raw)
        .map_err(|_| CoreError::mapping(format!("unknown policy mode \"{raw}\"")))
}

fn ids_to_wire(ids: &BTreeSet<EntityId>) -> Vec<String> {
    ids.iter().map(|id| id.as_str().to_owned()).collect()
}

// ── Wire → domain ──────────────────────────────────────────────────

impl TryFrom<ProtocolNode> for ProtocolPolicy {
    type Error = CoreError;

    fn try_from(node: ProtocolNode) -> Result<Self, CoreError> {
        Ok(Self {
            mode: parse_mode(&node.policy)?,
            ports: node.ports,
        })
    }
}

impl TryFrom<ProtocolsNode> for ProtocolsConfig {
    type Error = CoreError;

    fn try_from(node: ProtocolsNode) -> Result<Self, CoreError> {
        Ok(Self {
            allow_icmp: node.allow_icmp,
            tcp: node.tcp.try_into()?,
            udp: node.udp.try_into()?,
        })
    }
}

impl TryFrom<ResourceNode> for Resource {
    type Error = CoreError;

    fn try_from(node: ResourceNode) -> Result<Self, CoreError> {
        // An omitted protocols block means "no explicit policy exists";
        // it stays `None` so the caller can tell it apart from an
        // explicitly configured default.
        let protocols = node.protocols.map(ProtocolsConfig::try_from).transpose()?;
        Ok(Self {
            id: Some(EntityId::from(node.id)),
            name: node.name,
            address: node.address,
            remote_network_id: EntityId::from(node.remote_network.id),
            group_ids: node
                .groups
                .into_iter()
                .map(|g| EntityId::from(g.id))
                .collect(),
            protocols,
            is_active: node.is_active,
        })
    }
}

impl From<GroupNode> for Group {
    fn from(node: GroupNode) -> Self {
        Self {
            id: Some(EntityId::from(node.id)),
            name: node.name,
            is_active: node.is_active,
        }
    }
}

impl From<RemoteNetworkNode> for RemoteNetwork {
    fn from(node: RemoteNetworkNode) -> Self {
        Self {
            id: Some(EntityId::from(node.id)),
            name: node.name,
        }
    }
}

// ── Domain → wire ──────────────────────────────────────────────────

pub(crate) fn protocols_to_wire(config: &ProtocolsConfig) -> ProtocolsNode {
    ProtocolsNode {
        allow_icmp: config.allow_icmp,
        tcp: policy_to_wire(&config.tcp),
        udp: policy_to_wire(&config.udp),
    }
}

fn policy_to_wire(policy: &ProtocolPolicy) -> ProtocolNode {
    ProtocolNode {
        policy: policy.mode.to_string(),
        ports: policy.ports.clone(),
    }
}

pub(crate) fn resource_create_request(desired: &Resource) -> ResourceCreateRequest {
    ResourceCreateRequest {
        name: desired.name.clone(),
        address: desired.address.clone(),
        remote_network_id: desired.remote_network_id.as_str().to_owned(),
        group_ids: ids_to_wire(&desired.group_ids),
        protocols: desired.protocols.as_ref().map(protocols_to_wire),
    }
}

pub(crate) fn resource_update_request(
    id: &EntityId,
    changes: &ResourceChanges,
) -> ResourceUpdateRequest {
    ResourceUpdateRequest {
        id: id.as_str().to_owned(),
        name: changes.name.clone(),
        address: changes.address.clone(),
        group_ids: changes.group_ids.as_ref().map(ids_to_wire),
        protocols: changes.protocols.as_ref().map(protocols_to_wire),
    }
}
