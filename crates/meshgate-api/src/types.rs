//! Wire types for the Meshgate GraphQL API.
//!
//! All types match the JSON shapes inside the GraphQL `data` envelope.
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Policy modes travel as plain strings (`ALLOW_ALL`, `RESTRICTED`,
//! `DENY_ALL`); `meshgate-core` parses them into strong types.

use serde::{Deserialize, Serialize};

// ── Mutation envelopes ───────────────────────────────────────────────

/// `{ ok, error, entity }` payload returned by entity-producing mutations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationPayload<E> {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub entity: Option<E>,
}

/// `{ ok, error }` payload returned by update/delete mutations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationStatus {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

// ── Shared nodes ─────────────────────────────────────────────────────

/// A bare entity reference (`{ id }`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdNode {
    pub id: String,
}

/// Entity stub returned by create mutations.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEntity {
    pub id: String,
    pub is_active: bool,
}

/// Entity stub returned by resource update mutations.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedEntity {
    pub is_active: bool,
}

// ── Resources ────────────────────────────────────────────────────────

/// Full resource state — from the `resource(id:)` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    pub id: String,
    pub name: String,
    pub address: String,
    pub remote_network: IdNode,
    #[serde(default)]
    pub groups: Vec<IdNode>,
    /// Absent when the resource has no explicit protocol policy.
    #[serde(default)]
    pub protocols: Option<ProtocolsNode>,
    pub is_active: bool,
}

/// Protocol restrictions echoed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolsNode {
    pub allow_icmp: bool,
    pub tcp: ProtocolNode,
    pub udp: ProtocolNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolNode {
    pub policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,
}

/// Create a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCreateRequest {
    pub name: String,
    pub address: String,
    pub remote_network_id: String,
    pub group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<ProtocolsNode>,
}

/// Update a resource. Only the fields present in the payload change;
/// `protocols` and `groupIds`, when present, replace the remote value
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpdateRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<ProtocolsNode>,
}

// ── Groups ───────────────────────────────────────────────────────────

/// Full group state — from the `group(id:)` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

// ── Remote networks ──────────────────────────────────────────────────

/// Full remote network state — from the `remoteNetwork(id:)` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteNetworkNode {
    pub id: String,
    pub name: String,
}
