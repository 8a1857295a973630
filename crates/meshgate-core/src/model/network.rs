// ── Remote network domain type ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A remote network: the container resources attach to. Must exist
/// before any resource referencing it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteNetwork {
    /// `None` until the remote create call assigns an id.
    pub id: Option<EntityId>,
    pub name: String,
}
