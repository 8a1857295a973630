// ── Group domain type ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A named collection of users, referenced by resources as an
/// authorization unit. Groups are independently owned entities --
/// resources hold their ids, never their lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// `None` until the remote create call assigns an id.
    pub id: Option<EntityId>,
    pub name: String,
    /// Service-assigned; not settable through configuration.
    #[serde(default)]
    pub is_active: bool,
}
