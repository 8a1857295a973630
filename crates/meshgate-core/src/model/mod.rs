// ── Unified domain model ──
//
// Canonical representation of every Meshgate entity. These types are
// what consumers configure and what reads reconcile back into; the wire
// shapes in `meshgate_api::types` never leak past `convert`.

pub mod entity_id;
pub mod group;
pub mod network;
pub mod protocol;
pub mod resource;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use meshgate_core::model::*` gives you everything.

pub use entity_id::EntityId;
pub use group::Group;
pub use network::RemoteNetwork;
pub use protocol::{PolicyMode, PortSpec, PortSpecError, ProtocolPolicy, ProtocolsConfig};
pub use resource::Resource;
