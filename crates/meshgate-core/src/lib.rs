// meshgate-core: Validation and reconciliation layer between meshgate-api
// and consumers (declarative configuration tools).

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod remote;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ServiceConfig;
pub use error::CoreError;
pub use reconcile::{Reconciler, ResourceChanges};
pub use remote::{AccessApi, connect};
pub use validate::{ValidationErrors, validate};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    EntityId, Group, PolicyMode, PortSpec, PortSpecError, ProtocolPolicy, ProtocolsConfig,
    RemoteNetwork, Resource,
};
