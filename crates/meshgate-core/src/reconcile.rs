// ── Reconciliation ──
//
// Computes the minimal remote mutation for each lifecycle operation:
// create vs. update vs. no call at all. Validation runs before any
// remote call, so a config that fails it never leaves the process. The
// service applies each mutation atomically -- on failure the caller
// keeps the last-known-good state and may retry.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::{EntityId, Group, ProtocolsConfig, RemoteNetwork, Resource};
use crate::remote::AccessApi;
use crate::validate::validate;

// ── ResourceChanges ─────────────────────────────────────────────────

/// Field-level difference between two resource states.
///
/// `None` = unchanged. `group_ids` and `protocols`, when set, carry the
/// complete replacement value: the service treats group membership as a
/// full replacement and does not support partial protocol updates, so
/// neither is ever narrowed into a delta.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub group_ids: Option<BTreeSet<EntityId>>,
    pub protocols: Option<ProtocolsConfig>,
}

impl ResourceChanges {
    /// Diff `desired` against `previous`, field by field.
    ///
    /// Protocol blocks are compared by effect: an absent block equals an
    /// explicit service-default block, so adding or removing a default
    /// block does not trigger an update. When they do differ, the full
    /// desired block is carried -- with absence resolved to the default
    /// -- so the service always receives a complete policy.
    pub fn between(previous: &Resource, desired: &Resource) -> Self {
        let mut changes = Self::default();
        if desired.name != previous.name {
            changes.name = Some(desired.name.clone());
        }
        if desired.address != previous.address {
            changes.address = Some(desired.address.clone());
        }
        if desired.group_ids != previous.group_ids {
            changes.group_ids = Some(desired.group_ids.clone());
        }
        let protocols = desired.effective_protocols();
        if protocols != previous.effective_protocols() {
            changes.protocols = Some(protocols);
        }
        changes
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ── Reconciler ──────────────────────────────────────────────────────

/// Drives entity lifecycles against the remote service.
///
/// Request-per-operation: every method issues at most one remote call
/// and returns when it completes or fails. No local locking --
/// conflicting concurrent updates are arbitrated by the service.
pub struct Reconciler<A> {
    api: A,
}

impl<A: AccessApi> Reconciler<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    // ── Resources ────────────────────────────────────────────────

    /// Create `desired` remotely and return it with the service-assigned
    /// id and activation state.
    ///
    /// Follow with [`read_resource`](Self::read_resource) to pick up
    /// service-side defaults the create response does not echo (the
    /// default protocol policy, in particular).
    pub async fn create_resource(&self, desired: &Resource) -> Result<Resource, CoreError> {
        let mut errors = Vec::new();
        if desired.id.is_some() {
            errors.push("resource already has an id; update it instead".to_owned());
        }
        if desired.name.is_empty() {
            errors.push("name must not be empty".to_owned());
        }
        if desired.remote_network_id.is_empty() {
            errors.push("remote_network_id must not be empty".to_owned());
        }
        if let Some(protocols) = &desired.protocols {
            if let Err(e) = validate(protocols) {
                errors.extend(e.messages().iter().cloned());
            }
        }
        if !errors.is_empty() {
            return Err(CoreError::Validation { errors });
        }

        let (id, is_active) = self.api.create_resource(desired).await?;
        info!(%id, name = %desired.name, "resource created");
        Ok(Resource {
            id: Some(id),
            is_active,
            ..desired.clone()
        })
    }

    /// Fetch current remote state.
    ///
    /// `Ok(None)` means the service no longer knows the id: the caller
    /// drops the local record rather than reporting an operational
    /// error.
    pub async fn read_resource(&self, id: &EntityId) -> Result<Option<Resource>, CoreError> {
        let resource = self.api.read_resource(id).await?;
        if resource.is_none() {
            debug!(%id, "resource gone remotely");
        }
        Ok(resource)
    }

    /// Bring the remote resource in line with `desired`.
    ///
    /// Only fields that differ from `previous` are sent. When nothing
    /// differs, no remote call is made and `previous` comes back
    /// unchanged. A changed protocol block is re-validated and resent
    /// whole; changed group ids replace the remote set wholesale. A
    /// changed `remote_network_id` is a configuration error -- the
    /// field is immutable.
    pub async fn update_resource(
        &self,
        previous: &Resource,
        desired: &Resource,
    ) -> Result<Resource, CoreError> {
        let id = previous
            .id
            .as_ref()
            .ok_or_else(|| CoreError::validation("resource has no id yet; create it first"))?;
        if desired.remote_network_id != previous.remote_network_id {
            return Err(CoreError::validation(
                "remote_network_id is immutable; recreate the resource to move it",
            ));
        }

        let changes = ResourceChanges::between(previous, desired);
        if let Some(protocols) = &changes.protocols {
            validate(protocols)?;
        }
        if changes.is_empty() {
            debug!(%id, "no changes; skipping remote update");
            return Ok(previous.clone());
        }

        let is_active = self.api.update_resource(id, &changes).await?;
        info!(%id, "resource updated");
        Ok(Resource {
            id: previous.id.clone(),
            is_active,
            ..desired.clone()
        })
    }

    /// Delete the resource.
    ///
    /// Deleting an id the service has already forgotten fails with the
    /// remote error -- callers use that failure to confirm an earlier
    /// delete went through.
    pub async fn delete_resource(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api.delete_resource(id).await?;
        info!(%id, "resource deleted");
        Ok(())
    }

    // ── Groups ───────────────────────────────────────────────────

    pub async fn create_group(&self, name: &str) -> Result<Group, CoreError> {
        if name.is_empty() {
            return Err(CoreError::validation("name must not be empty"));
        }
        let (id, is_active) = self.api.create_group(name).await?;
        info!(%id, name, "group created");
        Ok(Group {
            id: Some(id),
            name: name.to_owned(),
            is_active,
        })
    }

    pub async fn read_group(&self, id: &EntityId) -> Result<Option<Group>, CoreError> {
        self.api.read_group(id).await
    }

    /// Rename the group; no remote call when the name is unchanged.
    pub async fn rename_group(&self, previous: &Group, name: &str) -> Result<Group, CoreError> {
        let id = previous
            .id
            .as_ref()
            .ok_or_else(|| CoreError::validation("group has no id yet; create it first"))?;
        if name.is_empty() {
            return Err(CoreError::validation("name must not be empty"));
        }
        if previous.name == name {
            debug!(%id, "name unchanged; skipping remote update");
            return Ok(previous.clone());
        }
        self.api.rename_group(id, name).await?;
        info!(%id, name, "group renamed");
        Ok(Group {
            name: name.to_owned(),
            ..previous.clone()
        })
    }

    pub async fn delete_group(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api.delete_group(id).await?;
        info!(%id, "group deleted");
        Ok(())
    }

    // ── Remote networks ──────────────────────────────────────────

    pub async fn create_remote_network(&self, name: &str) -> Result<RemoteNetwork, CoreError> {
        if name.is_empty() {
            return Err(CoreError::validation("name must not be empty"));
        }
        let id = self.api.create_remote_network(name).await?;
        info!(%id, name, "remote network created");
        Ok(RemoteNetwork {
            id: Some(id),
            name: name.to_owned(),
        })
    }

    pub async fn read_remote_network(
        &self,
        id: &EntityId,
    ) -> Result<Option<RemoteNetwork>, CoreError> {
        self.api.read_remote_network(id).await
    }

    /// Rename the remote network; no remote call when the name is
    /// unchanged.
    pub async fn rename_remote_network(
        &self,
        previous: &RemoteNetwork,
        name: &str,
    ) -> Result<RemoteNetwork, CoreError> {
        let id = previous.id.as_ref().ok_or_else(|| {
            CoreError::validation("remote network has no id yet; create it first")
        })?;
        if name.is_empty() {
            return Err(CoreError::validation("name must not be empty"));
        }
        if previous.name == name {
            debug!(%id, "name unchanged; skipping remote update");
            return Ok(previous.clone());
        }
        self.api.rename_remote_network(id, name).await?;
        info!(%id, name, "remote network renamed");
        Ok(RemoteNetwork {
            name: name.to_owned(),
            ..previous.clone()
        })
    }

    pub async fn delete_remote_network(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api.delete_remote_network(id).await?;
        info!(%id, "remote network deleted");
        Ok(())
    }
}
