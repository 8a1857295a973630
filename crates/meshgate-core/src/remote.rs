// ── Abstract remote-client capability ──
//
// The reconcilers talk to the service exclusively through `AccessApi`,
// so the diff and validation logic is testable without HTTP.
// `GraphqlClient` is the production implementation; the adapter below
// converts between domain and wire shapes at this boundary, once.

use meshgate_api::{GraphqlClient, TransportConfig};

use crate::config::ServiceConfig;
use crate::convert;
use crate::error::CoreError;
use crate::model::{EntityId, Group, RemoteNetwork, Resource};
use crate::reconcile::ResourceChanges;

/// The remote operations the reconcilers need.
///
/// One method per lifecycle call; every implementation issues at most
/// one remote request per invocation. Reads return `Ok(None)` when the
/// service does not know the id -- callers treat that as "already
/// gone", never as an operational failure.
#[allow(async_fn_in_trait)]
pub trait AccessApi {
    // ── Resources ────────────────────────────────────────────────
    async fn create_resource(&self, desired: &Resource) -> Result<(EntityId, bool), CoreError>;
    async fn read_resource(&self, id: &EntityId) -> Result<Option<Resource>, CoreError>;
    async fn update_resource(
        &self,
        id: &EntityId,
        changes: &ResourceChanges,
    ) -> Result<bool, CoreError>;
    async fn delete_resource(&self, id: &EntityId) -> Result<(), CoreError>;

    // ── Groups ───────────────────────────────────────────────────
    async fn create_group(&self, name: &str) -> Result<(EntityId, bool), CoreError>;
    async fn read_group(&self, id: &EntityId) -> Result<Option<Group>, CoreError>;
    async fn rename_group(&self, id: &EntityId, name: &str) -> Result<(), CoreError>;
    async fn delete_group(&self, id: &EntityId) -> Result<(), CoreError>;

    // ── Remote networks ──────────────────────────────────────────
    async fn create_remote_network(&self, name: &str) -> Result<EntityId, CoreError>;
    async fn read_remote_network(
        &self,
        id: &EntityId,
    ) -> Result<Option<RemoteNetwork>, CoreError>;
    async fn rename_remote_network(&self, id: &EntityId, name: &str) -> Result<(), CoreError>;
    async fn delete_remote_network(&self, id: &EntityId) -> Result<(), CoreError>;
}

/// Build the production client from connection configuration.
pub fn connect(config: &ServiceConfig) -> Result<GraphqlClient, CoreError> {
    let transport = TransportConfig {
        timeout: config.timeout,
    };
    GraphqlClient::new(&config.network, &config.domain, &config.api_token, &transport)
        .map_err(CoreError::from)
}

impl AccessApi for GraphqlClient {
    // ── Resources ────────────────────────────────────────────────

    async fn create_resource(&self, desired: &Resource) -> Result<(EntityId, bool), CoreError> {
        let req = convert::resource_create_request(desired);
        let created = GraphqlClient::create_resource(self, &req).await?;
        Ok((EntityId::from(created.id), created.is_active))
    }

    async fn read_resource(&self, id: &EntityId) -> Result<Option<Resource>, CoreError> {
        let node = GraphqlClient::read_resource(self, id.as_str()).await?;
        node.map(Resource::try_from).transpose()
    }

    async fn update_resource(
        &self,
        id: &EntityId,
        changes: &ResourceChanges,
    ) -> Result<bool, CoreError> {
        let req = convert::resource_update_request(id, changes);
        let updated = GraphqlClient::update_resource(self, &req).await?;
        Ok(updated.is_active)
    }

    async fn delete_resource(&self, id: &EntityId) -> Result<(), CoreError> {
        GraphqlClient::delete_resource(self, id.as_str()).await?;
        Ok(())
    }

    // ── Groups ───────────────────────────────────────────────────

    async fn create_group(&self, name: &str) -> Result<(EntityId, bool), CoreError> {
        let created = GraphqlClient::create_group(self, name).await?;
        Ok((EntityId::from(created.id), created.is_active))
    }

    async fn read_group(&self, id: &EntityId) -> Result<Option<Group>, CoreError> {
        let node = GraphqlClient::read_group(self, id.as_str()).await?;
        Ok(node.map(Group::from))
    }

    async fn rename_group(&self, id: &EntityId, name: &str) -> Result<(), CoreError> {
        GraphqlClient::update_group(self, id.as_str(), name).await?;
        Ok(())
    }

    async fn delete_group(&self, id: &EntityId) -> Result<(), CoreError> {
        GraphqlClient::delete_group(self, id.as_str()).await?;
        Ok(())
    }

    // ── Remote networks ──────────────────────────────────────────

    async fn create_remote_network(&self, name: &str) -> Result<EntityId, CoreError> {
        let created = GraphqlClient::create_remote_network(self, name).await?;
        Ok(EntityId::from(created.id))
    }

    async fn read_remote_network(
        &self,
        id: &EntityId,
    ) -> Result<Option<RemoteNetwork>, CoreError> {
        let node = GraphqlClient::read_remote_network(self, id.as_str()).await?;
        Ok(node.map(RemoteNetwork::from))
    }

    async fn rename_remote_network(&self, id: &EntityId, name: &str) -> Result<(), CoreError> {
        GraphqlClient::update_remote_network(self, id.as_str(), name).await?;
        Ok(())
    }

    async fn delete_remote_network(&self, id: &EntityId) -> Result<(), CoreError> {
        GraphqlClient::delete_remote_network(self, id.as_str()).await?;
        Ok(())
    }
}
