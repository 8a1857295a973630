// Resource endpoints
//
// CRUD for protected resources. Mutations return `{ ok, error, entity }`
// payloads; a refused mutation surfaces as `Error::Rejected` carrying the
// service's message verbatim.

use serde_json::json;
use tracing::debug;

use crate::client::{GraphqlClient, accept, confirm};
use crate::error::Error;
use crate::types::{
    CreatedEntity, MutationPayload, MutationStatus, ResourceCreateRequest, ResourceNode,
    ResourceUpdateRequest, UpdatedEntity,
};

const RESOURCE_CREATE: &str = r"
mutation ResourceCreate($name: String!, $address: String!, $remoteNetworkId: ID!, $groupIds: [ID!], $protocols: ProtocolsInput) {
  resourceCreate(name: $name, address: $address, remoteNetworkId: $remoteNetworkId, groupIds: $groupIds, protocols: $protocols) {
    ok
    error
    entity {
      id
      isActive
    }
  }
}";

const RESOURCE_READ: &str = r"
query ResourceRead($id: ID!) {
  resource(id: $id) {
    id
    name
    address
    remoteNetwork {
      id
    }
    groups {
      id
    }
    protocols {
      allowIcmp
      tcp {
        policy
        ports
      }
      udp {
        policy
        ports
      }
    }
    isActive
  }
}";

const RESOURCE_UPDATE: &str = r"
mutation ResourceUpdate($id: ID!, $name: String, $address: String, $groupIds: [ID!], $protocols: ProtocolsInput) {
  resourceUpdate(id: $id, name: $name, address: $address, groupIds: $groupIds, protocols: $protocols) {
    ok
    error
    entity {
      isActive
    }
  }
}";

const RESOURCE_DELETE: &str = r"
mutation ResourceDelete($id: ID!) {
  resourceDelete(id: $id) {
    ok
    error
  }
}";

impl GraphqlClient {
    /// Create a resource.
    pub async fn create_resource(
        &self,
        req: &ResourceCreateRequest,
    ) -> Result<CreatedEntity, Error> {
        debug!(name = %req.name, "creating resource");
        let variables = serde_json::to_value(req).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: String::new(),
        })?;
        let payload: MutationPayload<CreatedEntity> =
            self.execute("resourceCreate", RESOURCE_CREATE, variables).await?;
        accept(payload, "create resource".into())?.ok_or_else(|| Error::MissingEntity {
            operation: "create resource".into(),
        })
    }

    /// Read a resource by id. Returns `None` when the service has no
    /// resource with that id.
    pub async fn read_resource(&self, id: &str) -> Result<Option<ResourceNode>, Error> {
        debug!(id, "reading resource");
        self.execute("resource", RESOURCE_READ, json!({ "id": id }))
            .await
    }

    /// Apply a partial update to a resource.
    pub async fn update_resource(
        &self,
        req: &ResourceUpdateRequest,
    ) -> Result<UpdatedEntity, Error> {
        debug!(id = %req.id, "updating resource");
        let operation = format!("update resource with id {}", req.id);
        let variables = serde_json::to_value(req).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: String::new(),
        })?;
        let payload: MutationPayload<UpdatedEntity> =
            self.execute("resourceUpdate", RESOURCE_UPDATE, variables).await?;
        accept(payload, operation.clone())?.ok_or(Error::MissingEntity { operation })
    }

    /// Delete a resource. Deleting an id the service no longer knows
    /// fails with `Error::Rejected`.
    pub async fn delete_resource(&self, id: &str) -> Result<(), Error> {
        debug!(id, "deleting resource");
        let status: MutationStatus = self
            .execute("resourceDelete", RESOURCE_DELETE, json!({ "id": id }))
            .await?;
        confirm(status, format!("delete resource with id {id}"))
    }
}
