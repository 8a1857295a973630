// Group endpoints
//
// Groups carry only a name; activation state is service-assigned.

use serde_json::json;
use tracing::debug;

use crate::client::{GraphqlClient, accept, confirm};
use crate::error::Error;
use crate::types::{CreatedEntity, GroupNode, MutationPayload, MutationStatus};

const GROUP_CREATE: &str = r"
mutation GroupCreate($name: String!) {
  groupCreate(name: $name) {
    ok
    error
    entity {
      id
      isActive
    }
  }
}";

const GROUP_READ: &str = r"
query GroupRead($id: ID!) {
  group(id: $id) {
    id
    name
    isActive
  }
}";

const GROUP_UPDATE: &str = r"
mutation GroupUpdate($id: ID!, $name: String!) {
  groupUpdate(id: $id, name: $name) {
    ok
    error
  }
}";

const GROUP_DELETE: &str = r"
mutation GroupDelete($id: ID!) {
  groupDelete(id: $id) {
    ok
    error
  }
}";

impl GraphqlClient {
    /// Create a group.
    pub async fn create_group(&self, name: &str) -> Result<CreatedEntity, Error> {
        debug!(name, "creating group");
        let payload: MutationPayload<CreatedEntity> = self
            .execute("groupCreate", GROUP_CREATE, json!({ "name": name }))
            .await?;
        accept(payload, "create group".into())?.ok_or_else(|| Error::MissingEntity {
            operation: "create group".into(),
        })
    }

    /// Read a group by id. Returns `None` when the service has no group
    /// with that id.
    pub async fn read_group(&self, id: &str) -> Result<Option<GroupNode>, Error> {
        debug!(id, "reading group");
        self.execute("group", GROUP_READ, json!({ "id": id })).await
    }

    /// Rename a group.
    pub async fn update_group(&self, id: &str, name: &str) -> Result<(), Error> {
        debug!(id, name, "updating group");
        let status: MutationStatus = self
            .execute("groupUpdate", GROUP_UPDATE, json!({ "id": id, "name": name }))
            .await?;
        confirm(status, format!("update group with id {id}"))
    }

    /// Delete a group.
    pub async fn delete_group(&self, id: &str) -> Result<(), Error> {
        debug!(id, "deleting group");
        let status: MutationStatus = self
            .execute("groupDelete", GROUP_DELETE, json!({ "id": id }))
            .await?;
        confirm(status, format!("delete group with id {id}"))
    }
}
