// Remote network endpoints
//
// Remote networks are the containers resources attach to via
// `remoteNetworkId`. They must exist before any resource referencing them
// is created.

use serde_json::json;
use tracing::debug;

use crate::client::{GraphqlClient, accept, confirm};
use crate::error::Error;
use crate::types::{IdNode, MutationPayload, MutationStatus, RemoteNetworkNode};

const REMOTE_NETWORK_CREATE: &str = r"
mutation RemoteNetworkCreate($name: String!) {
  remoteNetworkCreate(name: $name) {
    ok
    error
    entity {
      id
    }
  }
}";

const REMOTE_NETWORK_READ: &str = r"
query RemoteNetworkRead($id: ID!) {
  remoteNetwork(id: $id) {
    id
    name
  }
}";

const REMOTE_NETWORK_UPDATE: &str = r"
mutation RemoteNetworkUpdate($id: ID!, $name: String!) {
  remoteNetworkUpdate(id: $id, name: $name) {
    ok
    error
  }
}";

const REMOTE_NETWORK_DELETE: &str = r"
mutation RemoteNetworkDelete($id: ID!) {
  remoteNetworkDelete(id: $id) {
    ok
    error
  }
}";

impl GraphqlClient {
    /// Create a remote network.
    pub async fn create_remote_network(&self, name: &str) -> Result<IdNode, Error> {
        debug!(name, "creating remote network");
        let payload: MutationPayload<IdNode> = self
            .execute(
                "remoteNetworkCreate",
                REMOTE_NETWORK_CREATE,
                json!({ "name": name }),
            )
            .await?;
        accept(payload, "create remote network".into())?.ok_or_else(|| Error::MissingEntity {
            operation: "create remote network".into(),
        })
    }

    /// Read a remote network by id. Returns `None` when the service has
    /// no remote network with that id.
    pub async fn read_remote_network(&self, id: &str) -> Result<Option<RemoteNetworkNode>, Error> {
        debug!(id, "reading remote network");
        self.execute("remoteNetwork", REMOTE_NETWORK_READ, json!({ "id": id }))
            .await
    }

    /// Rename a remote network.
    pub async fn update_remote_network(&self, id: &str, name: &str) -> Result<(), Error> {
        debug!(id, name, "updating remote network");
        let status: MutationStatus = self
            .execute(
                "remoteNetworkUpdate",
                REMOTE_NETWORK_UPDATE,
                json!({ "id": id, "name": name }),
            )
            .await?;
        confirm(status, format!("update remote network with id {id}"))
    }

    /// Delete a remote network.
    pub async fn delete_remote_network(&self, id: &str) -> Result<(), Error> {
        debug!(id, "deleting remote network");
        let status: MutationStatus = self
            .execute(
                "remoteNetworkDelete",
                REMOTE_NETWORK_DELETE,
                json!({ "id": id }),
            )
            .await?;
        confirm(status, format!("delete remote network with id {id}"))
    }
}
