use std::time::Duration;

use k8s_openapi::api::core::v1::Pod;
use kube::{Api, Client, Config, api::ListParams};

use crate::errors::Error;

/// The read-only seam to the cluster. Implemented by [`ClusterClient`] for
/// real clusters and by fakes in tests.
#[allow(async_fn_in_trait)]
pub trait PodLister {
    /// Every pod visible to the credentials, across all namespaces.
    /// Order is whatever the cluster API returns.
    async fn list_all(&self) -> Result<Vec<Pod>, Error>;

    /// Pods restricted to one namespace. A nonexistent namespace yields an
    /// empty list, matching the behavior of the Kubernetes list endpoint.
    async fn list_namespaced(&self, namespace: &str) -> Result<Vec<Pod>, Error>;
}

pub struct ClusterClient {
    client: Client,
}

impl ClusterClient {
    /// Builds a client from the ambient kubeconfig or in-cluster environment.
    /// An explicit timeout overrides the transport defaults.
    pub async fn connect(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut config = Config::infer().await.map_err(Error::ConfigLoad)?;
        if let Some(t) = timeout {
            config.connect_timeout = Some(t);
            config.read_timeout = Some(t);
        }
        let client = Client::try_from(config).map_err(Error::ClientInit)?;
        Ok(Self { client })
    }
}

impl PodLister for ClusterClient {
    async fn list_all(&self) -> Result<Vec<Pod>, Error> {
        let api: Api<Pod> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(Error::ClusterQuery)?;
        tracing::debug!(pods = list.items.len(), "listed pods in all namespaces");
        Ok(list.items)
    }

    async fn list_namespaced(&self, namespace: &str) -> Result<Vec<Pod>, Error> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(Error::ClusterQuery)?;
        tracing::debug!(pods = list.items.len(), namespace, "listed pods");
        Ok(list.items)
    }
}
