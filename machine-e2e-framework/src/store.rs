use async_trait::async_trait;
use machine_e2e_kubeapi::KubeApi;
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

use super::*;

use k8s::corev1;

/// The slice of the cluster object store the node helpers talk to.
///
/// Implemented by [`KubeApi`] for real clusters; tests substitute their own.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NodeStore: Send + Sync {
    /// Fetch the Node called `name`
    async fn get_node(&self, name: &str) -> Result<corev1::Node>;

    /// List the Nodes in `namespace` that carry the label selected by `label_selector`
    async fn list_nodes(&self, namespace: &str, label_selector: &str) -> Result<Vec<corev1::Node>>;

    /// Apply the JSON merge `patch` to the status of Node `name`
    async fn patch_node_status(&self, name: &str, patch: &Value) -> Result<corev1::Node>;
}

#[async_trait]
impl NodeStore for KubeApi {
    async fn get_node(&self, name: &str) -> Result<corev1::Node> {
        KubeApi::get_node(self, name)
            .await
            .map_err(|err| Error::from_kube::<corev1::Node>(err, name))
    }

    async fn list_nodes(&self, namespace: &str, label_selector: &str) -> Result<Vec<corev1::Node>> {
        KubeApi::list_nodes(self, namespace, label_selector)
            .await
            .map_err(Error::Kube)
    }

    async fn patch_node_status(&self, name: &str, patch: &Value) -> Result<corev1::Node> {
        KubeApi::patch_node_status(self, name, patch)
            .await
            .map_err(|err| Error::from_kube::<corev1::Node>(err, name))
    }
}
