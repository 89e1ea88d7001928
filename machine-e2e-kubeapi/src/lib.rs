use std::fmt::Debug;

use kube::api;
use machine_e2e_ext as k8s;
use serde_json::Value;

use k8s::corev1;
use k8s::machinev1;

pub struct KubeApi {
    list_params: api::ListParams,
    patch_params: api::PatchParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi configured with a default Kubernetes client.
    ///
    /// The client is inferred from the environment: the local kubeconfig when
    /// present, the in-cluster service account otherwise.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), kube::Error> {
    /// let api = machine_e2e_kubeapi::KubeApi::new().await?;
    /// // use `api`...
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new() -> kube::Result<Self> {
        kube::Client::try_default().await.map(Self::with_client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// The returned KubeApi is initialized with default `ListParams` and `PatchParams`
    /// and uses `client` for all Kubernetes interactions.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = kube::Client::try_default().await?;
    /// let api = machine_e2e_kubeapi::KubeApi::with_client(client);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            patch_params: api::PatchParams::default(),
            client,
        }
    }

    /// Fetches the Node called `name`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &machine_e2e_kubeapi::KubeApi) -> kube::Result<()> {
    /// let node = api.get_node("ip-10-0-1-17.ec2.internal").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_node(&self, name: &str) -> kube::Result<corev1::Node> {
        tracing::debug!(name, "Getting node");
        self.nodes().get(name).await
    }

    /// Lists the Nodes matching `selector`.
    ///
    /// Nodes are cluster scoped, so `namespace` does not narrow the request; it is
    /// only recorded alongside the request for diagnostics.
    ///
    /// # Returns
    ///
    /// A `kube::Result` containing one `corev1::Node` per match, in the order the API server returned them.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &machine_e2e_kubeapi::KubeApi) -> kube::Result<()> {
    /// let workers = api
    ///     .list_nodes("openshift-machine-api", "node-role.kubernetes.io/worker")
    ///     .await?;
    /// println!("discovered {} workers", workers.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_nodes(&self, namespace: &str, selector: &str) -> kube::Result<Vec<corev1::Node>> {
        tracing::debug!(namespace, selector, "Listing nodes");
        let lp = self.list_params().clone().labels(selector);
        self.nodes().list(&lp).await.map(|list| list.items)
    }

    /// Applies the JSON merge `patch` to the status subresource of Node `name`.
    ///
    /// # Returns
    ///
    /// The Node as stored after the patch was applied.
    pub async fn patch_node_status(&self, name: &str, patch: &Value) -> kube::Result<corev1::Node> {
        tracing::debug!(name, %patch, "Patching node status");
        let pp = self.patch_params();
        self.nodes()
            .patch_status(name, pp, &api::Patch::Merge(patch))
            .await
    }

    /// Fetches the Machine `name` from `namespace`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &machine_e2e_kubeapi::KubeApi) -> kube::Result<()> {
    /// let machine = api.get_machine("worker-a", "openshift-machine-api").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_machine(&self, name: &str, namespace: &str) -> kube::Result<machinev1::Machine> {
        tracing::debug!(name, namespace, "Getting machine");
        self.machines(namespace).get(name).await
    }

    /// Returns an Api handle scoped to all Nodes using the configured Kubernetes client.
    fn nodes(&self) -> api::Api<corev1::Node> {
        api::Api::all(self.client.clone())
    }

    /// Get an Api handle for the Machines in `namespace`.
    fn machines(&self, namespace: &str) -> api::Api<machinev1::Machine> {
        api::Api::namespaced(self.client.clone(), namespace)
    }

    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }

    fn patch_params(&self) -> &api::PatchParams {
        &self.patch_params
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, showing `list_params` and `patch_params` while redacting the `client`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("patch_params", &self.patch_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}
