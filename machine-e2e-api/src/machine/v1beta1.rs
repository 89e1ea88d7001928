use constcat::concat;
use k8s_openapi as k8s;
use serde::Deserialize;
use serde::Serialize;

use k8s::api::core::v1 as corev1;
use k8s::apimachinery::pkg::apis::meta::v1 as metav1;

pub const MACHINE_API_GROUP: &str = "machine.openshift.io";
pub const MACHINE_API_VERSION: &str = "v1beta1";
pub const MACHINE_API_GROUP_VERSION: &str = concat!(MACHINE_API_GROUP, "/", MACHINE_API_VERSION);

/// `Machine` is the Schema for the machines API
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub metadata: metav1::ObjectMeta,

    #[serde(default)]
    pub spec: MachineSpec,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MachineStatus>,
}

/// `MachineSpec` defines the desired state of Machine
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSpec {
    /// The list of the taints to be applied to the corresponding Node in additive
    /// manner. This list will not overwrite any other taints added to the Node on
    /// an ongoing basis by other entities.
    /// +optional
    ///
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taints: Vec<corev1::Taint>,

    /// details of Provider-specific configuration to use during node creation.
    /// +optional
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_spec: Option<ProviderSpec>,

    /// the identification ID of the machine provided by the provider.
    /// This field must match the provider ID as seen on the node object corresponding to this machine.
    /// +optional
    ///
    #[serde(
        default,
        rename = "providerID",
        skip_serializing_if = "Option::is_none"
    )]
    pub provider_id: Option<String>,
}

/// `ProviderSpec` carries the opaque, provider-specific machine configuration
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// `MachineStatus` defines the observed state of Machine
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineStatus {
    /// will point to the corresponding Node if it exists.
    /// +optional
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_ref: Option<corev1::ObjectReference>,

    /// identifies when this status was last observed.
    /// +optional
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<metav1::Time>,

    /// will be set in the event that there is a terminal problem
    /// reconciling the Machine and will contain a succinct value suitable
    /// for machine interpretation.
    /// +optional
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,

    /// will be set in the event that there is a terminal problem
    /// reconciling the Machine and will contain a more verbose string suitable
    /// for logging and human consumption.
    /// +optional
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// the list of addresses assigned to the machine, queried from the provider.
    /// +optional
    ///
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<corev1::NodeAddress>,

    /// the current phase of machine actuation.
    /// One of: Failed, Provisioning, Provisioned, Running, Deleting
    /// +optional
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

impl k8s::Resource for Machine {
    const API_VERSION: &'static str = MACHINE_API_GROUP_VERSION;
    const GROUP: &'static str = MACHINE_API_GROUP;
    const KIND: &'static str = "Machine";
    const VERSION: &'static str = MACHINE_API_VERSION;
    const URL_PATH_SEGMENT: &'static str = "machines";
    type Scope = k8s::NamespaceResourceScope;
}

impl k8s::ListableResource for Machine {
    const LIST_KIND: &'static str = "MachineList";
}

impl k8s::Metadata for Machine {
    type Ty = metav1::ObjectMeta;

    fn metadata(&self) -> &<Self as k8s::Metadata>::Ty {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut <Self as k8s::Metadata>::Ty {
        &mut self.metadata
    }
}

pub type MachineList = k8s::List<Machine>;

impl Machine {
    /// Create new `Machine` with given `name` in `namespace`
    ///
    pub fn new(name: impl ToString, namespace: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..default()
        };
        Self {
            metadata,
            ..default()
        }
    }

    /// Record `node` as the Node this `Machine` provisioned
    ///
    pub fn node_ref(self, node: impl ToString) -> Self {
        let node_ref = corev1::ObjectReference {
            api_version: Some("v1".to_string()),
            kind: Some("Node".to_string()),
            name: Some(node.to_string()),
            ..default()
        };
        let status = MachineStatus {
            node_ref: Some(node_ref),
            ..self.status.unwrap_or_default()
        };
        Self {
            status: Some(status),
            ..self
        }
    }

    /// Name of the Node backing this `Machine`, if one has been recorded
    ///
    pub fn node_name(&self) -> Option<&str> {
        self.status
            .as_ref()?
            .node_ref
            .as_ref()?
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    pub fn phase(&self) -> Option<&str> {
        self.status.as_ref()?.phase.as_deref()
    }
}

fn default<T: Default>() -> T {
    T::default()
}
