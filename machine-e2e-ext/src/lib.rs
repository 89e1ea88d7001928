pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
pub use machine_e2e_api::v1beta1 as machinev1;

pub use node::NodeConditionExt;
pub use node::NodeExt;
pub use node::NODE_READY;
pub use time::TimeExt;

mod node;
mod time;

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self;
    fn label(self, key: impl ToString, value: impl ToString) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new(name)
        }
    }

    fn label(self, key: impl ToString, value: impl ToString) -> Self {
        let mut labels = self.labels.unwrap_or_default();
        labels.insert(key.to_string(), value.to_string());
        Self {
            labels: Some(labels),
            ..self
        }
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
