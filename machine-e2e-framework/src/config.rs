use std::env;

use constcat::concat;

/// Namespace the Machine API components and their objects live in
pub const MACHINE_API_NAMESPACE: &str = "openshift-machine-api";

/// Prefix shared by the `node-role` labels the kubelet and installers put on Nodes
pub const NODE_ROLE_LABEL_PREFIX: &str = "node-role.kubernetes.io/";

/// Label carried by every Node acting as a worker, whatever its value
pub const WORKER_NODE_ROLE_LABEL: &str = concat!(NODE_ROLE_LABEL_PREFIX, "worker");

const NAMESPACE_ENV: &str = "MACHINE_API_NAMESPACE";
const WORKER_ROLE_LABEL_ENV: &str = "WORKER_NODE_ROLE_LABEL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub namespace: String,
    pub worker_role_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: MACHINE_API_NAMESPACE.to_string(),
            worker_role_label: WORKER_NODE_ROLE_LABEL.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `MACHINE_API_NAMESPACE` and `WORKER_NODE_ROLE_LABEL`
    /// when those are set to a non-empty value.
    ///
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let config = Self::default();
        let config = match var(NAMESPACE_ENV) {
            Some(namespace) => config.namespace(namespace),
            None => config,
        };
        match var(WORKER_ROLE_LABEL_ENV) {
            Some(label) => config.worker_role_label(label),
            None => config,
        }
    }

    pub fn namespace(self, namespace: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            ..self
        }
    }

    pub fn worker_role_label(self, label: impl ToString) -> Self {
        Self {
            worker_role_label: label.to_string(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn config_default() {
        let config = Config::default();

        assert_eq!(config.namespace, "openshift-machine-api");
        assert_eq!(config.worker_role_label, "node-role.kubernetes.io/worker");
    }

    #[test]
    fn config_from_empty_environment() {
        let config = config_from(&[]);

        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_from_environment() {
        let config = config_from(&[
            ("MACHINE_API_NAMESPACE", "machine-api-e2e"),
            ("WORKER_NODE_ROLE_LABEL", "node-role.kubernetes.io/infra"),
        ]);

        assert_eq!(config.namespace, "machine-api-e2e");
        assert_eq!(config.worker_role_label, "node-role.kubernetes.io/infra");
    }

    #[test]
    fn config_ignores_empty_values() {
        let config = config_from(&[
            ("MACHINE_API_NAMESPACE", ""),
            ("WORKER_NODE_ROLE_LABEL", "node-role.kubernetes.io/infra"),
        ]);

        assert_eq!(config.namespace, MACHINE_API_NAMESPACE);
        assert_eq!(config.worker_role_label, "node-role.kubernetes.io/infra");
    }

    #[test]
    fn config_builder() {
        let config = Config::default()
            .namespace("machine-api-e2e")
            .worker_role_label("node-role.kubernetes.io/edge");

        assert_eq!(config.namespace, "machine-api-e2e");
        assert_eq!(config.worker_role_label, "node-role.kubernetes.io/edge");
    }
}
