use k8s_openapi::Resource;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(r#"{kind} "{name}" not found"#)]
    NotFound { kind: String, name: String },

    #[error(r#"{kind} "{name}" was modified concurrently"#)]
    Conflict { kind: String, name: String },

    #[error("{machine}: machine has no NodeRef")]
    MissingNodeRef { machine: String },

    #[error("failed to serialize object for merge patch: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("kubernetes error: {0}")]
    Kube(#[source] kube::Error),
}

impl Error {
    pub fn not_found<K>(name: impl ToString) -> Self
    where
        K: Resource,
    {
        let kind = K::KIND.to_string();
        let name = name.to_string();
        Self::NotFound { kind, name }
    }

    pub fn conflict<K>(name: impl ToString) -> Self
    where
        K: Resource,
    {
        let kind = K::KIND.to_string();
        let name = name.to_string();
        Self::Conflict { kind, name }
    }

    pub fn missing_node_ref(machine: impl ToString) -> Self {
        let machine = machine.to_string();
        Self::MissingNodeRef { machine }
    }

    /// Classifies a failed request against object `name` of kind `K`.
    ///
    /// HTTP 404 becomes [`Error::NotFound`] and 409 becomes [`Error::Conflict`];
    /// anything else is kept as is.
    pub fn from_kube<K>(err: kube::Error, name: &str) -> Self
    where
        K: Resource,
    {
        match err {
            kube::Error::Api(ref status) if status.code == 404 => Self::not_found::<K>(name),
            kube::Error::Api(ref status) if status.code == 409 => Self::conflict::<K>(name),
            other => Self::Kube(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn is_missing_node_ref(&self) -> bool {
        matches!(self, Self::MissingNodeRef { .. })
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1 as corev1;
    use serde_json::json;

    use super::*;

    fn api_error(code: u16, reason: &str) -> kube::Error {
        let status: kube::core::Status = serde_json::from_value(json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Failure",
            "message": format!("request failed with {reason}"),
            "reason": reason,
            "code": code,
        }))
        .unwrap();
        kube::Error::Api(status.into())
    }

    #[test]
    fn not_found() {
        let err = Error::not_found::<corev1::Node>("worker-0");

        assert!(err.is_not_found());
        assert!(!err.is_conflict());
        assert_eq!(err.to_string(), r#"Node "worker-0" not found"#);
    }

    #[test]
    fn conflict() {
        let err = Error::conflict::<corev1::Node>("worker-0");

        assert!(err.is_conflict());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), r#"Node "worker-0" was modified concurrently"#);
    }

    #[test]
    fn missing_node_ref() {
        let err = Error::missing_node_ref("worker-a");

        assert!(err.is_missing_node_ref());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "worker-a: machine has no NodeRef");
    }

    #[test]
    fn serialization() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);

        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().starts_with("failed to serialize"));
    }

    #[test]
    fn from_kube_not_found() {
        let err = Error::from_kube::<corev1::Node>(api_error(404, "NotFound"), "worker-0");

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), r#"Node "worker-0" not found"#);
    }

    #[test]
    fn from_kube_conflict() {
        let err = Error::from_kube::<corev1::Node>(api_error(409, "Conflict"), "worker-0");

        assert!(err.is_conflict());
        assert_eq!(err.to_string(), r#"Node "worker-0" was modified concurrently"#);
    }

    #[test]
    fn from_kube_other_codes_pass_through() {
        for (code, reason) in [(500, "InternalError"), (403, "Forbidden"), (422, "Invalid")] {
            let err = Error::from_kube::<corev1::Node>(api_error(code, reason), "worker-0");

            assert!(
                matches!(err, Error::Kube(kube::Error::Api(ref status)) if status.code == code),
                "{code} should be kept as a kube error"
            );
        }
    }
}
