use super::*;

/// Condition type reporting whether the kubelet is healthy and ready to accept pods
pub const NODE_READY: &str = "Ready";

const CONDITION_TRUE: &str = "True";
const CONDITION_FALSE: &str = "False";

pub trait NodeExt {
    fn new(name: impl ToString) -> Self;
    fn label(self, key: impl ToString, value: impl ToString) -> Self;
    fn condition(self, condition: corev1::NodeCondition) -> Self;
    fn with_appended_condition(&self, condition: corev1::NodeCondition) -> Self;
    fn conditions(&self) -> &[corev1::NodeCondition];
    fn find_condition(&self, type_: &str) -> Option<&corev1::NodeCondition>;
    fn has_label(&self, key: &str) -> bool;
    fn is_ready(&self) -> bool;
}

impl NodeExt for corev1::Node {
    fn new(name: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::new(name);
        Self {
            metadata,
            ..default()
        }
    }

    fn label(self, key: impl ToString, value: impl ToString) -> Self {
        let metadata = self.metadata.label(key, value);
        Self { metadata, ..self }
    }

    fn condition(mut self, condition: corev1::NodeCondition) -> Self {
        self.status
            .get_or_insert_with(default)
            .conditions
            .get_or_insert_with(default)
            .push(condition);
        self
    }

    /// Returns a copy of this node with `condition` appended after the existing conditions.
    ///
    /// The receiver is left untouched so that it can serve as the base of a merge patch.
    ///
    /// # Examples
    ///
    /// ```
    /// use machine_e2e_ext::{corev1, NodeConditionExt as _, NodeExt as _};
    ///
    /// let node = corev1::Node::new("worker-0");
    /// let updated = node.with_appended_condition(corev1::NodeCondition::ready());
    /// assert!(node.conditions().is_empty());
    /// assert_eq!(updated.conditions().len(), 1);
    /// ```
    fn with_appended_condition(&self, condition: corev1::NodeCondition) -> Self {
        self.clone().condition(condition)
    }

    fn conditions(&self) -> &[corev1::NodeCondition] {
        self.status
            .as_ref()
            .and_then(|status| status.conditions.as_deref())
            .unwrap_or_default()
    }

    fn find_condition(&self, type_: &str) -> Option<&corev1::NodeCondition> {
        self.conditions()
            .iter()
            .find(|condition| condition.type_ == type_)
    }

    fn has_label(&self, key: &str) -> bool {
        self.metadata
            .labels
            .as_ref()
            .is_some_and(|labels| labels.contains_key(key))
    }

    /// A node is ready when it carries a `Ready` condition with status `True`.
    ///
    fn is_ready(&self) -> bool {
        self.find_condition(NODE_READY)
            .is_some_and(NodeConditionExt::is_true)
    }
}

pub trait NodeConditionExt {
    fn new(type_: impl ToString, status: impl ToString) -> Self;
    fn ready() -> Self;
    fn not_ready() -> Self;
    fn reason(self, reason: impl ToString) -> Self;
    fn message(self, message: impl ToString) -> Self;
    fn is_true(&self) -> bool;
}

impl NodeConditionExt for corev1::NodeCondition {
    /// Create a condition of `type_` with `status`, stamped with the current time.
    ///
    fn new(type_: impl ToString, status: impl ToString) -> Self {
        let now = metav1::Time::now();
        Self {
            type_: type_.to_string(),
            status: status.to_string(),
            last_heartbeat_time: Some(now.clone()),
            last_transition_time: Some(now),
            ..default()
        }
    }

    fn ready() -> Self {
        Self::new(NODE_READY, CONDITION_TRUE)
    }

    fn not_ready() -> Self {
        Self::new(NODE_READY, CONDITION_FALSE)
    }

    fn reason(self, reason: impl ToString) -> Self {
        Self {
            reason: Some(reason.to_string()),
            ..self
        }
    }

    fn message(self, message: impl ToString) -> Self {
        Self {
            message: Some(message.to_string()),
            ..self
        }
    }

    fn is_true(&self) -> bool {
        self.status == CONDITION_TRUE
    }
}
