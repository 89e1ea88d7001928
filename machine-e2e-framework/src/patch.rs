use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::*;

/// Computes the JSON merge patch (RFC 7386) that turns `original` into `modified`.
///
/// Only what differs ends up in the patch: changed and added keys carry their new
/// value, keys missing from `modified` are set to `null`, nested objects are
/// diffed recursively. Arrays and scalars are replaced as a whole, as merge
/// patches cannot address individual array elements.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let original = json!({"metadata": {"name": "worker-0"}, "status": {"phase": "Pending"}});
/// let modified = json!({"metadata": {"name": "worker-0"}, "status": {"phase": "Running"}});
///
/// let patch = machine_e2e_framework::merge_patch(&original, &modified).unwrap();
/// assert_eq!(patch, json!({"status": {"phase": "Running"}}));
/// ```
pub fn merge_patch<T>(original: &T, modified: &T) -> Result<Value>
where
    T: Serialize,
{
    let original = serde_json::to_value(original)?;
    let modified = serde_json::to_value(modified)?;
    Ok(diff(&original, &modified))
}

fn diff(original: &Value, modified: &Value) -> Value {
    let (Value::Object(original), Value::Object(modified)) = (original, modified) else {
        return modified.clone();
    };

    let mut patch = Map::new();
    for (key, value) in modified {
        match original.get(key) {
            Some(base) if base == value => {}
            Some(base) if base.is_object() && value.is_object() => {
                patch.insert(key.clone(), diff(base, value));
            }
            _ => {
                patch.insert(key.clone(), value.clone());
            }
        }
    }

    for key in original.keys() {
        if !modified.contains_key(key) {
            patch.insert(key.clone(), Value::Null);
        }
    }

    Value::Object(patch)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use k8s::corev1;
    use k8s::NodeConditionExt as _;
    use k8s::NodeExt as _;

    use super::*;

    #[test]
    fn identical_values() {
        let node = corev1::Node::new("worker-0").label("node-role.kubernetes.io/worker", "");

        let patch = merge_patch(&node, &node).unwrap();

        assert_eq!(patch, json!({}));
    }

    #[test]
    fn changed_scalar() {
        let patch = merge_patch(&json!({"a": 1, "b": "x"}), &json!({"a": 2, "b": "x"})).unwrap();

        assert_eq!(patch, json!({"a": 2}));
    }

    #[test]
    fn added_and_removed_keys() {
        let patch = merge_patch(&json!({"a": 1, "b": 2}), &json!({"a": 1, "c": 3})).unwrap();

        assert_eq!(patch, json!({"b": null, "c": 3}));
    }

    #[test]
    fn nested_objects_recurse() {
        let original = json!({"metadata": {"labels": {"a": "1", "b": "2"}, "name": "n"}});
        let modified = json!({"metadata": {"labels": {"a": "1", "b": "3"}, "name": "n"}});

        let patch = merge_patch(&original, &modified).unwrap();

        assert_eq!(patch, json!({"metadata": {"labels": {"b": "3"}}}));
    }

    #[test]
    fn arrays_are_replaced() {
        let patch = merge_patch(&json!({"items": [1, 2]}), &json!({"items": [1, 2, 3]})).unwrap();

        assert_eq!(patch, json!({"items": [1, 2, 3]}));
    }

    #[test]
    fn object_replaced_by_scalar() {
        let patch = merge_patch(&json!({"spec": {"a": 1}}), &json!({"spec": "none"})).unwrap();

        assert_eq!(patch, json!({"spec": "none"}));
    }

    #[test]
    fn appended_condition_touches_only_conditions() {
        let node = corev1::Node::new("worker-0")
            .label("node-role.kubernetes.io/worker", "")
            .condition(corev1::NodeCondition::new("MemoryPressure", "False"));
        let condition = corev1::NodeCondition::not_ready().reason("KubeletDown");
        let updated = node.with_appended_condition(condition);

        let patch = merge_patch(&node, &updated).unwrap();

        let expected = serde_json::to_value(updated.conditions()).unwrap();
        assert_eq!(patch, json!({"status": {"conditions": expected}}));
    }

    #[test]
    fn appended_condition_on_node_without_status() {
        let node = corev1::Node::new("worker-0");
        let updated = node.with_appended_condition(corev1::NodeCondition::ready());

        let patch = merge_patch(&node, &updated).unwrap();

        let status = patch.get("status").unwrap();
        assert_eq!(status["conditions"].as_array().unwrap().len(), 1);
        assert_eq!(status["conditions"][0]["type"], "Ready");
        assert!(patch.get("metadata").is_none());
    }
}
