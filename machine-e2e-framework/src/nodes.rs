use kube::ResourceExt as _;

use super::*;

use k8s::corev1;
use k8s::machinev1;
use k8s::NodeExt as _;

/// Appends `condition` to the status conditions of `node`.
///
/// The patch is computed against `node` itself rather than a fresh copy from the
/// store, so it carries the condition list and nothing else. Fields changed by
/// other writers since `node` was read are left alone.
///
/// Fails with [`Error::NotFound`] when the Node is gone and with
/// [`Error::Conflict`] when the store rejects the patch.
pub async fn add_node_condition<S>(
    store: &S,
    node: &corev1::Node,
    condition: corev1::NodeCondition,
) -> Result<()>
where
    S: NodeStore + ?Sized,
{
    let name = node.name_any();
    let updated = node.with_appended_condition(condition);
    let patch = merge_patch(node, &updated)?;
    tracing::debug!(name, %patch, "Adding node condition");
    store.patch_node_status(&name, &patch).await?;
    Ok(())
}

/// Retrieves the Node backing `machine`.
///
/// A Machine without a NodeRef yields [`Error::MissingNodeRef`] and no request
/// is made.
pub async fn node_for_machine<S>(store: &S, machine: &machinev1::Machine) -> Result<corev1::Node>
where
    S: NodeStore + ?Sized,
{
    let Some(node) = machine.node_name() else {
        let machine = machine.name_any();
        tracing::warn!(machine, "Machine has no NodeRef");
        return Err(Error::missing_node_ref(machine));
    };

    tracing::debug!(machine = machine.name_any(), node, "Getting node for machine");
    store.get_node(node).await
}

/// Returns all Nodes carrying the worker role label, whatever its value.
///
/// An empty list is not an error.
pub async fn worker_nodes<S>(store: &S, config: &Config) -> Result<Vec<corev1::Node>>
where
    S: NodeStore + ?Sized,
{
    let nodes = store
        .list_nodes(&config.namespace, &config.worker_role_label)
        .await?;
    tracing::debug!(count = nodes.len(), "Listed worker nodes");
    Ok(nodes)
}

/// Keeps the ready Nodes of `nodes`, in their original order.
pub fn filter_ready_nodes(nodes: &[corev1::Node]) -> Vec<corev1::Node> {
    nodes
        .iter()
        .filter(|node| is_node_ready(node))
        .cloned()
        .collect()
}

/// True when `node` has a `Ready` condition whose status is `True`.
pub fn is_node_ready(node: &corev1::Node) -> bool {
    node.is_ready()
}
