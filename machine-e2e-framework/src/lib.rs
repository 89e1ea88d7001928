//! Helpers used by machine-management end-to-end scenarios to inspect and nudge
//! cluster Nodes: appending status conditions, resolving the Node behind a
//! Machine, listing worker Nodes and keeping only the ready ones.
//!
//! Every helper performs at most one request against a [`NodeStore`] and hands
//! failures back to the caller untouched. Retrying is up to the scenario.

use machine_e2e_ext as k8s;

pub use config::Config;
pub use config::MACHINE_API_NAMESPACE;
pub use config::WORKER_NODE_ROLE_LABEL;
pub use error::Error;
pub use error::Result;
pub use nodes::add_node_condition;
pub use nodes::filter_ready_nodes;
pub use nodes::is_node_ready;
pub use nodes::node_for_machine;
pub use nodes::worker_nodes;
pub use patch::merge_patch;
pub use store::NodeStore;

pub mod config;
pub mod error;
pub mod nodes;
pub mod patch;
pub mod store;


/// Installs a `tracing` subscriber writing to the test harness output.
///
/// The filter comes from `RUST_LOG`. Calling it more than once is harmless, so
/// every scenario may call it first thing.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
