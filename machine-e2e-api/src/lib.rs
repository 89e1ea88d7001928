//! Resource definitions for the Machine API objects that `k8s-openapi` does not ship.

pub use machine::v1beta1;

pub mod machine;
