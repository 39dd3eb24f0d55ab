//! Group-membership reconciliation: diff planning and the service that
//! applies a plan through the [`ports::MembershipDirectory`] port.

pub mod plan;
pub mod ports;
mod service;

pub use service::MembershipReconciler;
