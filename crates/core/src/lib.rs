//! # tabsync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The group-membership reconciliation service
//!
//! ## Architecture Principles
//! - Only depends on `tabsync-domain`
//! - No HTTP or I/O code
//! - All external dependencies via traits

pub mod membership;

// Re-export specific items to avoid ambiguity
pub use membership::plan::MembershipPlan;
pub use membership::ports::MembershipDirectory;
pub use membership::MembershipReconciler;
