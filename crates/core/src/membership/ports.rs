//! Membership directory port interface

use async_trait::async_trait;
use tabsync_domain::Result;

/// Trait for reading and mutating a group's member list on the remote
/// directory. Members are identified by email; mutations are one call per
/// member (the remote API has no batch primitive).
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// List the emails of a group's current members, in server order.
    async fn list_members(&self, group_id: &str) -> Result<Vec<String>>;

    /// Add a single member to a group.
    async fn add_member(&self, group_id: &str, email: &str) -> Result<()>;

    /// Remove a single member from a group.
    async fn remove_member(&self, group_id: &str, email: &str) -> Result<()>;
}
