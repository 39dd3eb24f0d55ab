//! Membership reconciliation service - core business logic

use std::sync::Arc;

use tabsync_domain::Result;
use tracing::{debug, info};

use super::plan::MembershipPlan;
use super::ports::MembershipDirectory;

/// Converges a group's remote member list to a desired set of emails.
///
/// One pass is read, plan, apply, re-read: removals run strictly before
/// additions, every call is sequential, and the first failing call aborts
/// the pass without rolling back what was already applied. Partial
/// convergence is therefore an observable outcome; a later pass picks up
/// the remainder.
pub struct MembershipReconciler {
    directory: Arc<dyn MembershipDirectory>,
}

impl MembershipReconciler {
    /// Create a new reconciler over the given directory.
    pub fn new(directory: Arc<dyn MembershipDirectory>) -> Self {
        Self { directory }
    }

    /// Converge the group's membership to `desired` and return the re-read
    /// member list.
    ///
    /// The returned list is authoritative: it may differ from `desired` if
    /// the server normalized something, and callers must treat it as the
    /// actual converged state.
    pub async fn reconcile(&self, group_id: &str, desired: &[String]) -> Result<Vec<String>> {
        let current = self.directory.list_members(group_id).await?;
        let plan = MembershipPlan::diff(&current, desired);

        debug!(
            group_id,
            current = current.len(),
            to_remove = plan.to_remove.len(),
            to_add = plan.to_add.len(),
            "planned membership changes"
        );

        for email in &plan.to_remove {
            self.directory.remove_member(group_id, email).await?;
        }

        for email in &plan.to_add {
            self.directory.add_member(group_id, email).await?;
        }

        let converged = self.directory.list_members(group_id).await?;

        info!(
            group_id,
            removed = plan.to_remove.len(),
            added = plan.to_add.len(),
            members = converged.len(),
            "reconciled group membership"
        );

        Ok(converged)
    }
}
