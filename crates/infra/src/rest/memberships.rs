//! Group membership operations.
//!
//! Membership is a derived relation over users and groups: it is read by
//! listing a group's users and mutated one member at a time. Callers
//! address members by email; each mutation resolves the email to a user id
//! first.

use reqwest::Method;
use tabsync_domain::{GroupMembership, Result};
use tracing::warn;

use super::{wire, RestClient, MAX_PAGE_SIZE};

impl RestClient {
    /// Add a user to a group by email.
    pub async fn add_group_member(&self, group_id: &str, email: &str) -> Result<()> {
        let user = self.find_user_by_email(email).await?;
        self.add_group_member_by_id(group_id, &user.id).await
    }

    /// Add a user to a group by user id.
    pub async fn add_group_member_by_id(&self, group_id: &str, user_id: &str) -> Result<()> {
        let request = wire::MembershipRequest { user: wire::MemberRef { id: user_id.to_string() } };
        let url = self.endpoint(&format!("groups/{}/users", group_id));
        // The response echoes the user envelope; only the status matters here.
        self.call_no_content(self.authed(Method::POST, &url).json(&request)).await
    }

    /// Remove a user from a group by email.
    pub async fn remove_group_member(&self, group_id: &str, email: &str) -> Result<()> {
        let user = self.find_user_by_email(email).await?;
        self.remove_group_member_by_id(group_id, &user.id).await
    }

    /// Remove a user from a group by user id.
    pub async fn remove_group_member_by_id(&self, group_id: &str, user_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("groups/{}/users/{}", group_id, user_id));
        self.call_no_content(self.authed(Method::DELETE, &url)).await
    }

    /// List the emails of a group's members, in server order.
    ///
    /// Requests a single page of [`MAX_PAGE_SIZE`]; if the server reports
    /// more members than the page holds, the overflow is logged rather than
    /// silently dropped.
    pub async fn list_group_members(&self, group_id: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&format!("groups/{}/users", group_id));
        let builder = self.authed(Method::GET, &url).query(&[("pageSize", MAX_PAGE_SIZE)]);

        let response: wire::UserListResponse = self.call(builder).await?;

        let returned = response.users.user.len();
        if let Ok(total) = response.pagination.total_available.parse::<usize>() {
            if total > returned {
                warn!(
                    group_id,
                    returned,
                    total_available = total,
                    "group member list exceeds a single page; results are incomplete"
                );
            }
        }

        Ok(response.users.user.into_iter().map(|user| user.email).collect())
    }

    /// Read a group's membership as a derived relation.
    pub async fn get_group_membership(&self, group_id: &str) -> Result<GroupMembership> {
        let user_emails = self.list_group_members(group_id).await?;
        Ok(GroupMembership { group_id: group_id.to_string(), user_emails })
    }
}
