//! Group CRUD and lookup operations

use reqwest::Method;
use tabsync_domain::{Group, Result, TabsyncError};

use super::{wire, RestClient, MAX_PAGE_SIZE};

impl RestClient {
    /// Create a group and return it with its server-assigned id.
    pub async fn create_group(&self, name: &str) -> Result<Group> {
        let request = wire::GroupRequest { group: wire::GroupPayload { name: name.to_string() } };
        let builder = self.authed(Method::POST, &self.endpoint("groups"));
        let envelope: wire::GroupEnvelope = self.call_json(builder, &request).await?;
        Ok(envelope.group)
    }

    /// Look a group up by name, with the same exact-match guard as
    /// [`RestClient::find_user_by_email`].
    pub async fn find_group_by_name(&self, name: &str) -> Result<Group> {
        let builder = self
            .authed(Method::GET, &self.endpoint("groups"))
            .query(&[("filter", format!("name:eq:{}", name))]);

        let response: wire::GroupListResponse = self.call(builder).await?;

        response
            .groups
            .group
            .into_iter()
            .find(|group| group.name == name)
            .ok_or_else(|| TabsyncError::NotFound(format!("group with name '{}'", name)))
    }

    /// Look a group up by id.
    ///
    /// The API has no group item endpoint, so this lists one large page and
    /// scans client-side.
    pub async fn find_group_by_id(&self, group_id: &str) -> Result<Group> {
        let builder = self
            .authed(Method::GET, &self.endpoint("groups"))
            .query(&[("pageSize", MAX_PAGE_SIZE)]);

        let response: wire::GroupListResponse = self.call(builder).await?;

        response
            .groups
            .group
            .into_iter()
            .find(|group| group.id == group_id)
            .ok_or_else(|| TabsyncError::NotFound(format!("group with id '{}'", group_id)))
    }

    /// Rename a group and return the server's view of it.
    pub async fn update_group(&self, group_id: &str, name: &str) -> Result<Group> {
        let request = wire::GroupRequest { group: wire::GroupPayload { name: name.to_string() } };
        let url = self.endpoint(&format!("groups/{}", group_id));
        let envelope: wire::GroupEnvelope =
            self.call_json(self.authed(Method::PUT, &url), &request).await?;
        Ok(envelope.group)
    }

    /// Delete a group by id.
    pub async fn delete_group(&self, group_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("groups/{}", group_id));
        self.call_no_content(self.authed(Method::DELETE, &url)).await
    }
}
