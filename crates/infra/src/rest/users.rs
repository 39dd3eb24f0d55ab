//! User CRUD and lookup operations

use reqwest::Method;
use tabsync_domain::{Result, TabsyncError, User, UserSpec};

use super::wire;
use super::RestClient;

impl RestClient {
    /// Create a user and return it with its server-assigned id.
    pub async fn create_user(&self, spec: &UserSpec) -> Result<User> {
        let request = wire::UserRequest { user: wire::UserPayload::from(spec) };
        let builder = self.authed(Method::POST, &self.endpoint("users"));
        let envelope: wire::UserEnvelope = self.call_json(builder, &request).await?;
        Ok(envelope.user)
    }

    /// Fetch a user by server-assigned id.
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let url = self.endpoint(&format!("users/{}", user_id));
        let envelope: wire::UserEnvelope = self.call(self.authed(Method::GET, &url)).await?;
        Ok(envelope.user)
    }

    /// Look a user up by email.
    ///
    /// The server-side filter narrows the list, but its matching may be
    /// case-insensitive or partial, so the returned page is scanned for an
    /// exact email match. A non-empty page with no exact match is still
    /// [`TabsyncError::NotFound`].
    pub async fn find_user_by_email(&self, email: &str) -> Result<User> {
        let builder = self
            .authed(Method::GET, &self.endpoint("users"))
            .query(&[("filter", format!("name:eq:{}", email))]);

        let response: wire::UserListResponse = self.call(builder).await?;

        response
            .users
            .user
            .into_iter()
            .find(|user| user.email == email)
            .ok_or_else(|| TabsyncError::NotFound(format!("user with email '{}'", email)))
    }

    /// Update a user and return the server's view of it.
    pub async fn update_user(&self, user_id: &str, spec: &UserSpec) -> Result<User> {
        let request = wire::UserRequest { user: wire::UserPayload::from(spec) };
        let url = self.endpoint(&format!("users/{}", user_id));
        let envelope: wire::UserEnvelope =
            self.call_json(self.authed(Method::PUT, &url), &request).await?;
        Ok(envelope.user)
    }

    /// Delete a user by id.
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("users/{}", user_id));
        self.call_no_content(self.authed(Method::DELETE, &url)).await
    }
}
