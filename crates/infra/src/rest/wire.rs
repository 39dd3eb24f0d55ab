//! Wire envelopes for the Tableau REST API.
//!
//! One struct per observed response shape: sign-in, single resource, and
//! list-with-pagination. Single objects nest under their lowercase type
//! name; lists nest the singular array inside the plural key with a
//! sibling `pagination` object.

use serde::{Deserialize, Serialize};
use tabsync_domain::{Group, Pagination, User, UserSpec};

// ---------------------------------------------------------------------------
// Sign-in exchange
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct SignInRequest {
    pub credentials: SignInCredentials,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInCredentials {
    pub personal_access_token_name: String,
    pub personal_access_token_secret: String,
    pub site: SiteRef,
}

/// Site reference in the sign-in request: content URL only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SiteRef {
    pub content_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignInResponse {
    pub credentials: SignInResponseData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInResponseData {
    pub site: SiteInfo,
    pub token: String,
    /// Advisory expiry hint, stored verbatim and never enforced.
    #[serde(default)]
    pub estimated_time_to_expiration: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SiteInfo {
    pub id: String,
    #[serde(default)]
    pub content_url: String,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Outgoing user payload. The server expects `name` to mirror `email`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserPayload {
    pub email: String,
    pub name: String,
    pub site_role: String,
    pub auth_setting: String,
}

impl From<&UserSpec> for UserPayload {
    fn from(spec: &UserSpec) -> Self {
        Self {
            email: spec.email.clone(),
            name: spec.email.clone(),
            site_role: spec.site_role.clone(),
            auth_setting: spec.auth_setting.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UserRequest {
    pub user: UserPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserList {
    #[serde(default)]
    pub user: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserListResponse {
    #[serde(default)]
    pub users: UserList,
    #[serde(default)]
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct GroupPayload {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GroupRequest {
    pub group: GroupPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupEnvelope {
    pub group: Group,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GroupList {
    #[serde(default)]
    pub group: Vec<Group>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupListResponse {
    #[serde(default)]
    pub groups: GroupList,
    #[serde(default)]
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Group membership
// ---------------------------------------------------------------------------

/// Add-member payload: the member is referenced by user id only.
#[derive(Debug, Serialize)]
pub(crate) struct MemberRef {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct MembershipRequest {
    pub user: MemberRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_request_matches_the_wire_shape() {
        let request = SignInRequest {
            credentials: SignInCredentials {
                personal_access_token_name: "ci".to_string(),
                personal_access_token_secret: "secret".to_string(),
                site: SiteRef { content_url: "analytics".to_string() },
            },
        };

        let json = serde_json::to_value(&request).expect("serialize sign-in");
        assert_eq!(json["credentials"]["personalAccessTokenName"], "ci");
        assert_eq!(json["credentials"]["personalAccessTokenSecret"], "secret");
        assert_eq!(json["credentials"]["site"]["contentUrl"], "analytics");
    }

    #[test]
    fn sign_in_response_decodes() {
        let body = r#"{
            "credentials": {
                "site": {"id": "site-1", "contentUrl": "analytics"},
                "token": "tok-abc",
                "estimatedTimeToExpiration": "364:23:59"
            }
        }"#;

        let response: SignInResponse = serde_json::from_str(body).expect("decode sign-in");
        assert_eq!(response.credentials.site.id, "site-1");
        assert_eq!(response.credentials.token, "tok-abc");
        assert_eq!(
            response.credentials.estimated_time_to_expiration.as_deref(),
            Some("364:23:59")
        );
    }

    #[test]
    fn user_list_nests_singular_array_under_plural_key() {
        let body = r#"{
            "pagination": {"pageNumber": "1", "pageSize": "100", "totalAvailable": "2"},
            "users": {"user": [
                {"id": "u-1", "email": "a@x.com"},
                {"id": "u-2", "email": "b@x.com"}
            ]}
        }"#;

        let response: UserListResponse = serde_json::from_str(body).expect("decode user list");
        assert_eq!(response.users.user.len(), 2);
        assert_eq!(response.users.user[0].email, "a@x.com");
        assert_eq!(response.pagination.total_available, "2");
    }

    #[test]
    fn empty_list_response_decodes_to_no_users() {
        // Tableau omits the inner array entirely when a filter matches nothing.
        let body = r#"{"pagination": {"pageNumber": "1", "pageSize": "100", "totalAvailable": "0"}, "users": {}}"#;

        let response: UserListResponse = serde_json::from_str(body).expect("decode empty list");
        assert!(response.users.user.is_empty());
    }

    #[test]
    fn user_payload_mirrors_email_into_name() {
        let spec = UserSpec {
            email: "a@x.com".to_string(),
            site_role: "Viewer".to_string(),
            auth_setting: "SAML".to_string(),
        };

        let json = serde_json::to_value(UserRequest { user: UserPayload::from(&spec) })
            .expect("serialize user request");
        assert_eq!(json["user"]["name"], "a@x.com");
        assert_eq!(json["user"]["email"], "a@x.com");
        assert_eq!(json["user"]["siteRole"], "Viewer");
    }

    #[test]
    fn membership_request_references_user_by_id() {
        let json =
            serde_json::to_value(MembershipRequest { user: MemberRef { id: "u-9".to_string() } })
                .expect("serialize membership request");
        assert_eq!(json, serde_json::json!({"user": {"id": "u-9"}}));
    }
}
