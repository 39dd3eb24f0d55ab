//! Common data types used throughout the application

use serde::{Deserialize, Serialize};

/// A user as reported by the Tableau REST API.
///
/// The server assigns `id` on creation; `email` is the human-facing key,
/// unique within a site. Fields absent from a response deserialize to empty
/// strings, mirroring the wire format's optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub site_role: String,
    pub auth_setting: String,
}

/// Desired attributes for creating or updating a user.
///
/// Site role and auth setting are forwarded verbatim; the server rejects
/// invalid values and that rejection surfaces as a remote status error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSpec {
    pub email: String,
    pub site_role: String,
    pub auth_setting: String,
}

/// A group as reported by the Tableau REST API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// A group's membership read as a derived relation: the group and the
/// emails of its current members, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    pub group_id: String,
    pub user_emails: Vec<String>,
}

/// Pagination cursor returned by list endpoints.
///
/// The wire carries all three fields as strings; they are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page_number: String,
    pub page_size: String,
    pub total_available: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_with_missing_fields() {
        let user: User =
            serde_json::from_str(r#"{"id":"u-1","name":"a@x.com"}"#).expect("deserialize user");
        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "a@x.com");
        assert_eq!(user.email, "");
        assert_eq!(user.site_role, "");
    }

    #[test]
    fn user_uses_camel_case_on_the_wire() {
        let user = User {
            id: "u-1".to_string(),
            email: "a@x.com".to_string(),
            name: "a@x.com".to_string(),
            site_role: "Viewer".to_string(),
            auth_setting: "SAML".to_string(),
        };
        let json = serde_json::to_value(&user).expect("serialize user");
        assert_eq!(json["siteRole"], "Viewer");
        assert_eq!(json["authSetting"], "SAML");
    }

    #[test]
    fn pagination_fields_stay_strings() {
        let page: Pagination = serde_json::from_str(
            r#"{"pageNumber":"1","pageSize":"1000","totalAvailable":"2"}"#,
        )
        .expect("deserialize pagination");
        assert_eq!(page.page_number, "1");
        assert_eq!(page.total_available, "2");
    }
}
