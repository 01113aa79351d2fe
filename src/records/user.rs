use crate::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct User {
    #[serde(rename = "userName")]
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default)]
    group: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "resGroupName", skip_serializing_if = "Option::is_none")]
    resource_group: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Password {
    #[serde(rename = "oldpassword")]
    pub old_password: String,
    #[serde(rename = "newpassword")]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::test_support::{assert_required_fields, assert_round_trip};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn user_round_trips() {
        let payload = json!({
            "userName": "noc-operator",
            "password": "s3cret",
            "group": ["operator", "netadmin"],
            "locale": "en_US",
            "description": "NOC shift account",
            "resGroupName": "global"
        });

        let user = assert_round_trip::<User>(payload.clone());

        assert_eq!(user.group(), &vec!["operator".to_string(), "netadmin".to_string()]);
        assert_required_fields::<User>(&payload, &["userName"]);
    }

    #[test]
    fn new_user_serializes_only_what_is_set() {
        let user = User::new("auditor".to_string(), None, vec![], None, None, Some("global".to_string()));

        assert_eq!(
            user.to_payload().unwrap(),
            json!({"userName": "auditor", "group": [], "resGroupName": "global"})
        );
        assert_eq!(
            user.to_string(),
            "User(\n    username: auditor,\n    password: None,\n    group: [],\n    locale: None,\n    description: None,\n    resource_group: global,\n)"
        );
    }

    #[test]
    fn password_change_uses_lowercase_keys() {
        let payload = json!({"oldpassword": "admin", "newpassword": "Adm1n!2023"});
        let password = assert_round_trip::<Password>(payload.clone());
        assert_eq!(password.new_password, "Adm1n!2023");
        assert_required_fields::<Password>(&payload, &["oldpassword", "newpassword"]);
    }
}
