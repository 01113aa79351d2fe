use crate::domain::Timestamp;
use crate::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct AdminTech {
    #[serde(rename = "creationTime")]
    creation_time: Timestamp,
    size: i64,
    #[serde(rename = "fileName")]
    filename: String,
    state: String,
    #[serde(rename = "deviceIP")]
    device_ip: String,
    #[serde(rename = "local-system-ip")]
    system_ip: String,
    #[serde(rename = "requestTokenId")]
    token_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tac_state: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct DeviceAdminTech {
    #[serde(rename = "fileName")]
    filename: String,
    #[serde(rename = "creationTime")]
    creation_time: Timestamp,
    size: i64,
    state: String,
    #[serde(rename = "requestTokenId", skip_serializing_if = "Option::is_none")]
    token_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::test_support::{assert_required_fields, assert_round_trip};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn admin_tech_payload() -> Value {
        json!({
            "creationTime": 1680012345678u64,
            "size": 5242880,
            "fileName": "169.254.10.1-vm1-20230328-admin-tech.tar.gz",
            "state": "done",
            "deviceIP": "169.254.10.1",
            "local-system-ip": "1.1.1.1",
            "requestTokenId": "5b1a8a4e-token",
            "tac_state": "not-uploaded"
        })
    }

    #[test]
    fn admin_tech_round_trips() {
        let admin_tech = assert_round_trip::<AdminTech>(admin_tech_payload());
        assert_eq!(admin_tech.system_ip(), "1.1.1.1");
        assert_eq!(admin_tech.creation_time().epoch_millis(), 1680012345678);
        assert_eq!(admin_tech.tac_state().as_deref(), Some("not-uploaded"));
    }

    #[test]
    fn admin_tech_requires_everything_but_tac_state() {
        assert_required_fields::<AdminTech>(
            &admin_tech_payload(),
            &["creationTime", "size", "fileName", "state", "deviceIP", "local-system-ip", "requestTokenId"],
        );
    }

    #[test]
    fn device_admin_tech_omits_an_absent_token() {
        let payload = json!({
            "fileName": "vm5-admin-tech.tar.gz",
            "creationTime": "2023-03-28T10:40:00Z",
            "size": "1024",
            "state": "in-progress"
        });

        let admin_tech = DeviceAdminTech::from_payload(&payload).unwrap();

        assert_eq!(*admin_tech.size(), 1024);
        assert_eq!(admin_tech.token_id(), &None);
        assert_eq!(
            admin_tech.to_payload().unwrap(),
            json!({
                "fileName": "vm5-admin-tech.tar.gz",
                "creationTime": "2023-03-28T10:40:00Z",
                "size": 1024,
                "state": "in-progress"
            })
        );
    }

    #[test]
    fn device_admin_tech_requires_everything_but_the_token() {
        let payload = json!({
            "fileName": "vm5-admin-tech.tar.gz",
            "creationTime": 1680012345678u64,
            "size": 1024,
            "state": "done",
            "requestTokenId": "7c2e9f10-token"
        });

        assert_round_trip::<DeviceAdminTech>(payload.clone());
        assert_required_fields::<DeviceAdminTech>(&payload, &["fileName", "creationTime", "size", "state"]);
    }

    #[test]
    fn device_admin_tech_renders_every_field() {
        let admin_tech = DeviceAdminTech::new(
            "vm5-admin-tech.tar.gz".to_string(),
            Timestamp::parse_rfc3339("2023-03-28T10:40:00Z").unwrap(),
            1024,
            "done".to_string(),
            None,
        );

        assert_eq!(
            admin_tech.to_string(),
            "DeviceAdminTech(\n    filename: vm5-admin-tech.tar.gz,\n    creation_time: 2023-03-28T10:40:00Z,\n    size: 1024,\n    state: done,\n    token_id: None,\n)"
        );
    }
}
