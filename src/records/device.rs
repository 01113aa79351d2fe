use crate::domain::{Personality, Reachability};
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Inventory entry from `/dataservice/device`.
///
/// Status fields are public so a caller can refresh them in place from a later poll.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Device {
    pub uuid: String,
    pub personality: Personality,
    #[serde(rename = "deviceId")]
    pub id: String,
    #[serde(rename = "host-name")]
    pub hostname: String,
    pub reachability: Reachability,
    #[serde(rename = "local-system-ip")]
    pub local_system_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "memUsage", skip_serializing_if = "Option::is_none")]
    pub mem_usage: Option<f64>,
    #[serde(rename = "memState", skip_serializing_if = "Option::is_none")]
    pub mem_state: Option<String>,
    #[serde(rename = "cpuState", skip_serializing_if = "Option::is_none")]
    pub cpu_state: Option<String>,
    #[serde(rename = "cpuLoad", skip_serializing_if = "Option::is_none")]
    pub cpu_load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_description: Option<String>,
    #[serde(rename = "connectedVManages", default)]
    pub connected_vmanages: Vec<String>,
    #[serde(rename = "device-model", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "board-serial", skip_serializing_if = "Option::is_none")]
    pub board_serial: Option<String>,
    #[serde(rename = "vedgeCertificateState", skip_serializing_if = "Option::is_none")]
    pub vedge_certificate_state: Option<String>,
    #[serde(rename = "chasisNumber", skip_serializing_if = "Option::is_none")]
    pub chasis_number: Option<String>,
}

impl Device {
    pub fn is_reachable(&self) -> bool {
        self.reachability == Reachability::Reachable
    }
}
