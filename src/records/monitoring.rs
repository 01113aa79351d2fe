use crate::domain::Timestamp;
use crate::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Reboot {
    #[serde(rename = "reboot_reason")]
    pub reason: String,
    #[serde(rename = "reboot_date_time")]
    pub date_time: Timestamp,
    #[serde(rename = "vdevice-name")]
    pub vdevice_name: String,
    #[serde(rename = "reboot_date_time-date")]
    pub reboot_date_time_date: Timestamp,
    #[serde(rename = "vdevice-dataKey")]
    pub vdevice_data_key: String,
    #[serde(rename = "lastupdated")]
    pub last_updated: Timestamp,
    #[serde(rename = "vdevice-host-name")]
    pub vdevice_host_name: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct WanInterface {
    pub color: String,
    #[serde(rename = "vdevice-name")]
    pub vdevice_ip: String,
    #[serde(rename = "vdevice-host-name")]
    pub vdevice_name: String,
    #[serde(rename = "admin-state")]
    pub admin_state: String,
    #[serde(rename = "interface")]
    pub interface_name: String,
    #[serde(rename = "private-ip")]
    pub private_ip: String,
    #[serde(rename = "public-ip")]
    pub public_ip: String,
    #[serde(rename = "private-port")]
    pub private_port: u16,
    #[serde(rename = "public-port")]
    pub public_port: u16,
    #[serde(rename = "operation-state")]
    pub operational_state: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Connection {
    pub state: String,
    #[serde(rename = "peer-type")]
    pub peer_type: String,
    #[serde(rename = "system-ip")]
    pub system_ip: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct BfdSessionData {
    pub state: String,
    #[serde(rename = "site-id")]
    pub site_id: String,
    #[serde(rename = "local-color")]
    pub source_tloc_color: String,
    #[serde(rename = "color")]
    pub remote_tloc_color: String,
    #[serde(rename = "system-ip")]
    pub device_ip: String,
    #[serde(rename = "src-ip")]
    pub source_ip: String,
    #[serde(rename = "dst-ip")]
    pub destination_public_ip: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct EventData {
    pub system_ip: String,
    pub vmanage_system_ip: String,
    pub tenant: String,
    pub device_type: String,
    pub component: String,
    pub severity_level: String,
    pub host_name: String,
    pub event: String,
    pub details: String,
    #[serde(rename = "eventname")]
    pub event_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Speedtest {
    pub device_ip: String,
    pub device_name: String,
    pub destination_ip: String,
    pub destination_name: String,
    pub status: String,
    pub up_speed: f64,
    pub down_speed: f64,
}
