use crate::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct OmpPeerData {
    pub r#type: String,
    pub state: String,
    #[serde(rename = "peer")]
    pub peer_ip: String,
    #[serde(rename = "site-id")]
    pub site_id: String,
    #[serde(rename = "domain-id")]
    pub domain_id: String,
    #[serde(rename = "vdevice-name")]
    pub device_ip: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct OmpReceivedRouteData {
    pub protocol: String,
    #[serde(rename = "from-peer")]
    pub peer_ip: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct OmpAdvertisedRouteData {
    pub protocol: String,
    #[serde(rename = "to-peer")]
    pub peer_ip: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct OmpReceivedTlocData {
    #[serde(rename = "from-peer")]
    pub peer_ip: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct OmpAdvertisedTlocData {
    #[serde(rename = "to-peer")]
    pub peer_ip: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct OmpServiceData {
    #[serde(rename = "service")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// Counters arrive as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct OmpSummaryData {
    #[serde(rename = "operstate")]
    pub oper_state: String,
    #[serde(rename = "adminstate")]
    pub admin_state: String,
    #[serde(rename = "routes-received")]
    pub routes_received: String,
    #[serde(rename = "tlocs-received")]
    pub tlocs_received: String,
    #[serde(rename = "routes-sent")]
    pub routes_sent: String,
    #[serde(rename = "tlocs-installed")]
    pub tlocs_installed: String,
    #[serde(rename = "tlocs-sent")]
    pub tlocs_sent: String,
    #[serde(rename = "vsmart-peers")]
    pub vsmart_peers: String,
}
