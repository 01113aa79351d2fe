use crate::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Administration -> Cluster Management service configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct ServiceConfigurationData {
    #[serde(rename = "vmanageID")]
    vmanage_id: String,
    #[serde(rename = "deviceIP")]
    device_ip: String,
    services: Map<String, Value>,
    #[serde(default = "default_persona")]
    persona: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

fn default_persona() -> String {
    "COMPUTE_AND_DATA".to_string()
}

/// Administration -> Settings -> SD-AVC Cloud Connector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct CloudConnectorData {
    #[serde(rename = "clientId")]
    client_id: String,
    #[serde(rename = "clientSecret")]
    client_secret: String,
    #[serde(rename = "orgName")]
    org_name: String,
    #[serde(rename = "telemetryEnabled")]
    telemetry_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    affinity: Option<String>,
    #[serde(rename = "cloudEnabled", default = "default_cloud_enabled")]
    cloud_enabled: bool,
}

fn default_cloud_enabled() -> bool {
    true
}

/// Administration -> Settings -> Cloud Services.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct CloudServicesSettings {
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    otp: Option<String>,
    #[serde(rename = "cloudGatewayUrl", skip_serializing_if = "Option::is_none")]
    cloud_gateway_url: Option<String>,
}

/// Administration -> Settings -> Cloud onRamp for SaaS.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct CloudOnRampForSaasMode {
    mode: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Organization {
    #[serde(rename = "org")]
    pub name: String,
    #[serde(rename = "domain-id")]
    pub domain_id: i64,
    #[serde(rename = "controlConnectionUp", skip_serializing_if = "Option::is_none")]
    pub control_connection_up: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
pub struct Vbond {
    #[serde(rename = "domainIp")]
    pub vbond_address: String,
    #[serde(rename = "port")]
    pub vbond_port: u16,
}
