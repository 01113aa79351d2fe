use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Provider-Tenant -> Tenant -> Administration -> Manage users -> Remote AAA.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct TenantAAA {
    accounting: bool,
    #[serde(rename = "adminAuthOrder")]
    admin_auth_order: bool,
    #[serde(rename = "auditDisable")]
    audit_disable: bool,
    #[serde(rename = "authFallback")]
    auth_fallback: bool,
    #[serde(rename = "authOrder")]
    auth_order: Vec<String>,
    #[serde(rename = "radiusServers")]
    radius_servers: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct RadiusServer {
    address: String,
    #[serde(rename = "authPort")]
    auth_port: u16,
    #[serde(rename = "acctPort")]
    acct_port: u16,
    tag: String,
    vpn: i64,
    #[serde(rename = "vpnIpSubnet")]
    vpn_ip_subnet: String,
    key: String,
    #[serde(rename = "secretKey")]
    secret_key: String,
    priority: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct TenantRadiusServer {
    #[serde(default = "default_timeout")]
    timeout: i64,
    #[serde(default = "default_retransmit")]
    retransmit: i64,
    #[serde(default)]
    server: Vec<RadiusServer>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct TacacsServer {
    address: String,
    #[serde(rename = "authPort")]
    auth_port: u16,
    vpn: i64,
    #[serde(rename = "vpnIpSubnet")]
    vpn_ip_subnet: String,
    key: String,
    #[serde(rename = "secretKey")]
    secret_key: String,
    priority: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct TenantTacacsServer {
    #[serde(default = "default_timeout")]
    timeout: i64,
    #[serde(default = "default_authentication")]
    authentication: String,
    #[serde(default)]
    server: Vec<TacacsServer>,
}

fn default_timeout() -> i64 {
    3
}

fn default_retransmit() -> i64 {
    5
}

fn default_authentication() -> String {
    "PAP".to_string()
}
