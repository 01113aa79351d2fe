use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Endpoint: `/dataservice/tenant`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct TenantInfo {
    name: String,
    #[serde(rename = "orgName")]
    organization_name: String,
    #[serde(rename = "subDomain")]
    sub_domain: String,
    #[serde(rename = "tenantId")]
    id: String,
    #[serde(rename = "flakeId")]
    flake_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct Tloc {
    color: String,
    encapsulation: String,
}

/// Endpoint: `/dataservice/tier`, shown as "Resource Profile" since 20.12.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct TierInfo {
    #[serde(rename = "tierName")]
    name: String,
    vpn: i64,
    #[serde(rename = "@rid")]
    rid: i64,
    #[serde(rename = "ipv4RouteLimitType", skip_serializing_if = "Option::is_none")]
    ipv4_route_limit_type: Option<String>,
    #[serde(rename = "ipv4RouteLimitThreshold", skip_serializing_if = "Option::is_none")]
    ipv4_route_limit_threshold: Option<i64>,
    #[serde(rename = "ipv4RouteLimit", skip_serializing_if = "Option::is_none")]
    ipv4_route_limit: Option<i64>,
    #[serde(rename = "ipv6RouteLimitType", skip_serializing_if = "Option::is_none")]
    ipv6_route_limit_type: Option<String>,
    #[serde(rename = "ipv6RouteLimitThreshold", skip_serializing_if = "Option::is_none")]
    ipv6_route_limit_threshold: Option<i64>,
    #[serde(rename = "ipv6RouteLimit", skip_serializing_if = "Option::is_none")]
    ipv6_route_limit: Option<i64>,
    #[serde(default)]
    tlocs: Vec<Tloc>,
    // 20.12 and later
    #[serde(rename = "natSessionLimit", skip_serializing_if = "Option::is_none")]
    nat_session_limit: Option<i64>,
}
