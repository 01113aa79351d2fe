use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Alarm attributes as returned by `/dataservice/alarms`, also used as a match pattern.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct AlarmData {
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "system-ip", skip_serializing_if = "Option::is_none")]
    system_ip: Option<String>,
    #[serde(rename = "host-name", skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,
    #[serde(rename = "site-id", skip_serializing_if = "Option::is_none")]
    site_id: Option<String>,
    #[serde(rename = "new-state", skip_serializing_if = "Option::is_none")]
    new_state: Option<String>,
    #[serde(rename = "if-name", skip_serializing_if = "Option::is_none")]
    interface_name: Option<String>,
    #[serde(rename = "vpn-id", skip_serializing_if = "Option::is_none")]
    vpn_id: Option<String>,
}

impl AlarmData {
    /// True when every field set on `self` holds the same value on `other`.
    ///
    /// Fields that are absent, empty or `false` on `self` are not compared.
    pub fn is_subset_of(&self, other: &AlarmData) -> bool {
        fn matches<T: PartialEq + Blank>(mine: &Option<T>, theirs: &Option<T>) -> bool {
            mine.as_ref().is_none_or(Blank::is_blank) || mine == theirs
        }

        matches(&self.component, &other.component)
            && matches(&self.severity, &other.severity)
            && matches(&self.active, &other.active)
            && matches(&self.name, &other.name)
            && matches(&self.system_ip, &other.system_ip)
            && matches(&self.hostname, &other.hostname)
            && matches(&self.site_id, &other.site_id)
            && matches(&self.new_state, &other.new_state)
            && matches(&self.interface_name, &other.interface_name)
            && matches(&self.vpn_id, &other.vpn_id)
    }

    /// Copy with every text field lowercased.
    pub fn lowercased(&self) -> AlarmData {
        fn lower(value: &Option<String>) -> Option<String> {
            value.as_deref().map(str::to_lowercase)
        }

        AlarmData {
            component: lower(&self.component),
            severity: lower(&self.severity),
            active: self.active,
            name: lower(&self.name),
            system_ip: lower(&self.system_ip),
            hostname: lower(&self.hostname),
            site_id: lower(&self.site_id),
            new_state: lower(&self.new_state),
            interface_name: lower(&self.interface_name),
            vpn_id: lower(&self.vpn_id),
        }
    }
}

trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !self
    }
}
