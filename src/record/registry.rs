use crate::record::{Record, RecordError};
use crate::records::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

type Describe = fn(&Value) -> Result<String, RecordError>;

static RECORD_REGISTRY: LazyLock<HashMap<&'static str, Describe>> = LazyLock::new(|| {
    let mut registry = HashMap::new();
    register::<AdminTech>(&mut registry);
    register::<DeviceAdminTech>(&mut registry);
    register::<AlarmData>(&mut registry);
    register::<Device>(&mut registry);
    register::<Reboot>(&mut registry);
    register::<WanInterface>(&mut registry);
    register::<Connection>(&mut registry);
    register::<BfdSessionData>(&mut registry);
    register::<OmpPeerData>(&mut registry);
    register::<OmpReceivedRouteData>(&mut registry);
    register::<OmpAdvertisedRouteData>(&mut registry);
    register::<OmpReceivedTlocData>(&mut registry);
    register::<OmpAdvertisedTlocData>(&mut registry);
    register::<OmpServiceData>(&mut registry);
    register::<OmpSummaryData>(&mut registry);
    register::<EventData>(&mut registry);
    register::<User>(&mut registry);
    register::<Password>(&mut registry);
    register::<Template>(&mut registry);
    register::<FeatureTemplateInformation>(&mut registry);
    register::<Speedtest>(&mut registry);
    register::<PacketSetup>(&mut registry);
    register::<Status>(&mut registry);
    register::<ServiceConfigurationData>(&mut registry);
    register::<CloudConnectorData>(&mut registry);
    register::<CloudServicesSettings>(&mut registry);
    register::<CloudOnRampForSaasMode>(&mut registry);
    register::<Organization>(&mut registry);
    register::<Certificate>(&mut registry);
    register::<Vbond>(&mut registry);
    register::<TenantInfo>(&mut registry);
    register::<Tloc>(&mut registry);
    register::<TierInfo>(&mut registry);
    register::<TenantAAA>(&mut registry);
    register::<RadiusServer>(&mut registry);
    register::<TenantRadiusServer>(&mut registry);
    register::<TacacsServer>(&mut registry);
    register::<TenantTacacsServer>(&mut registry);
    registry
});

fn register<T: Record>(registry: &mut HashMap<&'static str, Describe>) {
    registry.insert(T::KIND, |payload| Ok(T::from_payload(payload)?.to_string()));
}

/// Constructs a record of the given kind and returns its debug rendering.
pub fn describe(kind: &str, payload: &Value) -> Result<String, RecordError> {
    let describe = RECORD_REGISTRY.get(kind).ok_or_else(|| RecordError::UnknownKind(kind.to_owned()))?;
    describe(payload)
}

pub fn known_kinds() -> Vec<&'static str> {
    let mut kinds: Vec<_> = RECORD_REGISTRY.keys().copied().collect();
    kinds.sort_unstable();
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn every_record_kind_is_registered() {
        let kinds = known_kinds();
        assert_eq!(kinds.len(), 38);
        assert!(kinds.contains(&"alarm-data"));
        assert!(kinds.contains(&"device"));
        assert!(kinds.contains(&"omp-summary-data"));
    }

    #[test]
    fn describe_renders_the_record() -> Result<(), RecordError> {
        let rendered = describe("vbond", &json!({"domainIp": "10.0.0.11", "port": 12346}))?;
        assert_eq!(rendered, "Vbond(\n    vbond_address: 10.0.0.11,\n    vbond_port: 12346,\n)");
        Ok(())
    }

    #[test]
    fn describe_rejects_an_unknown_kind() {
        let result = describe("router", &json!({}));
        assert!(matches!(result, Err(RecordError::UnknownKind(kind)) if kind == "router"));
    }
}
