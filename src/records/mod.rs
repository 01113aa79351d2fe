mod aaa;
mod admin_tech;
mod administration;
mod alarm;
mod certificate;
mod device;
mod monitoring;
mod omp;
mod packet_capture;
mod template;
mod tenant;
mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use aaa::{RadiusServer, TacacsServer, TenantAAA, TenantRadiusServer, TenantTacacsServer};
pub use admin_tech::{AdminTech, DeviceAdminTech};
pub use administration::{CloudConnectorData, CloudOnRampForSaasMode, CloudServicesSettings, Organization, ServiceConfigurationData, Vbond};
pub use alarm::AlarmData;
pub use certificate::{Certificate, RETRIEVE_INTERVAL};
pub use device::Device;
pub use monitoring::{BfdSessionData, Connection, EventData, Reboot, Speedtest, WanInterface};
pub use omp::{
    OmpAdvertisedRouteData, OmpAdvertisedTlocData, OmpPeerData, OmpReceivedRouteData, OmpReceivedTlocData, OmpServiceData, OmpSummaryData,
};
pub use packet_capture::{PacketSetup, Status};
pub use template::{FeatureTemplateInformation, Template};
pub use tenant::{TenantInfo, TierInfo, Tloc};
pub use user::{Password, User};
