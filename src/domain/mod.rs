mod device_model;
mod personality;
mod reachability;
mod timestamp;
mod timestamp_deserializer;
mod validity_period;
mod wire_enum;

pub use device_model::DeviceModel;
pub use personality::Personality;
pub use reachability::Reachability;
pub use timestamp::{Timestamp, TimestampFormat};
pub use validity_period::ValidityPeriod;
