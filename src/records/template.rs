use crate::domain::{DeviceModel, Timestamp};
use crate::record::Record;
use serde::{Deserialize, Deserializer, Serialize};

/// Device template from `/dataservice/template/device`.
///
/// `device_type` is resolved from `device_type_str` once, while the template is built.
#[derive(Clone, Debug, PartialEq, Serialize, Record)]
pub struct Template {
    #[serde(rename = "deviceType")]
    device_type_str: String,
    #[serde(skip)]
    device_type: DeviceModel,
    #[serde(rename = "lastUpdatedBy")]
    pub last_updated_by: String,
    #[serde(rename = "resourceGroup")]
    pub resource_group: String,
    #[serde(rename = "templateClass")]
    pub template_class: String,
    #[serde(rename = "configType")]
    pub config_type: String,
    #[serde(rename = "templateId")]
    pub id: String,
    #[serde(rename = "factoryDefault")]
    pub factory_default: bool,
    #[serde(rename = "templateName")]
    pub name: String,
    #[serde(rename = "devicesAttached")]
    pub devices_attached: i64,
    #[serde(rename = "templateDescription")]
    pub description: String,
    #[serde(rename = "draftMode")]
    pub draft_mode: String,
    #[serde(rename = "lastUpdatedOn")]
    pub last_updated_on: Timestamp,
    #[serde(rename = "templateAttached")]
    pub template_attached: i64,
}

impl Template {
    pub fn device_type_str(&self) -> &str {
        &self.device_type_str
    }

    pub fn device_type(&self) -> DeviceModel {
        self.device_type
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawTemplate {
            #[serde(rename = "deviceType")]
            device_type_str: String,
            #[serde(rename = "lastUpdatedBy")]
            last_updated_by: String,
            #[serde(rename = "resourceGroup")]
            resource_group: String,
            #[serde(rename = "templateClass")]
            template_class: String,
            #[serde(rename = "configType")]
            config_type: String,
            #[serde(rename = "templateId")]
            id: String,
            #[serde(rename = "factoryDefault")]
            factory_default: bool,
            #[serde(rename = "templateName")]
            name: String,
            #[serde(rename = "devicesAttached")]
            devices_attached: i64,
            #[serde(rename = "templateDescription")]
            description: String,
            #[serde(rename = "draftMode")]
            draft_mode: String,
            #[serde(rename = "lastUpdatedOn")]
            last_updated_on: Timestamp,
            #[serde(rename = "templateAttached")]
            template_attached: i64,
        }

        let raw = RawTemplate::deserialize(deserializer)?;
        let device_type = raw
            .device_type_str
            .parse::<DeviceModel>()
            .map_err(|_| serde::de::Error::unknown_variant(&raw.device_type_str, DeviceModel::ACCEPTED))?;

        Ok(Template {
            device_type_str: raw.device_type_str,
            device_type,
            last_updated_by: raw.last_updated_by,
            resource_group: raw.resource_group,
            template_class: raw.template_class,
            config_type: raw.config_type,
            id: raw.id,
            factory_default: raw.factory_default,
            name: raw.name,
            devices_attached: raw.devices_attached,
            description: raw.description,
            draft_mode: raw.draft_mode,
            last_updated_on: raw.last_updated_on,
            template_attached: raw.template_attached,
        })
    }
}

/// Feature template from `/dataservice/template/feature`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct FeatureTemplateInformation {
    #[serde(rename = "templateId")]
    id: String,
    #[serde(rename = "templateName")]
    name: String,
    #[serde(rename = "templateDescription")]
    description: String,
    #[serde(rename = "templateType")]
    r#type: String,
    #[serde(rename = "deviceType")]
    device_types: Vec<String>,
    #[serde(rename = "lastUpdatedBy")]
    last_updated_by: String,
    #[serde(rename = "lastUpdatedOn")]
    last_updated_on: Timestamp,
    #[serde(rename = "factoryDefault")]
    factory_default: bool,
    #[serde(rename = "devicesAttached")]
    devices_attached: i64,
    #[serde(rename = "attachedMastersCount")]
    attached_masters: i64,
    #[serde(rename = "templateMinVersion")]
    version: String,
    #[serde(rename = "configType")]
    config_type: String,
    #[serde(rename = "createdBy")]
    created_by: String,
    #[serde(rename = "createdOn")]
    created_on: Timestamp,
    #[serde(rename = "resourceGroup")]
    resource_group: String,
}
