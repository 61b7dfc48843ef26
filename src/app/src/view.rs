use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::*;

/// Display values derived from an end device record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceSummary {
    pub activation_mode: ActivationMode,
    pub activation_mode_label: String,
    pub lorawan_version: String,
    pub lorawan_version_label: Option<String>,
    pub lorawan_phy_version_label: Option<String>,
    pub device_class: DeviceClass,
    pub device_class_key: String,
    pub application_server_address: Option<String>,
    pub network_server_address: Option<String>,
    pub join_server_address: Option<String>,
}

impl From<&EndDevice> for DeviceSummary {
    fn from(device: &EndDevice) -> Self {
        let activation_mode = get_activation_mode(device);
        let device_class = get_device_class(device);
        Self {
            activation_mode,
            activation_mode_label: activation_mode.label().to_string(),
            lorawan_version: get_lorawan_version(device).to_string(),
            lorawan_version_label: get_lorawan_version_label(device).map(str::to_string),
            lorawan_phy_version_label: get_lorawan_phy_version_label(device).map(str::to_string),
            device_class,
            device_class_key: device_class.style_key().to_string(),
            application_server_address: get_application_server_address(device).map(str::to_string),
            network_server_address: get_network_server_address(device).map(str::to_string),
            join_server_address: get_join_server_address(device).map(str::to_string),
        }
    }
}

/// View model rendered by the shell
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub form: FormValues,
    pub registration_type: RegistrationType,
    pub may_provision: bool,
    /// `None` until a repository selection exists
    pub selection_has_other: Option<bool>,
    pub selection_complete: Option<bool>,
    pub unknown_hw_version: bool,
    pub has_template: bool,
    pub lorawan_version_label: Option<String>,
    pub lorawan_phy_version_label: Option<String>,
    pub device: Option<DeviceSummary>,
    pub last_provision_request: Option<ProvisionRequest>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let selection = model.form.version_ids.as_ref();
        // Labels for the versions picked in the form use the same lookups as a device record
        let form_versions = EndDevice {
            lorawan_version: model.form.lorawan_version.clone(),
            lorawan_phy_version: model.form.lorawan_phy_version.clone(),
            ..Default::default()
        };

        Self {
            form: model.form.clone(),
            registration_type: model.registration_type,
            may_provision: model.may_provision(),
            selection_has_other: has_selected_device_repository_other(selection),
            selection_complete: has_completed_device_repository_selection(selection),
            unknown_hw_version: selection
                .and_then(|selection| selection.get("hardware_version"))
                .is_some_and(is_unknown_hw_version),
            has_template: model.template.is_some(),
            lorawan_version_label: get_lorawan_version_label(&form_versions).map(str::to_string),
            lorawan_phy_version_label: get_lorawan_phy_version_label(&form_versions)
                .map(str::to_string),
            device: model.device.as_ref().map(DeviceSummary::from),
            last_provision_request: model.last_provision_request.clone(),
            error_message: model.error_message.clone(),
            success_message: model.success_message.clone(),
        }
    }
}
