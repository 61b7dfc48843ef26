use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use super::repository::{has_valid_device_repository_type, DeviceTemplate, VersionSelection};

/// How the end device parameters are entered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InputMethod {
    #[default]
    DeviceRepository,
    Manual,
    /// Any method this core does not know; never provisionable
    #[serde(other)]
    Unsupported,
}

/// Register one device, or keep the form filled to register several in a row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationType {
    #[default]
    Single,
    Multiple,
}

impl RegistrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

/// Current values of the onboarding form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormValues {
    #[serde(rename = "_inputMethod")]
    pub input_method: Option<InputMethod>,
    pub frequency_plan_id: Option<String>,
    pub lorawan_version: Option<String>,
    pub lorawan_phy_version: Option<String>,
    pub version_ids: Option<VersionSelection>,
}

pub(crate) fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|value| !value.is_empty())
}

fn first_filled(value: Option<&str>, fallback: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.is_empty())
        .or(fallback)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Whether the form holds enough information to provision the device
pub fn may_provision_device(values: &FormValues, template: Option<&DeviceTemplate>) -> bool {
    match values.input_method {
        Some(InputMethod::Manual) => {
            is_filled(&values.frequency_plan_id)
                && is_filled(&values.lorawan_version)
                && is_filled(&values.lorawan_phy_version)
        }
        Some(InputMethod::DeviceRepository) => {
            has_valid_device_repository_type(values.version_ids.as_ref(), template)
                && is_filled(&values.frequency_plan_id)
        }
        Some(InputMethod::Unsupported) | None => false,
    }
}

/// Provisioning parameters handed to the shell once the form is complete
///
/// Versions are optional: a device repository template may leave them to the
/// registry. Manual forms always carry both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ProvisionRequest {
    pub input_method: InputMethod,
    pub registration_type: RegistrationType,
    #[validate(min_length = 1)]
    pub frequency_plan_id: String,
    #[validate(min_length = 1)]
    pub lorawan_version: Option<String>,
    #[validate(min_length = 1)]
    pub lorawan_phy_version: Option<String>,
    pub version_ids: Option<VersionSelection>,
}

impl ProvisionRequest {
    /// Build a request from form values that passed [`may_provision_device`].
    ///
    /// In device repository mode the versions come from the template when the
    /// form does not carry them.
    pub fn from_form(
        values: &FormValues,
        template: Option<&DeviceTemplate>,
        registration_type: RegistrationType,
    ) -> Self {
        let template_device = template.map(|template| &template.end_device);
        let lorawan_version = first_filled(
            values.lorawan_version.as_deref(),
            template_device.and_then(|device| device.lorawan_version.as_deref()),
        );
        let lorawan_phy_version = first_filled(
            values.lorawan_phy_version.as_deref(),
            template_device.and_then(|device| device.lorawan_phy_version.as_deref()),
        );

        Self {
            input_method: values.input_method.unwrap_or_default(),
            registration_type,
            frequency_plan_id: values.frequency_plan_id.clone().unwrap_or_default(),
            lorawan_version,
            lorawan_phy_version,
            version_ids: values.version_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: serde_json::Value) -> FormValues {
        serde_json::from_value(value).unwrap()
    }

    mod manual {
        use super::*;

        #[test]
        fn complete_manual_form_may_provision() {
            let values = form(json!({
                "_inputMethod": "manual",
                "frequency_plan_id": "EU_863_870",
                "lorawan_version": "1.0.3",
                "lorawan_phy_version": "1.0.3-a",
            }));
            assert!(may_provision_device(&values, None));
        }

        #[test]
        fn missing_phy_version_blocks_provisioning() {
            let values = form(json!({
                "_inputMethod": "manual",
                "frequency_plan_id": "EU_863_870",
                "lorawan_version": "1.0.3",
            }));
            assert!(!may_provision_device(&values, None));
        }

        #[test]
        fn empty_frequency_plan_blocks_provisioning() {
            let values = form(json!({
                "_inputMethod": "manual",
                "frequency_plan_id": "",
                "lorawan_version": "1.0.3",
                "lorawan_phy_version": "1.0.3-a",
            }));
            assert!(!may_provision_device(&values, None));
        }
    }

    mod device_repository {
        use super::*;

        #[test]
        fn complete_selection_with_template_may_provision() {
            let values = form(json!({
                "_inputMethod": "device-repository",
                "frequency_plan_id": "EU_863_870",
                "version_ids": { "brand": "acme" },
            }));
            assert!(may_provision_device(&values, Some(&DeviceTemplate::default())));
        }

        #[test]
        fn missing_template_blocks_provisioning() {
            let values = form(json!({
                "_inputMethod": "device-repository",
                "frequency_plan_id": "EU_863_870",
                "version_ids": { "brand": "acme" },
            }));
            assert!(!may_provision_device(&values, None));
        }

        #[test]
        fn other_option_blocks_provisioning() {
            let values = form(json!({
                "_inputMethod": "device-repository",
                "frequency_plan_id": "EU_863_870",
                "version_ids": { "brand": "acme", "model": "_other_" },
            }));
            assert!(!may_provision_device(&values, Some(&DeviceTemplate::default())));
        }

        #[test]
        fn missing_frequency_plan_blocks_provisioning() {
            let values = form(json!({
                "_inputMethod": "device-repository",
                "version_ids": { "brand": "acme" },
            }));
            assert!(!may_provision_device(&values, Some(&DeviceTemplate::default())));
        }
    }

    #[test]
    fn unknown_input_method_never_provisions() {
        let values = form(json!({
            "frequency_plan_id": "EU_863_870",
            "lorawan_version": "1.0.3",
            "lorawan_phy_version": "1.0.3-a",
        }));
        assert!(!may_provision_device(&values, None));
    }

    #[test]
    fn unrecognized_input_method_is_not_provisionable() {
        let values = form(json!({
            "_inputMethod": "qr-code",
            "frequency_plan_id": "EU_863_870",
            "lorawan_version": "1.0.3",
            "lorawan_phy_version": "1.0.3-a",
        }));

        assert_eq!(values.input_method, Some(InputMethod::Unsupported));
        assert_eq!(values.frequency_plan_id.as_deref(), Some("EU_863_870"));
        assert!(!may_provision_device(&values, None));
    }

    #[test]
    fn registration_types_serialize_lowercase() {
        assert_eq!(json!(RegistrationType::Multiple), json!("multiple"));
        assert_eq!(RegistrationType::Single.as_str(), "single");
        assert_eq!(json!(InputMethod::DeviceRepository), json!("device-repository"));
    }

    mod provision_request {
        use super::*;
        use crate::types::EndDevice;

        #[test]
        fn takes_versions_from_template_when_form_has_none() {
            let values = form(json!({
                "_inputMethod": "device-repository",
                "frequency_plan_id": "EU_863_870",
                "version_ids": { "brand_id": "acme" },
            }));
            let template = DeviceTemplate {
                end_device: EndDevice {
                    lorawan_version: Some("1.0.2".to_string()),
                    lorawan_phy_version: Some("1.0.2-b".to_string()),
                    ..Default::default()
                },
                field_mask: vec![],
            };

            let request =
                ProvisionRequest::from_form(&values, Some(&template), RegistrationType::Single);

            assert_eq!(request.lorawan_version.as_deref(), Some("1.0.2"));
            assert_eq!(request.lorawan_phy_version.as_deref(), Some("1.0.2-b"));
            assert!(request.validate().is_ok());
        }

        #[test]
        fn template_without_versions_leaves_them_unset() {
            let values = form(json!({
                "_inputMethod": "device-repository",
                "frequency_plan_id": "EU_863_870",
                "lorawan_version": "",
                "version_ids": { "brand_id": "acme" },
            }));
            let template = DeviceTemplate::default();
            assert!(may_provision_device(&values, Some(&template)));

            let request =
                ProvisionRequest::from_form(&values, Some(&template), RegistrationType::Multiple);

            assert_eq!(request.registration_type, RegistrationType::Multiple);
            assert_eq!(request.lorawan_version, None);
            assert_eq!(request.lorawan_phy_version, None);
            assert!(request.validate().is_ok());
        }

        #[test]
        fn empty_frequency_plan_fails_validation() {
            let request = ProvisionRequest {
                input_method: InputMethod::Manual,
                registration_type: RegistrationType::Single,
                frequency_plan_id: String::new(),
                lorawan_version: Some("1.0.3".to_string()),
                lorawan_phy_version: Some("1.0.3-a".to_string()),
                version_ids: None,
            };

            assert!(request.validate().is_err());
        }
    }
}
