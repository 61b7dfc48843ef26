use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::device::EndDevice;

/// Option value meaning the device is not listed in the repository
pub const SELECT_OTHER_OPTION: &str = "_other_";

/// Option value for models registered without a hardware version.
///
/// `hardware_version` is optional in the device repository, but
/// `firmware_version` and `band_id` are still required, so such models stay
/// selectable through this option.
pub const SELECT_UNKNOWN_HW_OPTION: &str = "_unknown_hw_version_";

pub fn is_other_option(option: &str) -> bool {
    option == SELECT_OTHER_OPTION
}

pub fn is_unknown_hw_version(option: &str) -> bool {
    option == SELECT_UNKNOWN_HW_OPTION
}

/// Device repository selection, keyed by selection step (brand_id, model_id, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct VersionSelection(pub HashMap<String, Option<String>>);

impl VersionSelection {
    pub fn get(&self, step: &str) -> Option<&str> {
        self.0.get(step).and_then(|value| value.as_deref())
    }

    pub fn set(&mut self, step: impl Into<String>, value: Option<String>) {
        self.0.insert(step.into(), value);
    }

    fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.values().map(|value| value.as_deref())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VersionSelection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(step, value)| (step.into(), Some(value.into())))
                .collect(),
        )
    }
}

/// End device template resolved from the device repository
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceTemplate {
    pub end_device: EndDevice,
    pub field_mask: Vec<String>,
}

/// Whether any step holds [`SELECT_OTHER_OPTION`].
///
/// Returns `None` when there is no selection at all, so callers can tell
/// "nothing selected yet" apart from "selected, but not other".
pub fn has_selected_device_repository_other(version: Option<&VersionSelection>) -> Option<bool> {
    let version = version?;
    Some(version.values().any(|value| value.is_some_and(is_other_option)))
}

/// Whether every step holds a non-empty value; `None` without a selection
pub fn has_completed_device_repository_selection(
    version: Option<&VersionSelection>,
) -> Option<bool> {
    let version = version?;
    Some(
        version
            .values()
            .all(|value| value.is_some_and(|value| !value.is_empty())),
    )
}

pub fn has_valid_device_repository_type(
    version: Option<&VersionSelection>,
    template: Option<&DeviceTemplate>,
) -> bool {
    has_selected_device_repository_other(version) != Some(true)
        && has_completed_device_repository_selection(version) == Some(true)
        && template.is_some()
}
