use serde::{Deserialize, Serialize};

/// LoRaWAN version assumed when the device record does not declare one
pub const DEFAULT_LORAWAN_VERSION: &str = "1.1.0";

/// End device record as delivered by the device registry
///
/// Every field is optional; absence carries meaning (see [`get_activation_mode`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EndDevice {
    pub supports_join: Option<bool>,
    pub multicast: Option<bool>,
    pub supports_class_b: Option<bool>,
    pub supports_class_c: Option<bool>,
    pub lorawan_version: Option<String>,
    pub lorawan_phy_version: Option<String>,
    pub application_server_address: Option<String>,
    pub network_server_address: Option<String>,
    pub join_server_address: Option<String>,
}

/// Activation mode of an end device
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    Otaa,
    Abp,
    Multicast,
    #[default]
    None,
}

impl ActivationMode {
    /// Value used by the console for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Otaa => "otaa",
            Self::Abp => "abp",
            Self::Multicast => "multicast",
            Self::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Otaa => "Over the air activation (OTAA)",
            Self::Abp => "Activation by personalization (ABP)",
            Self::Multicast => "Multicast",
            Self::None => "Do not configure activation",
        }
    }
}

/// Device class with the style key used to render it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceClass {
    #[default]
    ClassA,
    ClassB,
    ClassC,
    #[serde(rename = "CLASS_B_C")]
    ClassBC,
}

impl DeviceClass {
    pub fn style_key(&self) -> &'static str {
        match self {
            Self::ClassA => "class-a",
            Self::ClassB => "class-b",
            Self::ClassC => "class-c",
            Self::ClassBC => "class-b-c",
        }
    }
}

/// Determine the activation mode by precedence: OTAA, multicast, ABP, none.
///
/// ABP requires both `supports_join` and `multicast` to be explicitly `false`;
/// a device with either field missing falls through to [`ActivationMode::None`].
pub fn get_activation_mode(device: &EndDevice) -> ActivationMode {
    match (device.supports_join, device.multicast) {
        (Some(true), _) => ActivationMode::Otaa,
        (_, Some(true)) => ActivationMode::Multicast,
        (Some(false), Some(false)) => ActivationMode::Abp,
        _ => ActivationMode::None,
    }
}

/// Declared LoRaWAN version, or [`DEFAULT_LORAWAN_VERSION`] when missing or empty
pub fn get_lorawan_version(device: &EndDevice) -> &str {
    device
        .lorawan_version
        .as_deref()
        .filter(|version| !version.is_empty())
        .unwrap_or(DEFAULT_LORAWAN_VERSION)
}

pub fn get_application_server_address(device: &EndDevice) -> Option<&str> {
    device.application_server_address.as_deref()
}

pub fn get_network_server_address(device: &EndDevice) -> Option<&str> {
    device.network_server_address.as_deref()
}

pub fn get_join_server_address(device: &EndDevice) -> Option<&str> {
    device.join_server_address.as_deref()
}

/// Derive the device class from the class B / class C support flags
pub fn get_device_class(device: &EndDevice) -> DeviceClass {
    match (
        device.supports_class_b.unwrap_or(false),
        device.supports_class_c.unwrap_or(false),
    ) {
        (true, true) => DeviceClass::ClassBC,
        (true, false) => DeviceClass::ClassB,
        (false, true) => DeviceClass::ClassC,
        (false, false) => DeviceClass::ClassA,
    }
}
