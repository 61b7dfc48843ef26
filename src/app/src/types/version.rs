use serde::Serialize;

use super::device::EndDevice;

/// Selectable version with its display label
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct VersionOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> VersionOption {
    VersionOption { value, label }
}

/// LoRaWAN MAC versions offered by the console
pub const LORAWAN_VERSIONS: &[VersionOption] = &[
    option("1.0.0", "MAC V1.0"),
    option("1.0.1", "MAC V1.0.1"),
    option("1.0.2", "MAC V1.0.2"),
    option("1.0.3", "MAC V1.0.3"),
    option("1.0.4", "MAC V1.0.4"),
    option("1.1.0", "MAC V1.1"),
];

/// Regional parameters (PHY) versions offered by the console
pub const LORAWAN_PHY_VERSIONS: &[VersionOption] = &[
    option("1.0.0", "PHY V1.0"),
    option("1.0.1", "PHY V1.0.1"),
    option("1.0.2-a", "PHY V1.0.2 REV A"),
    option("1.0.2-b", "PHY V1.0.2 REV B"),
    option("1.0.3-a", "PHY V1.0.3 REV A"),
    option("1.1.0-a", "PHY V1.1 REV A"),
    option("1.1.0-b", "PHY V1.1 REV B"),
];

/// Label of the first table entry whose value matches
fn find_label(table: &[VersionOption], value: Option<&str>) -> Option<&'static str> {
    let value = value?;
    table
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

pub fn get_lorawan_version_label(device: &EndDevice) -> Option<&'static str> {
    find_label(LORAWAN_VERSIONS, device.lorawan_version.as_deref())
}

pub fn get_lorawan_phy_version_label(device: &EndDevice) -> Option<&'static str> {
    find_label(LORAWAN_PHY_VERSIONS, device.lorawan_phy_version.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(lorawan_version: Option<&str>, lorawan_phy_version: Option<&str>) -> EndDevice {
        EndDevice {
            lorawan_version: lorawan_version.map(str::to_string),
            lorawan_phy_version: lorawan_phy_version.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn finds_lorawan_version_label() {
        assert_eq!(
            get_lorawan_version_label(&device(Some("1.0.3"), None)),
            Some("MAC V1.0.3")
        );
    }

    #[test]
    fn unknown_lorawan_version_has_no_label() {
        assert_eq!(
            get_lorawan_version_label(&device(Some("nonexistent"), None)),
            None
        );
        assert_eq!(get_lorawan_version_label(&device(None, None)), None);
    }

    #[test]
    fn finds_phy_version_label() {
        assert_eq!(
            get_lorawan_phy_version_label(&device(None, Some("1.0.3-a"))),
            Some("PHY V1.0.3 REV A")
        );
        assert_eq!(get_lorawan_phy_version_label(&device(None, None)), None);
    }

    #[test]
    fn first_match_wins_on_duplicate_values() {
        let table = [option("1.0.0", "first"), option("1.0.0", "second")];
        assert_eq!(find_label(&table, Some("1.0.0")), Some("first"));
        assert_eq!(find_label(&[], Some("1.0.0")), None);
    }
}
