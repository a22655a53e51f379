//! Device identity as produced by discovery or a manual device list.

use serde::{Deserialize, Serialize};

/// Identity tuple for one bulb: its raw device id, the host to reach it at,
/// and an optional user-supplied or device-reported name.
///
/// The stable registry address is derived from the raw id: manual entries
/// keep the first 14 characters of the configured id, discovered entries
/// keep the last 14 of the device-reported id (the tail carries the unique
/// part of a Yeelight id).
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    address: String,
    host: String,
    name: Option<String>,
}

impl DeviceIdentity {
    const ADDRESS_LEN: usize = 14;

    /// Identity from a manually configured device entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::DeviceIdentity;
    ///
    /// let id = DeviceIdentity::manual("0x0000000007e57e57extra", "192.168.1.40", None);
    /// assert_eq!(id.address(), "0x0000000007e5");
    /// ```
    pub fn manual(raw_id: &str, host: &str, name: Option<&str>) -> Self {
        let address = raw_id.chars().take(Self::ADDRESS_LEN).collect();
        DeviceIdentity {
            address,
            host: host.to_string(),
            name: name.map(String::from),
        }
    }

    /// Identity from a network-discovery result.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::DeviceIdentity;
    ///
    /// let id = DeviceIdentity::discovered("0x00000000035a4e31", "192.168.1.41", None);
    /// assert_eq!(id.address(), "000000035a4e31");
    /// ```
    pub fn discovered(raw_id: &str, host: &str, name: Option<&str>) -> Self {
        let chars: Vec<char> = raw_id.chars().collect();
        let start = chars.len().saturating_sub(Self::ADDRESS_LEN);
        let address = chars[start..].iter().collect();
        DeviceIdentity {
            address,
            host: host.to_string(),
            name: name.map(String::from),
        }
    }

    /// The stable registry address derived from the raw device id.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Host (IP or hostname) the device is reachable at.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Display name: the supplied name, or a deterministic default built
    /// from the address tail.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => {
                let tail: String = self.address.chars().skip(10).take(4).collect();
                format!("YeeLight {tail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_truncates_front() {
        let id = DeviceIdentity::manual("abcdefghijklmnopqr", "10.0.0.1", None);
        assert_eq!(id.address(), "abcdefghijklmn");
    }

    #[test]
    fn test_discovered_keeps_tail() {
        let id = DeviceIdentity::discovered("0x00000000035a4e31", "10.0.0.2", None);
        assert_eq!(id.address(), "000000035a4e31");
        assert_eq!(id.address().len(), 14);
    }

    #[test]
    fn test_short_id_is_kept_whole() {
        let id = DeviceIdentity::discovered("35a4e31", "10.0.0.3", None);
        assert_eq!(id.address(), "35a4e31");
    }

    #[test]
    fn test_default_display_name() {
        let id = DeviceIdentity::manual("0x000000000d4e31", "10.0.0.4", None);
        assert_eq!(id.display_name(), "YeeLight 0d4e");
    }

    #[test]
    fn test_supplied_name_wins() {
        let id = DeviceIdentity::manual("0x000000000d4e31", "10.0.0.4", Some("Desk"));
        assert_eq!(id.display_name(), "Desk");
    }
}
