mod service;

pub use service::{enable_demo_mode, is_demo_mode, ScanClient};

use serde::Deserialize;

/// One network as reported by the scan service, before enrichment.
///
/// `frequency` is the carrier frequency in MHz. `security` is a free-form
/// protocol label ("WPA2", "WPA2 / WPA", ...); an absent or empty value
/// means an open network.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNetworkRecord {
    #[serde(default)]
    pub ssid: String,
    pub bssid: String,
    pub rssi: i32,
    pub channel: u32,
    pub frequency: f64,
    #[serde(default)]
    pub security: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "ssid": "MyHome_WiFi",
            "bssid": "AA:BB:CC:11:22:33",
            "rssi": -45,
            "channel": 6,
            "frequency": 2437,
            "security": "WPA2"
        }"#;
        let record: RawNetworkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ssid, "MyHome_WiFi");
        assert_eq!(record.rssi, -45);
        assert_eq!(record.frequency, 2437.0);
    }

    #[test]
    fn test_missing_ssid_and_security_default_empty() {
        // Hidden network from the scan service
        let json = r#"{"bssid": "AA:BB:CC:11:22:33", "rssi": -70, "channel": 1, "frequency": 2412}"#;
        let record: RawNetworkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ssid, "");
        assert_eq!(record.security, "");
    }
}
