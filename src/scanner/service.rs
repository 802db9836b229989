use crate::scanner::RawNetworkRecord;
use color_eyre::Result;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static DEMO_MODE: AtomicBool = AtomicBool::new(false);

/// Enable demo mode with simulated scan results
pub fn enable_demo_mode() {
    DEMO_MODE.store(true, Ordering::SeqCst);
}

/// Check if demo mode is enabled
pub fn is_demo_mode() -> bool {
    DEMO_MODE.load(Ordering::SeqCst)
}

/// Response envelope from the scan service
#[derive(Debug, Deserialize)]
struct ScanEnvelope {
    success: bool,
    #[serde(default)]
    data: Vec<RawNetworkRecord>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the external scan service. All radio work happens on the
/// backend; this just fetches the latest results.
#[derive(Debug, Clone)]
pub struct ScanClient {
    base_url: String,
}

impl ScanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Request a fresh scan from the backend.
    pub async fn scan(&self) -> Result<Vec<RawNetworkRecord>> {
        if is_demo_mode() {
            return Ok(generate_demo_records());
        }

        let url = format!("{}/api/scan", self.base_url);
        let envelope = tokio::task::spawn_blocking(move || fetch_scan(&url)).await??;

        if !envelope.success {
            return Err(color_eyre::eyre::eyre!(
                "Scan service error: {}\n\nTry running with --demo flag for simulated data.",
                envelope.error.unwrap_or_else(|| "unknown".to_string())
            ));
        }

        Ok(envelope.data)
    }
}

fn fetch_scan(url: &str) -> Result<ScanEnvelope> {
    // Backend scans block for a few seconds while the radio sweeps
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(color_eyre::eyre::eyre!(
            "Scan service returned HTTP {}",
            response.status()
        ));
    }

    Ok(response.json::<ScanEnvelope>()?)
}

/// Generate simulated scan records for demo mode
fn generate_demo_records() -> Vec<RawNetworkRecord> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;

    let base_records = [
        ("MyHome_WiFi", "F8:D1:11:22:33:01", -45, 6, 2437.0, "WPA2"),
        ("MyHome_WiFi_5G", "F8:D1:11:22:33:02", -48, 44, 5220.0, "WPA3"),
        ("Neighbor_Net_1", "D8:50:E6:44:55:66", -68, 6, 2437.0, "WPA2"),
        ("Kyivstar_Free", "C8:3A:35:D4:E5:F6", -75, 1, 2412.0, ""),
        ("Volia_Caffe", "00:25:9C:D5:E6:F7", -52, 11, 2462.0, "WPA2"),
        ("Another_Neighbor", "E0:1D:3B:D6:E7:F8", -81, 6, 2437.0, "WPA3"),
        ("Office_Guest", "D4:6E:0E:D7:E8:F9", -60, 36, 5180.0, "WPA2 / WPA"),
        ("", "88:A4:C2:00:11:22", -85, 11, 2462.0, "WPA2"),
        ("Lab_6E", "00:1A:11:33:44:55", -58, 37, 6115.0, "WPA3"),
        ("OldRouter", "64:09:80:66:77:88", -89, 3, 2422.0, "WEP"),
    ];

    base_records
        .into_iter()
        .enumerate()
        .map(|(idx, (ssid, bssid, base_rssi, channel, frequency, security))| {
            let variance = ((seed.wrapping_add(idx as u64) % 7) as i32) - 3;
            RawNetworkRecord {
                ssid: ssid.to_string(),
                bssid: bssid.to_string(),
                rssi: base_rssi + variance,
                channel,
                frequency,
                security: security.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_records_are_plausible() {
        let records = generate_demo_records();
        assert!(records.len() >= 10);
        for record in &records {
            assert!(record.frequency > 0.0);
            assert!(record.rssi < 0);
            assert_eq!(record.bssid.len(), 17);
        }
    }

    #[test]
    fn test_demo_includes_hidden_and_open_networks() {
        let records = generate_demo_records();
        assert!(records.iter().any(|r| r.ssid.is_empty()));
        assert!(records.iter().any(|r| r.security.is_empty()));
    }

    #[test]
    fn test_envelope_error_shape() {
        let json = r#"{"success": false, "error": "no interface"}"#;
        let envelope: ScanEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.error.as_deref(), Some("no interface"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ScanClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }
}
