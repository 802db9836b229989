//! Speed test client.
//!
//! The actual bandwidth measurement runs on the diagnostics backend; this
//! module requests a test and hands back the result. Requests block for the
//! duration of the test, so callers run them on a dedicated thread.

use chrono::{DateTime, Utc};
use color_eyre::Result;
use serde::Deserialize;
use std::time::Duration;

/// Result of one speed test
#[derive(Debug, Clone, Deserialize)]
pub struct SpeedTestResult {
    #[serde(rename = "download")]
    pub download_mbps: f64,
    #[serde(rename = "upload")]
    pub upload_mbps: f64,
    #[serde(rename = "ping")]
    pub ping_ms: f64,
    #[serde(default)]
    pub server: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct SpeedTestEnvelope {
    success: bool,
    data: Option<SpeedTestResult>,
    #[serde(default)]
    error: Option<String>,
}

/// Run a speed test through the backend. Blocks for the duration of the
/// test (typically 10-20 seconds).
pub fn run_speed_test(base_url: &str) -> Result<SpeedTestResult> {
    if crate::scanner::is_demo_mode() {
        return Ok(demo_result());
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    let url = format!("{}/api/speedtest", base_url.trim_end_matches('/'));
    let response = client.get(&url).send()?;

    if !response.status().is_success() {
        return Err(color_eyre::eyre::eyre!(
            "Speed test service returned HTTP {}",
            response.status()
        ));
    }

    let envelope = response.json::<SpeedTestEnvelope>()?;
    if !envelope.success {
        return Err(color_eyre::eyre::eyre!(
            "Speed test failed: {}",
            envelope.error.unwrap_or_else(|| "unknown".to_string())
        ));
    }

    envelope
        .data
        .ok_or_else(|| color_eyre::eyre::eyre!("Speed test returned no data"))
}

/// Simulated result for demo mode
fn demo_result() -> SpeedTestResult {
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    SpeedTestResult {
        download_mbps: 80.0 + (seed % 40) as f64,
        upload_mbps: 20.0 + (seed % 15) as f64,
        ping_ms: 8.0 + (seed % 20) as f64,
        server: "Demo Server".to_string(),
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_result() {
        let json = r#"{
            "success": true,
            "data": {
                "timestamp": "2025-11-20T14:32:10Z",
                "download": 94.31,
                "upload": 23.77,
                "ping": 12.4,
                "server": "Example ISP"
            }
        }"#;
        let envelope: SpeedTestEnvelope = serde_json::from_str(json).unwrap();
        let result = envelope.data.unwrap();
        assert_eq!(result.download_mbps, 94.31);
        assert_eq!(result.upload_mbps, 23.77);
        assert_eq!(result.ping_ms, 12.4);
        assert_eq!(result.server, "Example ISP");
    }

    #[test]
    fn test_demo_result_in_range() {
        let result = demo_result();
        assert!(result.download_mbps >= 80.0 && result.download_mbps < 120.0);
        assert!(result.upload_mbps >= 20.0 && result.upload_mbps < 35.0);
        assert!(result.ping_ms >= 8.0 && result.ping_ms < 28.0);
    }
}
