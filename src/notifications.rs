//! Notification triggers.
//!
//! Scan results and speed test results are checked against a few fixed
//! rules; anything that trips a rule becomes a notification shown in the
//! notifications view and persisted alongside the rest of the history.

use crate::metrics::EnrichedNetwork;
use crate::speedtest::SpeedTestResult;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

/// More than this many networks on one channel counts as crowded
const CONGESTION_LIMIT: usize = 5;
/// Download speeds below this (Mbps) are flagged as critical
const LOW_DOWNLOAD_MBPS: f64 = 5.0;
/// Pings above this (ms) are flagged
const HIGH_PING_MS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    Internet,
    Wifi,
    Security,
    System,
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationCategory::Internet => write!(f, "Internet & WAN"),
            NotificationCategory::Wifi => write!(f, "Wi-Fi Devices"),
            NotificationCategory::Security => write!(f, "Security"),
            NotificationCategory::System => write!(f, "System"),
        }
    }
}

impl NotificationCategory {
    pub fn from_str(s: &str) -> Self {
        match s {
            "Internet & WAN" => NotificationCategory::Internet,
            "Wi-Fi Devices" => NotificationCategory::Wifi,
            "Security" => NotificationCategory::Security,
            _ => NotificationCategory::System,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    Critical,
    Warning,
    Info,
}

impl fmt::Display for NotificationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationSeverity::Critical => write!(f, "critical"),
            NotificationSeverity::Warning => write!(f, "warning"),
            NotificationSeverity::Info => write!(f, "info"),
        }
    }
}

impl NotificationSeverity {
    pub fn from_str(s: &str) -> Self {
        match s {
            "critical" => NotificationSeverity::Critical,
            "warning" => NotificationSeverity::Warning,
            _ => NotificationSeverity::Info,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub category: NotificationCategory,
    pub event: String,
    pub description: String,
    pub severity: NotificationSeverity,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    fn new(
        category: NotificationCategory,
        event: &str,
        description: String,
        severity: NotificationSeverity,
    ) -> Self {
        Self {
            category,
            event: event.to_string(),
            description,
            severity,
            created_at: Utc::now(),
            read: false,
        }
    }
}

/// Check one scan against the trigger rules. `threshold_dbm` is the
/// configured signal threshold for the weak-signal rule.
pub fn check_scan_results(
    networks: &[EnrichedNetwork],
    threshold_dbm: i32,
) -> Vec<Notification> {
    let mut notifications = Vec::new();

    // Open networks nearby
    let open: Vec<&EnrichedNetwork> = networks.iter().filter(|n| n.is_open()).collect();
    if !open.is_empty() {
        let names = open
            .iter()
            .take(3)
            .map(|n| if n.ssid.is_empty() { "Hidden" } else { n.ssid.as_str() })
            .collect::<Vec<_>>()
            .join(", ");
        notifications.push(Notification::new(
            NotificationCategory::Security,
            "Unsecured Network Detected",
            format!(
                "Detected {} open networks nearby: {}. Keep your devices secure.",
                open.len(),
                names
            ),
            NotificationSeverity::Warning,
        ));
    }

    // Crowded channels
    let mut per_channel: HashMap<u32, usize> = HashMap::new();
    for network in networks {
        *per_channel.entry(network.channel).or_insert(0) += 1;
    }
    let mut crowded: Vec<(u32, usize)> = per_channel
        .into_iter()
        .filter(|(_, count)| *count > CONGESTION_LIMIT)
        .collect();
    crowded.sort_by_key(|(channel, _)| *channel);
    for (channel, count) in crowded {
        notifications.push(Notification::new(
            NotificationCategory::Wifi,
            "Channel Congestion",
            format!(
                "Channel {} is very crowded ({} networks). Consider switching.",
                channel, count
            ),
            NotificationSeverity::Warning,
        ));
    }

    // Even the strongest network is below the configured threshold
    if let Some(best) = networks.iter().max_by_key(|n| n.rssi)
        && best.rssi < threshold_dbm
    {
        notifications.push(Notification::new(
            NotificationCategory::Wifi,
            "Weak Signal",
            format!(
                "Strongest network is at {} dBm, below your {} dBm threshold.",
                best.rssi, threshold_dbm
            ),
            NotificationSeverity::Warning,
        ));
    }

    notifications
}

/// Check a speed test result against the trigger rules.
pub fn check_speedtest_result(result: &SpeedTestResult) -> Vec<Notification> {
    let mut notifications = Vec::new();

    if result.download_mbps < LOW_DOWNLOAD_MBPS {
        notifications.push(Notification::new(
            NotificationCategory::Internet,
            "Low Internet Speed",
            format!(
                "Download speed dropped to {:.1} Mbps. Check your ISP connection.",
                result.download_mbps
            ),
            NotificationSeverity::Critical,
        ));
    }

    if result.ping_ms > HIGH_PING_MS {
        notifications.push(Notification::new(
            NotificationCategory::Internet,
            "High Latency Detected",
            format!(
                "Ping is {:.0} ms. This may affect online gaming and calls.",
                result.ping_ms
            ),
            NotificationSeverity::Warning,
        ));
    }

    notifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::enrich;
    use crate::scanner::RawNetworkRecord;

    fn network(ssid: &str, rssi: i32, channel: u32, security: &str) -> EnrichedNetwork {
        enrich(&RawNetworkRecord {
            ssid: ssid.to_string(),
            bssid: format!("AA:BB:CC:00:{:02X}:{:02X}", channel, (rssi & 0xFF) as u8),
            rssi,
            channel,
            frequency: 2437.0,
            security: security.to_string(),
        })
    }

    fn speedtest(download: f64, ping: f64) -> SpeedTestResult {
        SpeedTestResult {
            download_mbps: download,
            upload_mbps: 10.0,
            ping_ms: ping,
            server: String::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_open_network_raises_security_warning() {
        let networks = vec![network("FreeWifi", -60, 6, ""), network("Home", -50, 6, "WPA2")];
        let notifications = check_scan_results(&networks, -85);
        let open = notifications
            .iter()
            .find(|n| n.category == NotificationCategory::Security)
            .unwrap();
        assert_eq!(open.severity, NotificationSeverity::Warning);
        assert!(open.description.contains("FreeWifi"));
    }

    #[test]
    fn test_hidden_open_network_labeled() {
        let networks = vec![network("", -60, 6, "Open")];
        let notifications = check_scan_results(&networks, -85);
        assert!(notifications[0].description.contains("Hidden"));
    }

    #[test]
    fn test_crowded_channel_detected() {
        let networks: Vec<EnrichedNetwork> = (0..6)
            .map(|i| network(&format!("Net{}", i), -60 - i, 6, "WPA2"))
            .collect();
        let notifications = check_scan_results(&networks, -85);
        let congestion = notifications
            .iter()
            .find(|n| n.event == "Channel Congestion")
            .unwrap();
        assert!(congestion.description.contains("Channel 6"));
        assert!(congestion.description.contains("6 networks"));
    }

    #[test]
    fn test_quiet_scan_raises_nothing() {
        let networks = vec![
            network("Home", -50, 6, "WPA2"),
            network("Neighbor", -70, 11, "WPA3"),
        ];
        assert!(check_scan_results(&networks, -85).is_empty());
    }

    #[test]
    fn test_weak_signal_threshold() {
        let networks = vec![network("Far", -88, 1, "WPA2")];
        let notifications = check_scan_results(&networks, -85);
        assert!(notifications.iter().any(|n| n.event == "Weak Signal"));

        // Same scan with a laxer threshold stays quiet
        assert!(check_scan_results(&networks, -95).is_empty());
    }

    #[test]
    fn test_slow_download_is_critical() {
        let notifications = check_speedtest_result(&speedtest(2.5, 20.0));
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].severity, NotificationSeverity::Critical);
        assert_eq!(notifications[0].category, NotificationCategory::Internet);
    }

    #[test]
    fn test_high_ping_is_warning() {
        let notifications = check_speedtest_result(&speedtest(50.0, 150.0));
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].event, "High Latency Detected");
    }

    #[test]
    fn test_healthy_speedtest_raises_nothing() {
        assert!(check_speedtest_result(&speedtest(95.0, 12.0)).is_empty());
    }
}
