//! Derived network metrics.
//!
//! Pure functions over scan records: signal quality, distance estimation,
//! vendor resolution, and set-level health aggregation. Nothing in this
//! module does I/O or keeps state, so enrichment of the same record always
//! produces the same result.

mod distance;
mod health;
mod quality;
mod vendor;

pub use distance::estimate_distance;
pub use health::{summarize, NetworkHealthSummary};
pub use quality::estimate_quality;
pub use vendor::resolve_vendor;

use crate::scanner::RawNetworkRecord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Band2_4GHz,
    Band5GHz,
    Band6GHz,
    Unknown,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Band2_4GHz => write!(f, "2.4 GHz"),
            Band::Band5GHz => write!(f, "5 GHz"),
            Band::Band6GHz => write!(f, "6 GHz"),
            Band::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Band {
    /// Classify a carrier frequency in MHz. Some drivers report kHz, so
    /// values above 10000 are scaled down first.
    pub fn from_frequency(frequency_mhz: f64) -> Self {
        let mut freq = frequency_mhz;
        if freq > 10_000.0 {
            freq /= 1_000.0;
        }

        match freq {
            f if (2412.0..=2484.0).contains(&f) => Band::Band2_4GHz,
            f if (5150.0..=5895.0).contains(&f) => Band::Band5GHz,
            f if (5925.0..=7125.0).contains(&f) => Band::Band6GHz,
            _ => Band::Unknown,
        }
    }
}

/// A scan record plus everything derived from it. Immutable snapshot:
/// recomputed from scratch on every scan, never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedNetwork {
    pub ssid: String,
    pub bssid: String,
    pub rssi: i32,
    pub channel: u32,
    /// Carrier frequency in MHz
    pub frequency: f64,
    pub security: String,
    pub band: Band,
    /// Signal quality percentage, 0-100
    pub quality: u8,
    /// Estimated distance to the access point in meters
    pub distance_m: f64,
    pub vendor: String,
}

impl EnrichedNetwork {
    pub fn signal_bars(&self) -> String {
        let bars = match self.rssi {
            s if s >= -50 => 5,
            s if s >= -60 => 4,
            s if s >= -70 => 3,
            s if s >= -80 => 2,
            _ => 1,
        };
        let filled = "\u{2593}".repeat(bars);
        let empty = "\u{2591}".repeat(5 - bars);
        format!("{}{}", filled, empty)
    }

    /// True for networks with no configured security
    pub fn is_open(&self) -> bool {
        self.security.contains("Open")
    }
}

/// Derive all metrics for a single scan record.
pub fn enrich(record: &RawNetworkRecord) -> EnrichedNetwork {
    let security = if record.security.is_empty() {
        "Open".to_string()
    } else {
        record.security.clone()
    };

    EnrichedNetwork {
        ssid: record.ssid.clone(),
        bssid: record.bssid.clone(),
        rssi: record.rssi,
        channel: record.channel,
        frequency: record.frequency,
        security,
        band: Band::from_frequency(record.frequency),
        quality: estimate_quality(record.rssi),
        distance_m: estimate_distance(record.rssi, record.frequency),
        vendor: resolve_vendor(&record.bssid).to_string(),
    }
}

/// Enrich a whole scan.
pub fn enrich_all(records: &[RawNetworkRecord]) -> Vec<EnrichedNetwork> {
    records.iter().map(enrich).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rssi: i32, frequency: f64) -> RawNetworkRecord {
        RawNetworkRecord {
            ssid: "TestNet".to_string(),
            bssid: "F8:D1:11:22:33:44".to_string(),
            rssi,
            channel: 6,
            frequency,
            security: "WPA2".to_string(),
        }
    }

    #[test]
    fn test_band_classification() {
        assert_eq!(Band::from_frequency(2412.0), Band::Band2_4GHz);
        assert_eq!(Band::from_frequency(2484.0), Band::Band2_4GHz);
        assert_eq!(Band::from_frequency(5180.0), Band::Band5GHz);
        assert_eq!(Band::from_frequency(5955.0), Band::Band6GHz);
        assert_eq!(Band::from_frequency(900.0), Band::Unknown);
    }

    #[test]
    fn test_band_from_khz() {
        assert_eq!(Band::from_frequency(2_412_000.0), Band::Band2_4GHz);
        assert_eq!(Band::from_frequency(5_180_000.0), Band::Band5GHz);
    }

    #[test]
    fn test_enrich_populates_derived_fields() {
        let enriched = enrich(&record(-75, 2437.0));
        assert_eq!(enriched.band, Band::Band2_4GHz);
        assert_eq!(enriched.quality, 50);
        assert_eq!(enriched.vendor, "TP-Link");
        assert!(enriched.distance_m > 0.0);
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let r = record(-62, 5180.0);
        assert_eq!(enrich(&r), enrich(&r));
    }

    #[test]
    fn test_empty_security_defaults_to_open() {
        let mut r = record(-60, 2437.0);
        r.security = String::new();
        let enriched = enrich(&r);
        assert_eq!(enriched.security, "Open");
        assert!(enriched.is_open());
    }

    #[test]
    fn test_empty_ssid_preserved() {
        let mut r = record(-60, 2437.0);
        r.ssid = String::new();
        // Hidden networks keep an empty name; labeling is a display concern
        assert_eq!(enrich(&r).ssid, "");
    }
}
