//! Session scan cache.
//!
//! Holds the most recent enriched scan for the lifetime of the process so
//! views can re-read results without re-fetching. Replaced wholesale on
//! each new scan; never mutated in place.

use crate::metrics::EnrichedNetwork;
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct ScanCache {
    networks: Vec<EnrichedNetwork>,
    last_updated: Option<DateTime<Utc>>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached scan with a fresh one.
    pub fn replace(&mut self, networks: Vec<EnrichedNetwork>) {
        self.networks = networks;
        self.last_updated = Some(Utc::now());
    }

    pub fn clear(&mut self) {
        self.networks.clear();
        self.last_updated = None;
    }

    pub fn networks(&self) -> &[EnrichedNetwork] {
        &self.networks
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::enrich;
    use crate::scanner::RawNetworkRecord;

    fn sample() -> Vec<EnrichedNetwork> {
        vec![enrich(&RawNetworkRecord {
            ssid: "Home".to_string(),
            bssid: "AA:BB:CC:11:22:33".to_string(),
            rssi: -50,
            channel: 6,
            frequency: 2437.0,
            security: "WPA2".to_string(),
        })]
    }

    #[test]
    fn test_starts_empty() {
        let cache = ScanCache::new();
        assert!(cache.is_empty());
        assert!(cache.last_updated().is_none());
    }

    #[test]
    fn test_replace_swaps_contents() {
        let mut cache = ScanCache::new();
        cache.replace(sample());
        assert_eq!(cache.len(), 1);
        assert!(cache.last_updated().is_some());

        cache.replace(Vec::new());
        assert!(cache.is_empty());
        // Timestamp reflects the latest scan even when it found nothing
        assert!(cache.last_updated().is_some());
    }

    #[test]
    fn test_clear_resets_timestamp() {
        let mut cache = ScanCache::new();
        cache.replace(sample());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.last_updated().is_none());
    }
}
