use crate::metrics::EnrichedNetwork;

/// Aggregate view of one scan: the strongest network, how crowded its
/// channel is, and an overall 0-100 health score.
#[derive(Debug, Clone, Default)]
pub struct NetworkHealthSummary {
    /// Strongest observed network (highest RSSI), None for an empty scan
    pub best_network: Option<EnrichedNetwork>,
    /// Other access points sharing the best network's channel
    pub channel_congestion: usize,
    pub health_score: u8,
}

/// Summarize a set of enriched networks.
///
/// Ties on RSSI keep the first network encountered, so the result is
/// deterministic for a given input order.
pub fn summarize(networks: &[EnrichedNetwork]) -> NetworkHealthSummary {
    let mut best: Option<&EnrichedNetwork> = None;
    for network in networks {
        if best.is_none_or(|b| network.rssi > b.rssi) {
            best = Some(network);
        }
    }

    let Some(best) = best else {
        return NetworkHealthSummary::default();
    };

    let channel_congestion = networks
        .iter()
        .filter(|n| n.channel == best.channel && n.bssid != best.bssid)
        .count();

    NetworkHealthSummary {
        health_score: health_score(best.rssi, channel_congestion),
        channel_congestion,
        best_network: Some(best.clone()),
    }
}

/// Score the health of the strongest network: start from 100, penalize a
/// weak signal (-20 below -60 dBm, a further -40 below -80 dBm) and each
/// competing access point on the same channel (-10 apiece). Floors at 0.
fn health_score(best_rssi: i32, congestion: usize) -> u8 {
    let mut score: i32 = 100;
    if best_rssi < -60 {
        score -= 20;
    }
    if best_rssi < -80 {
        score -= 40;
    }
    score -= 10 * congestion as i32;
    score.max(0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::enrich;
    use crate::scanner::RawNetworkRecord;

    fn network(ssid: &str, bssid: &str, rssi: i32, channel: u32) -> EnrichedNetwork {
        enrich(&RawNetworkRecord {
            ssid: ssid.to_string(),
            bssid: bssid.to_string(),
            rssi,
            channel,
            frequency: 2437.0,
            security: "WPA2".to_string(),
        })
    }

    #[test]
    fn test_empty_scan() {
        let summary = summarize(&[]);
        assert!(summary.best_network.is_none());
        assert_eq!(summary.channel_congestion, 0);
        assert_eq!(summary.health_score, 0);
    }

    #[test]
    fn test_congested_channel() {
        let networks = vec![
            network("Home", "AA:BB:CC:11:22:33", -55, 6),
            network("Neighbor1", "AA:BB:CC:11:22:34", -58, 6),
            network("Neighbor2", "AA:BB:CC:11:22:35", -90, 6),
        ];
        let summary = summarize(&networks);

        let best = summary.best_network.unwrap();
        assert_eq!(best.rssi, -55);
        assert_eq!(best.ssid, "Home");
        assert_eq!(summary.channel_congestion, 2);
        // No signal penalty at -55, two co-channel APs cost 20
        assert_eq!(summary.health_score, 80);
    }

    #[test]
    fn test_weak_signal_penalties_stack() {
        let networks = vec![
            network("Far", "AA:BB:CC:00:00:01", -85, 11),
            network("Farther", "AA:BB:CC:00:00:02", -92, 11),
        ];
        let summary = summarize(&networks);
        // 100 - 20 (< -60) - 40 (< -80) - 10 (one co-channel AP) = 30
        assert_eq!(summary.health_score, 30);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let networks: Vec<EnrichedNetwork> = (0..8)
            .map(|i| network("Mesh", &format!("AA:BB:CC:00:00:0{}", i), -88, 1))
            .collect();
        let summary = summarize(&networks);
        assert_eq!(summary.channel_congestion, 7);
        assert_eq!(summary.health_score, 0);
    }

    #[test]
    fn test_rssi_tie_keeps_first() {
        let networks = vec![
            network("First", "AA:BB:CC:00:00:01", -60, 1),
            network("Second", "AA:BB:CC:00:00:02", -60, 1),
        ];
        let summary = summarize(&networks);
        assert_eq!(summary.best_network.unwrap().ssid, "First");
    }

    #[test]
    fn test_congestion_excludes_best_by_bssid() {
        // Same channel, same SSID, different radios: only the other one counts
        let networks = vec![
            network("Office", "AA:BB:CC:11:22:33", -50, 36),
            network("Office", "AA:BB:CC:11:22:34", -65, 36),
        ];
        let summary = summarize(&networks);
        assert_eq!(summary.channel_congestion, 1);
        assert_eq!(summary.health_score, 90);
    }
}
