/// Convert RSSI (dBm) to a quality percentage (0-100)
/// Anchors: -100 dBm = 0%, -50 dBm = 100%, linear in between
pub fn estimate_quality(rssi: i32) -> u8 {
    if rssi <= -100 {
        return 0;
    }
    if rssi >= -50 {
        return 100;
    }
    (2 * (rssi + 100)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_points() {
        assert_eq!(estimate_quality(-100), 0);
        assert_eq!(estimate_quality(-50), 100);
        assert_eq!(estimate_quality(-75), 50);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(estimate_quality(-120), 0);
        assert_eq!(estimate_quality(-30), 100);
        assert_eq!(estimate_quality(0), 100);
    }

    #[test]
    fn test_monotonic() {
        for rssi in -100..-50 {
            assert!(estimate_quality(rssi) < estimate_quality(rssi + 1));
        }
    }
}
