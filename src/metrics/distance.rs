/// Estimate the distance to an access point in meters from signal strength
/// and carrier frequency, by inverting the free-space path loss model:
///
///   FSPL(dB) = 20*log10(d) + 20*log10(f) - 27.55   (d in m, f in MHz)
///
/// Returns meters rounded to one decimal place. Formatting (unit suffix)
/// is left to the caller.
pub fn estimate_distance(rssi: i32, frequency_mhz: f64) -> f64 {
    let exponent = (27.55 - 20.0 * frequency_mhz.log10() + f64::from(rssi.abs())) / 20.0;
    let meters = 10f64.powf(exponent);
    (meters * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weaker_signal_is_farther() {
        let near = estimate_distance(-40, 2437.0);
        let mid = estimate_distance(-60, 2437.0);
        let far = estimate_distance(-80, 2437.0);
        assert!(near < mid);
        assert!(mid < far);
    }

    #[test]
    fn test_higher_frequency_is_closer() {
        // Same RSSI attenuates over a shorter distance at 5 GHz than 2.4 GHz
        let d24 = estimate_distance(-60, 2412.0);
        let d5 = estimate_distance(-60, 5180.0);
        assert!(d5 < d24);
    }

    #[test]
    fn test_known_value() {
        // exp = (27.55 - 20*log10(2412) + 60) / 20 = 0.99512..., 10^exp = 9.88...
        let d = estimate_distance(-60, 2412.0);
        assert!((d - 9.9).abs() < 0.05, "got {}", d);
    }

    #[test]
    fn test_rounded_to_one_decimal() {
        let d = estimate_distance(-73, 5240.0);
        assert_eq!((d * 10.0).round() / 10.0, d);
    }
}
