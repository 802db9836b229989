use std::collections::HashMap;
use std::sync::OnceLock;

/// Resolve the manufacturer of an access point from its BSSID.
///
/// The first three octets of a MAC address (the OUI) identify the vendor.
/// The lookup strips colon separators, takes the first six hex digits and
/// normalizes to uppercase. Unrecognized or malformed BSSIDs resolve to
/// "Unknown" rather than failing.
pub fn resolve_vendor(bssid: &str) -> &'static str {
    let prefix: String = bssid
        .chars()
        .filter(|c| *c != ':')
        .take(6)
        .collect::<String>()
        .to_uppercase();

    oui_table().get(prefix.as_str()).copied().unwrap_or("Unknown")
}

/// Static OUI table. Extending it changes coverage, not behavior.
fn oui_table() -> &'static HashMap<&'static str, &'static str> {
    static OUI_DB: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    OUI_DB.get_or_init(|| {
        let mut map = HashMap::with_capacity(32);

        for prefix in ["F8D111", "E848B8", "18A6F7"] {
            map.insert(prefix, "TP-Link");
        }

        for prefix in ["00259C", "64D989"] {
            map.insert(prefix, "Cisco");
        }

        for prefix in ["04D9F5", "2C4D54", "D850E6"] {
            map.insert(prefix, "Asus");
        }

        for prefix in ["F07959", "BC926B", "88A4C2"] {
            map.insert(prefix, "Apple");
        }

        for prefix in ["C83A35", "502B73"] {
            map.insert(prefix, "Tenda");
        }

        for prefix in ["E01D3B", "640980"] {
            map.insert(prefix, "Xiaomi");
        }

        for prefix in ["D46E0E", "14D64D"] {
            map.insert(prefix, "D-Link");
        }

        map.insert("00155D", "Microsoft");
        map.insert("001A11", "Google");

        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tp_link() {
        assert_eq!(resolve_vendor("F8:D1:11:00:00:00"), "TP-Link");
    }

    #[test]
    fn test_resolve_without_separators() {
        assert_eq!(resolve_vendor("f8d11100aabb"), "TP-Link");
        assert_eq!(resolve_vendor("001a11445566"), "Google");
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(resolve_vendor("00:00:00:00:00:00"), "Unknown");
        assert_eq!(resolve_vendor("FF:FF:FF:FF:FF:FF"), "Unknown");
    }

    #[test]
    fn test_malformed_bssid_falls_through() {
        assert_eq!(resolve_vendor(""), "Unknown");
        assert_eq!(resolve_vendor("F8:D1"), "Unknown");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resolve_vendor("d8:50:e6:12:34:56"), "Asus");
    }
}
