//! Local and public IP lookup for the dashboard header.

use color_eyre::Result;
use std::time::Duration;

/// Local IP address assigned by the router
pub fn lookup_local_ip() -> Result<String> {
    Ok(local_ip_address::local_ip()?.to_string())
}

fn lookup_public_ip_blocking() -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // ipify returns the bare address; fall back to icanhazip on failure
    let response = client.get("https://api.ipify.org").send()?;
    if response.status().is_success() {
        return Ok(response.text()?.trim().to_string());
    }

    let response = client.get("https://icanhazip.com").send()?;
    Ok(response.text()?.trim().to_string())
}

/// Public IP address, fetched on a dedicated thread so the call is safe
/// from async contexts. None if the lookup fails.
pub fn lookup_public_ip() -> Option<String> {
    let handle = std::thread::spawn(lookup_public_ip_blocking);
    handle.join().ok().and_then(|r| r.ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_local_ip() {
        let ip = lookup_local_ip().unwrap();
        assert!(ip.contains('.') || ip.contains(':'));
    }

    // Public IP lookup needs internet access; exercised manually
}
