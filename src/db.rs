use crate::metrics::{EnrichedNetwork, NetworkHealthSummary};
use crate::notifications::{Notification, NotificationCategory, NotificationSeverity};
use crate::speedtest::SpeedTestResult;
use chrono::{DateTime, Utc};
use color_eyre::Result;
use duckdb::{params, Connection};
use std::path::Path;

/// Scans kept in history before the oldest are pruned
const SCAN_HISTORY_CAP: usize = 100;
/// Notifications kept before the oldest are pruned
const NOTIFICATION_CAP: usize = 200;

/// Database wrapper for scan history, speed tests and notifications
pub struct Database {
    conn: Connection,
}

/// Scan-level summary row for the history view
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub id: i64,
    pub scanned_at: DateTime<Utc>,
    pub network_count: usize,
    pub best_ssid: Option<String>,
    pub channel_congestion: usize,
    pub health_score: u8,
}

/// A persisted speed test
#[derive(Debug, Clone)]
pub struct SpeedTestRecord {
    pub tested_at: DateTime<Utc>,
    pub download_mbps: f64,
    pub upload_mbps: f64,
    pub ping_ms: f64,
    pub server: Option<String>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE SEQUENCE IF NOT EXISTS seq_scans_id START 1;
            CREATE SEQUENCE IF NOT EXISTS seq_scan_results_id START 1;
            CREATE SEQUENCE IF NOT EXISTS seq_speedtests_id START 1;
            CREATE SEQUENCE IF NOT EXISTS seq_notifications_id START 1;
            "#,
        )?;

        self.conn.execute_batch(
            r#"
            -- Scans: one row per scan with its aggregate summary
            CREATE TABLE IF NOT EXISTS scans (
                id INTEGER PRIMARY KEY DEFAULT nextval('seq_scans_id'),
                scanned_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                network_count INTEGER NOT NULL,
                best_ssid TEXT,
                best_bssid TEXT,
                channel_congestion INTEGER NOT NULL,
                health_score INTEGER NOT NULL
            );

            -- Scan results: enriched per-network observations
            CREATE TABLE IF NOT EXISTS scan_results (
                id INTEGER PRIMARY KEY DEFAULT nextval('seq_scan_results_id'),
                scan_id INTEGER NOT NULL,
                bssid TEXT NOT NULL,
                ssid TEXT NOT NULL,
                rssi INTEGER NOT NULL,
                channel INTEGER NOT NULL,
                frequency DOUBLE NOT NULL,
                band TEXT NOT NULL,
                security TEXT NOT NULL,
                quality INTEGER NOT NULL,
                distance_m DOUBLE NOT NULL,
                vendor TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_scan_results_scan ON scan_results(scan_id);
            CREATE INDEX IF NOT EXISTS idx_scan_results_bssid ON scan_results(bssid);

            -- Speed tests
            CREATE TABLE IF NOT EXISTS speedtests (
                id INTEGER PRIMARY KEY DEFAULT nextval('seq_speedtests_id'),
                tested_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                download_mbps DOUBLE NOT NULL,
                upload_mbps DOUBLE NOT NULL,
                ping_ms DOUBLE NOT NULL,
                server TEXT
            );

            -- Notifications raised by trigger checks
            CREATE TABLE IF NOT EXISTS notifications (
                id INTEGER PRIMARY KEY DEFAULT nextval('seq_notifications_id'),
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                category TEXT NOT NULL,
                event TEXT NOT NULL,
                description TEXT NOT NULL,
                severity TEXT NOT NULL,
                is_read BOOLEAN NOT NULL DEFAULT FALSE
            );
            CREATE INDEX IF NOT EXISTS idx_notifications_time ON notifications(created_at DESC);
            "#,
        )?;
        Ok(())
    }

    // ========== Scan history ==========

    /// Persist one scan: its summary row plus all enriched results.
    pub fn record_scan(
        &self,
        networks: &[EnrichedNetwork],
        summary: &NetworkHealthSummary,
    ) -> Result<i64> {
        let (best_ssid, best_bssid) = summary
            .best_network
            .as_ref()
            .map(|n| (Some(n.ssid.clone()), Some(n.bssid.clone())))
            .unwrap_or((None, None));

        self.conn.execute(
            r#"
            INSERT INTO scans (network_count, best_ssid, best_bssid, channel_congestion, health_score)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                networks.len() as i64,
                best_ssid,
                best_bssid,
                summary.channel_congestion as i64,
                summary.health_score as i32
            ],
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT id FROM scans ORDER BY id DESC LIMIT 1")?;
        let mut rows = stmt.query([])?;
        let row = rows
            .next()?
            .ok_or_else(|| color_eyre::eyre::eyre!("Failed to retrieve inserted scan"))?;
        let scan_id: i64 = row.get(0)?;

        for network in networks {
            self.conn.execute(
                r#"
                INSERT INTO scan_results
                    (scan_id, bssid, ssid, rssi, channel, frequency, band, security, quality, distance_m, vendor)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
                params![
                    scan_id,
                    network.bssid,
                    network.ssid,
                    network.rssi,
                    network.channel as i64,
                    network.frequency,
                    network.band.to_string(),
                    network.security,
                    network.quality as i32,
                    network.distance_m,
                    network.vendor
                ],
            )?;
        }

        self.prune_scans()?;
        Ok(scan_id)
    }

    /// Keep only the most recent scans
    fn prune_scans(&self) -> Result<()> {
        self.conn.execute(
            "DELETE FROM scan_results WHERE scan_id NOT IN (SELECT id FROM scans ORDER BY id DESC LIMIT ?)",
            params![SCAN_HISTORY_CAP as i64],
        )?;
        self.conn.execute(
            "DELETE FROM scans WHERE id NOT IN (SELECT id FROM scans ORDER BY id DESC LIMIT ?)",
            params![SCAN_HISTORY_CAP as i64],
        )?;
        Ok(())
    }

    /// Most recent scans, newest first
    pub fn scan_history(&self, limit: usize) -> Result<Vec<ScanSummary>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, CAST(scanned_at AS VARCHAR), network_count, best_ssid, channel_congestion, health_score
            FROM scans
            ORDER BY id DESC
            LIMIT ?
            "#,
        )?;
        let mut rows = stmt.query(params![limit as i64])?;
        let mut summaries = Vec::new();

        while let Some(row) = rows.next()? {
            let scanned_at_str: String = row.get(1)?;
            summaries.push(ScanSummary {
                id: row.get(0)?,
                scanned_at: parse_timestamp(&scanned_at_str),
                network_count: row.get::<_, i64>(2)? as usize,
                best_ssid: row.get(3)?,
                channel_congestion: row.get::<_, i64>(4)? as usize,
                health_score: row.get::<_, i32>(5)? as u8,
            });
        }

        Ok(summaries)
    }

    // ========== Speed tests ==========

    pub fn insert_speedtest(&self, result: &SpeedTestResult) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO speedtests (download_mbps, upload_mbps, ping_ms, server)
            VALUES (?, ?, ?, ?)
            "#,
            params![
                result.download_mbps,
                result.upload_mbps,
                result.ping_ms,
                if result.server.is_empty() { None } else { Some(result.server.as_str()) }
            ],
        )?;
        Ok(())
    }

    /// Most recent speed tests, newest first
    pub fn speedtest_history(&self, limit: usize) -> Result<Vec<SpeedTestRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT CAST(tested_at AS VARCHAR), download_mbps, upload_mbps, ping_ms, server
            FROM speedtests
            ORDER BY id DESC
            LIMIT ?
            "#,
        )?;
        let mut rows = stmt.query(params![limit as i64])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            let tested_at_str: String = row.get(0)?;
            records.push(SpeedTestRecord {
                tested_at: parse_timestamp(&tested_at_str),
                download_mbps: row.get(1)?,
                upload_mbps: row.get(2)?,
                ping_ms: row.get(3)?,
                server: row.get(4)?,
            });
        }

        Ok(records)
    }

    pub fn latest_speedtest(&self) -> Result<Option<SpeedTestRecord>> {
        Ok(self.speedtest_history(1)?.into_iter().next())
    }

    // ========== Notifications ==========

    pub fn insert_notification(&self, notification: &Notification) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO notifications (category, event, description, severity, is_read)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                notification.category.to_string(),
                notification.event,
                notification.description,
                notification.severity.to_string(),
                notification.read
            ],
        )?;

        // Cap the backlog
        self.conn.execute(
            "DELETE FROM notifications WHERE id NOT IN (SELECT id FROM notifications ORDER BY id DESC LIMIT ?)",
            params![NOTIFICATION_CAP as i64],
        )?;
        Ok(())
    }

    /// All retained notifications, newest first
    pub fn list_notifications(&self) -> Result<Vec<Notification>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT CAST(created_at AS VARCHAR), category, event, description, severity, is_read
            FROM notifications
            ORDER BY id DESC
            "#,
        )?;
        let mut rows = stmt.query([])?;
        let mut notifications = Vec::new();

        while let Some(row) = rows.next()? {
            let created_at_str: String = row.get(0)?;
            let category_str: String = row.get(1)?;
            let severity_str: String = row.get(4)?;
            notifications.push(Notification {
                created_at: parse_timestamp(&created_at_str),
                category: NotificationCategory::from_str(&category_str),
                event: row.get(2)?,
                description: row.get(3)?,
                severity: NotificationSeverity::from_str(&severity_str),
                read: row.get(5)?,
            });
        }

        Ok(notifications)
    }

    pub fn mark_all_notifications_read(&self) -> Result<()> {
        self.conn
            .execute("UPDATE notifications SET is_read = TRUE", [])?;
        Ok(())
    }

    pub fn clear_notifications(&self) -> Result<()> {
        self.conn.execute("DELETE FROM notifications", [])?;
        Ok(())
    }

    pub fn unread_notification_count(&self) -> Result<usize> {
        let mut stmt = self
            .conn
            .prepare("SELECT COUNT(*) FROM notifications WHERE NOT is_read")?;
        let mut rows = stmt.query([])?;
        let row = rows
            .next()?
            .ok_or_else(|| color_eyre::eyre::eyre!("Count query returned no rows"))?;
        Ok(row.get::<_, i64>(0)? as usize)
    }
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    // DuckDB returns timestamps in ISO 8601 format, with or without a
    // fractional second part
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map(|dt| dt.and_utc())
        .or_else(|_| s.parse::<DateTime<Utc>>())
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{enrich_all, summarize};
    use crate::scanner::RawNetworkRecord;

    fn sample_scan() -> Vec<EnrichedNetwork> {
        enrich_all(&[
            RawNetworkRecord {
                ssid: "Home".to_string(),
                bssid: "F8:D1:11:22:33:44".to_string(),
                rssi: -52,
                channel: 6,
                frequency: 2437.0,
                security: "WPA2".to_string(),
            },
            RawNetworkRecord {
                ssid: "Neighbor".to_string(),
                bssid: "D8:50:E6:55:66:77".to_string(),
                rssi: -71,
                channel: 6,
                frequency: 2437.0,
                security: String::new(),
            },
        ])
    }

    #[test]
    fn test_record_scan_and_read_history() {
        let db = Database::open_in_memory().unwrap();
        let networks = sample_scan();
        let summary = summarize(&networks);

        db.record_scan(&networks, &summary).unwrap();
        db.record_scan(&networks, &summary).unwrap();

        let history = db.scan_history(10).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].network_count, 2);
        assert_eq!(history[0].best_ssid.as_deref(), Some("Home"));
        assert_eq!(history[0].channel_congestion, 1);
        assert_eq!(history[0].health_score, 90);
        // Newest first
        assert!(history[0].id > history[1].id);
    }

    #[test]
    fn test_empty_scan_recorded() {
        let db = Database::open_in_memory().unwrap();
        let summary = summarize(&[]);
        db.record_scan(&[], &summary).unwrap();

        let history = db.scan_history(10).unwrap();
        assert_eq!(history[0].network_count, 0);
        assert_eq!(history[0].best_ssid, None);
        assert_eq!(history[0].health_score, 0);
    }

    #[test]
    fn test_speedtest_round_trip() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.latest_speedtest().unwrap().is_none());

        db.insert_speedtest(&SpeedTestResult {
            download_mbps: 94.3,
            upload_mbps: 23.8,
            ping_ms: 12.0,
            server: "Example ISP".to_string(),
            timestamp: Utc::now(),
        })
        .unwrap();

        let latest = db.latest_speedtest().unwrap().unwrap();
        assert_eq!(latest.download_mbps, 94.3);
        assert_eq!(latest.server.as_deref(), Some("Example ISP"));
    }

    #[test]
    fn test_notification_lifecycle() {
        let db = Database::open_in_memory().unwrap();
        let networks = sample_scan();

        for notification in crate::notifications::check_scan_results(&networks, -85) {
            db.insert_notification(&notification).unwrap();
        }

        let listed = db.list_notifications().unwrap();
        assert_eq!(listed.len(), 1); // the open Neighbor network
        assert_eq!(listed[0].category, NotificationCategory::Security);
        assert!(!listed[0].read);
        assert_eq!(db.unread_notification_count().unwrap(), 1);

        db.mark_all_notifications_read().unwrap();
        assert_eq!(db.unread_notification_count().unwrap(), 0);
        assert!(db.list_notifications().unwrap()[0].read);

        db.clear_notifications().unwrap();
        assert!(db.list_notifications().unwrap().is_empty());
    }
}
