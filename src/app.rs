use crate::cache::ScanCache;
use crate::components::{
    Component, DetailPanel, HealthPanel, HistoryPanel, NetworkTable, NotificationsPanel,
    QualityChart, SpeedTestWidget, StatusBar,
};
use crate::db::{Database, ScanSummary, SpeedTestRecord};
use crate::metrics::{enrich_all, summarize, EnrichedNetwork, NetworkHealthSummary};
use crate::notifications::{self, Notification};
use crate::scanner::ScanClient;
use crate::settings::{Settings, SettingsStore};
use crate::speedtest::{run_speed_test, SpeedTestResult};
use crate::theme::Theme;
use color_eyre::Result;
use log::warn;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

const QUALITY_HISTORY_SIZE: usize = 30;
const THRESHOLD_STEP: i32 = 5;
const HISTORY_VIEW_LIMIT: usize = 50;
const SPEEDTEST_VIEW_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Auto,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Quality,
    Signal,
    Distance,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Dashboard,
    Notifications,
    History,
}

pub struct App {
    /// Latest scan, replaced wholesale on each new scan
    pub cache: ScanCache,
    /// Display copy of the cached scan, in the current sort order
    pub networks: Vec<EnrichedNetwork>,
    pub summary: NetworkHealthSummary,
    pub selected_index: usize,
    /// Quality history keyed by BSSID, for the trend chart
    pub quality_history: HashMap<String, VecDeque<u8>>,
    pub scan_mode: ScanMode,
    pub auto_interval: Duration,
    pub last_scan: Instant,
    pub is_scanning: bool,
    pub sort_by: SortField,
    pub should_quit: bool,
    pub show_help: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub current_view: AppView,
    pub settings: Settings,
    pub theme: Theme,
    settings_store: Box<dyn SettingsStore>,
    /// Database connection (None if persistence disabled)
    pub db: Option<Database>,
    pub notifications: Vec<Notification>,
    pub scan_history: Vec<ScanSummary>,
    pub last_speedtest: Option<SpeedTestRecord>,
    pub speedtest_history: Vec<SpeedTestRecord>,
    /// Speed test start time while one is running
    pub speedtest_running: Option<Instant>,
    speedtest_receiver: Option<std::sync::mpsc::Receiver<Result<SpeedTestResult>>>,
    pub local_ip: Option<String>,
    pub public_ip: Option<String>,
    public_ip_receiver: Option<std::sync::mpsc::Receiver<Option<String>>>,
    backend_url: String,
}

impl App {
    pub fn new(
        settings: Settings,
        settings_store: Box<dyn SettingsStore>,
        backend_url: String,
        auto_interval: Duration,
        start_auto: bool,
    ) -> Self {
        let theme = Theme::new(settings.theme);
        Self {
            cache: ScanCache::new(),
            networks: Vec::new(),
            summary: NetworkHealthSummary::default(),
            selected_index: 0,
            quality_history: HashMap::new(),
            scan_mode: if start_auto {
                ScanMode::Auto
            } else {
                ScanMode::Manual
            },
            auto_interval,
            last_scan: Instant::now() - auto_interval, // Trigger immediate scan
            is_scanning: false,
            sort_by: SortField::Quality,
            should_quit: false,
            show_help: false,
            error_message: None,
            status_message: None,
            current_view: AppView::default(),
            settings,
            theme,
            settings_store,
            db: None,
            notifications: Vec::new(),
            scan_history: Vec::new(),
            last_speedtest: None,
            speedtest_history: Vec::new(),
            speedtest_running: None,
            speedtest_receiver: None,
            local_ip: None,
            public_ip: None,
            public_ip_receiver: None,
            backend_url,
        }
    }

    /// Attach database persistence
    pub fn with_database(mut self, db: Database) -> Self {
        self.db = Some(db);
        self
    }

    /// Restore persisted state on startup
    pub fn load_persisted_state(&mut self) -> Result<()> {
        if let Some(db) = &self.db {
            self.notifications = db.list_notifications()?;
            self.scan_history = db.scan_history(HISTORY_VIEW_LIMIT)?;
            self.speedtest_history = db.speedtest_history(SPEEDTEST_VIEW_LIMIT)?;
            self.last_speedtest = db.latest_speedtest()?;
        }
        Ok(())
    }

    /// Resolve the local IP now and kick off the public IP lookup in the
    /// background (it needs a round trip to the internet).
    pub fn init_connection_info(&mut self) {
        self.local_ip = crate::ip::lookup_local_ip().ok();

        let (tx, rx) = std::sync::mpsc::channel();
        self.public_ip_receiver = Some(rx);
        std::thread::spawn(move || {
            let _ = tx.send(crate::ip::lookup_public_ip());
        });
    }

    /// Pick up the background public IP lookup when it finishes
    pub fn check_connection_info(&mut self) {
        if let Some(rx) = &self.public_ip_receiver
            && let Ok(ip) = rx.try_recv()
        {
            self.public_ip = ip;
            self.public_ip_receiver = None;
        }
    }

    // ========== Scanning ==========

    pub fn should_scan(&self) -> bool {
        if self.is_scanning {
            return false;
        }
        match self.scan_mode {
            ScanMode::Auto => self.last_scan.elapsed() >= self.auto_interval,
            ScanMode::Manual => false,
        }
    }

    /// Fetch a scan from the backend, enrich it, refresh the summary, run
    /// the notification triggers and persist everything.
    pub async fn perform_scan(&mut self, client: &ScanClient) -> Result<()> {
        self.is_scanning = true;

        let records = match client.scan().await {
            Ok(records) => records,
            Err(e) => {
                self.is_scanning = false;
                self.last_scan = Instant::now();
                return Err(e);
            }
        };

        self.cache.replace(enrich_all(&records));

        for network in self.cache.networks() {
            let history = self
                .quality_history
                .entry(network.bssid.clone())
                .or_default();
            history.push_back(network.quality);
            while history.len() > QUALITY_HISTORY_SIZE {
                history.pop_front();
            }
        }

        self.refresh_display();

        let raised = notifications::check_scan_results(
            self.cache.networks(),
            self.settings.signal_threshold_dbm,
        );
        self.push_notifications(raised);

        if let Some(db) = &self.db {
            if let Err(e) = db.record_scan(self.cache.networks(), &self.summary) {
                warn!("Failed to persist scan: {e}");
            }
            match db.scan_history(HISTORY_VIEW_LIMIT) {
                Ok(history) => self.scan_history = history,
                Err(e) => warn!("Failed to reload scan history: {e}"),
            }
        }

        self.last_scan = Instant::now();
        self.is_scanning = false;
        Ok(())
    }

    /// Rebuild the display list from the cached scan: re-sort, recompute
    /// the health summary, keep the selection on the same BSSID.
    fn refresh_display(&mut self) {
        let selected_bssid = self
            .networks
            .get(self.selected_index)
            .map(|n| n.bssid.clone());

        // The summary reads the scan in arrival order so that the
        // best-network tie-break is independent of the sort setting
        self.summary = summarize(self.cache.networks());

        let mut networks = self.cache.networks().to_vec();
        match self.sort_by {
            SortField::Quality => networks.sort_by(|a, b| b.quality.cmp(&a.quality)),
            SortField::Signal => networks.sort_by(|a, b| b.rssi.cmp(&a.rssi)),
            SortField::Distance => {
                networks.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m))
            }
            SortField::Name => networks.sort_by(|a, b| a.ssid.cmp(&b.ssid)),
        }
        self.networks = networks;

        if let Some(bssid) = selected_bssid
            && let Some(idx) = self.networks.iter().position(|n| n.bssid == bssid)
        {
            self.selected_index = idx;
        }
        if self.networks.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.networks.len() - 1);
        }
    }

    pub fn get_next_refresh_secs(&self) -> Option<u64> {
        if matches!(self.scan_mode, ScanMode::Auto) && !self.is_scanning {
            let elapsed = self.last_scan.elapsed();
            if elapsed < self.auto_interval {
                Some((self.auto_interval - elapsed).as_secs())
            } else {
                Some(0)
            }
        } else {
            None
        }
    }

    // ========== Speed tests ==========

    /// Start a speed test on a background thread
    pub fn start_speed_test(&mut self) {
        if self.speedtest_running.is_some() {
            return;
        }

        let (tx, rx) = std::sync::mpsc::channel();
        self.speedtest_running = Some(Instant::now());
        self.speedtest_receiver = Some(rx);

        let backend_url = self.backend_url.clone();
        std::thread::spawn(move || {
            let _ = tx.send(run_speed_test(&backend_url));
        });
    }

    /// Check whether the background speed test has finished
    pub fn check_speedtest_result(&mut self) {
        let Some(rx) = &self.speedtest_receiver else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(result)) => {
                self.status_message = Some(format!(
                    "Speed test complete: \u{2193}{:.1} Mbps  \u{2191}{:.1} Mbps  {:.0} ms",
                    result.download_mbps, result.upload_mbps, result.ping_ms
                ));

                if let Some(db) = &self.db
                    && let Err(e) = db.insert_speedtest(&result)
                {
                    warn!("Failed to persist speed test: {e}");
                }

                let raised = notifications::check_speedtest_result(&result);
                self.push_notifications(raised);

                let record = SpeedTestRecord {
                    tested_at: result.timestamp,
                    download_mbps: result.download_mbps,
                    upload_mbps: result.upload_mbps,
                    ping_ms: result.ping_ms,
                    server: if result.server.is_empty() {
                        None
                    } else {
                        Some(result.server)
                    },
                };
                self.speedtest_history.insert(0, record.clone());
                self.speedtest_history.truncate(SPEEDTEST_VIEW_LIMIT);
                self.last_speedtest = Some(record);

                self.speedtest_running = None;
                self.speedtest_receiver = None;
            }
            Ok(Err(e)) => {
                self.status_message = Some(format!("Speed test failed: {e}"));
                self.speedtest_running = None;
                self.speedtest_receiver = None;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {}
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.status_message = Some("Speed test failed".to_string());
                self.speedtest_running = None;
                self.speedtest_receiver = None;
            }
        }
    }

    pub fn get_speedtest_status(&self) -> Option<String> {
        self.speedtest_running
            .map(|started| format!("Speed test running... {}s", started.elapsed().as_secs()))
    }

    // ========== Notifications ==========

    /// Persist freshly raised notifications and prepend them to the list
    fn push_notifications(&mut self, raised: Vec<Notification>) {
        if raised.is_empty() {
            return;
        }

        if let Some(db) = &self.db {
            for notification in &raised {
                if let Err(e) = db.insert_notification(notification) {
                    warn!("Failed to persist notification: {e}");
                }
            }
        }

        for notification in raised.into_iter().rev() {
            self.notifications.insert(0, notification);
        }
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_notifications_read(&mut self) {
        if let Some(db) = &self.db
            && let Err(e) = db.mark_all_notifications_read()
        {
            warn!("Failed to mark notifications read: {e}");
        }
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    pub fn clear_notifications(&mut self) {
        if let Some(db) = &self.db
            && let Err(e) = db.clear_notifications()
        {
            warn!("Failed to clear notifications: {e}");
        }
        self.notifications.clear();
    }

    // ========== Settings ==========

    fn save_settings(&self) {
        if let Err(e) = self.settings_store.save(&self.settings) {
            warn!("Failed to save settings: {e}");
        }
    }

    pub fn adjust_signal_threshold(&mut self, delta: i32) {
        self.settings
            .set_signal_threshold(self.settings.signal_threshold_dbm + delta);
        self.status_message = Some(format!(
            "Signal threshold: {} dBm",
            self.settings.signal_threshold_dbm
        ));
        self.save_settings();
    }

    pub fn toggle_theme(&mut self) {
        self.settings.toggle_theme();
        self.theme = Theme::new(self.settings.theme);
        self.save_settings();
    }

    pub fn raise_threshold(&mut self) {
        self.adjust_signal_threshold(THRESHOLD_STEP);
    }

    pub fn lower_threshold(&mut self) {
        self.adjust_signal_threshold(-THRESHOLD_STEP);
    }

    /// Cycle the auto-scan interval through the preset options
    pub fn cycle_scan_interval(&mut self) {
        let next = match self.settings.scan_interval_secs {
            0 => 10,
            10 => 3600,
            3600 => 21600,
            _ => 0,
        };
        self.settings.scan_interval_secs = next;

        if next == 0 {
            self.scan_mode = ScanMode::Manual;
            self.status_message = Some("Auto-scan off".to_string());
        } else {
            self.auto_interval = Duration::from_secs(next);
            self.scan_mode = ScanMode::Auto;
            self.status_message = Some(format!("Auto-scan every {}", format_interval(next)));
        }
        self.save_settings();
    }

    // ========== Navigation ==========

    pub fn navigate_up(&mut self) {
        if !self.networks.is_empty() && self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        if !self.networks.is_empty() && self.selected_index < self.networks.len() - 1 {
            self.selected_index += 1;
        }
    }

    pub fn cycle_sort(&mut self) {
        self.sort_by = match self.sort_by {
            SortField::Quality => SortField::Signal,
            SortField::Signal => SortField::Distance,
            SortField::Distance => SortField::Name,
            SortField::Name => SortField::Quality,
        };
        self.refresh_display();
    }

    pub fn cycle_view(&mut self) {
        self.current_view = match self.current_view {
            AppView::Dashboard => AppView::Notifications,
            AppView::Notifications => AppView::History,
            AppView::History => AppView::Dashboard,
        };
    }

    pub fn toggle_scan_mode(&mut self) {
        self.scan_mode = match self.scan_mode {
            ScanMode::Auto => ScanMode::Manual,
            ScanMode::Manual => ScanMode::Auto,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_error(&mut self, msg: String) {
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    // ========== Rendering ==========

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header/tabs
                Constraint::Min(10),   // Main content
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        self.render_header_tabs(frame, chunks[0]);

        match self.current_view {
            AppView::Dashboard => {
                let main_chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
                    .split(chunks[1]);

                NetworkTable.render(frame, main_chunks[0], self);

                let side_chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(11),
                        Constraint::Length(7),
                        Constraint::Length(5),
                        Constraint::Length(6),
                    ])
                    .split(main_chunks[1]);

                DetailPanel.render(frame, side_chunks[0], self);
                HealthPanel.render(frame, side_chunks[1], self);
                QualityChart.render(frame, side_chunks[2], self);
                SpeedTestWidget.render(frame, side_chunks[3], self);
            }
            AppView::Notifications => {
                NotificationsPanel.render(frame, chunks[1], self);
            }
            AppView::History => {
                HistoryPanel.render(frame, chunks[1], self);
            }
        }

        StatusBar.render(frame, chunks[2], self);

        if self.show_help {
            self.render_help_overlay(frame);
        }
        if let Some(ref error) = self.error_message {
            self.render_error_overlay(frame, error);
        }
    }

    fn render_header_tabs(&self, frame: &mut Frame, area: Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::Paragraph;

        let tab_style = |view: AppView| {
            if self.current_view == view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            }
        };

        let unread = self.unread_notification_count();
        let notifications_label = if unread > 0 {
            format!("[Notifications ({})]", unread)
        } else {
            "[Notifications]".to_string()
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled("[Dashboard]", tab_style(AppView::Dashboard)),
            Span::raw("  "),
            Span::styled(notifications_label, tab_style(AppView::Notifications)),
            Span::raw("  "),
            Span::styled("[History]", tab_style(AppView::History)),
            Span::raw("   "),
            Span::styled("Tab", Style::default().fg(Color::DarkGray)),
            Span::raw(" to switch"),
        ];

        if let Some(ref local) = self.local_ip {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("Local {}", local),
                self.theme.help_style(),
            ));
        }
        if let Some(ref public) = self.public_ip {
            spans.push(Span::styled(
                format!("  Public {}", public),
                self.theme.help_style(),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};

        let area = centered_rect(50, 65, frame.area());

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled("Keyboard Shortcuts", self.theme.title_style())),
            Line::from(""),
            Line::from("\u{2191}/\u{2193} or j/k   Navigate networks"),
            Line::from("Tab            Switch view"),
            Line::from("r              Refresh scan"),
            Line::from("t              Run speed test"),
            Line::from("a              Toggle auto/manual scan"),
            Line::from("i              Cycle auto-scan interval"),
            Line::from("s              Cycle sort order"),
            Line::from("[ / ]          Adjust signal threshold"),
            Line::from("T              Toggle light/dark theme"),
            Line::from("m              Mark notifications read"),
            Line::from("x              Clear notifications"),
            Line::from("?              Toggle this help"),
            Line::from("q / Esc        Quit"),
            Line::from(""),
            Line::from(Span::styled("Health Score", self.theme.title_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled("80-100", self.theme.score_style(90)),
                Span::raw("  Excellent"),
            ]),
            Line::from(vec![
                Span::styled("60-79 ", self.theme.score_style(70)),
                Span::raw("  Good"),
            ]),
            Line::from(vec![
                Span::styled("40-59 ", self.theme.score_style(50)),
                Span::raw("  Fair"),
            ]),
            Line::from(vec![
                Span::styled("0-39  ", self.theme.score_style(20)),
                Span::raw("  Poor"),
            ]),
            Line::from(""),
            Line::from("Press ? to close"),
        ];

        let paragraph = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .style(self.theme.border_style())
                .title(Span::styled(" Help ", self.theme.title_style())),
        );

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn render_error_overlay(&self, frame: &mut Frame, error: &str) {
        use ratatui::style::{Color, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

        let area = centered_rect(70, 45, frame.area());

        let error_text = vec![
            Line::from(""),
            Line::from(Span::styled("Scan Failed", Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(error.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Tip: run with --demo to explore the dashboard with simulated networks:",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from("  cargo run -- --demo"),
            Line::from(""),
            Line::from("Press 'd' to switch to demo mode, or 'q' to quit"),
        ];

        let paragraph = Paragraph::new(error_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(Span::styled(" Error ", Style::default().fg(Color::Red))),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

fn format_interval(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else {
        format!("{}h", secs / 3600)
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::enrich_all;
    use crate::scanner::RawNetworkRecord;

    struct NullStore;

    impl SettingsStore for NullStore {
        fn load(&self) -> Result<Option<Settings>> {
            Ok(None)
        }
        fn save(&self, _settings: &Settings) -> Result<()> {
            Ok(())
        }
    }

    fn test_app() -> App {
        App::new(
            Settings::default(),
            Box::new(NullStore),
            "http://127.0.0.1:8000".to_string(),
            Duration::from_secs(5),
            false,
        )
    }

    fn record(ssid: &str, bssid: &str, rssi: i32) -> RawNetworkRecord {
        RawNetworkRecord {
            ssid: ssid.to_string(),
            bssid: bssid.to_string(),
            rssi,
            channel: 6,
            frequency: 2437.0,
            security: "WPA2".to_string(),
        }
    }

    #[test]
    fn test_refresh_display_sorts_and_summarizes() {
        let mut app = test_app();
        app.cache.replace(enrich_all(&[
            record("Weak", "AA:BB:CC:00:00:01", -80),
            record("Strong", "AA:BB:CC:00:00:02", -50),
        ]));
        app.refresh_display();

        // Default sort is by quality, strongest first
        assert_eq!(app.networks[0].ssid, "Strong");
        assert_eq!(app.summary.best_network.as_ref().unwrap().ssid, "Strong");
        assert_eq!(app.summary.channel_congestion, 1);
    }

    #[test]
    fn test_selection_follows_bssid_across_sorts() {
        let mut app = test_app();
        app.cache.replace(enrich_all(&[
            record("Bravo", "AA:BB:CC:00:00:01", -80),
            record("Alpha", "AA:BB:CC:00:00:02", -50),
        ]));
        app.refresh_display();

        // Select "Bravo" (second by quality), then re-sort by name
        app.selected_index = 1;
        app.cycle_sort(); // Signal
        app.cycle_sort(); // Distance
        app.cycle_sort(); // Name
        assert_eq!(app.networks[app.selected_index].ssid, "Bravo");
    }

    #[test]
    fn test_threshold_adjustment_clamps_and_reports() {
        let mut app = test_app();
        for _ in 0..20 {
            app.lower_threshold();
        }
        assert_eq!(app.settings.signal_threshold_dbm, -100);
        app.raise_threshold();
        assert_eq!(app.settings.signal_threshold_dbm, -95);
        assert!(app.status_message.as_ref().unwrap().contains("-95 dBm"));
    }

    #[test]
    fn test_cycle_scan_interval_presets() {
        let mut app = test_app();
        assert_eq!(app.scan_mode, ScanMode::Manual);

        app.cycle_scan_interval();
        assert_eq!(app.settings.scan_interval_secs, 10);
        assert_eq!(app.scan_mode, ScanMode::Auto);
        assert_eq!(app.auto_interval, Duration::from_secs(10));

        app.cycle_scan_interval();
        assert_eq!(app.settings.scan_interval_secs, 3600);
        app.cycle_scan_interval();
        assert_eq!(app.settings.scan_interval_secs, 21600);

        app.cycle_scan_interval();
        assert_eq!(app.settings.scan_interval_secs, 0);
        assert_eq!(app.scan_mode, ScanMode::Manual);
    }

    #[test]
    fn test_notifications_unread_lifecycle() {
        let mut app = test_app();
        let networks = enrich_all(&[record("Open", "AA:BB:CC:00:00:01", -60)]);
        let mut open = networks;
        open[0].security = "Open".to_string();

        app.push_notifications(notifications::check_scan_results(&open, -85));
        assert_eq!(app.unread_notification_count(), 1);

        app.mark_notifications_read();
        assert_eq!(app.unread_notification_count(), 0);
        assert_eq!(app.notifications.len(), 1);

        app.clear_notifications();
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_toggle_theme_updates_palette() {
        let mut app = test_app();
        assert_eq!(app.settings.theme, crate::settings::ThemeMode::Dark);
        app.toggle_theme();
        assert_eq!(app.settings.theme, crate::settings::ThemeMode::Light);
    }
}
