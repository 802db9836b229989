use clap::Parser;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;
use wifi_dashboard::app::{App, AppView};
use wifi_dashboard::db::Database;
use wifi_dashboard::event::{Event, EventHandler};
use wifi_dashboard::scanner::{enable_demo_mode, ScanClient};
use wifi_dashboard::settings::{JsonFileStore, SettingsStore};
use wifi_dashboard::tui;

#[derive(Parser, Debug)]
#[command(name = "wifi-dashboard")]
#[command(version = "0.1.0")]
#[command(about = "A terminal dashboard for Wi-Fi network diagnostics")]
struct Args {
    /// Base URL of the diagnostics backend
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    backend: String,

    /// Auto-refresh interval in seconds (overrides the saved setting)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Start in manual mode (no auto-refresh)
    #[arg(short = 'm', long)]
    manual: bool,

    /// Run with simulated scan results (no backend needed)
    #[arg(short, long)]
    demo: bool,

    /// Database file for history and notifications
    #[arg(long, default_value = "wifi-dashboard.db")]
    db: PathBuf,

    /// Disable history persistence
    #[arg(long)]
    no_db: bool,

    /// Settings file
    #[arg(long, default_value = "wifi-dashboard-settings.json")]
    settings: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();

    if args.demo {
        enable_demo_mode();
    }

    let settings_store = JsonFileStore::new(args.settings.clone());
    let settings = settings_store.load()?.unwrap_or_default();

    let interval_secs = args.interval.unwrap_or(settings.scan_interval_secs);
    let start_auto = !args.manual && interval_secs > 0;
    // Any positive interval works; 0 means the user never enabled auto-scan
    let auto_interval = Duration::from_secs(interval_secs.max(1));

    let client = ScanClient::new(args.backend.clone());

    let mut app = App::new(
        settings,
        Box::new(settings_store),
        args.backend,
        auto_interval,
        start_auto,
    );

    if !args.no_db {
        match Database::open(&args.db) {
            Ok(db) => app = app.with_database(db),
            Err(e) => log::warn!("Running without persistence: {e}"),
        }
    }

    app.load_persisted_state()?;
    app.init_connection_info();

    let mut terminal = tui::init()?;
    let mut events = EventHandler::new(Duration::from_millis(100));

    // Initial scan
    if let Err(e) = app.perform_scan(&client).await {
        app.set_error(format!("{}", e));
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        match events.next().await? {
            Event::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    app.quit();
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Tab => app.cycle_view(),
                    KeyCode::Up | KeyCode::Char('k') => app.navigate_up(),
                    KeyCode::Down | KeyCode::Char('j') => app.navigate_down(),
                    KeyCode::Char('r') => {
                        match app.perform_scan(&client).await {
                            Ok(()) => app.clear_error(),
                            Err(e) => app.set_error(format!("{}", e)),
                        }
                    }
                    KeyCode::Char('d') => {
                        // Switch to demo mode
                        enable_demo_mode();
                        app.clear_error();
                        let _ = app.perform_scan(&client).await;
                    }
                    KeyCode::Char('t') => app.start_speed_test(),
                    KeyCode::Char('T') => app.toggle_theme(),
                    KeyCode::Char('a') => app.toggle_scan_mode(),
                    KeyCode::Char('i') => app.cycle_scan_interval(),
                    KeyCode::Char('s') => app.cycle_sort(),
                    KeyCode::Char('[') => app.lower_threshold(),
                    KeyCode::Char(']') => app.raise_threshold(),
                    KeyCode::Char('m') if app.current_view == AppView::Notifications => {
                        app.mark_notifications_read()
                    }
                    KeyCode::Char('x') if app.current_view == AppView::Notifications => {
                        app.clear_notifications()
                    }
                    KeyCode::Char('?') => app.toggle_help(),
                    _ => {}
                }
            }
            Event::Tick => {
                app.check_speedtest_result();
                app.check_connection_info();
                if app.should_scan() {
                    match app.perform_scan(&client).await {
                        Ok(()) => app.clear_error(),
                        Err(e) => app.set_error(format!("{}", e)),
                    }
                }
            }
            Event::Resize => {
                // Redrawn on the next loop iteration
            }
        }

        if app.should_quit {
            break;
        }
    }

    tui::restore()?;
    Ok(())
}
