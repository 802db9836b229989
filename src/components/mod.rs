mod detail_panel;
mod health_panel;
mod history_panel;
mod network_table;
mod notifications_panel;
mod quality_chart;
mod speedtest_widget;
mod status_bar;

pub use detail_panel::DetailPanel;
pub use health_panel::HealthPanel;
pub use history_panel::HistoryPanel;
pub use network_table::NetworkTable;
pub use notifications_panel::NotificationsPanel;
pub use quality_chart::QualityChart;
pub use speedtest_widget::SpeedTestWidget;
pub use status_bar::StatusBar;

use crate::app::App;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait Component {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);
}

/// Format a timestamp as relative time ("2m ago", "1h ago")
pub(crate) fn format_relative_time(time: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(time);

    let secs = duration.num_seconds();
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}
