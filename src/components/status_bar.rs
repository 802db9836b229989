use crate::app::{App, AppView, ScanMode};
use crate::components::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct StatusBar;

impl Component for StatusBar {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let mode_span = match app.scan_mode {
            ScanMode::Auto => {
                if let Some(secs) = app.get_next_refresh_secs() {
                    Span::styled(
                        format!("[Auto] next scan in {}s", secs),
                        app.theme.auto_mode_style(),
                    )
                } else {
                    Span::styled("[Auto]", app.theme.auto_mode_style())
                }
            }
            ScanMode::Manual => Span::styled("[Manual]", app.theme.manual_mode_style()),
        };

        let status_span = if let Some(speedtest_status) = app.get_speedtest_status() {
            Span::styled(
                format!(" {}", speedtest_status),
                Style::default().fg(Color::Yellow),
            )
        } else if app.is_scanning {
            Span::raw(" Scanning...")
        } else if let Some(ref msg) = app.status_message {
            Span::styled(format!(" {}", msg), app.theme.status_style())
        } else {
            Span::raw("")
        };

        let help_text = match app.current_view {
            AppView::Dashboard => " | \u{2191}\u{2193} Nav | r Scan | t Speed Test | s Sort | [ ] Threshold | ? Help | q Quit",
            AppView::Notifications => " | m Mark Read | x Clear | Tab Switch | ? Help | q Quit",
            AppView::History => " | r Scan | Tab Switch | ? Help | q Quit",
        };
        let help_span = Span::styled(help_text, app.theme.help_style());

        let threshold_span = Span::styled(
            format!(" | thr {} dBm", app.settings.signal_threshold_dbm),
            app.theme.help_style(),
        );

        let line = Line::from(vec![mode_span, status_span, threshold_span, help_span]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
