use crate::app::App;
use crate::components::{format_relative_time, Component};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub struct HistoryPanel;

impl Component for HistoryPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.render_scan_history(frame, chunks[0], app);
        self.render_speedtest_history(frame, chunks[1], app);
    }
}

impl HistoryPanel {
    fn render_scan_history(&self, frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(app.theme.border_style())
            .title(Span::styled(" Scan History ", app.theme.title_style()));

        if app.scan_history.is_empty() {
            let paragraph = Paragraph::new(Span::styled(
                "No scans recorded yet.",
                app.theme.help_style(),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new([
            Cell::from("When"),
            Cell::from("Networks"),
            Cell::from("Best Network"),
            Cell::from("Congestion"),
            Cell::from("Health"),
        ])
        .style(app.theme.header_style())
        .height(1);

        let rows = app.scan_history.iter().map(|scan| {
            let health_cell = Cell::from(Span::styled(
                format!("{:3}/100", scan.health_score),
                app.theme.score_style(scan.health_score),
            ));

            Row::new([
                Cell::from(format_relative_time(scan.scanned_at)),
                Cell::from(format!("{}", scan.network_count)),
                Cell::from(scan.best_ssid.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(format!("{}", scan.channel_congestion)),
                health_cell,
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Min(20),
                Constraint::Length(11),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, area);
    }

    fn render_speedtest_history(&self, frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(app.theme.border_style())
            .title(Span::styled(" Speed Tests ", app.theme.title_style()));

        if app.speedtest_history.is_empty() {
            let paragraph = Paragraph::new(Span::styled(
                "No speed tests recorded yet.",
                app.theme.help_style(),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new([
            Cell::from("When"),
            Cell::from("Download"),
            Cell::from("Upload"),
            Cell::from("Ping"),
            Cell::from("Server"),
        ])
        .style(app.theme.header_style())
        .height(1);

        let rows = app.speedtest_history.iter().map(|test| {
            Row::new([
                Cell::from(format_relative_time(test.tested_at)),
                Cell::from(format!("{:.1} Mbps", test.download_mbps)),
                Cell::from(format!("{:.1} Mbps", test.upload_mbps)),
                Cell::from(format!("{:.0} ms", test.ping_ms)),
                Cell::from(test.server.clone().unwrap_or_else(|| "-".to_string())),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(11),
                Constraint::Length(11),
                Constraint::Length(8),
                Constraint::Min(16),
            ],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, area);
    }
}
