use crate::app::App;
use crate::components::{format_relative_time, Component};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub struct SpeedTestWidget;

impl Component for SpeedTestWidget {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let content = if let Some(status) = app.get_speedtest_status() {
            vec![
                Line::from(""),
                Line::from(Span::styled(status, Style::default().fg(Color::Yellow))),
            ]
        } else if let Some(last) = &app.last_speedtest {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("\u{2193} {:.1} Mbps", last.download_mbps),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("\u{2191} {:.1} Mbps", last.upload_mbps),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw("  "),
                    Span::raw(format!("{:.0} ms", last.ping_ms)),
                ]),
                Line::from(Span::styled(
                    format!("Tested {}", format_relative_time(last.tested_at)),
                    app.theme.help_style(),
                )),
            ];
            if let Some(server) = &last.server {
                lines.push(Line::from(Span::styled(
                    format!("via {}", server),
                    app.theme.help_style(),
                )));
            }
            lines
        } else {
            vec![
                Line::from("No speed test yet"),
                Line::from(Span::styled("Press 't' to run one", app.theme.help_style())),
            ]
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .style(app.theme.border_style())
                .title(Span::styled(" Speed Test ", app.theme.title_style())),
        );

        frame.render_widget(paragraph, area);
    }
}
