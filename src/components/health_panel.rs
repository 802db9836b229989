use crate::app::App;
use crate::components::Component;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub struct HealthPanel;

impl Component for HealthPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let summary = &app.summary;

        let content = if let Some(best) = &summary.best_network {
            let ssid_display = if best.ssid.is_empty() {
                "<Hidden>"
            } else {
                best.ssid.as_str()
            };

            let congestion_label = match summary.channel_congestion {
                0 => "clear".to_string(),
                n => format!("{} competing AP(s)", n),
            };

            vec![
                Line::from(vec![
                    Span::raw("Score: "),
                    Span::styled(
                        format!("{}/100 {}", summary.health_score, score_meter(summary.health_score)),
                        app.theme.score_style(summary.health_score),
                    ),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Best network: "),
                    Span::styled(ssid_display.to_string(), app.theme.title_style()),
                    Span::styled(
                        format!("  {} dBm", best.rssi),
                        app.theme.signal_style(best.rssi),
                    ),
                ]),
                Line::from(vec![
                    Span::raw(format!("Channel {}: ", best.channel)),
                    Span::raw(congestion_label),
                ]),
            ]
        } else {
            vec![
                Line::from("No networks observed"),
                Line::from(""),
                Line::from(Span::styled("Press 'r' to scan", app.theme.help_style())),
            ]
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .style(app.theme.border_style())
                .title(Span::styled(" Network Health ", app.theme.title_style())),
        );

        frame.render_widget(paragraph, area);
    }
}

/// 10-segment bar for the health score
fn score_meter(score: u8) -> String {
    let filled = (score as usize).div_ceil(10).min(10);
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(10 - filled)
    )
}
