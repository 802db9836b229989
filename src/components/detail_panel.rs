use crate::app::App;
use crate::components::Component;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub struct DetailPanel;

impl Component for DetailPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let content = if let Some(network) = app.networks.get(app.selected_index) {
            let ssid_display = if network.ssid.is_empty() {
                "<Hidden>"
            } else {
                network.ssid.as_str()
            };

            vec![
                Line::from(vec![
                    Span::raw("SSID:     "),
                    Span::styled(ssid_display.to_string(), app.theme.title_style()),
                ]),
                Line::from(vec![
                    Span::raw("BSSID:    "),
                    Span::raw(network.bssid.clone()),
                ]),
                Line::from(vec![
                    Span::raw("Vendor:   "),
                    Span::raw(network.vendor.clone()),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Signal:   "),
                    Span::styled(
                        format!("{} dBm", network.rssi),
                        app.theme.signal_style(network.rssi),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Quality:  "),
                    Span::styled(
                        format!("{}%", network.quality),
                        app.theme.score_style(network.quality),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Distance: "),
                    Span::raw(format!("~{:.1} m", network.distance_m)),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Channel:  "),
                    Span::raw(format!("{} ({})", network.channel, network.band)),
                ]),
                Line::from(vec![
                    Span::raw("Freq:     "),
                    Span::raw(format!("{:.0} MHz", network.frequency)),
                ]),
                Line::from(vec![
                    Span::raw("Security: "),
                    Span::styled(
                        network.security.clone(),
                        if network.is_open() {
                            app.theme.security_open_style()
                        } else {
                            app.theme.security_secured_style()
                        },
                    ),
                ]),
            ]
        } else {
            vec![
                Line::from("No network selected"),
                Line::from(""),
                Line::from(Span::styled(
                    "Press 'r' to scan",
                    app.theme.help_style(),
                )),
            ]
        };

        let title = app
            .networks
            .get(app.selected_index)
            .map(|n| {
                if n.ssid.is_empty() {
                    " <Hidden> ".to_string()
                } else {
                    format!(" {} ", n.ssid)
                }
            })
            .unwrap_or_else(|| " Details ".to_string());

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .style(app.theme.border_style())
                .title(Span::styled(title, app.theme.title_style())),
        );

        frame.render_widget(paragraph, area);
    }
}
