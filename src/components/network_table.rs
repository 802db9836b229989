use crate::app::{App, SortField};
use crate::components::Component;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

pub struct NetworkTable;

impl Component for NetworkTable {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let header_cells = [
            header_cell("SSID", app.sort_by == SortField::Name, app),
            header_cell("Signal", app.sort_by == SortField::Signal, app),
            header_cell("Qual", app.sort_by == SortField::Quality, app),
            header_cell("Dist", app.sort_by == SortField::Distance, app),
            header_cell("Vendor", false, app),
            header_cell("Channel", false, app),
            header_cell("Security", false, app),
        ];
        let header = Row::new(header_cells)
            .style(app.theme.header_style())
            .height(1);

        let threshold = app.settings.signal_threshold_dbm;

        let rows = app.networks.iter().enumerate().map(|(idx, network)| {
            let is_selected = idx == app.selected_index;
            let below_threshold = network.rssi < threshold;

            let select_indicator = if is_selected { "\u{25b6}" } else { " " };
            let ssid_text = if network.ssid.is_empty() {
                "<Hidden>".to_string()
            } else {
                truncate(&network.ssid, 18)
            };
            let ssid_cell = Cell::from(format!("{} {}", select_indicator, ssid_text));

            let signal_cell = Cell::from(Span::styled(
                format!("{} {:>4}", network.signal_bars(), network.rssi),
                app.theme.signal_style(network.rssi),
            ));

            let quality_cell = Cell::from(Span::styled(
                format!("{:3}%", network.quality),
                app.theme.score_style(network.quality),
            ));

            let distance_cell = Cell::from(format!("{:.1} m", network.distance_m));

            let vendor_cell = Cell::from(truncate(&network.vendor, 10));

            let channel_cell = Cell::from(format!("{} ({})", network.channel, network.band));

            let security_style = if network.is_open() {
                app.theme.security_open_style()
            } else {
                app.theme.security_secured_style()
            };
            let security_cell = Cell::from(Span::styled(network.security.clone(), security_style));

            let row = Row::new([
                ssid_cell,
                signal_cell,
                quality_cell,
                distance_cell,
                vendor_cell,
                channel_cell,
                security_cell,
            ]);

            if is_selected {
                row.style(app.theme.selected_style())
            } else if below_threshold {
                row.style(app.theme.dim_style())
            } else {
                row
            }
        });

        let title = if let Some(updated) = app.cache.last_updated() {
            format!(
                " Networks ({} found, {}) ",
                app.networks.len(),
                crate::components::format_relative_time(updated)
            )
        } else {
            " Networks (no scan yet) ".to_string()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Min(21),    // SSID
                Constraint::Length(11), // Signal
                Constraint::Length(5),  // Quality
                Constraint::Length(8),  // Distance
                Constraint::Length(10), // Vendor
                Constraint::Length(12), // Channel
                Constraint::Length(11), // Security
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(app.theme.border_style())
                .title(Span::styled(title, app.theme.title_style())),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut table_state = TableState::default();
        table_state.select(Some(app.selected_index));

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

fn header_cell(name: &str, is_sorted: bool, app: &App) -> Cell<'static> {
    let indicator = if is_sorted { " \u{25bc}" } else { "" };
    Cell::from(Line::from(vec![
        Span::styled(name.to_string(), app.theme.header_style()),
        Span::raw(indicator.to_string()),
    ]))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let prefix: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", prefix)
    } else {
        s.to_string()
    }
}
