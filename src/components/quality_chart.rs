use crate::app::App;
use crate::components::Component;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Frame;

pub struct QualityChart;

impl Component for QualityChart {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let selected = app.networks.get(app.selected_index);

        let history = selected.and_then(|n| app.quality_history.get(&n.bssid));

        let block = Block::default()
            .borders(Borders::ALL)
            .style(app.theme.border_style())
            .title(Span::styled(" Quality Trend ", app.theme.title_style()));

        match history {
            Some(history) if history.len() > 1 => {
                let data: Vec<u64> = history.iter().map(|q| u64::from(*q)).collect();
                let sparkline = Sparkline::default()
                    .block(block)
                    .data(&data)
                    .max(100)
                    .style(app.theme.score_style(*history.back().unwrap_or(&0)));
                frame.render_widget(sparkline, area);
            }
            _ => {
                let paragraph = Paragraph::new(Span::styled(
                    "Collecting samples...",
                    app.theme.help_style(),
                ))
                .block(block);
                frame.render_widget(paragraph, area);
            }
        }
    }
}
