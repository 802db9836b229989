use crate::app::App;
use crate::components::{format_relative_time, Component};
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub struct NotificationsPanel;

impl Component for NotificationsPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let title = format!(
            " Notifications ({} unread) ",
            app.unread_notification_count()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .style(app.theme.border_style())
            .title(Span::styled(title, app.theme.title_style()));

        if app.notifications.is_empty() {
            let paragraph = Paragraph::new(Span::styled(
                "Nothing to report. Notifications appear here when a scan or speed test trips a trigger.",
                app.theme.help_style(),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new([
            Cell::from("When"),
            Cell::from("Severity"),
            Cell::from("Category"),
            Cell::from("Event"),
            Cell::from("Description"),
        ])
        .style(app.theme.header_style())
        .height(1);

        let rows = app.notifications.iter().map(|notification| {
            let severity_cell = Cell::from(Span::styled(
                notification.severity.to_string(),
                app.theme.severity_style(notification.severity),
            ));

            let row = Row::new([
                Cell::from(format_relative_time(notification.created_at)),
                severity_cell,
                Cell::from(notification.category.to_string()),
                Cell::from(notification.event.clone()),
                Cell::from(notification.description.clone()),
            ]);

            if notification.read {
                row.style(app.theme.dim_style())
            } else {
                row
            }
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(10), // When
                Constraint::Length(9),  // Severity
                Constraint::Length(15), // Category
                Constraint::Length(26), // Event
                Constraint::Min(30),    // Description
            ],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, area);
    }
}
