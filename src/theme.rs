use crate::notifications::NotificationSeverity;
use crate::settings::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Color palette for the current theme mode. Built once from settings and
/// rebuilt when the user toggles the theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    fn text_color(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Gray,
            ThemeMode::Light => Color::Black,
        }
    }

    fn muted_color(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::DarkGray,
            ThemeMode::Light => Color::Gray,
        }
    }

    /// Color for a quality or health score value
    pub fn score_color(&self, score: u8) -> Color {
        match score {
            80..=100 => Color::Green,
            60..=79 => Color::Yellow,
            40..=59 => Color::Rgb(255, 165, 0), // Orange
            _ => Color::Red,
        }
    }

    pub fn score_style(&self, score: u8) -> Style {
        Style::default()
            .fg(self.score_color(score))
            .add_modifier(Modifier::BOLD)
    }

    pub fn signal_style(&self, dbm: i32) -> Style {
        let color = match dbm {
            s if s >= -50 => Color::Green,
            s if s >= -70 => Color::Yellow,
            _ => Color::Red,
        };
        Style::default().fg(color)
    }

    pub fn severity_style(&self, severity: NotificationSeverity) -> Style {
        let color = match severity {
            NotificationSeverity::Critical => Color::Red,
            NotificationSeverity::Warning => Color::Yellow,
            NotificationSeverity::Info => self.text_color(),
        };
        Style::default().fg(color)
    }

    pub fn selected_style(&self) -> Style {
        let bg = match self.mode {
            ThemeMode::Dark => Color::DarkGray,
            ThemeMode::Light => Color::LightBlue,
        };
        Style::default().bg(bg).add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted_color())
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_style(&self) -> Style {
        Style::default().fg(self.muted_color())
    }

    /// Networks below the configured signal threshold
    pub fn dim_style(&self) -> Style {
        Style::default()
            .fg(self.muted_color())
            .add_modifier(Modifier::DIM)
    }

    pub fn auto_mode_style(&self) -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn manual_mode_style(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn security_open_style(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn security_secured_style(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.text_color())
    }
}
