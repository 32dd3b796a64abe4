use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn server_connected() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn server_disconnected() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn channel_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn selected() -> Style {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .bg(Color::Rgb(40, 44, 52))
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
