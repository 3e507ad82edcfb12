use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_AMBER: Color = Color::Rgb(245, 158, 11);
    pub const ACCENT_GREEN: Color = Color::Rgb(34, 197, 94);
    pub const ACCENT_RED: Color = Color::Rgb(239, 68, 68);
    pub const BG_DARK: Color = Color::Rgb(17, 24, 39);
    pub const BG_SURFACE: Color = Color::Rgb(24, 24, 27);
    pub const BORDER_DIM: Color = Color::Rgb(63, 63, 70);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    /// Borders while a screen switch is fading in.
    pub fn border_fading() -> Style {
        Style::default().fg(Color::Black)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn brand() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_idle() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn alert_success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn alert_error() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn directory() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::DarkGray)
    }

    pub fn footer() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }
}
