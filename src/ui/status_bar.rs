use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.in_flight > 0 {
        let frame_idx = (state.tick_count / 2) as usize % SPINNER.len();
        parts.push(Span::styled(
            format!(" {} ", SPINNER[frame_idx]),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Color::DarkGray),
        ));
    }

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = if state.file_browser.visible {
        " Enter select · Esc close "
    } else {
        match state.screen() {
            Screen::Auth => " Tab next · Enter submit · F1/F2 tabs · Ctrl+Q quit ",
            Screen::Application => {
                " Tab next · Ctrl+S send · F10 logout · Ctrl+Q quit "
            }
        }
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        hints,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
