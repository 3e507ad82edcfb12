use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = Line::from(vec![
        Span::styled(" 🚗 ", Theme::brand()),
        Span::styled("CASBAH-LUXE", Theme::brand()),
        Span::styled(" Automobile", Theme::hint()),
    ]);
    frame.render_widget(Paragraph::new(brand), inner);

    // Logout is only offered with an open session
    if state.screen() == Screen::Application {
        let logout = Line::from(vec![
            Span::styled("F10", Theme::key_hint()),
            Span::styled(" Logout ", Theme::hint()),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(logout), inner);
    }
}
