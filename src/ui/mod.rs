mod alert_banner;
mod application_form;
mod auth_form;
mod field;
mod file_browser;
mod header;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use chrono::Datelike;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let screen = state.screen();
    let width = match screen {
        Screen::Auth => layout::AUTH_WIDTH,
        Screen::Application => layout::APPLICATION_WIDTH,
    };
    let alert_height = alert_banner::height(state, width.min(area.width));
    let app_layout = layout::compute_layout(area, screen == Screen::Auth, alert_height, width);

    header::render(frame, app_layout.header, state);
    if let Some(hero) = app_layout.hero {
        render_hero(frame, hero);
    }
    if let Some(alert) = app_layout.alert {
        alert_banner::render(frame, alert, state);
    }
    match screen {
        Screen::Auth => auth_form::render(frame, app_layout.form, state),
        Screen::Application => application_form::render(frame, app_layout.form, state),
    }
    render_footer(frame, app_layout.footer);
    status_bar::render(frame, app_layout.status_bar, state);

    // Popups last so they sit on top
    file_browser::render(frame, state);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Join an ", Theme::title()),
            Span::styled("exceptional team", Theme::brand()),
        ])
        .centered(),
        Line::from(Span::styled(
            "Redefine the automotive experience in Algiers. Create an account to apply.",
            Theme::hint(),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let footer = Line::from(Span::styled(
        format!("© {} Casbah-Luxe Automobile. All rights reserved.", year),
        Theme::footer(),
    ))
    .centered();
    frame.render_widget(Paragraph::new(footer), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::app::handler;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn logged_out_shows_auth_form_without_logout() {
        let state = AppState::new(AppConfig::default());
        let text = screen_text(&state);
        assert!(text.contains("CASBAH-LUXE"));
        assert!(text.contains("LOG IN"));
        assert!(text.contains("exceptional team"));
        assert!(!text.contains("Logout"));
        assert!(!text.contains("SEND MY APPLICATION"));
    }

    #[test]
    fn logged_in_shows_application_form_and_logout() {
        let mut state = AppState::new(AppConfig::default());
        state.log_in("t1".into());
        let text = screen_text(&state);
        assert!(text.contains("Logout"));
        assert!(text.contains("SEND MY APPLICATION"));
        assert!(text.contains("PDF, DOC, DOCX (Max 5MB)"));
        assert!(!text.contains("LOG IN"));
    }

    #[test]
    fn alert_banner_shows_message() {
        let mut state = AppState::new(AppConfig::default());
        state.alert.error("Passwords do not match.", Instant::now());
        assert!(screen_text(&state).contains("Passwords do not match."));

        state.alert.dismiss();
        assert!(!screen_text(&state).contains("Passwords do not match."));
    }

    #[test]
    fn long_alert_wraps_instead_of_clipping() {
        let mut state = AppState::new(AppConfig::default());
        let message = ApiError::MalformedResponse("login response has no token".into())
            .alert_message(handler::LOGIN_FALLBACK);
        assert!(message.len() > usize::from(layout::AUTH_WIDTH));
        state.alert.error(message, Instant::now());

        let text = screen_text(&state);
        assert!(text.contains("Incorrect email or password."));
        assert!(text.contains("no token)"));
        assert!(text.contains("LOG IN"));
    }
}
