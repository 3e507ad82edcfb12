use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::forms::{ApplicationField, AuthView, LoginField, TextField};
use crate::app::state::{AppState, Screen};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{info, warn};

pub const LOGIN_FALLBACK: &str = "Incorrect email or password.";
pub const REGISTER_FALLBACK: &str = "Registration failed.";
pub const SEND_FALLBACK: &str = "Error while sending.";
pub const REGISTERED: &str = "Registration successful! You can now log in.";
pub const SENT: &str = "Your application has been sent successfully! Thank you.";
pub const LOGGED_OUT: &str = "You have been logged out.";
const NO_SESSION: &str = "Your session has expired. Please log in again.";

/// Rows the file browser scrolls by on PageUp/PageDown.
const BROWSER_PAGE: usize = 10;
/// Window the browser selection is kept inside.
const BROWSER_ROWS: usize = 15;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::LoginFinished(result) => {
            state.request_finished();
            match result {
                Ok(token) => state.log_in(token),
                Err(e) => state
                    .alert
                    .error(e.alert_message(LOGIN_FALLBACK), Instant::now()),
            }
            vec![]
        }
        AppEvent::RegisterFinished(result) => {
            state.request_finished();
            match result {
                Ok(()) => {
                    info!("account registered");
                    let email = state.auth.register.email.value().trim().to_string();
                    state.auth.login.email.set(&email);
                    state.auth.login.focus = LoginField::Password;
                    state.auth.view = AuthView::Login;
                    state.alert.success(REGISTERED, Instant::now());
                }
                Err(e) => state
                    .alert
                    .error(e.alert_message(REGISTER_FALLBACK), Instant::now()),
            }
            vec![]
        }
        AppEvent::CandidatureFinished(result) => {
            state.request_finished();
            match result {
                Ok(()) => {
                    info!("candidature sent");
                    state.application.reset();
                    state.alert.success(SENT, Instant::now());
                }
                Err(e) => state
                    .alert
                    .error(e.alert_message(SEND_FALLBACK), Instant::now()),
            }
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);

    if state.alert.expire(Instant::now()) {
        state.dirty = true;
    }

    if state.transition > 0 {
        state.transition -= 1;
        state.dirty = true;
    }

    // Countdown bar and sending spinner animate while visible
    if state.alert.is_showing() || state.in_flight > 0 {
        state.dirty = true;
    }

    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }

    // File browser captures all input when visible
    if state.file_browser.visible {
        return handle_file_browser_key(state, key);
    }

    // Esc closes the alert banner
    if key.code == KeyCode::Esc {
        state.alert.dismiss();
        return vec![];
    }

    match state.screen() {
        Screen::Auth => handle_auth_key(state, key),
        Screen::Application => {
            if key.code == KeyCode::F(10) {
                state.log_out();
                state.alert.success(LOGGED_OUT, Instant::now());
                return vec![];
            }
            handle_application_key(state, key)
        }
    }
}

/// Shared line-editing keys for every text field.
fn edit_text(field: &mut TextField, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                field.delete_word_back();
            } else {
                field.delete_back();
            }
        }
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Enter => field.insert_newline(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => field.move_home(),
                    'e' => field.move_end(),
                    'w' => field.delete_word_back(),
                    'u' => field.delete_to_line_start(),
                    'j' => field.insert_newline(),
                    _ => {}
                }
            } else {
                field.insert_char(c);
            }
        }
        _ => {}
    }
}

fn handle_auth_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::F(1) => {
            state.auth.view = AuthView::Login;
            return vec![];
        }
        KeyCode::F(2) => {
            state.auth.view = AuthView::Register;
            return vec![];
        }
        KeyCode::Left | KeyCode::Right if ctrl => {
            state.auth.toggle_view();
            return vec![];
        }
        _ => {}
    }

    match state.auth.view {
        AuthView::Login => handle_login_key(state, key),
        AuthView::Register => handle_register_key(state, key),
    }
}

fn handle_login_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.auth.login.focus = state.auth.login.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.auth.login.focus = state.auth.login.focus.prev();
            vec![]
        }
        KeyCode::Enter => submit_login(state),
        _ => {
            if let Some(field) = state.auth.login.focused_field() {
                edit_text(field, key);
            }
            vec![]
        }
    }
}

fn handle_register_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.auth.register.focus = state.auth.register.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.auth.register.focus = state.auth.register.focus.prev();
            vec![]
        }
        KeyCode::Enter => submit_register(state),
        _ => {
            if let Some(field) = state.auth.register.focused_field() {
                edit_text(field, key);
            }
            vec![]
        }
    }
}

fn submit_login(state: &mut AppState) -> Vec<Action> {
    match state.auth.login.credentials() {
        Ok(credentials) => {
            info!("login requested");
            state.request_started();
            vec![Action::Login(credentials)]
        }
        Err(e) => {
            state.alert.error(e.to_string(), Instant::now());
            vec![]
        }
    }
}

fn submit_register(state: &mut AppState) -> Vec<Action> {
    match state.auth.register.data().validate() {
        Ok(registration) => {
            info!("registration requested");
            state.request_started();
            vec![Action::Register(registration)]
        }
        Err(e) => {
            state.alert.error(e.to_string(), Instant::now());
            vec![]
        }
    }
}

fn handle_application_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return submit_application(state);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.application.focus = state.application.focus.next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.application.focus = state.application.focus.prev();
            return vec![];
        }
        _ => {}
    }

    match state.application.focus {
        ApplicationField::Phone | ApplicationField::Motivation => {
            if key.code == KeyCode::Enter && state.application.focus == ApplicationField::Phone {
                state.application.focus = state.application.focus.next();
            } else if let Some(field) = state.application.focused_field() {
                edit_text(field, key);
            }
            vec![]
        }
        ApplicationField::Position => {
            match key.code {
                KeyCode::Left => state.application.position = state.application.position.prev(),
                KeyCode::Right | KeyCode::Char(' ') => {
                    state.application.position = state.application.position.next()
                }
                KeyCode::Enter => state.application.focus = state.application.focus.next(),
                _ => {}
            }
            vec![]
        }
        ApplicationField::Resume => {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => open_file_browser(state),
                KeyCode::Delete | KeyCode::Backspace => state.application.resume = None,
                _ => {}
            }
            vec![]
        }
        ApplicationField::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit_application(state),
            _ => vec![],
        },
    }
}

fn submit_application(state: &mut AppState) -> Vec<Action> {
    let Some(token) = state.session.bearer().map(str::to_string) else {
        state.alert.error(NO_SESSION, Instant::now());
        return vec![];
    };
    match state.application.submission().validate() {
        Ok(candidature) => {
            info!(position = candidature.position.label(), "candidature submitted");
            state.request_started();
            vec![Action::SubmitCandidature { token, candidature }]
        }
        Err(e) => {
            state.alert.error(e.to_string(), Instant::now());
            vec![]
        }
    }
}

fn open_file_browser(state: &mut AppState) {
    if let Err(e) = state.file_browser.open() {
        let dir = state.file_browser.dir.display().to_string();
        warn!(error = %e, %dir, "could not list directory");
        state
            .alert
            .error(format!("Cannot open {}: {}", dir, e), Instant::now());
    }
}

fn handle_file_browser_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let browser = &mut state.file_browser;
    let result = match key.code {
        KeyCode::Esc => {
            browser.close();
            Ok(None)
        }
        KeyCode::Up => {
            browser.move_up();
            Ok(None)
        }
        KeyCode::Down => {
            browser.move_down();
            Ok(None)
        }
        KeyCode::PageUp => {
            for _ in 0..BROWSER_PAGE {
                browser.move_up();
            }
            Ok(None)
        }
        KeyCode::PageDown => {
            for _ in 0..BROWSER_PAGE {
                browser.move_down();
            }
            Ok(None)
        }
        KeyCode::Home => {
            browser.move_home();
            Ok(None)
        }
        KeyCode::End => {
            browser.move_end();
            Ok(None)
        }
        KeyCode::Backspace | KeyCode::Left => browser.go_up().map(|_| None),
        KeyCode::Enter => browser.activate(),
        _ => Ok(None),
    };
    browser.ensure_visible(BROWSER_ROWS);

    match result {
        Ok(Some(file)) => {
            info!(file = %file.file_name, "résumé selected");
            state.application.resume = Some(file);
            state.application.focus = ApplicationField::Submit;
        }
        Ok(None) => {}
        Err(e) => {
            warn!(error = %e, "file browser navigation failed");
            state
                .alert
                .error(format!("Cannot open folder: {}", e), Instant::now());
        }
    }
    vec![]
}
