use crate::app::alert::Notifier;
use crate::app::forms::{ApplicationForm, AuthForm, FileBrowser};
use crate::config::AppConfig;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Ticks the view-switch fade lasts (50 ms each).
pub const TRANSITION_TICKS: u8 = 6;

/// Login status and bearer token. Lives in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub token: Option<String>,
}

impl Session {
    pub fn authenticated(token: String) -> Self {
        Self {
            logged_in: true,
            token: Some(token),
        }
    }

    pub fn bearer(&self) -> Option<&str> {
        if self.logged_in {
            self.token.as_deref()
        } else {
            None
        }
    }
}

/// Which form is on screen. Derived from the session, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Application,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub alert: Notifier,
    pub auth: AuthForm,
    pub application: ApplicationForm,
    pub file_browser: FileBrowser,
    /// Requests sent and not answered yet. Display only.
    pub in_flight: usize,
    /// Remaining fade ticks after a screen switch.
    pub transition: u8,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let start_dir = config
            .ui
            .start_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_browser = FileBrowser::new(start_dir, &config.ui.resume_extensions);
        let alert = Notifier::new(Duration::from_secs(config.ui.alert_timeout_secs));
        Self {
            config,
            session: Session::default(),
            alert,
            auth: AuthForm::default(),
            application: ApplicationForm::default(),
            file_browser,
            in_flight: 0,
            transition: 0,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.session.logged_in {
            Screen::Application
        } else {
            Screen::Auth
        }
    }

    /// LoggedOut → LoggedIn. The auth form is dropped with its contents.
    pub fn log_in(&mut self, token: String) {
        self.session = Session::authenticated(token);
        self.auth = AuthForm::default();
        self.application = ApplicationForm::default();
        self.start_transition();
        info!("session opened");
    }

    /// LoggedIn → LoggedOut, whatever the session held before.
    pub fn log_out(&mut self) {
        self.session = Session::default();
        self.application = ApplicationForm::default();
        self.file_browser.close();
        self.start_transition();
        info!("session closed");
    }

    pub fn start_transition(&mut self) {
        self.transition = TRANSITION_TICKS;
        self.dirty = true;
    }

    pub fn request_started(&mut self) {
        self.in_flight += 1;
        self.dirty = true;
    }

    pub fn request_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let mut s = match self.screen() {
            Screen::Auth => "Not signed in".to_string(),
            Screen::Application => "Signed in".to_string(),
        };
        if self.in_flight > 0 {
            s.push_str(&format!(" | Sending ({})", self.in_flight));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::forms::AuthView;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn starts_logged_out() {
        let s = state();
        assert_eq!(s.session, Session::default());
        assert_eq!(s.screen(), Screen::Auth);
        assert!(!s.alert.is_showing());
    }

    #[test]
    fn login_then_logout_round_trip() {
        let mut s = state();
        s.auth.view = AuthView::Register;
        s.log_in("t1".into());
        assert_eq!(s.session, Session::authenticated("t1".into()));
        assert_eq!(s.session.bearer(), Some("t1"));
        assert_eq!(s.screen(), Screen::Application);
        assert_eq!(s.auth.view, AuthView::Login);

        s.application.phone.set("0555");
        s.log_out();
        assert_eq!(s.session, Session::default());
        assert_eq!(s.session.bearer(), None);
        assert_eq!(s.screen(), Screen::Auth);
        assert_eq!(s.application, ApplicationForm::default());
    }

    #[test]
    fn in_flight_never_underflows() {
        let mut s = state();
        s.request_finished();
        assert_eq!(s.in_flight, 0);
        s.request_started();
        assert!(s.status_line().contains("Sending (1)"));
    }
}
