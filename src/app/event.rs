use crate::api::ApiError;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Login answered: the bearer token, or why not
    LoginFinished(Result<String, ApiError>),

    /// Registration answered
    RegisterFinished(Result<(), ApiError>),

    /// Candidature upload answered
    CandidatureFinished(Result<(), ApiError>),

    /// Tick for alert expiry and UI refresh
    Tick,
}
