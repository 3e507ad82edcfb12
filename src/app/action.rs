use crate::api::{Candidature, LoginCredentials, Registration};

/// Side effects requested by the handler and carried out by the event loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Login(LoginCredentials),
    Register(Registration),
    SubmitCandidature { token: String, candidature: Candidature },
    Quit,
}
