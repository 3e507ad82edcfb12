//! Request and response bodies exchanged with the recruitment API.
//!
//! Rust field names describe the data; `serde` renames carry the names the
//! deployed backend reads (`nom`, `telephone`, `poste`, `motivation`, `cv`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`. The confirmation field never leaves
/// the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Positions open for application. The first variant is the form default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    SalesAgentReceptionist,
    Secretary,
}

impl Position {
    pub const ALL: [Position; 2] = [Position::SalesAgentReceptionist, Position::Secretary];

    /// Label shown in the form and sent as the `poste` part.
    pub fn label(self) -> &'static str {
        match self {
            Position::SalesAgentReceptionist => "Agent Commercial / Réceptionniste",
            Position::Secretary => "Secrétaire",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A validated application ready to be sent as `multipart/form-data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidature {
    pub phone: String,
    pub position: Position,
    pub motivation_text: String,
    pub resume: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_serializes_name_as_nom() {
        let reg = Registration {
            name: "Amine".into(),
            email: "a@b.com".into(),
            password: "secret".into(),
        };
        let value = serde_json::to_value(&reg).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"nom": "Amine", "email": "a@b.com", "password": "secret"})
        );
    }

    #[test]
    fn position_cycles_both_ways() {
        assert_eq!(Position::default(), Position::SalesAgentReceptionist);
        assert_eq!(Position::SalesAgentReceptionist.next(), Position::Secretary);
        assert_eq!(Position::Secretary.next(), Position::SalesAgentReceptionist);
        assert_eq!(Position::SalesAgentReceptionist.prev(), Position::Secretary);
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(body.message, None);
    }
}
