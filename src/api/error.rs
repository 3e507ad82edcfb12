use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a form submit and its response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response without the body the client needs.
    #[error("unexpected response from the server: {0}")]
    MalformedResponse(String),

    #[error("server answered {status}")]
    Server {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("could not read the résumé file: {0}")]
    File(#[from] std::io::Error),
}

impl ApiError {
    /// Text for the error alert: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn alert_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(msg), ..
            } => msg.clone(),
            ApiError::Server { message: None, .. } => fallback.to_string(),
            ApiError::Network(_) | ApiError::MalformedResponse(_) | ApiError::File(_) => {
                format!("{} ({})", fallback, self)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Server {
            status: StatusCode::UNAUTHORIZED,
            message: Some("Compte introuvable".into()),
        };
        assert_eq!(err.alert_message("Incorrect email or password."), "Compte introuvable");
    }

    #[test]
    fn fallback_used_without_server_message() {
        let err = ApiError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.alert_message("Error while sending."), "Error while sending.");
    }

    #[test]
    fn malformed_response_keeps_detail() {
        let err = ApiError::MalformedResponse("missing token".into());
        let msg = err.alert_message("Incorrect email or password.");
        assert!(msg.starts_with("Incorrect email or password."));
        assert!(msg.contains("missing token"));
    }
}
