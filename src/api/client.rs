//! Thin wrapper over `reqwest` for the three recruitment endpoints.
//!
//! Each call returns `Ok` on any 2xx status. A non-2xx status becomes
//! [`ApiError::Server`] carrying the `message` field of the JSON body when
//! the server sent one.

use crate::api::error::ApiError;
use crate::api::models::{Candidature, ErrorBody, LoginCredentials, LoginResponse, Registration};
use crate::config::ApiConfig;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const CANDIDATURES_PATH: &str = "/api/candidatures";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create an account. The response body is ignored on success.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        debug!(email = %registration.email, "sending registration request");
        let response = self
            .http
            .post(self.url(REGISTER_PATH))
            .json(registration)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String, ApiError> {
        debug!(email = %credentials.email, "sending login request");
        let response = self
            .http
            .post(self.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await?;
        let response = check_status(response).await?;
        let body = response.text().await?;
        let parsed: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::MalformedResponse(format!("invalid login body: {}", e)))?;
        match parsed.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::MalformedResponse("login response has no token".into())),
        }
    }

    /// Send an application as `multipart/form-data`, authorized with `token`.
    pub async fn submit_candidature(
        &self,
        token: &str,
        candidature: &Candidature,
    ) -> Result<(), ApiError> {
        let bytes = tokio::fs::read(&candidature.resume).await?;
        let file_name = candidature
            .resume
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("cv")
            .to_string();
        debug!(
            file = %file_name,
            size = bytes.len(),
            position = candidature.position.label(),
            "sending candidature"
        );

        let resume = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for(&candidature.resume))?;
        let form = Form::new()
            .text("telephone", candidature.phone.clone())
            .text("poste", candidature.position.label())
            .text("motivation", candidature.motivation_text.clone())
            .part("cv", resume);

        let response = self
            .http
            .post(self.url(CANDIDATURES_PATH))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ApiError::Server`].
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    debug!(%status, has_message = message.is_some(), "request rejected");
    Err(ApiError::Server { status, message })
}

/// MIME type of a résumé, from its extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Position;
    use mockito::{Matcher, Server};
    use reqwest::StatusCode;
    use std::io::Write;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: format!("{}/", server.url()),
            timeout_secs: None,
        })
        .unwrap()
    }

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "a@b.com".into(),
            password: "x".into(),
        }
    }

    #[tokio::test]
    async fn login_returns_token() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::Json(serde_json::json!({"email": "a@b.com", "password": "x"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token":"t1"}"#)
            .create_async()
            .await;

        let token = client_for(&server).login(&credentials()).await.unwrap();
        m.assert_async().await;
        assert_eq!(token, "t1");
    }

    #[tokio::test]
    async fn login_failure_carries_server_message() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Mot de passe incorrect"}"#)
            .create_async()
            .await;

        let err = client_for(&server).login(&credentials()).await.unwrap_err();
        m.assert_async().await;
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(message.as_deref(), Some("Mot de passe incorrect"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_failure_without_json_has_no_message() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/auth/login")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let err = client_for(&server).login(&credentials()).await.unwrap_err();
        assert!(matches!(err, ApiError::Server { message: None, .. }));
        assert_eq!(
            err.alert_message("Incorrect email or password."),
            "Incorrect email or password."
        );
    }

    #[tokio::test]
    async fn login_success_without_token_is_malformed() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let err = client_for(&server).login(&credentials()).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn register_sends_nom_and_ignores_body() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/register")
            .match_body(Matcher::Json(serde_json::json!({
                "nom": "Amine",
                "email": "a@b.com",
                "password": "pw"
            })))
            .with_status(201)
            .with_body("created")
            .create_async()
            .await;

        let reg = Registration {
            name: "Amine".into(),
            email: "a@b.com".into(),
            password: "pw".into(),
        };
        client_for(&server).register(&reg).await.unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn candidature_is_multipart_with_bearer() {
        let dir = tempfile::tempdir().unwrap();
        let resume = dir.path().join("cv.pdf");
        let mut file = std::fs::File::create(&resume).unwrap();
        file.write_all(b"%PDF-1.4 test").unwrap();

        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/candidatures")
            .match_header("authorization", "Bearer t1")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".into()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="telephone"\r\n\r\n0555123456"#.into()),
                Matcher::Regex(r#"name="poste"\r\n\r\nSecrétaire"#.into()),
                Matcher::Regex(r#"name="motivation"\r\n\r\nHello"#.into()),
                Matcher::Regex(r#"name="cv"; filename="cv.pdf""#.into()),
                Matcher::Regex("application/pdf".into()),
            ]))
            .with_status(201)
            .with_body(r#"{"message":"ok"}"#)
            .create_async()
            .await;

        let candidature = Candidature {
            phone: "0555123456".into(),
            position: Position::Secretary,
            motivation_text: "Hello".into(),
            resume,
        };
        client_for(&server)
            .submit_candidature("t1", &candidature)
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn candidature_with_missing_file_never_hits_server() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/candidatures")
            .expect(0)
            .create_async()
            .await;

        let candidature = Candidature {
            phone: "0555".into(),
            position: Position::default(),
            motivation_text: "Hi".into(),
            resume: "/definitely/not/here.pdf".into(),
        };
        let err = client_for(&server)
            .submit_candidature("t1", &candidature)
            .await
            .unwrap_err();
        m.assert_async().await;
        assert!(matches!(err, ApiError::File(_)));
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for(Path::new("a/B.PDF")), "application/pdf");
        assert_eq!(mime_for(Path::new("cv.doc")), "application/msword");
        assert_eq!(mime_for(Path::new("noext")), "application/octet-stream");
    }
}
