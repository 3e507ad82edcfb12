//! Background request runner.
//!
//! Every call is spawned on its own task and reports its outcome back to the
//! event loop as an [`AppEvent`]. Requests are neither queued nor
//! deduplicated: two quick submits produce two requests.

use crate::api::client::ApiClient;
use crate::api::models::{Candidature, LoginCredentials, Registration};
use crate::app::event::AppEvent;
use tokio::sync::mpsc;
use tracing::warn;

pub struct RequestManager {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl RequestManager {
    pub fn new(client: ApiClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    pub fn login(&self, credentials: LoginCredentials) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.login(&credentials).await;
            if let Err(ref e) = result {
                warn!(error = %e, "login failed");
            }
            let _ = tx.send(AppEvent::LoginFinished(result));
        });
    }

    pub fn register(&self, registration: Registration) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.register(&registration).await;
            if let Err(ref e) = result {
                warn!(error = %e, "registration failed");
            }
            let _ = tx.send(AppEvent::RegisterFinished(result));
        });
    }

    pub fn submit_candidature(&self, token: String, candidature: Candidature) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.submit_candidature(&token, &candidature).await;
            if let Err(ref e) = result {
                warn!(error = %e, "candidature submission failed");
            }
            let _ = tx.send(AppEvent::CandidatureFinished(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use mockito::Server;

    #[tokio::test]
    async fn login_outcome_is_posted_to_event_loop() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(r#"{"token":"t1"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&ApiConfig {
            base_url: server.url(),
            timeout_secs: None,
        })
        .unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = RequestManager::new(client, tx);
        manager.login(LoginCredentials {
            email: "a@b.com".into(),
            password: "x".into(),
        });

        match rx.recv().await {
            Some(AppEvent::LoginFinished(Ok(token))) => assert_eq!(token, "t1"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
