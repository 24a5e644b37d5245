//! Hosted identity provider client.
//!
//! The provider owns sessions. This side keeps the current one in memory,
//! exposes whether it exists, and publishes a [`SessionEvent`] on every change.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use makebetter_core::events::{EventBus, SessionEvent};
use makebetter_core::session::Session;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::{error_message, AuthError};

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange email and password for a session.
    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<Session, AuthError>;

    async fn current_session(&self) -> Option<Session>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Session-change notifications.
    fn events(&self) -> &EventBus;
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<TokenUser>,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    #[serde(default)]
    email: Option<String>,
}

impl From<TokenResponse> for Session {
    fn from(resp: TokenResponse) -> Self {
        Session {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
            expires_at: resp.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)),
            user_email: resp.user.and_then(|u| u.email),
        }
    }
}

#[derive(Debug)]
pub struct HostedAuthClient {
    auth_url: String,
    anon_key: String,
    client: reqwest::Client,
    session: RwLock<Option<Session>>,
    events: EventBus,
}

impl HostedAuthClient {
    pub fn new(config: &ClientConfig, events: EventBus) -> Result<Self, AuthError> {
        if config.auth_url.is_empty() {
            return Err(AuthError::NotConfigured);
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("makebetter-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            anon_key: config.auth_anon_key.clone(),
            client,
            session: RwLock::new(None),
            events,
        })
    }

    /// Adopt a session obtained elsewhere, e.g. restored from browser storage.
    pub async fn restore_session(&self, session: Session) {
        let user_email = session.user_email.clone().unwrap_or_default();
        *self.session.write().await = Some(session);
        self.events.publish(SessionEvent::SignedIn { user_email });
    }
}

#[async_trait]
impl IdentityProvider for HostedAuthClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let resp = self
            .client
            .post(format!("{}/auth/v1/token", self.auth_url))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::info!(status = status.as_u16(), "sign-in rejected");
            return Err(AuthError::Rejected(error_message(&body)));
        }

        let session: Session = resp.json::<TokenResponse>().await?.into();
        *self.session.write().await = Some(session.clone());
        self.events.publish(SessionEvent::SignedIn {
            user_email: session.user_email.clone().unwrap_or_else(|| email.to_string()),
        });
        Ok(session)
    }

    async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Clears the local session first, so a failed logout call still signs out here.
    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.session.write().await.take() else {
            return Ok(());
        };
        self.events.publish(SessionEvent::SignedOut);

        let resp = self
            .client
            .post(format!("{}/auth/v1/logout", self.auth_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            tracing::warn!(status = resp.status().as_u16(), "provider logout failed");
        }
        Ok(())
    }

    fn events(&self) -> &EventBus {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HostedAuthClient {
        let config = ClientConfig::default().with_auth(server.uri(), "anon-key");
        HostedAuthClient::new(&config, EventBus::new(8)).unwrap()
    }

    #[test]
    fn requires_provider_url() {
        assert!(matches!(
            HostedAuthClient::new(&ClientConfig::default(), EventBus::default()),
            Err(AuthError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn password_sign_in_stores_session_and_notifies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", "anon-key"))
            .and(body_json(json!({ "email": "ops@makebetter.tech", "password": "pw" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "jwt",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "r1",
                "user": { "email": "ops@makebetter.tech" },
            })))
            .mount(&server)
            .await;

        let auth = client_for(&server);
        let mut sub = auth.events().subscribe();

        let session = auth
            .sign_in_with_password("ops@makebetter.tech", "pw")
            .await
            .unwrap();

        assert_eq!(session.access_token, "jwt");
        assert!(session.expires_at.is_some());
        assert_eq!(auth.current_session().await, Some(session));
        assert_eq!(
            sub.try_recv(),
            Some(SessionEvent::SignedIn {
                user_email: "ops@makebetter.tech".to_string()
            })
        );
    }

    #[tokio::test]
    async fn rejected_sign_in_surfaces_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials",
            })))
            .mount(&server)
            .await;

        let auth = client_for(&server);
        let err = auth.sign_in_with_password("x@y.z", "bad").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid login credentials");
        assert_eq!(auth.current_session().await, None);
    }

    #[tokio::test]
    async fn sign_out_clears_session_and_notifies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("authorization", "Bearer jwt"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let auth = client_for(&server);
        auth.restore_session(Session {
            access_token: "jwt".to_string(),
            refresh_token: None,
            expires_at: None,
            user_email: None,
        })
        .await;
        let mut sub = auth.events().subscribe();

        auth.sign_out().await.unwrap();

        assert_eq!(auth.current_session().await, None);
        assert_eq!(sub.try_recv(), Some(SessionEvent::SignedOut));
    }
}
