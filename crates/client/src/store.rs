//! Content backend client.
//!
//! Every call is a single request: no retries, no timeout beyond the
//! transport default, no idempotency key. Saves are unconditional full
//! overwrites; the last writer wins.

use async_trait::async_trait;
use makebetter_core::lead::{Lead, LeadSubmission};
use reqwest::RequestBuilder;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{error_message, StoreError};

/// Read/write contract the pages use against the content backend.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// `GET /api/content`. Any JSON shape may come back.
    async fn fetch_document(&self) -> Result<Value, StoreError>;

    /// `PUT /api/content`. Replaces the whole document with `doc`, unchanged.
    async fn save_document(&self, doc: &Value) -> Result<(), StoreError>;

    /// `GET /api/leads`, in store order.
    async fn fetch_leads(&self) -> Result<Vec<Lead>, StoreError>;

    /// `POST /api/contact`.
    async fn submit_lead(&self, lead: &LeadSubmission) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct HttpContentStore {
    base_url: String,
    client: reqwest::Client,
    access_token: Option<String>,
}

impl HttpContentStore {
    pub fn new(config: &ClientConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("makebetter-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client,
            access_token: None,
        })
    }

    /// Send the operator's session token on every request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, req: RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let req = match &self.access_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body);
        tracing::debug!(status = status.as_u16(), %message, "content backend returned an error");
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn fetch_document(&self) -> Result<Value, StoreError> {
        tracing::debug!("fetching site content");
        let resp = self.send(self.client.get(self.url("/api/content"))).await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn save_document(&self, doc: &Value) -> Result<(), StoreError> {
        tracing::debug!("saving site content");
        self.send(self.client.put(self.url("/api/content")).json(doc))
            .await?;
        Ok(())
    }

    async fn fetch_leads(&self) -> Result<Vec<Lead>, StoreError> {
        tracing::debug!("fetching leads");
        let resp = self.send(self.client.get(self.url("/api/leads"))).await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn submit_lead(&self, lead: &LeadSubmission) -> Result<(), StoreError> {
        tracing::debug!("submitting lead");
        self.send(self.client.post(self.url("/api/contact")).json(lead))
            .await?;
        Ok(())
    }
}
