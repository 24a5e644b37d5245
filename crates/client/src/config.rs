use std::env;

/// Local backend used when `SITE_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL of the content backend, without trailing slash.
    pub api_url: String,
    /// Base URL of the hosted identity provider.
    pub auth_url: String,
    /// Public (anonymous) key sent to the identity provider.
    pub auth_anon_key: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_url: non_empty("SITE_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            auth_url: non_empty("AUTH_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            auth_anon_key: non_empty("AUTH_ANON_KEY").unwrap_or_default(),
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_auth(mut self, url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        self.auth_url = url.into().trim_end_matches('/').to_string();
        self.auth_anon_key = anon_key.into();
        self
    }
}
