use std::sync::Arc;

use jsonwebtoken::DecodingKey;
use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    pool: PgPool,
    config: AppConfig,
    operator_key: Option<DecodingKey>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        let operator_key = config
            .auth_jwt_secret
            .as_deref()
            .map(|secret| DecodingKey::from_secret(secret.as_bytes()));
        Self {
            inner: Arc::new(InnerState {
                pool,
                config,
                operator_key,
            }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Key that verifies operator tokens. `None` leaves operator routes open.
    pub fn operator_key(&self) -> Option<&DecodingKey> {
        self.inner.operator_key.as_ref()
    }
}
