//! Operator authentication.
//!
//! Sessions are issued by the hosted identity provider; this side only
//! verifies the bearer token it signed. With no secret configured every
//! request passes as an anonymous operator.

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use jsonwebtoken::{decode, Algorithm, Validation};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ProviderClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

/// The caller of an operator route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operator {
    pub subject: Option<String>,
    pub email: Option<String>,
}

impl FromRequestParts<AppState> for Operator {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(key) = state.operator_key() else {
            return Ok(Operator::default());
        };

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthorized)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[state.config().auth_jwt_audience.as_str()]);

        let claims = decode::<ProviderClaims>(token, key, &validation)
            .map_err(|err| {
                tracing::debug!(error = %err, "operator token rejected");
                ApiError::Unauthorized
            })?
            .claims;

        Ok(Operator {
            subject: Some(claims.sub),
            email: claims.email,
        })
    }
}
